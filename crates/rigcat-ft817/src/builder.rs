//! Ft817Builder -- fluent builder for FT-817 control sessions.
//!
//! # Example
//!
//! ```no_run
//! use rigcat_ft817::Ft817Builder;
//! use std::time::Duration;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! let session = Ft817Builder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .baud_rate(4_800)
//!     .command_timeout(Duration::from_millis(300))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use rigcat_core::error::{Error, Result};
use rigcat_core::session::CatSession;
use rigcat_core::transport::Transport;
use rigcat_core::types::PttMethod;
use rigcat_transport::{SerialConfig, SerialTransport, StopBits};

use crate::codec::Ft817Codec;

/// Default baud rate; the rig's menu default for the CAT interface.
const DEFAULT_BAUD: u32 = 4_800;

/// Fluent builder for an FT-817 [`CatSession`].
pub struct Ft817Builder {
    serial_port: Option<String>,
    serial_config: SerialConfig,
    command_timeout: Duration,
    ptt_method: PttMethod,
}

impl Ft817Builder {
    /// Create a new builder with FT-817 defaults.
    ///
    /// The FT-817's CAT interface runs 8N2 at 4800 baud out of the box,
    /// and the rig has native CAT transmit control, so PTT defaults to
    /// [`PttMethod::Cat`].
    pub fn new() -> Self {
        Ft817Builder {
            serial_port: None,
            serial_config: SerialConfig {
                baud_rate: DEFAULT_BAUD,
                stop_bits: StopBits::Two,
                ..Default::default()
            },
            command_timeout: Duration::from_millis(500),
            ptt_method: PttMethod::Cat,
        }
    }

    /// Set the serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, port: &str) -> Self {
        self.serial_port = Some(port.to_string());
        self
    }

    /// Override the default baud rate (4800).
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.serial_config.baud_rate = baud;
        self
    }

    /// Replace the full serial configuration.
    pub fn serial_config(mut self, config: SerialConfig) -> Self {
        self.serial_config = config;
        self
    }

    /// Set the timeout for waiting for a reply to a single CAT command
    /// (default: 500ms).
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set the PTT method: CAT command (default), DTR line, RTS line,
    /// or none.
    pub fn ptt_method(mut self, method: PttMethod) -> Self {
        self.ptt_method = method;
        self
    }

    /// Build a session with a caller-provided transport.
    pub fn build_with_transport(self, transport: Box<dyn Transport>) -> CatSession {
        CatSession::new(
            Box::new(Ft817Codec),
            transport,
            self.ptt_method,
            self.command_timeout,
        )
    }

    /// Build a session over a serial transport.
    ///
    /// Requires that [`serial_port()`](Self::serial_port) has been called.
    pub async fn build(self) -> Result<CatSession> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("serial_port is required for build()".into()))?
            .clone();
        let transport = SerialTransport::open_with_config(&port, self.serial_config.clone()).await?;
        Ok(self.build_with_transport(Box::new(transport)))
    }
}

impl Default for Ft817Builder {
    fn default() -> Self {
        Self::new()
    }
}
