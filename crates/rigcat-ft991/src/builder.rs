//! Ft991Builder -- fluent builder for FT-991 control sessions.
//!
//! Separates configuration from construction so that callers can set up
//! serial port parameters, the PTT method, and timeout values before
//! establishing the transport connection.
//!
//! # Example
//!
//! ```no_run
//! use rigcat_ft991::Ft991Builder;
//! use std::time::Duration;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! let session = Ft991Builder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .baud_rate(38_400)
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
use rigcat_transport::{SerialConfig, SerialTransport};

use crate::codec::Ft991Codec;

/// Default baud rate for the FT-991's USB CAT interface.
const DEFAULT_BAUD: u32 = 38_400;

/// Fluent builder for an FT-991 [`CatSession`].
///
/// All configuration has sensible defaults, so the simplest usage is:
///
/// ```ignore
/// let session = Ft991Builder::new()
///     .serial_port("/dev/ttyUSB0")
///     .build()
///     .await?;
/// ```
pub struct Ft991Builder {
    serial_port: Option<String>,
    serial_config: SerialConfig,
    command_timeout: Duration,
    ptt_method: PttMethod,
}

impl Ft991Builder {
    /// Create a new builder with FT-991 defaults.
    ///
    /// The FT-991 has native CAT transmit control, so PTT defaults to
    /// [`PttMethod::Cat`].
    pub fn new() -> Self {
        Ft991Builder {
            serial_port: None,
            serial_config: SerialConfig {
                baud_rate: DEFAULT_BAUD,
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

    /// Override the default baud rate (38400).
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
    ///
    /// This is the primary entry point for testing (pass a
    /// `MockTransport` from `rigcat-test-harness`) and for advanced use
    /// cases where the caller manages the transport lifecycle directly.
    pub fn build_with_transport(self, transport: Box<dyn Transport>) -> CatSession {
        CatSession::new(
            Box::new(Ft991Codec),
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

impl Default for Ft991Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigcat_core::response::CatResponse;
    use rigcat_test_harness::MockTransport;

    #[tokio::test]
    async fn builder_defaults() {
        let mock = MockTransport::new();
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(session.rig_name(), "FT-991");
        // PTT defaults to CAT on this rig.
        assert_eq!(
            session.execute("PTT-METHOD", &[]).await,
            CatResponse::Value("CAT".into())
        );
    }

    #[tokio::test]
    async fn build_requires_serial_port() {
        let result = Ft991Builder::new().build().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn freq_round_trip_through_session() {
        let mut mock = MockTransport::new();
        mock.expect(b"FA014074000;", b"");
        mock.expect(b"FA;", b"FA014074000;");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(
            session.execute("FREQ", &["14074000"]).await,
            CatResponse::Ok
        );
        assert_eq!(
            session.execute("FREQ", &[]).await,
            CatResponse::Value("014074000".into())
        );
    }

    #[tokio::test]
    async fn ptt_on_uses_tx_command() {
        let mut mock = MockTransport::new();
        mock.expect(b"TX1;", b"");
        mock.expect(b"TX0;", b"");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(session.execute("PTT", &["ON"]).await, CatResponse::Ok);
        assert_eq!(
            session.execute("PTT", &[]).await,
            CatResponse::Value("ON".into())
        );
        assert_eq!(session.execute("PTT", &["OFF"]).await, CatResponse::Ok);
    }

    #[tokio::test]
    async fn modeb_set_swaps_and_restores() {
        let mut mock = MockTransport::new();
        mock.expect(b"SV;", b"");
        mock.expect(b"MD03;", b"");
        mock.expect(b"SV;", b"");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(session.execute("MODEB", &["CW"]).await, CatResponse::Ok);
    }

    #[tokio::test]
    async fn tone_enc_sets_mode_then_code() {
        let mut mock = MockTransport::new();
        mock.expect(b"CT02;", b"");
        mock.expect(b"CN00020;", b"");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(
            session.execute("TONE", &["ENC", "1318"]).await,
            CatResponse::Ok
        );
    }

    #[tokio::test]
    async fn monitor_query_joins_state_and_level() {
        let mut mock = MockTransport::new();
        mock.expect(b"ML0;", b"ML0001;");
        mock.expect(b"ML1;", b"ML1050;");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(
            session.execute("MONITOR", &[]).await,
            CatResponse::Value("ON:050".into())
        );
    }

    #[tokio::test]
    async fn rejected_set_returns_error() {
        let mut mock = MockTransport::new();
        mock.expect(b"FT3;", b"?;");
        let session = Ft991Builder::new().build_with_transport(Box::new(mock));

        assert_eq!(session.execute("SPLIT", &["ON"]).await, CatResponse::Error);
    }
}
