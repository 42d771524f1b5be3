//! Transport implementations for rigcat.
//!
//! This crate provides the concrete [`Transport`](rigcat_core::Transport)
//! implementation for serial-connected transceivers:
//!
//! - [`SerialTransport`]: USB virtual COM ports and RS-232 serial
//!   connections, with DTR/RTS control-line access for out-of-band PTT
//!
//! # Example
//!
//! ```no_run
//! use rigcat_transport::SerialTransport;
//! use rigcat_core::transport::Transport;
//! use std::time::Duration;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! // Connect to a Yaesu rig via CAT
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", 38400).await?;
//!
//! // Send a command
//! transport.send(b"FA;").await?;
//!
//! // Receive response
//! let mut buf = [0u8; 256];
//! let n = transport.receive(&mut buf, Duration::from_secs(1)).await?;
//! # Ok(())
//! # }
//! ```

pub mod serial;

pub use serial::{DataBits, FlowControl, Parity, SerialConfig, SerialTransport, StopBits};
