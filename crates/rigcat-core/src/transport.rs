//! Transport trait for rig communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a
//! transceiver. Implementations exist for serial ports (in
//! `rigcat-transport`) and mock transports for testing (in
//! `rigcat-test-harness`).
//!
//! Codecs never touch a transport directly: [`CatSession`]
//! (crate::session::CatSession) owns the transport and drives each
//! request/reply exchange, so codecs stay pure byte-in/byte-out and can be
//! tested against `MockTransport` without real hardware.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;
use crate::types::ControlLine;

/// Asynchronous byte-level transport to a rig.
///
/// Implementations handle buffering and error recovery at the physical
/// layer. Framing and protocol structure are handled by the codecs that
/// produce and consume the bytes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send raw bytes to the rig.
    ///
    /// Implementations should block until all bytes have been written to
    /// the underlying transport.
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the rig into the provided buffer.
    ///
    /// Returns the number of bytes actually read. Will wait up to `timeout`
    /// for data to arrive; returns [`Error::Timeout`](crate::error::Error::Timeout)
    /// if no data is received within the deadline.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Assert or de-assert a modem control line.
    ///
    /// Used for out-of-band PTT keying (DTR/RTS). This is wire-silent: no
    /// bytes travel on the data lines.
    async fn set_control_line(&mut self, line: ControlLine, asserted: bool) -> Result<()>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent `send()` and `receive()` calls
    /// should return [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
