//! Error types for rigcat.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Validation, protocol, and transport
//! failures are all captured here. None of these ever cross the
//! [`CatSession::execute`](crate::session::CatSession::execute) boundary:
//! the session converts every error into the `ERROR` response and keeps the
//! underlying variant as advisory diagnostics (logged via `tracing`).

/// The error type for all rigcat operations.
///
/// Variants cover the full range of failure modes encountered when
/// translating generic commands into transceiver-native protocols:
/// unknown/malformed commands, out-of-range arguments, unsupported
/// operations, transport failures, and malformed replies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The command name is not in the generic vocabulary.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// An invalid argument was passed to a command (wrong arity, value out
    /// of range, or unit mismatch). Caught before any I/O.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The active codec has no encoding for this command on this model.
    #[error("unsupported operation: {0}")]
    Unsupported(String),

    /// A transport-level error (serial port open/write failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error (native reply did not parse under the
    /// expected format, or the rig returned its error response).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Timed out waiting for a reply from the rig.
    ///
    /// This typically indicates the rig is powered off, the baud rate is
    /// wrong, or the cable is disconnected.
    #[error("timeout waiting for reply")]
    Timeout,

    /// No connection to the rig has been established.
    #[error("not connected")]
    NotConnected,

    /// The connection to the rig was lost unexpectedly.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_command() {
        let e = Error::UnknownCommand("BOGUS".into());
        assert_eq!(e.to_string(), "unknown command: BOGUS");
    }

    #[test]
    fn error_display_invalid_parameter() {
        let e = Error::InvalidParameter("frequency out of range".into());
        assert_eq!(e.to_string(), "invalid parameter: frequency out of range");
    }

    #[test]
    fn error_display_unsupported() {
        let e = Error::Unsupported("RIT on FT-991".into());
        assert_eq!(e.to_string(), "unsupported operation: RIT on FT-991");
    }

    #[test]
    fn error_display_timeout() {
        assert_eq!(Error::Timeout.to_string(), "timeout waiting for reply");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("pipe broken"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
