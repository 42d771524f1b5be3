//! The tri-state command response.
//!
//! Every command execution yields exactly one [`CatResponse`]: a queried
//! value, a bare success, or a bare failure. The literal tokens `OK` and
//! `ERROR` are reserved for the latter two and never appear as queried
//! values.

use std::fmt;

/// Result of executing one generic command.
///
/// There is no partial or streaming response, and no error detail at this
/// boundary: diagnostics are logged, but the caller-visible contract is
/// exactly these three shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatResponse {
    /// A queried value (e.g. `"014074000"`, `"USB"`, `"ON"`).
    Value(String),
    /// The command was accepted by the rig.
    Ok,
    /// The command failed: unknown/malformed, unsupported on this model,
    /// rejected by the rig, or a transport/decode failure.
    Error,
}

impl CatResponse {
    /// Returns `true` for [`CatResponse::Ok`] or any [`CatResponse::Value`].
    pub fn is_success(&self) -> bool {
        !matches!(self, CatResponse::Error)
    }

    /// Returns the queried value, if this response carries one.
    pub fn value(&self) -> Option<&str> {
        match self {
            CatResponse::Value(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatResponse::Value(s) => write!(f, "{s}"),
            CatResponse::Ok => write!(f, "OK"),
            CatResponse::Error => write!(f, "ERROR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reserved_tokens() {
        assert_eq!(CatResponse::Ok.to_string(), "OK");
        assert_eq!(CatResponse::Error.to_string(), "ERROR");
        assert_eq!(CatResponse::Value("14074000".into()).to_string(), "14074000");
    }

    #[test]
    fn success_predicate() {
        assert!(CatResponse::Ok.is_success());
        assert!(CatResponse::Value("USB".into()).is_success());
        assert!(!CatResponse::Error.is_success());
    }

    #[test]
    fn value_accessor() {
        assert_eq!(CatResponse::Value("ON".into()).value(), Some("ON"));
        assert_eq!(CatResponse::Ok.value(), None);
        assert_eq!(CatResponse::Error.value(), None);
    }
}
