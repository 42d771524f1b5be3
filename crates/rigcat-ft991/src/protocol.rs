//! Yaesu CAT text-protocol encoder/decoder.
//!
//! The FT-991 CAT protocol uses semicolon-terminated ASCII commands over a
//! serial link. Commands are two-letter prefixes, often followed by a digit
//! selecting a sub-function (`MD0`, `DT1`, `ML0`), then ASCII parameters,
//! terminated with `;`. This is the same general format as Kenwood CAT;
//! the Yaesu variant uses 9-digit frequency fields and digit-suffixed
//! prefixes.
//!
//! # Command format
//!
//! ```text
//! <prefix><params>;
//! ```
//!
//! # Response format
//!
//! Query responses echo the command prefix, followed by data, terminated
//! with `;`. Set commands are acknowledged by silence; the error response
//! for an unrecognised or invalid command is `?;`.

use bytes::{BufMut, BytesMut};
use rigcat_core::error::{Error, Result};

/// CAT command/response terminator byte.
pub const TERMINATOR: u8 = b';';

/// Error response from the rig: `?;`.
pub const ERROR_RESPONSE: &[u8] = b"?;";

/// Encode a CAT command into raw bytes ready for transmission.
///
/// Concatenates the command prefix, parameters, and the terminator `;`.
///
/// # Example
///
/// ```
/// use rigcat_ft991::protocol::encode_command;
///
/// let cmd = encode_command("FA", "");
/// assert_eq!(cmd, b"FA;");
///
/// let cmd = encode_command("FA", "014250000");
/// assert_eq!(cmd, b"FA014250000;");
/// ```
pub fn encode_command(prefix: &str, params: &str) -> Vec<u8> {
    let capacity = prefix.len() + params.len() + 1;
    let mut buf = BytesMut::with_capacity(capacity);
    buf.put_slice(prefix.as_bytes());
    buf.put_slice(params.as_bytes());
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// Extract the data portion of a query reply.
///
/// Checks for the `?;` error response, verifies the echoed `prefix`, and
/// returns the characters between the prefix and the terminator.
///
/// # Example
///
/// ```
/// use rigcat_ft991::protocol::reply_body;
///
/// let body = reply_body(b"FA014250000;", "FA").unwrap();
/// assert_eq!(body, "014250000");
/// ```
pub fn reply_body<'a>(raw: &'a [u8], prefix: &str) -> Result<&'a str> {
    if raw == ERROR_RESPONSE {
        return Err(Error::Protocol("rig rejected command".into()));
    }
    let s = std::str::from_utf8(raw)
        .map_err(|_| Error::Protocol(format!("non-ASCII reply: {raw:02X?}")))?;
    let body = s
        .strip_prefix(prefix)
        .ok_or_else(|| Error::Protocol(format!("unexpected reply prefix: {s}")))?;
    body.strip_suffix(';')
        .ok_or_else(|| Error::Protocol(format!("unterminated reply: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_read_command() {
        assert_eq!(encode_command("FA", ""), b"FA;");
        assert_eq!(encode_command("MD0", ""), b"MD0;");
    }

    #[test]
    fn encode_set_command() {
        assert_eq!(encode_command("FA", "014250000"), b"FA014250000;");
        assert_eq!(encode_command("MD0", "2"), b"MD02;");
    }

    #[test]
    fn reply_body_strips_prefix_and_terminator() {
        assert_eq!(reply_body(b"FA014250000;", "FA").unwrap(), "014250000");
        assert_eq!(reply_body(b"MD02;", "MD0").unwrap(), "2");
        assert_eq!(reply_body(b"IS0+0100;", "IS0").unwrap(), "+0100");
    }

    #[test]
    fn reply_body_rejects_error_response() {
        let err = reply_body(b"?;", "FA").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn reply_body_rejects_wrong_prefix() {
        assert!(reply_body(b"FB014250000;", "FA").is_err());
    }

    #[test]
    fn reply_body_rejects_unterminated() {
        assert!(reply_body(b"FA0142500", "FA").is_err());
    }
}
