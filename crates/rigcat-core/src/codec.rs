//! The codec contract between the generic dispatcher and model protocols.
//!
//! A [`CatCodec`] translates generic commands into model-native request
//! frames and translates native replies back into generic values. Codecs
//! are pure: they never perform I/O, never sleep, and hold no connection
//! state. The session drives the wire exchange described by the
//! [`Frame`]s a codec returns.
//!
//! One generic operation may require several native exchanges (for example
//! a tone-mode write followed by a tone-frequency write). Codecs express
//! that as a frame sequence; the session performs the exchanges in order
//! and aborts the sequence on the first failure.

use crate::command::CatCommand;
use crate::error::Result;

/// How the reply to one request frame is delimited on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFraming {
    /// ASCII-style: accumulate bytes until the terminator byte arrives.
    Delimited(u8),
    /// Binary-style: accumulate exactly this many bytes.
    Fixed(usize),
}

/// What the session should do with the reply to one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRole {
    /// The reply is an acknowledgement; run it through
    /// [`CatCodec::check_ack`] and discard it.
    Ack,
    /// The reply carries data; run it through [`CatCodec::decode_reply`]
    /// and surface the decoded value.
    Reply,
}

/// One native request frame plus the shape of its expected reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The exact bytes to write to the transport.
    pub bytes: Vec<u8>,
    /// How the reply is delimited.
    pub reply: ReplyFraming,
    /// Whether the reply is data or an acknowledgement.
    pub role: FrameRole,
}

impl Frame {
    /// A frame whose reply carries data to decode.
    pub fn reply(bytes: Vec<u8>, framing: ReplyFraming) -> Self {
        Frame {
            bytes,
            reply: framing,
            role: FrameRole::Reply,
        }
    }

    /// A frame whose reply is only an acknowledgement.
    pub fn ack(bytes: Vec<u8>, framing: ReplyFraming) -> Self {
        Frame {
            bytes,
            reply: framing,
            role: FrameRole::Ack,
        }
    }
}

/// Translator between the generic command vocabulary and one rig model's
/// native protocol.
///
/// All argument validation a codec can perform without touching the wire
/// happens inside `encode_query`/`encode_set`, so a malformed command never
/// produces any frames. A command with no native encoding on this model is
/// rejected with [`Error::Unsupported`](crate::error::Error::Unsupported).
pub trait CatCodec: Send + Sync {
    /// Human-readable model name, used in logs and error messages.
    fn rig_name(&self) -> &str;

    /// Encode a query (read) for `cmd` into one or more request frames.
    fn encode_query(&self, cmd: CatCommand) -> Result<Vec<Frame>>;

    /// Encode a set (write) of `cmd` with the given arguments into one or
    /// more request frames.
    fn encode_set(&self, cmd: CatCommand, args: &[&str]) -> Result<Vec<Frame>>;

    /// Decode the raw reply to a `Reply` frame into a generic value string.
    fn decode_reply(&self, cmd: CatCommand, raw: &[u8]) -> Result<String>;

    /// Interpret the raw reply to an `Ack` frame.
    ///
    /// `raw` may be empty for protocols where the rig is silent on success.
    fn check_ack(&self, cmd: CatCommand, raw: &[u8]) -> Result<()>;
}
