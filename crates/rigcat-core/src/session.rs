//! The generic command session.
//!
//! [`CatSession`] ties one codec to one transport and exposes the single
//! entry point applications use: [`CatSession::execute`]. Command names are
//! matched case-insensitively against the generic vocabulary, argument
//! counts are validated before any I/O, and every outcome collapses to the
//! tri-state [`CatResponse`]. Failures never escape as panics or errors;
//! they are logged and reported as [`CatResponse::Error`].
//!
//! The transport and PTT state sit behind one `tokio::sync::Mutex`, so
//! concurrent `execute` calls serialize: exactly one request/reply exchange
//! is in flight per connection at a time, matching the half-duplex nature
//! of CAT serial links.

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::codec::{CatCodec, Frame, FrameRole, ReplyFraming};
use crate::command::CatCommand;
use crate::error::{Error, Result};
use crate::ptt::{PttAction, PttController};
use crate::response::CatResponse;
use crate::transport::Transport;
use crate::types::{PttMethod, PttState};

const READ_CHUNK: usize = 256;

/// Hard cap on accumulated reply bytes; a reply this large means the
/// framing is wrong (noise, echo storm, or baud mismatch).
const MAX_REPLY_LEN: usize = 4096;

/// A connected control session for one transceiver.
///
/// Construct through a model crate's builder (e.g. `Ft991Builder`), which
/// supplies the matching codec and a configured transport.
pub struct CatSession {
    codec: Box<dyn CatCodec>,
    inner: Mutex<SessionInner>,
    read_timeout: Duration,
}

struct SessionInner {
    transport: Box<dyn Transport>,
    ptt: PttController,
}

impl CatSession {
    /// Create a session over an already-open transport.
    pub fn new(
        codec: Box<dyn CatCodec>,
        transport: Box<dyn Transport>,
        ptt_method: PttMethod,
        read_timeout: Duration,
    ) -> Self {
        CatSession {
            codec,
            inner: Mutex::new(SessionInner {
                transport,
                ptt: PttController::new(ptt_method),
            }),
            read_timeout,
        }
    }

    /// The codec's model name.
    pub fn rig_name(&self) -> &str {
        self.codec.rig_name()
    }

    /// Execute one generic command.
    ///
    /// `name` is matched case-insensitively. Queries return
    /// [`CatResponse::Value`]; sets and actions return [`CatResponse::Ok`].
    /// Any failure, from an unknown name to a wire timeout, returns
    /// [`CatResponse::Error`]; the cause is logged at debug level.
    pub async fn execute(&self, name: &str, args: &[&str]) -> CatResponse {
        match self.try_execute(name, args).await {
            Ok(response) => response,
            Err(e) => {
                debug!(
                    rig = self.codec.rig_name(),
                    command = name,
                    error = %e,
                    "command failed"
                );
                CatResponse::Error
            }
        }
    }

    async fn try_execute(&self, name: &str, args: &[&str]) -> Result<CatResponse> {
        let cmd = CatCommand::from_str(name)?;
        cmd.check_arity(args.len())?;
        match cmd {
            CatCommand::Ptt => self.ptt_command(args).await,
            CatCommand::PttMethod => self.ptt_method_command(args).await,
            CatCommand::Ascii => self.raw_ascii(args).await,
            CatCommand::Hex => self.raw_hex(args).await,
            _ => self.codec_command(cmd, args).await,
        }
    }

    /// Close the underlying transport.
    pub async fn close(&self) -> Result<()> {
        let mut inner = self.inner.lock().await;
        inner.transport.close().await
    }

    /// Whether the underlying transport is still connected.
    pub async fn is_connected(&self) -> bool {
        self.inner.lock().await.transport.is_connected()
    }

    /// The generic path: encode, exchange each frame in order, decode.
    ///
    /// A command with no arguments is a query; with arguments it is a set.
    /// The frame sequence aborts on the first failed exchange, so a
    /// multi-frame set never half-applies past a rejected frame.
    async fn codec_command(&self, cmd: CatCommand, args: &[&str]) -> Result<CatResponse> {
        let frames = if args.is_empty() {
            self.codec.encode_query(cmd)?
        } else {
            self.codec.encode_set(cmd, args)?
        };

        let mut inner = self.inner.lock().await;
        let mut values = Vec::new();
        for frame in &frames {
            let raw = exchange(inner.transport.as_mut(), frame, self.read_timeout).await?;
            match frame.role {
                FrameRole::Ack => self.codec.check_ack(cmd, &raw)?,
                FrameRole::Reply => values.push(self.codec.decode_reply(cmd, &raw)?),
            }
        }
        if values.is_empty() {
            Ok(CatResponse::Ok)
        } else {
            Ok(CatResponse::Value(values.join(":")))
        }
    }

    /// PTT is routed through the controller, never the plain codec path.
    ///
    /// A query reports the last state this session successfully commanded.
    /// A set performs the planned wire action first and records the new
    /// state only if that action succeeded; with method `NONE` nothing is
    /// sent and nothing is recorded.
    async fn ptt_command(&self, args: &[&str]) -> Result<CatResponse> {
        let mut inner = self.inner.lock().await;
        if args.is_empty() {
            return Ok(CatResponse::Value(inner.ptt.state().to_string()));
        }
        let target: PttState = args[0].parse()?;
        match inner.ptt.plan(target) {
            PttAction::NoOp => Ok(CatResponse::Ok),
            PttAction::CatCommand => {
                let arg = target.to_string();
                let frames = self.codec.encode_set(CatCommand::Ptt, &[&arg])?;
                for frame in &frames {
                    let raw = exchange(inner.transport.as_mut(), frame, self.read_timeout).await?;
                    match frame.role {
                        FrameRole::Ack => self.codec.check_ack(CatCommand::Ptt, &raw)?,
                        FrameRole::Reply => {
                            self.codec.decode_reply(CatCommand::Ptt, &raw)?;
                        }
                    }
                }
                inner.ptt.commit(target);
                Ok(CatResponse::Ok)
            }
            PttAction::ToggleLine { line, asserted } => {
                inner.transport.set_control_line(line, asserted).await?;
                inner.ptt.commit(target);
                Ok(CatResponse::Ok)
            }
        }
    }

    /// PTT method selection is pure session state; no rig I/O.
    async fn ptt_method_command(&self, args: &[&str]) -> Result<CatResponse> {
        let mut inner = self.inner.lock().await;
        if args.is_empty() {
            return Ok(CatResponse::Value(inner.ptt.method().to_string()));
        }
        let method: PttMethod = args[0].parse()?;
        inner.ptt.set_method(method);
        Ok(CatResponse::Ok)
    }

    /// Raw ASCII passthrough: send the literal argument text, return
    /// whatever the rig says (or `Ok` if it stays silent).
    async fn raw_ascii(&self, args: &[&str]) -> Result<CatResponse> {
        let text = args.join(" ");
        let mut inner = self.inner.lock().await;
        inner.transport.send(text.as_bytes()).await?;
        let raw = read_until_quiet(inner.transport.as_mut(), self.read_timeout).await?;
        if raw.is_empty() {
            Ok(CatResponse::Ok)
        } else {
            Ok(CatResponse::Value(String::from_utf8_lossy(&raw).into_owned()))
        }
    }

    /// Raw binary passthrough: each argument must be a 2-digit hex octet.
    /// The whole list is validated before anything is sent.
    async fn raw_hex(&self, args: &[&str]) -> Result<CatResponse> {
        let mut bytes = Vec::with_capacity(args.len());
        for arg in args {
            // from_str_radix alone is too lenient: it accepts a leading sign.
            if arg.len() != 2 || !arg.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(Error::InvalidParameter(format!(
                    "not a 2-digit hex octet: {arg}"
                )));
            }
            let octet = u8::from_str_radix(arg, 16).map_err(|_| {
                Error::InvalidParameter(format!("not a 2-digit hex octet: {arg}"))
            })?;
            bytes.push(octet);
        }

        let mut inner = self.inner.lock().await;
        inner.transport.send(&bytes).await?;
        let raw = read_until_quiet(inner.transport.as_mut(), self.read_timeout).await?;
        if raw.is_empty() {
            Ok(CatResponse::Ok)
        } else {
            let hex: Vec<String> = raw.iter().map(|b| format!("{b:02X}")).collect();
            Ok(CatResponse::Value(hex.join(" ")))
        }
    }
}

/// Perform one request/reply exchange: write the frame, then accumulate
/// reply bytes until the frame's framing is satisfied.
///
/// For delimited framing a timeout ends the reply, possibly empty; some
/// rigs are silent on a successful set and the codec judges the result in
/// `check_ack`. For fixed framing a timeout before the full count is a
/// hard failure.
async fn exchange(
    transport: &mut dyn Transport,
    frame: &Frame,
    timeout: Duration,
) -> Result<Vec<u8>> {
    trace!(tx = ?frame.bytes, "frame out");
    transport.send(&frame.bytes).await?;

    let mut acc: Vec<u8> = Vec::new();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        match frame.reply {
            ReplyFraming::Delimited(term) => {
                if let Some(pos) = acc.iter().position(|&b| b == term) {
                    acc.truncate(pos + 1);
                    break;
                }
            }
            ReplyFraming::Fixed(n) => {
                if acc.len() >= n {
                    acc.truncate(n);
                    break;
                }
            }
        }
        if acc.len() >= MAX_REPLY_LEN {
            return Err(Error::Protocol(format!(
                "reply exceeded {MAX_REPLY_LEN} bytes without satisfying framing"
            )));
        }
        match transport.receive(&mut buf, timeout).await {
            Ok(0) => return Err(Error::ConnectionLost),
            Ok(n) => acc.extend_from_slice(&buf[..n]),
            Err(Error::Timeout) => match frame.reply {
                ReplyFraming::Delimited(_) => break,
                ReplyFraming::Fixed(_) => return Err(Error::Timeout),
            },
            Err(e) => return Err(e),
        }
    }
    trace!(rx = ?acc, "frame in");
    Ok(acc)
}

/// Accumulate reply bytes until the rig goes quiet. Used by the raw
/// passthrough commands, which have no framing knowledge.
async fn read_until_quiet(transport: &mut dyn Transport, timeout: Duration) -> Result<Vec<u8>> {
    let mut acc = Vec::new();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        match transport.receive(&mut buf, timeout).await {
            Ok(0) => break,
            Ok(n) => {
                acc.extend_from_slice(&buf[..n]);
                if acc.len() >= MAX_REPLY_LEN {
                    break;
                }
            }
            Err(Error::Timeout) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(acc)
}
