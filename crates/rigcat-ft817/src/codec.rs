//! Generic-command codec for the Yaesu FT-817.
//!
//! The FT-817 speaks the classic Yaesu five-byte binary CAT protocol: four
//! parameter bytes plus an opcode, with packed-BCD numerics. Replies are
//! fixed-length: one acknowledgement byte for sets, five bytes for the
//! frequency/mode read. There is no error token; a set either acks or the
//! rig stays silent.
//!
//! Frequency and mode always address the active VFO; the protocol has no
//! documented way to address VFO-A/VFO-B directly, so the suffixed
//! commands are unsupported and `SWAPVFO` (the 0x81 toggle) is the way to
//! reach the other VFO.

use rigcat_core::codec::{CatCodec, Frame, ReplyFraming};
use rigcat_core::command::CatCommand;
use rigcat_core::error::{Error, Result};
use rigcat_core::types::{parse_onoff, OperatingMode, ToneMode};

use crate::frame::{self, command, from_bcd, to_bcd, FRAME_LEN};

/// Codec for the FT-817 (and the FT-817ND).
#[derive(Debug, Default)]
pub struct Ft817Codec;

/// Lowest frequency the rig will accept, in Hz.
const FREQ_MIN_HZ: u64 = 100_000;
/// Highest frequency the rig will accept, in Hz.
const FREQ_MAX_HZ: u64 = 450_000_000;

fn ack1(bytes: Vec<u8>) -> Frame {
    Frame::ack(bytes, ReplyFraming::Fixed(1))
}

fn mode_to_code(mode: OperatingMode) -> Result<u8> {
    let code = match mode {
        OperatingMode::LSB => 0x00,
        OperatingMode::USB => 0x01,
        OperatingMode::CW => 0x02,
        OperatingMode::CWR => 0x03,
        OperatingMode::AM => 0x04,
        OperatingMode::FM => 0x08,
        OperatingMode::DIGI => 0x0A,
        OperatingMode::PKT => 0x0C,
        _ => {
            return Err(Error::Unsupported(format!("mode {mode} on FT-817")));
        }
    };
    Ok(code)
}

fn code_to_mode(code: u8) -> Result<OperatingMode> {
    let mode = match code {
        0 => OperatingMode::LSB,
        1 => OperatingMode::USB,
        2 => OperatingMode::CW,
        3 => OperatingMode::CWR,
        4 => OperatingMode::AM,
        6 => OperatingMode::FMW,
        8 => OperatingMode::FM,
        10 => OperatingMode::DIGI,
        12 => OperatingMode::PKT,
        _ => {
            return Err(Error::Protocol(format!(
                "unknown FT-817 mode code: {code:#04X}"
            )));
        }
    };
    Ok(mode)
}

impl CatCodec for Ft817Codec {
    fn rig_name(&self) -> &str {
        "FT-817"
    }

    fn encode_query(&self, cmd: CatCommand) -> Result<Vec<Frame>> {
        let frames = match cmd {
            // One read serves both FREQ and MODE; the decode picks the field.
            CatCommand::Freq | CatCommand::Mode => vec![Frame::reply(
                command(0, 0, 0, 0, frame::OP_READ_FREQ_MODE),
                ReplyFraming::Fixed(FRAME_LEN),
            )],
            CatCommand::RxStatus => vec![Frame::reply(
                command(0, 0, 0, 0, frame::OP_READ_RX_STATUS),
                ReplyFraming::Fixed(1),
            )],
            CatCommand::TxStatus => vec![Frame::reply(
                command(0, 0, 0, 0, frame::OP_READ_TX_STATUS),
                ReplyFraming::Fixed(1),
            )],
            CatCommand::SwapVfo => vec![ack1(command(0, 0, 0, 0, frame::OP_VFO_TOGGLE))],
            _ => {
                return Err(Error::Unsupported(format!("{cmd} query on FT-817")));
            }
        };
        Ok(frames)
    }

    fn encode_set(&self, cmd: CatCommand, args: &[&str]) -> Result<Vec<Frame>> {
        let frames = match cmd {
            CatCommand::Freq => {
                let hz: u64 = args[0].parse().map_err(|_| {
                    Error::InvalidParameter(format!("frequency must be numeric Hz: {}", args[0]))
                })?;
                if !(FREQ_MIN_HZ..=FREQ_MAX_HZ).contains(&hz) {
                    return Err(Error::InvalidParameter(format!(
                        "frequency out of range {FREQ_MIN_HZ}-{FREQ_MAX_HZ} Hz: {hz}"
                    )));
                }
                // 8 BCD digits at 10 Hz resolution; the ones digit is lost.
                let bcd = to_bcd(hz / 10, 8);
                vec![ack1(command(bcd[0], bcd[1], bcd[2], bcd[3], frame::OP_SET_FREQ))]
            }
            CatCommand::Mode => {
                let mode: OperatingMode = args[0].parse()?;
                vec![ack1(command(mode_to_code(mode)?, 0, 0, 0, frame::OP_SET_MODE))]
            }
            CatCommand::Ptt => {
                let op = if parse_onoff(args[0])? {
                    frame::OP_PTT_ON
                } else {
                    frame::OP_PTT_OFF
                };
                vec![ack1(command(0, 0, 0, 0, op))]
            }
            CatCommand::Split => {
                let op = if parse_onoff(args[0])? {
                    frame::OP_SPLIT_ON
                } else {
                    frame::OP_SPLIT_OFF
                };
                vec![ack1(command(0, 0, 0, 0, op))]
            }
            CatCommand::Rit => {
                let op = if parse_onoff(args[0])? {
                    frame::OP_RIT_ON
                } else {
                    frame::OP_RIT_OFF
                };
                vec![ack1(command(0, 0, 0, 0, op))]
            }
            CatCommand::RitFreq => {
                let hz: i32 = args[0].parse().map_err(|_| {
                    Error::InvalidParameter(format!("RIT offset must be signed Hz: {}", args[0]))
                })?;
                // 10 Hz steps, +/- 9.99 kHz.
                let steps = hz / 10;
                if !(-999..=999).contains(&steps) {
                    return Err(Error::InvalidParameter(format!(
                        "RIT offset out of range +/-9990 Hz: {hz}"
                    )));
                }
                let p1 = if steps < 0 { 0x01 } else { 0x00 };
                let bcd = to_bcd(steps.unsigned_abs() as u64, 4);
                vec![ack1(command(p1, 0, bcd[0], bcd[1], frame::OP_RIT_FREQ))]
            }
            CatCommand::RptOffset => {
                let hz: i64 = args[0].parse().map_err(|_| {
                    Error::InvalidParameter(format!(
                        "repeater offset must be signed Hz: {}",
                        args[0]
                    ))
                })?;
                if !(-9_999_999..=9_999_999).contains(&hz) {
                    return Err(Error::InvalidParameter(format!(
                        "repeater offset out of range +/-9.999999 MHz: {hz}"
                    )));
                }
                if hz == 0 {
                    // Zero offset selects simplex; no offset frame needed.
                    return Ok(vec![ack1(command(0x89, 0, 0, 0, frame::OP_RPT_SHIFT))]);
                }
                let shift = if hz < 0 { 0x09 } else { 0x49 };
                let bcd = to_bcd(hz.unsigned_abs(), 8);
                vec![
                    ack1(command(shift, 0, 0, 0, frame::OP_RPT_SHIFT)),
                    ack1(command(bcd[0], bcd[1], bcd[2], bcd[3], frame::OP_RPT_OFFSET)),
                ]
            }
            CatCommand::Tone => {
                let mode: ToneMode = args[0].parse()?;
                let p1 = match mode {
                    ToneMode::Off => 0x8A,
                    ToneMode::Enc => 0x4A,
                    ToneMode::Dec => 0x2A,
                };
                let mut frames = vec![ack1(command(p1, 0, 0, 0, frame::OP_TONE_MODE))];
                if mode != ToneMode::Off {
                    let freq = args.get(1).ok_or_else(|| {
                        Error::InvalidParameter("tone frequency required for ENC/DEC".into())
                    })?;
                    let tone: u32 = freq.parse().map_err(|_| {
                        Error::InvalidParameter(format!("tone must be numeric (Hz x 10): {freq}"))
                    })?;
                    if !(670..=2541).contains(&tone) {
                        return Err(Error::InvalidParameter(format!(
                            "tone out of CTCSS range 670-2541: {tone}"
                        )));
                    }
                    let bcd = to_bcd(tone as u64, 4);
                    frames.push(ack1(command(bcd[0], bcd[1], 0, 0, frame::OP_TONE_FREQ)));
                }
                frames
            }
            _ => {
                return Err(Error::Unsupported(format!("{cmd} on FT-817")));
            }
        };
        Ok(frames)
    }

    fn decode_reply(&self, cmd: CatCommand, raw: &[u8]) -> Result<String> {
        match cmd {
            CatCommand::Freq => {
                if raw.len() != FRAME_LEN {
                    return Err(Error::Protocol(format!(
                        "expected {FRAME_LEN}-byte reply, got {}",
                        raw.len()
                    )));
                }
                let hz = from_bcd(&raw[..4])? * 10;
                Ok(format!("{hz:09}"))
            }
            CatCommand::Mode => {
                if raw.len() != FRAME_LEN {
                    return Err(Error::Protocol(format!(
                        "expected {FRAME_LEN}-byte reply, got {}",
                        raw.len()
                    )));
                }
                Ok(code_to_mode(raw[4])?.to_string())
            }
            CatCommand::RxStatus | CatCommand::TxStatus => {
                let byte = raw
                    .first()
                    .ok_or_else(|| Error::Protocol("empty status reply".into()))?;
                Ok(format!("{byte:02X}"))
            }
            _ => Err(Error::Protocol(format!("{cmd} has no decodable reply"))),
        }
    }

    fn check_ack(&self, cmd: CatCommand, raw: &[u8]) -> Result<()> {
        if raw.len() != 1 {
            return Err(Error::Protocol(format!(
                "expected 1-byte ack, got {} bytes",
                raw.len()
            )));
        }
        match cmd {
            // These ack with a status byte whose value varies (e.g. 0xF0
            // when PTT was already off); any byte means the rig heard us.
            CatCommand::Ptt | CatCommand::Mode | CatCommand::Split | CatCommand::Rit => Ok(()),
            _ => {
                if raw[0] == 0x00 {
                    Ok(())
                } else {
                    Err(Error::Protocol(format!(
                        "rig rejected {cmd}: ack {:#04X}",
                        raw[0]
                    )))
                }
            }
        }
    }
}
