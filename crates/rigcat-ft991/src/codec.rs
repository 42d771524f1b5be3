//! Generic-command codec for the Yaesu FT-991 and FT-991A.
//!
//! Reference: Yaesu FT-991A CAT Operation Reference Manual (1612-C).
//!
//! The FT-991 acknowledges a successful set command with silence and
//! answers any invalid command with `?;`. Query replies echo the command
//! prefix. A few generic operations expand to more than one CAT exchange:
//! `TONE` writes the tone mode (`CT0`) and then the tone code (`CN00`), and
//! `MODEB` reaches VFO-B by swapping (`SV`), operating on the now-active
//! VFO, and swapping back.

use rigcat_core::codec::{CatCodec, Frame, FrameRole, ReplyFraming};
use rigcat_core::command::CatCommand;
use rigcat_core::error::{Error, Result};
use rigcat_core::types::{parse_onoff, OperatingMode, ToneMode};

use crate::protocol::{encode_command, reply_body, ERROR_RESPONSE, TERMINATOR};
use crate::tones::tone_code;

/// Codec for the FT-991/FT-991A.
#[derive(Debug, Default)]
pub struct Ft991Codec;

fn framing() -> ReplyFraming {
    ReplyFraming::Delimited(TERMINATOR)
}

fn reply(prefix: &str, params: &str) -> Frame {
    Frame::reply(encode_command(prefix, params), framing())
}

fn ack(prefix: &str, params: &str) -> Frame {
    Frame::ack(encode_command(prefix, params), framing())
}

/// `MD0` mode nibble for a generic operating mode.
fn mode_to_nibble(mode: OperatingMode) -> Result<char> {
    let nibble = match mode {
        OperatingMode::LSB => '1',
        OperatingMode::USB => '2',
        OperatingMode::CW => '3',
        OperatingMode::FM => '4',
        OperatingMode::AM => '5',
        OperatingMode::RTTY => '6',
        OperatingMode::CWR => '7',
        OperatingMode::DataLSB => '8',
        OperatingMode::RTTYR => '9',
        OperatingMode::DataFM => 'A',
        OperatingMode::FMN => 'B',
        OperatingMode::DataUSB => 'C',
        OperatingMode::AMN => 'D',
        OperatingMode::C4FM => 'E',
        _ => {
            return Err(Error::Unsupported(format!("mode {mode} on FT-991")));
        }
    };
    Ok(nibble)
}

fn nibble_to_mode(nibble: char) -> Result<OperatingMode> {
    let mode = match nibble {
        '1' => OperatingMode::LSB,
        '2' => OperatingMode::USB,
        '3' => OperatingMode::CW,
        '4' => OperatingMode::FM,
        '5' => OperatingMode::AM,
        '6' => OperatingMode::RTTY,
        '7' => OperatingMode::CWR,
        '8' => OperatingMode::DataLSB,
        '9' => OperatingMode::RTTYR,
        'A' => OperatingMode::DataFM,
        'B' => OperatingMode::FMN,
        'C' => OperatingMode::DataUSB,
        'D' => OperatingMode::AMN,
        'E' => OperatingMode::C4FM,
        _ => {
            return Err(Error::Protocol(format!("unknown FT-991 mode code: {nibble}")));
        }
    };
    Ok(mode)
}

/// Pad a frequency argument to the 9-digit field the CAT protocol expects.
fn freq_field(arg: &str) -> Result<String> {
    if arg.is_empty() || arg.len() > 9 || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidParameter(format!(
            "frequency must be 1-9 digits in Hz: {arg}"
        )));
    }
    Ok(format!("{arg:0>9}"))
}

/// Parse a 0-100 (or `min`-100) percentage into a 3-digit field.
fn level_field(arg: &str, min: u32) -> Result<String> {
    let level: u32 = arg
        .parse()
        .map_err(|_| Error::InvalidParameter(format!("level must be numeric: {arg}")))?;
    if level < min || level > 100 {
        return Err(Error::InvalidParameter(format!(
            "level must be {min}-100: {arg}"
        )));
    }
    Ok(format!("{level:03}"))
}

fn digits_field(arg: &str, len: usize, what: &str) -> Result<String> {
    if arg.len() != len || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidParameter(format!(
            "{what} must be {len} digits: {arg}"
        )));
    }
    Ok(arg.to_string())
}

impl CatCodec for Ft991Codec {
    fn rig_name(&self) -> &str {
        "FT-991"
    }

    fn encode_query(&self, cmd: CatCommand) -> Result<Vec<Frame>> {
        let frames = match cmd {
            CatCommand::Freq | CatCommand::FreqA => vec![reply("FA", "")],
            CatCommand::FreqB => vec![reply("FB", "")],
            CatCommand::Mode | CatCommand::ModeA => vec![reply("MD0", "")],
            // VFO-B is only reachable as the active VFO: swap, read, swap back.
            CatCommand::ModeB => vec![ack("SV", ""), reply("MD0", ""), ack("SV", "")],
            CatCommand::Split => vec![reply("FT", "")],
            CatCommand::Date => vec![reply("DT0", "")],
            CatCommand::Time => vec![reply("DT1", "")],
            CatCommand::Lock => vec![reply("LK", "")],
            CatCommand::Monitor => vec![reply("ML0", ""), reply("ML1", "")],
            CatCommand::Speech => vec![reply("PR0", ""), reply("PL", "")],
            CatCommand::Power => vec![reply("PC", "")],
            CatCommand::IfNarrow => vec![reply("NA0", "")],
            CatCommand::IfShift => vec![reply("IS0", "")],
            CatCommand::IfWidth => vec![reply("SH0", "")],
            CatCommand::SwapVfo => vec![ack("SV", "")],
            _ => {
                return Err(Error::Unsupported(format!("{cmd} query on FT-991")));
            }
        };
        Ok(frames)
    }

    fn encode_set(&self, cmd: CatCommand, args: &[&str]) -> Result<Vec<Frame>> {
        let frames = match cmd {
            CatCommand::Freq | CatCommand::FreqA => vec![ack("FA", &freq_field(args[0])?)],
            CatCommand::FreqB => vec![ack("FB", &freq_field(args[0])?)],
            CatCommand::Mode | CatCommand::ModeA => {
                let mode: OperatingMode = args[0].parse()?;
                vec![ack("MD0", &mode_to_nibble(mode)?.to_string())]
            }
            CatCommand::ModeB => {
                let mode: OperatingMode = args[0].parse()?;
                let nibble = mode_to_nibble(mode)?.to_string();
                vec![ack("SV", ""), ack("MD0", &nibble), ack("SV", "")]
            }
            CatCommand::Ptt => {
                if parse_onoff(args[0])? {
                    vec![ack("TX", "1")]
                } else {
                    vec![ack("TX", "0")]
                }
            }
            CatCommand::Split => {
                // TX on VFO-B when split is on, VFO-A when off.
                if parse_onoff(args[0])? {
                    vec![ack("FT", "3")]
                } else {
                    vec![ack("FT", "2")]
                }
            }
            CatCommand::Tone => {
                let mode: ToneMode = args[0].parse()?;
                match mode {
                    ToneMode::Off => vec![ack("CT0", "0")],
                    ToneMode::Enc | ToneMode::Dec => {
                        let freq = args.get(1).ok_or_else(|| {
                            Error::InvalidParameter(
                                "tone frequency required for ENC/DEC".into(),
                            )
                        })?;
                        let code = tone_code(freq).ok_or_else(|| {
                            Error::InvalidParameter(format!(
                                "not a standard CTCSS tone (Hz x 10): {freq}"
                            ))
                        })?;
                        let mode_digit = if mode == ToneMode::Enc { "2" } else { "1" };
                        vec![ack("CT0", mode_digit), ack("CN00", code)]
                    }
                }
            }
            CatCommand::Date => vec![ack("DT0", &digits_field(args[0], 8, "date")?)],
            CatCommand::Time => vec![ack("DT1", &digits_field(args[0], 6, "time")?)],
            CatCommand::Lock => {
                let digit = if parse_onoff(args[0])? { "1" } else { "0" };
                vec![ack("LK", digit)]
            }
            CatCommand::Monitor => {
                let field = if parse_onoff(args[0])? { "001" } else { "000" };
                let mut frames = vec![ack("ML0", field)];
                if let Some(level) = args.get(1) {
                    frames.push(ack("ML1", &level_field(level, 0)?));
                }
                frames
            }
            CatCommand::Speech => {
                let digit = if parse_onoff(args[0])? { "1" } else { "0" };
                let mut frames = vec![ack("PR0", digit)];
                if let Some(level) = args.get(1) {
                    frames.push(ack("PL", &level_field(level, 0)?));
                }
                frames
            }
            // The FT-991 will not go below 5 watts.
            CatCommand::Power => vec![ack("PC", &level_field(args[0], 5)?)],
            CatCommand::IfNarrow => {
                let digit = if parse_onoff(args[0])? { "1" } else { "0" };
                vec![ack("NA0", digit)]
            }
            CatCommand::IfShift => {
                let shift: i32 = args[0].parse().map_err(|_| {
                    Error::InvalidParameter(format!("shift must be a signed Hz value: {}", args[0]))
                })?;
                if !(-1000..=1000).contains(&shift) {
                    return Err(Error::InvalidParameter(format!(
                        "shift must be -1000..=1000 Hz: {shift}"
                    )));
                }
                vec![ack("IS0", &format!("{shift:+05}"))]
            }
            CatCommand::IfWidth => {
                let idx: u32 = args[0].parse().map_err(|_| {
                    Error::InvalidParameter(format!("width index must be numeric: {}", args[0]))
                })?;
                if idx > 21 {
                    return Err(Error::InvalidParameter(format!(
                        "width index must be 0-21: {idx}"
                    )));
                }
                vec![ack("SH0", &format!("{idx:02}"))]
            }
            _ => {
                return Err(Error::Unsupported(format!("{cmd} on FT-991")));
            }
        };
        Ok(frames)
    }

    fn decode_reply(&self, cmd: CatCommand, raw: &[u8]) -> Result<String> {
        match cmd {
            CatCommand::Freq | CatCommand::FreqA => {
                let body = reply_body(raw, "FA")?;
                take_digits(body, 9)
            }
            CatCommand::FreqB => {
                let body = reply_body(raw, "FB")?;
                take_digits(body, 9)
            }
            CatCommand::Mode | CatCommand::ModeA | CatCommand::ModeB => {
                let body = reply_body(raw, "MD0")?;
                let nibble = body
                    .chars()
                    .next()
                    .ok_or_else(|| Error::Protocol("empty mode reply".into()))?;
                Ok(nibble_to_mode(nibble)?.to_string())
            }
            CatCommand::Split => match reply_body(raw, "FT")? {
                "0" => Ok("OFF".into()),
                "1" => Ok("ON".into()),
                other => Err(Error::Protocol(format!("unknown split state: {other}"))),
            },
            CatCommand::Date => {
                let body = reply_body(raw, "DT0")?;
                take_chars(body, 8)
            }
            CatCommand::Time => {
                let body = reply_body(raw, "DT1")?;
                take_chars(body, 6)
            }
            CatCommand::Lock => match reply_body(raw, "LK")? {
                "0" => Ok("OFF".into()),
                "1" => Ok("ON".into()),
                other => Err(Error::Protocol(format!("unknown lock state: {other}"))),
            },
            // The two monitor replies share the generic command; the echoed
            // prefix tells them apart.
            CatCommand::Monitor => {
                if raw.starts_with(b"ML0") {
                    match reply_body(raw, "ML0")? {
                        "000" => Ok("OFF".into()),
                        "001" => Ok("ON".into()),
                        other => Err(Error::Protocol(format!("unknown monitor state: {other}"))),
                    }
                } else {
                    let body = reply_body(raw, "ML1")?;
                    take_chars(body, 3)
                }
            }
            CatCommand::Speech => {
                if raw.starts_with(b"PR0") {
                    match reply_body(raw, "PR0")? {
                        "0" => Ok("OFF".into()),
                        "1" => Ok("ON".into()),
                        other => Err(Error::Protocol(format!("unknown speech state: {other}"))),
                    }
                } else {
                    let body = reply_body(raw, "PL")?;
                    take_chars(body, 3)
                }
            }
            CatCommand::Power => {
                let body = reply_body(raw, "PC")?;
                take_chars(body, 3)
            }
            CatCommand::IfNarrow => match reply_body(raw, "NA0")? {
                "0" => Ok("OFF".into()),
                "1" => Ok("ON".into()),
                other => Err(Error::Protocol(format!("unknown IF-narrow state: {other}"))),
            },
            CatCommand::IfShift => {
                let body = reply_body(raw, "IS0")?;
                take_chars(body, 5)
            }
            CatCommand::IfWidth => {
                let body = reply_body(raw, "SH0")?;
                take_chars(body, 2)
            }
            _ => Err(Error::Protocol(format!("{cmd} has no decodable reply"))),
        }
    }

    fn check_ack(&self, cmd: CatCommand, raw: &[u8]) -> Result<()> {
        // Silence means the set was accepted.
        if raw.is_empty() {
            return Ok(());
        }
        if raw == ERROR_RESPONSE {
            return Err(Error::Protocol(format!("rig rejected {cmd}")));
        }
        // Anything else is a harmless echo (AI mode or command readback).
        Ok(())
    }
}

fn take_chars(body: &str, n: usize) -> Result<String> {
    // Reply fields are plain ASCII; a multibyte character in the field is
    // line garbage, and slicing through it would panic.
    if body.len() < n || !body.is_char_boundary(n) {
        return Err(Error::Protocol(format!("malformed reply body: {body}")));
    }
    Ok(body[..n].to_string())
}

fn take_digits(body: &str, n: usize) -> Result<String> {
    let field = take_chars(body, n)?;
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Protocol(format!("non-numeric reply field: {field}")));
    }
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_bytes(cmd: CatCommand) -> Vec<Vec<u8>> {
        Ft991Codec
            .encode_query(cmd)
            .unwrap()
            .into_iter()
            .map(|f| f.bytes)
            .collect()
    }

    fn set_bytes(cmd: CatCommand, args: &[&str]) -> Vec<Vec<u8>> {
        Ft991Codec
            .encode_set(cmd, args)
            .unwrap()
            .into_iter()
            .map(|f| f.bytes)
            .collect()
    }

    #[test]
    fn freq_query_and_set() {
        assert_eq!(query_bytes(CatCommand::Freq), vec![b"FA;".to_vec()]);
        assert_eq!(query_bytes(CatCommand::FreqB), vec![b"FB;".to_vec()]);
        // Frequency is zero-padded to 9 digits.
        assert_eq!(
            set_bytes(CatCommand::Freq, &["14074000"]),
            vec![b"FA014074000;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::FreqB, &["7074000"]),
            vec![b"FB007074000;".to_vec()]
        );
    }

    #[test]
    fn freq_set_rejects_bad_input() {
        assert!(Ft991Codec.encode_set(CatCommand::Freq, &["14.074"]).is_err());
        assert!(Ft991Codec
            .encode_set(CatCommand::Freq, &["1407400000"])
            .is_err());
        assert!(Ft991Codec.encode_set(CatCommand::Freq, &[""]).is_err());
    }

    #[test]
    fn freq_decode() {
        let val = Ft991Codec
            .decode_reply(CatCommand::Freq, b"FA014074000;")
            .unwrap();
        assert_eq!(val, "014074000");

        assert!(Ft991Codec.decode_reply(CatCommand::Freq, b"?;").is_err());
        assert!(Ft991Codec
            .decode_reply(CatCommand::Freq, b"FB014074000;")
            .is_err());
    }

    #[test]
    fn mode_nibble_round_trip() {
        for (mode, nibble) in [
            (OperatingMode::LSB, '1'),
            (OperatingMode::USB, '2'),
            (OperatingMode::CW, '3'),
            (OperatingMode::FM, '4'),
            (OperatingMode::AM, '5'),
            (OperatingMode::RTTY, '6'),
            (OperatingMode::CWR, '7'),
            (OperatingMode::DataLSB, '8'),
            (OperatingMode::RTTYR, '9'),
            (OperatingMode::DataFM, 'A'),
            (OperatingMode::FMN, 'B'),
            (OperatingMode::DataUSB, 'C'),
            (OperatingMode::AMN, 'D'),
            (OperatingMode::C4FM, 'E'),
        ] {
            assert_eq!(mode_to_nibble(mode).unwrap(), nibble);
            assert_eq!(nibble_to_mode(nibble).unwrap(), mode);
        }
    }

    #[test]
    fn unsupported_modes_rejected() {
        assert!(Ft991Codec.encode_set(CatCommand::Mode, &["FM-W"]).is_err());
        assert!(Ft991Codec.encode_set(CatCommand::Mode, &["PKT"]).is_err());
    }

    #[test]
    fn mode_set_and_decode() {
        assert_eq!(
            set_bytes(CatCommand::Mode, &["DATA-USB"]),
            vec![b"MD0C;".to_vec()]
        );
        let val = Ft991Codec
            .decode_reply(CatCommand::Mode, b"MD02;")
            .unwrap();
        assert_eq!(val, "USB");
    }

    #[test]
    fn modeb_uses_swap_sequence() {
        assert_eq!(
            set_bytes(CatCommand::ModeB, &["CW"]),
            vec![b"SV;".to_vec(), b"MD03;".to_vec(), b"SV;".to_vec()]
        );
        assert_eq!(
            query_bytes(CatCommand::ModeB),
            vec![b"SV;".to_vec(), b"MD0;".to_vec(), b"SV;".to_vec()]
        );
        // Only the middle frame decodes.
        let frames = Ft991Codec.encode_query(CatCommand::ModeB).unwrap();
        assert_eq!(frames[0].role, FrameRole::Ack);
        assert_eq!(frames[1].role, FrameRole::Reply);
        assert_eq!(frames[2].role, FrameRole::Ack);
    }

    #[test]
    fn ptt_set() {
        assert_eq!(set_bytes(CatCommand::Ptt, &["ON"]), vec![b"TX1;".to_vec()]);
        assert_eq!(set_bytes(CatCommand::Ptt, &["OFF"]), vec![b"TX0;".to_vec()]);
    }

    #[test]
    fn split_set_and_decode() {
        assert_eq!(set_bytes(CatCommand::Split, &["ON"]), vec![b"FT3;".to_vec()]);
        assert_eq!(
            set_bytes(CatCommand::Split, &["OFF"]),
            vec![b"FT2;".to_vec()]
        );
        assert_eq!(
            Ft991Codec.decode_reply(CatCommand::Split, b"FT1;").unwrap(),
            "ON"
        );
        assert_eq!(
            Ft991Codec.decode_reply(CatCommand::Split, b"FT0;").unwrap(),
            "OFF"
        );
    }

    #[test]
    fn tone_off_is_single_frame() {
        assert_eq!(set_bytes(CatCommand::Tone, &["OFF"]), vec![b"CT00;".to_vec()]);
    }

    #[test]
    fn tone_enc_dec_write_mode_then_code() {
        assert_eq!(
            set_bytes(CatCommand::Tone, &["ENC", "1318"]),
            vec![b"CT02;".to_vec(), b"CN00020;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::Tone, &["DEC", "670"]),
            vec![b"CT01;".to_vec(), b"CN00000;".to_vec()]
        );
    }

    #[test]
    fn tone_requires_standard_frequency() {
        assert!(Ft991Codec.encode_set(CatCommand::Tone, &["ENC"]).is_err());
        assert!(Ft991Codec
            .encode_set(CatCommand::Tone, &["ENC", "1234"])
            .is_err());
    }

    #[test]
    fn if_shift_format() {
        assert_eq!(
            set_bytes(CatCommand::IfShift, &["100"]),
            vec![b"IS0+0100;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::IfShift, &["-1000"]),
            vec![b"IS0-1000;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::IfShift, &["0"]),
            vec![b"IS0+0000;".to_vec()]
        );
        assert!(Ft991Codec
            .encode_set(CatCommand::IfShift, &["1001"])
            .is_err());
    }

    #[test]
    fn if_width_and_narrow() {
        assert_eq!(
            set_bytes(CatCommand::IfWidth, &["7"]),
            vec![b"SH007;".to_vec()]
        );
        assert!(Ft991Codec.encode_set(CatCommand::IfWidth, &["22"]).is_err());
        assert_eq!(
            set_bytes(CatCommand::IfNarrow, &["ON"]),
            vec![b"NA01;".to_vec()]
        );
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::IfNarrow, b"NA01;")
                .unwrap(),
            "ON"
        );
    }

    #[test]
    fn power_range() {
        assert_eq!(set_bytes(CatCommand::Power, &["100"]), vec![b"PC100;".to_vec()]);
        assert_eq!(set_bytes(CatCommand::Power, &["5"]), vec![b"PC005;".to_vec()]);
        // Below the rig's 5 watt floor.
        assert!(Ft991Codec.encode_set(CatCommand::Power, &["4"]).is_err());
        assert!(Ft991Codec.encode_set(CatCommand::Power, &["101"]).is_err());
    }

    #[test]
    fn monitor_query_decodes_both_replies() {
        assert_eq!(
            query_bytes(CatCommand::Monitor),
            vec![b"ML0;".to_vec(), b"ML1;".to_vec()]
        );
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::Monitor, b"ML0001;")
                .unwrap(),
            "ON"
        );
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::Monitor, b"ML1050;")
                .unwrap(),
            "050"
        );
    }

    #[test]
    fn monitor_set_with_level() {
        assert_eq!(
            set_bytes(CatCommand::Monitor, &["ON", "50"]),
            vec![b"ML0001;".to_vec(), b"ML1050;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::Monitor, &["OFF"]),
            vec![b"ML0000;".to_vec()]
        );
    }

    #[test]
    fn speech_query_and_set() {
        assert_eq!(
            query_bytes(CatCommand::Speech),
            vec![b"PR0;".to_vec(), b"PL;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::Speech, &["ON", "25"]),
            vec![b"PR01;".to_vec(), b"PL025;".to_vec()]
        );
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::Speech, b"PL025;")
                .unwrap(),
            "025"
        );
    }

    #[test]
    fn date_and_time() {
        assert_eq!(
            set_bytes(CatCommand::Date, &["20260823"]),
            vec![b"DT020260823;".to_vec()]
        );
        assert_eq!(
            set_bytes(CatCommand::Time, &["134500"]),
            vec![b"DT1134500;".to_vec()]
        );
        assert!(Ft991Codec.encode_set(CatCommand::Date, &["2026"]).is_err());
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::Date, b"DT020260823;")
                .unwrap(),
            "20260823"
        );
        assert_eq!(
            Ft991Codec
                .decode_reply(CatCommand::Time, b"DT1134500;")
                .unwrap(),
            "134500"
        );
    }

    #[test]
    fn garbled_reply_is_an_error_not_a_panic() {
        // A multibyte character where the field boundary falls inside it.
        assert!(Ft991Codec
            .decode_reply(CatCommand::Date, "DT01234567é;".as_bytes())
            .is_err());
        assert!(Ft991Codec
            .decode_reply(CatCommand::Power, "PC12é;".as_bytes())
            .is_err());
    }

    #[test]
    fn ack_rules() {
        // Silence is success, ?; is rejection, echo is tolerated.
        assert!(Ft991Codec.check_ack(CatCommand::Freq, b"").is_ok());
        assert!(Ft991Codec.check_ack(CatCommand::Freq, b"?;").is_err());
        assert!(Ft991Codec
            .check_ack(CatCommand::Freq, b"FA014074000;")
            .is_ok());
    }

    #[test]
    fn unsupported_commands_rejected() {
        assert!(Ft991Codec
            .encode_set(CatCommand::RptOffset, &["600000"])
            .is_err());
        assert!(Ft991Codec.encode_set(CatCommand::Rit, &["ON"]).is_err());
        assert!(Ft991Codec.encode_query(CatCommand::RxStatus).is_err());
        assert!(Ft991Codec.encode_query(CatCommand::Tone).is_err());
    }
}
