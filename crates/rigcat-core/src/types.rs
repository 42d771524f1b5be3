//! Core types used throughout rigcat.
//!
//! These are the closed, statically-defined value sets shared by every
//! codec: operating modes, PTT method/state, CTCSS tone modes, and VFO
//! identifiers. All of them are fixed enumerated types so that an
//! unrecognized value is a construction-time error rather than a silent
//! pass-through.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Operating mode of the transceiver.
///
/// Covers the full generic vocabulary; a given codec supports a subset and
/// rejects the rest at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Lower sideband voice.
    LSB,
    /// Upper sideband voice.
    USB,
    /// CW (morse), upper sideband offset.
    CW,
    /// CW reverse (lower sideband offset).
    CWR,
    /// Amplitude modulation.
    AM,
    /// Narrow AM.
    AMN,
    /// Frequency modulation.
    FM,
    /// Narrow FM.
    FMN,
    /// Wide FM (broadcast receive).
    FMW,
    /// Yaesu C4FM digital voice.
    C4FM,
    /// Radio teletype (FSK).
    RTTY,
    /// Radio teletype reverse.
    RTTYR,
    /// Generic digital mode (older rigs that don't distinguish sub-modes).
    DIGI,
    /// Packet mode.
    PKT,
    /// Generic data mode.
    DATA,
    /// Data mode using upper sideband (AFSK, sound-card digital).
    DataUSB,
    /// Data mode using lower sideband.
    DataLSB,
    /// Data mode using FM.
    DataFM,
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatingMode::LSB => "LSB",
            OperatingMode::USB => "USB",
            OperatingMode::CW => "CW",
            OperatingMode::CWR => "CW-R",
            OperatingMode::AM => "AM",
            OperatingMode::AMN => "AM-N",
            OperatingMode::FM => "FM",
            OperatingMode::FMN => "FM-N",
            OperatingMode::FMW => "FM-W",
            OperatingMode::C4FM => "C4FM",
            OperatingMode::RTTY => "RTTY",
            OperatingMode::RTTYR => "RTTY-R",
            OperatingMode::DIGI => "DIGI",
            OperatingMode::PKT => "PKT",
            OperatingMode::DATA => "DATA",
            OperatingMode::DataUSB => "DATA-USB",
            OperatingMode::DataLSB => "DATA-LSB",
            OperatingMode::DataFM => "DATA-FM",
        };
        write!(f, "{s}")
    }
}

impl FromStr for OperatingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LSB" => Ok(OperatingMode::LSB),
            "USB" => Ok(OperatingMode::USB),
            "CW" => Ok(OperatingMode::CW),
            "CW-R" | "CWR" => Ok(OperatingMode::CWR),
            "AM" => Ok(OperatingMode::AM),
            "AM-N" | "AMN" => Ok(OperatingMode::AMN),
            "FM" => Ok(OperatingMode::FM),
            "FM-N" | "FMN" => Ok(OperatingMode::FMN),
            "FM-W" | "FMW" | "WFM" => Ok(OperatingMode::FMW),
            "C4FM" => Ok(OperatingMode::C4FM),
            "RTTY" => Ok(OperatingMode::RTTY),
            "RTTY-R" | "RTTYR" => Ok(OperatingMode::RTTYR),
            "DIGI" => Ok(OperatingMode::DIGI),
            "PKT" => Ok(OperatingMode::PKT),
            "DATA" => Ok(OperatingMode::DATA),
            "DATA-USB" | "DATAUSB" => Ok(OperatingMode::DataUSB),
            "DATA-LSB" | "DATALSB" => Ok(OperatingMode::DataLSB),
            "DATA-FM" | "DATAFM" => Ok(OperatingMode::DataFM),
            _ => Err(Error::InvalidParameter(format!("unknown mode: {s}"))),
        }
    }
}

/// How PTT (push-to-talk) is activated.
///
/// Exactly one method is active at a time per session. `None` disables
/// transmit control entirely; `Dtr`/`Rts` toggle a serial control line
/// directly, bypassing the rig's command protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PttMethod {
    /// PTT disabled (default): PTT commands are wire-silent no-ops.
    #[default]
    None,
    /// PTT via an in-band CAT command.
    Cat,
    /// PTT via the DTR serial line.
    Dtr,
    /// PTT via the RTS serial line.
    Rts,
}

impl fmt::Display for PttMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PttMethod::None => "NONE",
            PttMethod::Cat => "CAT",
            PttMethod::Dtr => "DTR",
            PttMethod::Rts => "RTS",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PttMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NONE" => Ok(PttMethod::None),
            "CAT" => Ok(PttMethod::Cat),
            "DTR" => Ok(PttMethod::Dtr),
            "RTS" => Ok(PttMethod::Rts),
            _ => Err(Error::InvalidParameter(format!("unknown PTT method: {s}"))),
        }
    }
}

/// Logical transmit/receive state, independent of the PTT method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PttState {
    /// Receiving.
    #[default]
    Off,
    /// Transmitting.
    On,
}

impl fmt::Display for PttState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PttState::Off => write!(f, "OFF"),
            PttState::On => write!(f, "ON"),
        }
    }
}

impl FromStr for PttState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(PttState::Off),
            "ON" => Ok(PttState::On),
            _ => Err(Error::InvalidParameter(format!("unknown PTT state: {s}"))),
        }
    }
}

/// Serial control line used for out-of-band PTT keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlLine {
    /// Data Terminal Ready.
    Dtr,
    /// Request To Send.
    Rts,
}

impl fmt::Display for ControlLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlLine::Dtr => write!(f, "DTR"),
            ControlLine::Rts => write!(f, "RTS"),
        }
    }
}

/// CTCSS tone encoder/decoder mode for the `TONE` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneMode {
    /// Encoder/decoder off: no tone on transmit or receive.
    Off,
    /// Encoder on: send tone on transmit.
    Enc,
    /// Decoder on: tone on transmit, squelch opens only on received tone.
    Dec,
}

impl fmt::Display for ToneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneMode::Off => write!(f, "OFF"),
            ToneMode::Enc => write!(f, "ENC"),
            ToneMode::Dec => write!(f, "DEC"),
        }
    }
}

impl FromStr for ToneMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(ToneMode::Off),
            "ENC" => Ok(ToneMode::Enc),
            "DEC" => Ok(ToneMode::Dec),
            _ => Err(Error::InvalidParameter(format!("unknown tone mode: {s}"))),
        }
    }
}

/// VFO identifier on rigs with an A/B pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vfo {
    /// VFO A.
    A,
    /// VFO B.
    B,
}

impl fmt::Display for Vfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vfo::A => write!(f, "A"),
            Vfo::B => write!(f, "B"),
        }
    }
}

/// Parse an `OFF`/`ON` argument into a boolean.
///
/// Shared by the dispatcher and the codecs; anything other than the two
/// literal tokens (case-insensitive) is an invalid parameter.
pub fn parse_onoff(s: &str) -> crate::error::Result<bool> {
    match s.to_uppercase().as_str() {
        "OFF" => Ok(false),
        "ON" => Ok(true),
        _ => Err(Error::InvalidParameter(format!(
            "expected OFF or ON, got: {s}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display_round_trip() {
        let modes = [
            OperatingMode::LSB,
            OperatingMode::USB,
            OperatingMode::CW,
            OperatingMode::CWR,
            OperatingMode::AM,
            OperatingMode::AMN,
            OperatingMode::FM,
            OperatingMode::FMN,
            OperatingMode::FMW,
            OperatingMode::C4FM,
            OperatingMode::RTTY,
            OperatingMode::RTTYR,
            OperatingMode::DIGI,
            OperatingMode::PKT,
            OperatingMode::DATA,
            OperatingMode::DataUSB,
            OperatingMode::DataLSB,
            OperatingMode::DataFM,
        ];
        for mode in &modes {
            let s = mode.to_string();
            let parsed: OperatingMode = s.parse().expect("should parse back");
            assert_eq!(*mode, parsed, "round-trip failed for {mode}");
        }
    }

    #[test]
    fn mode_from_str_case_insensitive() {
        assert_eq!("usb".parse::<OperatingMode>().unwrap(), OperatingMode::USB);
        assert_eq!("Cw-r".parse::<OperatingMode>().unwrap(), OperatingMode::CWR);
        assert_eq!(
            "data-usb".parse::<OperatingMode>().unwrap(),
            OperatingMode::DataUSB
        );
    }

    #[test]
    fn mode_from_str_invalid() {
        assert!("SSTV".parse::<OperatingMode>().is_err());
    }

    #[test]
    fn ptt_method_default_is_none() {
        assert_eq!(PttMethod::default(), PttMethod::None);
    }

    #[test]
    fn ptt_method_parse() {
        assert_eq!("cat".parse::<PttMethod>().unwrap(), PttMethod::Cat);
        assert_eq!("DTR".parse::<PttMethod>().unwrap(), PttMethod::Dtr);
        assert_eq!("Rts".parse::<PttMethod>().unwrap(), PttMethod::Rts);
        assert_eq!("none".parse::<PttMethod>().unwrap(), PttMethod::None);
        assert!("VOX".parse::<PttMethod>().is_err());
    }

    #[test]
    fn ptt_state_parse_and_display() {
        assert_eq!("on".parse::<PttState>().unwrap(), PttState::On);
        assert_eq!("OFF".parse::<PttState>().unwrap(), PttState::Off);
        assert_eq!(PttState::On.to_string(), "ON");
        assert_eq!(PttState::default(), PttState::Off);
    }

    #[test]
    fn tone_mode_parse() {
        assert_eq!("enc".parse::<ToneMode>().unwrap(), ToneMode::Enc);
        assert_eq!("DEC".parse::<ToneMode>().unwrap(), ToneMode::Dec);
        assert!("BOTH".parse::<ToneMode>().is_err());
    }

    #[test]
    fn parse_onoff_valid() {
        assert!(parse_onoff("ON").unwrap());
        assert!(!parse_onoff("off").unwrap());
    }

    #[test]
    fn parse_onoff_invalid() {
        assert!(parse_onoff("MAYBE").is_err());
        assert!(parse_onoff("").is_err());
    }
}
