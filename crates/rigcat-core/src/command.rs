//! The generic command vocabulary.
//!
//! Every transceiver is driven through the same fixed set of ASCII command
//! names. [`CatCommand`] enumerates that set; the session parses incoming
//! names (case-insensitively) against it and rejects anything else before
//! any I/O happens. Per-command arity limits live here too, so the
//! dispatcher can validate argument counts generically while codecs only
//! validate values.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A command name from the generic, transceiver-independent vocabulary.
///
/// Codecs translate these into model-native requests; a codec that has no
/// encoding for a given command rejects it with
/// [`Error::Unsupported`](crate::error::Error::Unsupported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatCommand {
    /// Frequency of the model's default VFO (model-dependent: active VFO
    /// or VFO-A).
    Freq,
    /// VFO-A frequency.
    FreqA,
    /// VFO-B frequency.
    FreqB,
    /// Operating mode of the model's default VFO.
    Mode,
    /// VFO-A operating mode.
    ModeA,
    /// VFO-B operating mode.
    ModeB,
    /// Push-to-talk state. Routed through the PTT controller, never the
    /// generic codec path.
    Ptt,
    /// Push-to-talk method selection. Pure session state, no rig I/O.
    PttMethod,
    /// Split operation (RX on VFO-A, TX on VFO-B).
    Split,
    /// Repeater offset in Hz (signed; zero selects simplex).
    RptOffset,
    /// CTCSS tone mode and frequency (Hz x 10).
    Tone,
    /// Rig date (YYYYMMDD).
    Date,
    /// Rig UTC time (HHMMSS).
    Time,
    /// Dial lock.
    Lock,
    /// Monitor on/off and level (0-100).
    Monitor,
    /// Noise blanker.
    Nb,
    /// Noise reduction.
    Nr,
    /// RF power level (0-100).
    Power,
    /// Preamplifier.
    Preamp,
    /// Receiver incremental tuning (clarifier) on/off.
    Rit,
    /// RIT offset frequency in Hz.
    RitFreq,
    /// Speech processor on/off and level (0-100).
    Speech,
    /// Swap VFO-A and VFO-B.
    SwapVfo,
    /// VFO or memory tuning mode.
    VfoMem,
    /// Raw receiver status byte (model-specific).
    RxStatus,
    /// Raw transmitter status byte (model-specific).
    TxStatus,
    /// IF narrow/wide filter selection (model-specific).
    IfNarrow,
    /// IF shift in Hz (model-specific).
    IfShift,
    /// IF width table index (model-specific).
    IfWidth,
    /// Raw ASCII passthrough: send the literal argument text.
    Ascii,
    /// Raw binary passthrough: send a sequence of 2-digit hex octets.
    Hex,
}

impl CatCommand {
    /// Canonical uppercase name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            CatCommand::Freq => "FREQ",
            CatCommand::FreqA => "FREQA",
            CatCommand::FreqB => "FREQB",
            CatCommand::Mode => "MODE",
            CatCommand::ModeA => "MODEA",
            CatCommand::ModeB => "MODEB",
            CatCommand::Ptt => "PTT",
            CatCommand::PttMethod => "PTT-METHOD",
            CatCommand::Split => "SPLIT",
            CatCommand::RptOffset => "RPT-OFFSET",
            CatCommand::Tone => "TONE",
            CatCommand::Date => "DATE",
            CatCommand::Time => "TIME",
            CatCommand::Lock => "LOCK",
            CatCommand::Monitor => "MONITOR",
            CatCommand::Nb => "NB",
            CatCommand::Nr => "NR",
            CatCommand::Power => "POWER",
            CatCommand::Preamp => "PREAMP",
            CatCommand::Rit => "RIT",
            CatCommand::RitFreq => "RIT-FREQ",
            CatCommand::Speech => "SPEECH",
            CatCommand::SwapVfo => "SWAPVFO",
            CatCommand::VfoMem => "VFOMEM",
            CatCommand::RxStatus => "RX-STATUS",
            CatCommand::TxStatus => "TX-STATUS",
            CatCommand::IfNarrow => "IF-NARROW",
            CatCommand::IfShift => "IF-SHIFT",
            CatCommand::IfWidth => "IF-WIDTH",
            CatCommand::Ascii => "ASCII",
            CatCommand::Hex => "HEX",
        }
    }

    /// Inclusive (min, max) argument counts accepted by this command.
    ///
    /// Value ranges and units are codec concerns; only the shape is
    /// validated here.
    pub fn arity(&self) -> (usize, usize) {
        match self {
            CatCommand::Freq
            | CatCommand::FreqA
            | CatCommand::FreqB
            | CatCommand::Mode
            | CatCommand::ModeA
            | CatCommand::ModeB
            | CatCommand::Ptt
            | CatCommand::PttMethod
            | CatCommand::Split
            | CatCommand::Date
            | CatCommand::Time
            | CatCommand::Lock
            | CatCommand::Nb
            | CatCommand::Nr
            | CatCommand::Power
            | CatCommand::Preamp
            | CatCommand::VfoMem
            | CatCommand::IfNarrow
            | CatCommand::IfShift
            | CatCommand::IfWidth => (0, 1),
            CatCommand::RptOffset | CatCommand::Rit | CatCommand::RitFreq => (1, 1),
            CatCommand::Tone => (1, 2),
            CatCommand::Monitor | CatCommand::Speech => (0, 2),
            CatCommand::SwapVfo | CatCommand::RxStatus | CatCommand::TxStatus => (0, 0),
            CatCommand::Ascii | CatCommand::Hex => (1, usize::MAX),
        }
    }

    /// Validate an argument count against this command's arity.
    pub fn check_arity(&self, n_args: usize) -> crate::error::Result<()> {
        let (min, max) = self.arity();
        if n_args < min || n_args > max {
            return Err(Error::InvalidParameter(format!(
                "{} takes {min}..={max} arguments, got {n_args}",
                self.name()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CatCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FREQ" => Ok(CatCommand::Freq),
            "FREQA" => Ok(CatCommand::FreqA),
            "FREQB" => Ok(CatCommand::FreqB),
            "MODE" => Ok(CatCommand::Mode),
            "MODEA" => Ok(CatCommand::ModeA),
            "MODEB" => Ok(CatCommand::ModeB),
            "PTT" => Ok(CatCommand::Ptt),
            "PTT-METHOD" => Ok(CatCommand::PttMethod),
            "SPLIT" => Ok(CatCommand::Split),
            "RPT-OFFSET" => Ok(CatCommand::RptOffset),
            "TONE" => Ok(CatCommand::Tone),
            "DATE" => Ok(CatCommand::Date),
            "TIME" => Ok(CatCommand::Time),
            "LOCK" => Ok(CatCommand::Lock),
            "MONITOR" => Ok(CatCommand::Monitor),
            "NB" => Ok(CatCommand::Nb),
            "NR" => Ok(CatCommand::Nr),
            "POWER" => Ok(CatCommand::Power),
            "PREAMP" => Ok(CatCommand::Preamp),
            // CLAR is the Yaesu front-panel name for the same control.
            "RIT" | "CLAR" => Ok(CatCommand::Rit),
            "RIT-FREQ" | "CLAR-FREQ" => Ok(CatCommand::RitFreq),
            "SPEECH" => Ok(CatCommand::Speech),
            "SWAPVFO" => Ok(CatCommand::SwapVfo),
            "VFOMEM" => Ok(CatCommand::VfoMem),
            "RX-STATUS" => Ok(CatCommand::RxStatus),
            "TX-STATUS" => Ok(CatCommand::TxStatus),
            "IF-NARROW" => Ok(CatCommand::IfNarrow),
            "IF-SHIFT" => Ok(CatCommand::IfShift),
            "IF-WIDTH" => Ok(CatCommand::IfWidth),
            "ASCII" => Ok(CatCommand::Ascii),
            "HEX" => Ok(CatCommand::Hex),
            _ => Err(Error::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("freq".parse::<CatCommand>().unwrap(), CatCommand::Freq);
        assert_eq!("Mode".parse::<CatCommand>().unwrap(), CatCommand::Mode);
        assert_eq!(
            "ptt-method".parse::<CatCommand>().unwrap(),
            CatCommand::PttMethod
        );
    }

    #[test]
    fn parse_clar_alias() {
        assert_eq!("CLAR".parse::<CatCommand>().unwrap(), CatCommand::Rit);
        assert_eq!(
            "clar-freq".parse::<CatCommand>().unwrap(),
            CatCommand::RitFreq
        );
    }

    #[test]
    fn parse_unknown_rejected() {
        let err = "BOGUS".parse::<CatCommand>().unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(_)));
    }

    #[test]
    fn name_round_trip() {
        let cmds = [
            CatCommand::Freq,
            CatCommand::FreqB,
            CatCommand::PttMethod,
            CatCommand::RptOffset,
            CatCommand::Tone,
            CatCommand::SwapVfo,
            CatCommand::RxStatus,
            CatCommand::IfShift,
            CatCommand::Hex,
        ];
        for cmd in &cmds {
            let parsed: CatCommand = cmd.name().parse().expect("name should parse back");
            assert_eq!(*cmd, parsed);
        }
    }

    #[test]
    fn arity_limits() {
        assert!(CatCommand::Freq.check_arity(0).is_ok());
        assert!(CatCommand::Freq.check_arity(1).is_ok());
        assert!(CatCommand::Freq.check_arity(2).is_err());

        assert!(CatCommand::Rit.check_arity(0).is_err());
        assert!(CatCommand::Rit.check_arity(1).is_ok());

        assert!(CatCommand::Tone.check_arity(1).is_ok());
        assert!(CatCommand::Tone.check_arity(2).is_ok());
        assert!(CatCommand::Tone.check_arity(3).is_err());

        assert!(CatCommand::SwapVfo.check_arity(0).is_ok());
        assert!(CatCommand::SwapVfo.check_arity(1).is_err());

        assert!(CatCommand::Hex.check_arity(0).is_err());
        assert!(CatCommand::Hex.check_arity(7).is_ok());
    }
}
