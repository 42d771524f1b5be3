//! Five-byte binary CAT frames and BCD helpers for the FT-817.
//!
//! Every FT-817 command is exactly five bytes: four parameter bytes
//! followed by an opcode. Numeric parameters are packed BCD, two decimal
//! digits per byte, most significant digit first. Replies are either one
//! acknowledgement byte or a five-byte frequency+mode frame; there is no
//! framing byte or checksum.

use rigcat_core::error::{Error, Result};

/// Length of every command frame and of the frequency/mode reply.
pub const FRAME_LEN: usize = 5;

/// Set the active VFO frequency (8 BCD digits at 10 Hz resolution).
pub const OP_SET_FREQ: u8 = 0x01;
/// Split mode on.
pub const OP_SPLIT_ON: u8 = 0x02;
/// Read the active VFO frequency and mode (5-byte reply).
pub const OP_READ_FREQ_MODE: u8 = 0x03;
/// Clarifier (RIT) on.
pub const OP_RIT_ON: u8 = 0x05;
/// Set the operating mode (code in P1).
pub const OP_SET_MODE: u8 = 0x07;
/// Key the transmitter.
pub const OP_PTT_ON: u8 = 0x08;
/// Repeater shift direction (direction in P1).
pub const OP_RPT_SHIFT: u8 = 0x09;
/// CTCSS encoder/decoder mode (mode in P1).
pub const OP_TONE_MODE: u8 = 0x0A;
/// CTCSS tone frequency (4 BCD digits, Hz x 10).
pub const OP_TONE_FREQ: u8 = 0x0B;
/// Toggle between VFO-A and VFO-B.
pub const OP_VFO_TOGGLE: u8 = 0x81;
/// Split mode off.
pub const OP_SPLIT_OFF: u8 = 0x82;
/// Clarifier (RIT) off.
pub const OP_RIT_OFF: u8 = 0x85;
/// Unkey the transmitter.
pub const OP_PTT_OFF: u8 = 0x88;
/// Read the receiver status byte.
pub const OP_READ_RX_STATUS: u8 = 0xE7;
/// Set the clarifier offset (sign in P1, 4 BCD digits in P3/P4).
pub const OP_RIT_FREQ: u8 = 0xF5;
/// Read the transmitter status byte.
pub const OP_READ_TX_STATUS: u8 = 0xF7;
/// Repeater offset (8 BCD digits of Hz).
pub const OP_RPT_OFFSET: u8 = 0xF9;

/// Assemble a five-byte command frame.
pub fn command(p1: u8, p2: u8, p3: u8, p4: u8, opcode: u8) -> Vec<u8> {
    vec![p1, p2, p3, p4, opcode]
}

/// Pack `value` into `digits` BCD digits, most significant first.
///
/// `digits` must be even and `value` must fit; callers range-check first.
pub fn to_bcd(mut value: u64, digits: usize) -> Vec<u8> {
    let mut out = vec![0u8; digits / 2];
    for i in (0..digits).rev() {
        let d = (value % 10) as u8;
        value /= 10;
        if i % 2 == 0 {
            out[i / 2] |= d << 4;
        } else {
            out[i / 2] |= d;
        }
    }
    out
}

/// Unpack packed BCD bytes into a number, rejecting non-decimal nibbles.
pub fn from_bcd(bytes: &[u8]) -> Result<u64> {
    let mut value: u64 = 0;
    for b in bytes {
        let hi = b >> 4;
        let lo = b & 0x0F;
        if hi > 9 || lo > 9 {
            return Err(Error::Protocol(format!(
                "invalid BCD byte in reply: {b:02X}"
            )));
        }
        value = value * 100 + (hi as u64) * 10 + lo as u64;
    }
    Ok(value)
}
