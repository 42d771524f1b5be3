//! # rigcat
//!
//! Async CAT (Computer Aided Transceiver) control for amateur radio
//! transceivers, written in Rust.
//!
//! rigcat exposes one uniform command vocabulary across rigs that speak
//! very different wire protocols. Applications issue textual commands
//! like `FREQ`, `MODE`, or `PTT` to a [`CatSession`]; a per-model codec
//! translates them to the rig's native protocol and interprets the reply.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rigcat::ft991::Ft991Builder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Connect to an FT-991A on a USB serial port.
//!     let session = Ft991Builder::new()
//!         .serial_port("/dev/ttyUSB0")
//!         .baud_rate(38_400)
//!         .build()
//!         .await?;
//!
//!     // Read the current frequency.
//!     let freq = session.execute("FREQ", &[]).await;
//!     println!("Frequency: {}", freq);
//!
//!     // Tune to 14.074 MHz, USB data.
//!     session.execute("FREQ", &["14074000"]).await;
//!     session.execute("MODE", &["DATA-USB"]).await;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! rigcat is a workspace of focused crates; this crate re-exports them
//! behind feature flags:
//!
//! | Crate | Purpose |
//! |-------|---------|
//! | `rigcat-core` | Command vocabulary, codec and transport traits, session dispatcher |
//! | `rigcat-transport` | Serial transport with DTR/RTS control-line access |
//! | `rigcat-ft991` | Yaesu FT-991/FT-991A ASCII CAT backend |
//! | `rigcat-ft817` | Yaesu FT-817 five-byte binary CAT backend |
//! | `rigcat-test-harness` | Mock transport for testing without hardware |
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `ft991` | yes | Yaesu FT-991/FT-991A backend |
//! | `ft817` | yes | Yaesu FT-817 backend |
//!
//! ## Command Vocabulary
//!
//! Every backend accepts the same command names (case-insensitive):
//! frequency and mode per VFO, PTT keying with selectable method (CAT
//! command, DTR, or RTS), split, repeater shift and offset, CTCSS tones,
//! clarifier, and raw `ASCII`/`HEX` passthrough for anything the
//! vocabulary does not cover. Commands a rig cannot perform report
//! [`CatResponse::Error`] rather than failing the session. See
//! [`CatCommand`] for the full list.

pub use rigcat_core::*;

/// Serial transport and configuration.
///
/// Re-exported so applications can build a custom [`SerialConfig`]
/// (data bits, stop bits, parity, flow control) without depending on
/// `rigcat-transport` directly.
pub mod transport_serial {
    pub use rigcat_transport::*;
}

pub use rigcat_transport::{DataBits, FlowControl, Parity, SerialConfig, SerialTransport, StopBits};

/// Yaesu FT-991/FT-991A backend.
///
/// Provides [`Ft991Codec`](ft991::Ft991Codec) and
/// [`Ft991Builder`](ft991::Ft991Builder) for controlling the FT-991
/// family over its semicolon-terminated ASCII CAT protocol.
#[cfg(feature = "ft991")]
pub mod ft991 {
    pub use rigcat_ft991::*;
}

/// Yaesu FT-817 backend.
///
/// Provides [`Ft817Codec`](ft817::Ft817Codec) and
/// [`Ft817Builder`](ft817::Ft817Builder) for controlling the FT-817
/// over the classic five-byte binary CAT protocol.
#[cfg(feature = "ft817")]
pub mod ft817 {
    pub use rigcat_ft817::*;
}

/// Returns the names of all rig models supported by the enabled backends.
///
/// Useful for applications that present a model picker. Each backend is
/// gated behind its feature flag; only models from enabled backends are
/// included.
pub fn supported_rigs() -> Vec<&'static str> {
    let mut rigs = Vec::new();

    #[cfg(feature = "ft991")]
    rigs.push("FT-991");

    #[cfg(feature = "ft817")]
    rigs.push("FT-817");

    rigs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_rigs_lists_enabled_backends() {
        let rigs = supported_rigs();
        #[cfg(feature = "ft991")]
        assert!(rigs.contains(&"FT-991"));
        #[cfg(feature = "ft817")]
        assert!(rigs.contains(&"FT-817"));
    }
}
