//! rigcat-ft991: Yaesu FT-991/FT-991A CAT support for rigcat.
//!
//! The FT-991 speaks semicolon-terminated ASCII CAT over its USB virtual
//! COM port. This crate provides [`Ft991Codec`], the translation between
//! the generic command vocabulary and that protocol, and [`Ft991Builder`]
//! for constructing a ready-to-use session.
//!
//! # Example
//!
//! ```no_run
//! use rigcat_ft991::Ft991Builder;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! let session = Ft991Builder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//!
//! session.execute("FREQ", &["14074000"]).await;
//! session.execute("MODE", &["DATA-USB"]).await;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod codec;
pub mod protocol;
pub mod tones;

pub use builder::Ft991Builder;
pub use codec::Ft991Codec;
