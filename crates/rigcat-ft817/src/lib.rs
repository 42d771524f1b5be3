//! rigcat-ft817: Yaesu FT-817 CAT support for rigcat.
//!
//! The FT-817 speaks the classic Yaesu five-byte binary CAT protocol with
//! packed-BCD numerics. This crate provides [`Ft817Codec`], the
//! translation between the generic command vocabulary and that protocol,
//! and [`Ft817Builder`] for constructing a ready-to-use session.
//!
//! # Example
//!
//! ```no_run
//! use rigcat_ft817::Ft817Builder;
//!
//! # async fn example() -> rigcat_core::Result<()> {
//! let session = Ft817Builder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//!
//! session.execute("FREQ", &["14074000"]).await;
//! session.execute("MODE", &["USB"]).await;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod codec;
pub mod frame;

pub use builder::Ft817Builder;
pub use codec::Ft817Codec;
