//! rigcat-core: Core traits, command vocabulary, and session dispatcher.
//!
//! This crate defines the model-agnostic abstractions every rigcat backend
//! implements. Applications depend on these types without pulling in any
//! specific rig codec.
//!
//! # Key types
//!
//! - [`CatSession`] -- the generic command dispatcher for one connection
//! - [`CatCodec`] -- the translation contract a rig model implements
//! - [`Transport`] -- byte-level communication channel
//! - [`CatResponse`] -- the tri-state result of every command
//! - [`Error`] / [`Result`] -- error handling

pub mod codec;
pub mod command;
pub mod error;
pub mod ptt;
pub mod response;
pub mod session;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use rigcat_core::*`.
pub use codec::{CatCodec, Frame, FrameRole, ReplyFraming};
pub use command::CatCommand;
pub use error::{Error, Result};
pub use ptt::{PttAction, PttController};
pub use response::CatResponse;
pub use session::CatSession;
pub use transport::Transport;
pub use types::*;
