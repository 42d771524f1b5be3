//! rigcat-test-harness: Mock transports and test utilities for rigcat.
//!
//! This crate provides [`MockTransport`] for deterministic unit testing of
//! codecs and the session dispatcher without requiring real radio hardware.

pub mod mock_serial;

pub use mock_serial::{MockLog, MockTransport};
