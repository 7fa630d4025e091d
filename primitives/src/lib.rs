//! `valhost-primitives` — shared vocabulary for the valhost guest boundary.
//!
//! This crate defines the types both sides of the ABI agree on: the
//! packed `(offset, length)` descriptor encoding, the severity level
//! alphabet for guest logging, the names of the required exports, and
//! the `ProtocolViolation` error raised when a guest hands the host a
//! value that escapes the shared memory region.
//!
//! See ABI.md for the normative boundary description.

pub mod abi;
pub mod descriptor;
pub mod error;
pub mod level;

// Re-export commonly used types at the crate root.
pub use descriptor::Descriptor;
pub use error::ProtocolViolation;
pub use level::LogLevel;
