//! `valhost-harness` — wasmtime host harness for untrusted validation modules.
//!
//! This crate loads a validation module, resolves its required exports,
//! and drives one computation: write a block of input bytes into the
//! guest's shared memory at its heap base, call `validate_block`, and
//! copy the result range back out. It enforces:
//!
//! - **Symbol resolution:** All four required exports checked with exact
//!   types before any guest code runs
//! - **Bounds checking:** Every descriptor the guest hands back is
//!   validated against the current memory size
//! - **Fuel metering:** Instruction-level metering so a looping guest
//!   surfaces as an error instead of blocking forever
//! - **Logging bridge:** The `env::ext_logging_log_version_1` import,
//!   decoded defensively and delivered to an injectable `LogSink`
//!
//! The primary entry points are [`GuestModule::new`] and
//! [`GuestInstance::validate`]. See ABI.md for the boundary contract.

pub mod config;
pub mod error;
pub mod linker;
pub mod logging;
pub mod memory;
pub mod runtime;
pub mod validation;

pub use config::HostConfig;
pub use error::HostError;
pub use logging::{LogRecord, LogSink, MemSink, StdoutSink};
pub use runtime::{GuestInstance, GuestModule};
