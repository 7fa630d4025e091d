//! Harness error types.

use valhost_primitives::ProtocolViolation;

/// Top-level error type for the harness crate.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The module cannot be read, compiled, or instantiated.
    #[error("module load error: {0}")]
    ModuleLoad(#[from] anyhow::Error),

    /// A required export is absent or has the wrong type.
    #[error("symbol resolution error: {0}")]
    SymbolResolution(String),

    /// An input or output artifact cannot be opened.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A checked guest-boundary crossing failed.
    #[error("guest protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// Host-side memory operation failed (input does not fit, heap
    /// base outside the region).
    #[error("memory error: {0}")]
    Memory(String),

    /// Fuel exhausted during guest execution.
    #[error("fuel exhausted (instruction limit)")]
    FuelExhausted,

    /// The guest trapped.
    #[error("guest trapped: {0}")]
    GuestTrapped(String),
}
