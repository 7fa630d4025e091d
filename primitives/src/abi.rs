//! Names of the guest module's required exports and the logging import.
//!
//! These are the four symbols the loader resolves (ABI.md §2) and the
//! single host function a guest may bind (ABI.md §4). The names are
//! fixed; a module exporting anything else under them with the wrong
//! type fails symbol resolution.

/// The guest's linear memory export — the shared memory region.
pub const MEMORY_EXPORT: &str = "memory";

/// Zero-argument, no-return initialization entry point.
pub const INIT_EXPORT: &str = "init_pvf";

/// Validation entry point: `(offset: i32, length: i32) -> i64` where
/// the result is a packed descriptor.
pub const VALIDATE_EXPORT: &str = "validate_block";

/// Immutable `i32` global marking where host-supplied input is written.
pub const HEAP_BASE_EXPORT: &str = "__heap_base";

/// Import module name for host-provided functions.
pub const LOG_IMPORT_MODULE: &str = "env";

/// The logging bridge import: `(level: i32, target: i64, message: i64)`.
pub const LOG_IMPORT_NAME: &str = "ext_logging_log_version_1";
