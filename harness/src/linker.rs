//! Host function registration via the wasmtime linker.
//!
//! The harness exposes exactly one host function to the guest: the
//! logging bridge `env::ext_logging_log_version_1` (ABI.md §4). The
//! bridge:
//! 1. Extracts the guest's memory from the `Caller`
//! 2. Decodes the level and both descriptors defensively
//! 3. Delivers the record to the instance's `LogSink`
//!
//! It returns nothing and never traps: a malformed logging call drops
//! the record and increments a counter instead of failing the
//! validation in progress.

use std::sync::Arc;

use wasmtime::{Caller, Linker, Memory};

use valhost_primitives::abi;

use crate::error::HostError;
use crate::logging::{self, LogSink};

/// Per-instance host context held in the wasmtime `Store`.
pub struct HostCtx {
    /// Destination for decoded guest log records.
    pub sink: Arc<dyn LogSink>,
    /// Logging calls rejected as protocol violations and dropped.
    pub dropped_records: u32,
}

impl HostCtx {
    /// Create a context delivering records to `sink`.
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            dropped_records: 0,
        }
    }
}

/// Get the guest's exported memory from a Caller.
fn get_memory(caller: &mut Caller<'_, HostCtx>) -> Option<Memory> {
    caller
        .get_export(abi::MEMORY_EXPORT)
        .and_then(|e| e.into_memory())
}

/// Register the logging bridge with the linker.
pub fn register_logging(linker: &mut Linker<HostCtx>) -> Result<(), HostError> {
    linker.func_wrap(
        abi::LOG_IMPORT_MODULE,
        abi::LOG_IMPORT_NAME,
        |mut caller: Caller<'_, HostCtx>, level: u32, target: u64, message: u64| {
            let mem = match get_memory(&mut caller) {
                Some(m) => m,
                None => {
                    caller.data_mut().dropped_records += 1;
                    return;
                }
            };

            let record = {
                let data = mem.data(&caller);
                logging::decode_record(data, level, target, message)
            };

            match record {
                Ok(record) => caller.data().sink.emit(&record),
                Err(_) => caller.data_mut().dropped_records += 1,
            }
        },
    )?;
    Ok(())
}
