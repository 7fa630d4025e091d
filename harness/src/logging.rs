//! Guest log decoding and emission.
//!
//! The guest calls `env::ext_logging_log_version_1` with a severity
//! level and two packed descriptors referencing text inside shared
//! memory (ABI.md §4). This module decodes those arguments into an
//! owned [`LogRecord`] and hands it to a [`LogSink`]. Decoding is
//! defensive: a bad level or descriptor yields a `ProtocolViolation`
//! and the record is dropped by the caller; a logging call never fails
//! the surrounding validation.

use std::sync::Mutex;

use valhost_primitives::{Descriptor, LogLevel, ProtocolViolation};

use crate::memory;

/// One decoded guest log line.
///
/// Target and message text are length-delimited in shared memory, not
/// guaranteed valid UTF-8; they are decoded lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Validated severity level.
    pub level: LogLevel,
    /// Component name, rendered in brackets.
    pub target: String,
    /// The log message.
    pub message: String,
}

impl LogRecord {
    /// Render the record as one output line: `L<symbol>: [<target>] <message>`.
    pub fn render(&self) -> String {
        format!("L{}: [{}] {}", self.level.symbol(), self.target, self.message)
    }
}

/// Decode the raw arguments of a guest logging call against the
/// current shared memory contents.
pub fn decode_record(
    mem: &[u8],
    level: u32,
    target: u64,
    message: u64,
) -> Result<LogRecord, ProtocolViolation> {
    let level = LogLevel::new(level)?;
    let target = memory::read_range(mem, Descriptor::unpack(target))?;
    let message = memory::read_range(mem, Descriptor::unpack(message))?;
    Ok(LogRecord {
        level,
        target: String::from_utf8_lossy(&target).into_owned(),
        message: String::from_utf8_lossy(&message).into_owned(),
    })
}

/// Destination for decoded guest log records.
///
/// Injected into each instance so the bridge has no hidden global
/// output. Implementations must not panic: a logging call must never
/// raise control back into the guest.
pub trait LogSink: Send + Sync {
    /// Deliver one record.
    fn emit(&self, record: &LogRecord);
}

/// Sink that writes one rendered line per record to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, record: &LogRecord) {
        println!("{}", record.render());
    }
}

/// In-memory sink for testing.
///
/// Collects records so tests can assert on what the guest logged.
#[derive(Debug, Default)]
pub struct MemSink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records received so far.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("sink lock poisoned").clone()
    }

    /// Rendered lines for all records received so far.
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(LogRecord::render).collect()
    }
}

impl LogSink for MemSink {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().expect("sink lock poisoned").push(record.clone());
    }
}
