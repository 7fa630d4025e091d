//! Guest log severity levels.
//!
//! The logging bridge accepts levels `0..=6`, each mapped to one
//! symbol of a fixed alphabet (ABI.md §4). The original lookup was an
//! unchecked index; here construction is the checkpoint, so a level
//! outside the alphabet is a `ProtocolViolation` and can never fault.

use crate::error::ProtocolViolation;

/// The ordered severity alphabet. Index = level value.
pub const LEVEL_SYMBOLS: [char; 7] = ['0', '1', '2', '3', '4', '5', '6'];

/// Highest level value a guest may pass.
pub const MAX_LEVEL: u32 = 6;

/// A validated guest log severity level.
///
/// Only constructible through [`LogLevel::new`], so `symbol()` cannot
/// index out of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(u32);

impl LogLevel {
    /// Validate a raw level from the guest.
    pub fn new(raw: u32) -> Result<Self, ProtocolViolation> {
        if raw > MAX_LEVEL {
            return Err(ProtocolViolation::LevelOutOfRange(raw));
        }
        Ok(Self(raw))
    }

    /// The raw level value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// The severity symbol for this level.
    pub fn symbol(self) -> char {
        LEVEL_SYMBOLS[self.0 as usize]
    }
}
