//! Guest protocol violations.
//!
//! Every value the guest hands across the boundary is checked before
//! the host acts on it. A failed check is a `ProtocolViolation` — a
//! reported error, never silent memory corruption or an indexing
//! fault.

/// A guest-supplied value that escapes the ABI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    /// A packed descriptor names a range outside the shared memory
    /// region.
    #[error("descriptor [{offset}, +{len}) exceeds shared memory region of {region} bytes")]
    DescriptorOutOfBounds {
        /// Offset of the rejected range.
        offset: u32,
        /// Length of the rejected range.
        len: u32,
        /// Region size the range was checked against.
        region: usize,
    },

    /// A log level outside the severity alphabet `0..=6`.
    #[error("log level {0} outside supported range 0..=6")]
    LevelOutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ProtocolViolation::DescriptorOutOfBounds {
            offset: 10,
            len: 20,
            region: 16,
        };
        let s = format!("{}", err);
        assert!(s.contains("[10, +20)"));
        assert!(s.contains("16 bytes"));

        let s = format!("{}", ProtocolViolation::LevelOutOfRange(9));
        assert!(s.contains("level 9"));
    }
}
