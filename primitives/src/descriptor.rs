//! Packed `(offset, length)` descriptors — the only compound value
//! that crosses the guest boundary.
//!
//! A descriptor names a byte range inside the shared memory region as
//! a single `u64`: length in the high 32 bits, offset in the low 32
//! (ABI.md §3). Decoding is infallible; *dereferencing* is not — every
//! range must pass [`Descriptor::checked_range`] against the current
//! region size before the host touches memory.

use core::ops::Range;

use crate::error::ProtocolViolation;

/// A byte range inside the guest's shared memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    offset: u32,
    len: u32,
}

impl Descriptor {
    /// Create a descriptor from an offset and a length in bytes.
    pub fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Offset of the range from the start of the region.
    pub fn offset(self) -> u32 {
        self.offset
    }

    /// Length of the range in bytes.
    pub fn len(self) -> u32 {
        self.len
    }

    /// Returns true for a zero-length range.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Encode as the single machine word passed across the boundary.
    pub fn pack(self) -> u64 {
        (u64::from(self.len) << 32) | u64::from(self.offset)
    }

    /// Decode a packed descriptor. Infallible: any `u64` names *some*
    /// range; whether that range exists is decided by `checked_range`.
    pub fn unpack(raw: u64) -> Self {
        Self {
            offset: raw as u32,
            len: (raw >> 32) as u32,
        }
    }

    /// Resolve this descriptor against a region of `region_len` bytes.
    ///
    /// Returns the index range to read or write, or
    /// `Err(DescriptorOutOfBounds)` if `offset + len` exceeds the
    /// region. The sum is computed in 64 bits, so `u32::MAX` values
    /// cannot wrap.
    pub fn checked_range(self, region_len: usize) -> Result<Range<usize>, ProtocolViolation> {
        let end = u64::from(self.offset) + u64::from(self.len);
        if end > region_len as u64 {
            return Err(ProtocolViolation::DescriptorOutOfBounds {
                offset: self.offset,
                len: self.len,
                region: region_len,
            });
        }
        Ok(self.offset as usize..end as usize)
    }
}
