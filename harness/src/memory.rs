//! Safe shared-memory read/write helpers with bounds checking.
//!
//! All access to the guest's linear memory goes through these
//! functions. Ranges are validated against the region size before any
//! byte is touched; an out-of-bounds range returns
//! `ProtocolViolation::DescriptorOutOfBounds` (ABI.md §1).

use valhost_primitives::{Descriptor, ProtocolViolation};

/// Copy the byte range named by `desc` out of the shared region.
pub fn read_range(mem: &[u8], desc: Descriptor) -> Result<Vec<u8>, ProtocolViolation> {
    let range = desc.checked_range(mem.len())?;
    Ok(mem[range].to_vec())
}

/// Write `data` into the shared region starting at `offset`.
///
/// Rejects writes that do not fit before the region's end, including
/// data too large to be addressed by a `u32` length at all.
pub fn write_at(mem: &mut [u8], offset: u32, data: &[u8]) -> Result<(), ProtocolViolation> {
    let len = u32::try_from(data.len()).map_err(|_| ProtocolViolation::DescriptorOutOfBounds {
        offset,
        len: u32::MAX,
        region: mem.len(),
    })?;
    let range = Descriptor::new(offset, len).checked_range(mem.len())?;
    mem[range].copy_from_slice(data);
    Ok(())
}
