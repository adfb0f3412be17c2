//! Device trait for memory-mapped access.
//!
//! This module defines the `Device` trait implemented by every bus-attached
//! component. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Width-parameterised load/store at absolute physical addresses.
//! 3. **Bulk Writes:** `write_bytes` for image loading.
//!
//! DRAM is currently the only implementor; the trait is the seam for
//! memory-mapped peripherals.

use crate::common::{AccessWidth, MemError};

/// Trait for devices attached to the system bus.
pub trait Device {
    /// Returns a short name for this device (e.g., `"DRAM"`).
    fn name(&self) -> &'static str;

    /// Returns `(base_address, size_in_bytes)` for this device's region.
    fn address_range(&self) -> (u64, u64);

    /// Loads `width` bits at physical address `addr`, zero-extended.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the access is not fully backed.
    fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64, MemError>;

    /// Stores the low `width` bits of `value` at physical address `addr`.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the access is not fully backed.
    fn store(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), MemError>;

    /// Writes a contiguous byte slice starting at `addr` (default: byte-by-byte).
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] on the first byte that is not backed.
    fn write_bytes(&mut self, addr: u64, data: &[u8]) -> Result<(), MemError> {
        for (i, byte) in data.iter().enumerate() {
            self.store(addr + i as u64, AccessWidth::Byte, u64::from(*byte))?;
        }
        Ok(())
    }

    /// Returns `true` if `len` bytes starting at `addr` all fall in this device's range.
    fn covers(&self, addr: u64, len: u64) -> bool {
        let (base, size) = self.address_range();
        addr.checked_sub(base)
            .and_then(|off| off.checked_add(len))
            .is_some_and(|end| end <= size)
    }
}
