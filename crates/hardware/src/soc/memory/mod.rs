//! Physical System Memory (DRAM).
//!
//! This module implements the main system memory device. It provides:
//! 1. **Buffer:** Owned, bounds-checked backing storage for RAM contents.
//! 2. **Memory:** Width-parameterised little-endian load/store at a physical base.
//!
//! Unaligned accesses are permitted. An access is rejected with
//! [`MemError::OutOfBounds`] if any of its bytes falls outside the buffer, and
//! a rejected store leaves memory untouched.

/// DRAM buffer implementation.
pub mod buffer;

use self::buffer::DramBuffer;
use crate::common::{AccessWidth, MemError};
use crate::soc::traits::Device;

/// System Memory structure.
#[derive(Clone, Debug)]
pub struct Memory {
    /// Backing byte storage.
    buffer: DramBuffer,
    /// The base physical address where this memory is mapped.
    base_addr: u64,
}

impl Memory {
    /// Creates a zeroed memory of `size` bytes mapped at `base_addr`.
    ///
    /// # Arguments
    ///
    /// * `base_addr` - Starting physical address.
    /// * `size` - Capacity in bytes.
    pub fn new(base_addr: u64, size: usize) -> Self {
        Self {
            buffer: DramBuffer::new(size),
            base_addr,
        }
    }

    /// Returns the physical base address.
    pub const fn base(&self) -> u64 {
        self.base_addr
    }

    /// Returns the capacity in bytes.
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the raw memory contents, starting at the base address.
    pub fn as_slice(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Loads `width` bytes at `addr`, least-significant byte first.
    ///
    /// The result is zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if any byte of the access is outside memory.
    pub fn load(&self, addr: u64, width: AccessWidth) -> Result<u64, MemError> {
        let n = width.bytes();
        let bytes = self
            .offset(addr)
            .and_then(|off| self.buffer.read_slice(off, n))
            .ok_or(MemError::OutOfBounds { addr, width })?;

        let mut raw = [0u8; 8];
        raw[..n].copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    /// Stores the low `width` bits of `value` at `addr` in little-endian order.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if any byte of the access is outside memory.
    pub fn store(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), MemError> {
        let n = width.bytes();
        let dest = self
            .offset(addr)
            .and_then(|off| self.buffer.write_slice(off, n))
            .ok_or(MemError::OutOfBounds { addr, width })?;

        dest.copy_from_slice(&value.to_le_bytes()[..n]);
        Ok(())
    }

    /// Copies a byte slice into memory starting at `addr`.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the slice does not fit; nothing is written.
    pub fn load_bytes(&mut self, addr: u64, data: &[u8]) -> Result<(), MemError> {
        let dest = self
            .offset(addr)
            .and_then(|off| self.buffer.write_slice(off, data.len()))
            .ok_or(MemError::OutOfBounds {
                addr,
                width: AccessWidth::Byte,
            })?;
        dest.copy_from_slice(data);
        Ok(())
    }

    fn offset(&self, addr: u64) -> Option<usize> {
        usize::try_from(addr.checked_sub(self.base_addr)?).ok()
    }
}

impl Device for Memory {
    fn name(&self) -> &'static str {
        "DRAM"
    }

    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.buffer.len() as u64)
    }

    fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64, MemError> {
        Self::load(self, addr, width)
    }

    fn store(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), MemError> {
        Self::store(self, addr, width, value)
    }

    fn write_bytes(&mut self, addr: u64, data: &[u8]) -> Result<(), MemError> {
        self.load_bytes(addr, data)
    }
}
