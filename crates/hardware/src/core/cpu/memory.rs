//! Memory Access Helpers.
//!
//! Thin CPU-side wrappers that forward loads and stores to the bus, plus the
//! instruction fetch used by the execution engine.

use super::Cpu;
use crate::common::{AccessWidth, MemError};

impl Cpu {
    /// Loads `width` bits from physical address `addr`, zero-extended.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the access is not fully mapped.
    pub fn load(&mut self, addr: u64, width: AccessWidth) -> Result<u64, MemError> {
        self.bus.load(addr, width)
    }

    /// Stores the low `width` bits of `value` at physical address `addr`.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the access is not fully mapped.
    pub fn store(&mut self, addr: u64, width: AccessWidth, value: u64) -> Result<(), MemError> {
        self.bus.store(addr, width, value)
    }

    /// Fetches the 32-bit instruction word at the program counter.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if the program counter is outside memory.
    pub fn fetch(&mut self) -> Result<u32, MemError> {
        self.load(self.pc, AccessWidth::Word).map(|w| w as u32)
    }
}
