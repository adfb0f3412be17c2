//! Memory Access Widths.
//!
//! This module defines the access granularity used by every load and store in
//! the emulator. It is shared by the following:
//! 1. **Memory:** Selecting how many bytes a little-endian access touches.
//! 2. **Bus:** Checking that a whole access falls inside a device range.
//! 3. **Execution:** Mapping the store `funct3` encodings to byte counts.

use std::fmt;

/// Width of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessWidth {
    /// 8-bit access.
    Byte,
    /// 16-bit access.
    Half,
    /// 32-bit access.
    Word,
    /// 64-bit access.
    Double,
}

impl AccessWidth {
    /// Number of bits covered by this access.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }

    /// Number of bytes covered by this access.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
