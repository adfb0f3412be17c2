//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Zero Register:** Slot 0 is not write-protected. The execution engine
//!    clears it at the start of every step, and architectural reads of `x0`
//!    always return zero.
//! 3. **Debugging:** Formats the register file as an ABI-labelled dump.

use std::fmt;

use crate::common::constants::NUM_REGS;
use crate::isa::abi::{self, REG_NAMES};

/// Number of registers shown in each column of the dump.
const DUMP_ROWS: usize = 8;

/// Number of columns in the dump.
const DUMP_COLUMNS: usize = NUM_REGS / DUMP_ROWS;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 64-bit value of the register. Register `x0` always reads as 0.
    pub const fn read(&self, idx: usize) -> u64 {
        if idx == abi::REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are stored and survive until the next [`Gpr::clear_zero`].
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 64-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Returns the value held in a register slot, without the `x0` read rule.
    pub const fn raw(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Resets slot 0 to zero.
    pub const fn clear_zero(&mut self) {
        self.regs[abi::REG_ZERO] = 0;
    }
}

impl fmt::Display for Gpr {
    /// Formats the register file as eight rows of four ABI-labelled columns.
    ///
    /// Column `c` holds registers `8c..8c+7`. Values are the stored slot
    /// contents, so a write to `x0` in the last step is visible here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..DUMP_ROWS {
            for col in 0..DUMP_COLUMNS {
                let idx = col * DUMP_ROWS + row;
                if col > 0 {
                    f.write_str("   ")?;
                }
                write!(f, "{:>4} = {:#018x}", REG_NAMES[idx], self.regs[idx])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
