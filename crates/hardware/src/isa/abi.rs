//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the calling-convention aliases of the integer registers, used by
//! the register dump and the disassembler.

/// Register x0 (zero register).
pub const REG_ZERO: usize = 0;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;

/// ABI names for x0–x31, indexed by register number.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index, or `"x??"` if out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}
