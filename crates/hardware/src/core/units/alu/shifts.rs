//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on 64-bit values.
//!
//! Shift amounts are masked to 6 bits (0–63), the register width.

use super::AluOp;

/// Bit mask for the shift amount on RV64 (6 bits: 0-63).
pub const SHAMT_MASK_RV64: u64 = 0x3f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (only the low 6 bits are used).
///
/// # Returns
///
/// The 64-bit result, or `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let sh = (b & SHAMT_MASK_RV64) as u32;
    match op {
        AluOp::Sll => a << sh,
        AluOp::Srl => a >> sh,
        AluOp::Sra => ((a as i64) >> sh) as u64,
        _ => 0,
    }
}
