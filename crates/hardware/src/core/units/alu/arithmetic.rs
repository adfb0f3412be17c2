//! ALU arithmetic operations.
//!
//! Implements 64-bit wrapping addition and subtraction. Overflow wraps
//! silently; RISC-V integer arithmetic never traps.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
