//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes operations that share the
//! same `funct3` (ADD vs SUB, SRL vs SRA, SRLI vs SRAI).

/// Default operation (ADD, SRL, SRLI, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;
