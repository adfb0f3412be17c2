//! RISC-V Base Integer Instruction Set (I).
//!
//! Encoding constants for the subset of RV64I the execution engine implements.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (OpImm, OpReg, Store).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits selecting alternate operations.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;
