//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding constants, field extraction and decoding logic for the
//! base integer instruction subset, plus a disassembler used for tracing.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RISC-V instruction formats.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Base integer instruction set constants.
pub mod rv64i;
