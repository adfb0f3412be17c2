//! Core processor implementation.
//!
//! This module contains the CPU: architectural state, the execution units,
//! and the fetch-decode-dispatch-execute engine that drives them.

/// Architectural state (register file, hart state).
pub mod arch;

/// CPU core implementation and execution engine.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
