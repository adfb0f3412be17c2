//! Execution units.
//!
//! Functional units used by the execution engine. Only the integer ALU is
//! needed by the implemented instruction classes; stores go straight to the bus.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
