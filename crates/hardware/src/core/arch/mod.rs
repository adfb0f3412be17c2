//! RISC-V architectural state.
//!
//! This module contains the architecturally visible state of a hart:
//! 1. **GPRs:** The 32-entry integer register file.
//! 2. **State:** The running/halted state machine.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Hart running/halted state.
pub mod state;

pub use gpr::Gpr;
pub use state::HartState;
