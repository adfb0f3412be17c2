//! Common types and constants used throughout the emulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Default memory map and instruction geometry.
//! 2. **Access Widths:** The 8/16/32/64-bit access granularity.
//! 3. **Error Handling:** Memory faults and run-terminating errors.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Error types.
pub mod error;

pub use constants::{DRAM_BASE, DRAM_SIZE};
pub use data::AccessWidth;
pub use error::{EmuError, MemError, Result};
