//! Global Emulator Constants.
//!
//! This module defines values shared by the memory system, the decoder and the
//! execution engine. It includes:
//! 1. **Memory Map:** The default DRAM base address and capacity.
//! 2. **Instruction Constants:** Instruction width and the sentinel halt address.

/// Default base physical address of DRAM.
///
/// Lower addresses are reserved for memory-mapped devices.
pub const DRAM_BASE: u64 = 0x8000_0000;

/// Default DRAM capacity in bytes (1 MiB).
pub const DRAM_SIZE: usize = 1024 * 1024;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Program counter value that ends a run.
pub const HALT_PC: u64 = 0;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;
