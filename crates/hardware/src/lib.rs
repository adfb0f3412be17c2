//! RV64 instruction-set emulator library.
//!
//! This crate implements a single-hart RISC-V emulator for a subset of the
//! base integer ISA (register-register, register-immediate and store
//! instructions) with the following:
//! 1. **Core:** Register file, program counter, dispatch and the step loop.
//! 2. **ISA:** Field and immediate decoding, ABI names, and a disassembler.
//! 3. **SoC:** A bus that routes physical addresses to devices, and bounds-checked DRAM.
//! 4. **Simulation:** Image loader, configuration, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use rvemu_core::{Config, Cpu};
//!
//! // addi t0, zero, 10 ; addi t1, zero, 20 ; add t2, t0, t1
//! let program: [u32; 3] = [0x00A0_0293, 0x0140_0313, 0x0062_83B3];
//! let bytes: Vec<u8> = program.iter().flat_map(|w| w.to_le_bytes()).collect();
//!
//! let config = Config::default();
//! let mut cpu = Cpu::with_config(&config);
//! rvemu_core::sim::loader::load_into(&mut cpu, &bytes).unwrap();
//!
//! for _ in 0..3 {
//!     let _ = cpu.step().unwrap();
//! }
//! assert_eq!(cpu.regs.read(7), 30);
//! assert_eq!(cpu.pc, config.memory.ram_base + 12);
//! ```

/// Common types and constants (access widths, errors, memory layout).
pub mod common;
/// Emulator configuration (defaults and JSON-backed config structures).
pub mod config;
/// CPU core (architectural state, dispatch, execution, ALU).
pub mod core;
/// Instruction set (decode, instruction fields, ABI, RV64I encodings, disassembly).
pub mod isa;
/// Image loading.
pub mod sim;
/// System-on-chip (bus, device trait, memory).
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the register file, program counter and bus.
pub use crate::core::Cpu;
/// Crate-level error type.
pub use crate::common::EmuError;
/// System bus routing physical addresses to devices.
pub use crate::soc::Bus;
