//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single unit of
//! execution state. It holds:
//! 1. **Architectural State:** The register file, program counter and hart state.
//! 2. **Address Space:** The exclusively owned system bus (and through it, DRAM).
//! 3. **Observability:** Instruction tracing flag and run statistics.
//!
//! There is no global state: every operation takes the `Cpu` explicitly, so
//! independent instances can coexist.

/// Instruction dispatch table.
pub mod dispatch;

/// Fetch-decode-dispatch-execute cycle and run loop.
pub mod execution;

/// Load/store forwarding to the bus.
pub mod memory;

use tracing::debug;

use crate::config::Config;
use crate::core::arch::{Gpr, HartState};
use crate::isa::abi;
use crate::soc::Bus;
use crate::stats::SimStats;

/// Main CPU structure containing all hart state.
#[derive(Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter.
    pub pc: u64,
    /// System Bus and Devices.
    pub bus: Bus,
    /// Running or halted.
    pub state: HartState,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU attached to `bus`.
    ///
    /// The program counter starts at the DRAM base and the stack pointer at
    /// the end of DRAM, unless `general.initial_sp` overrides it.
    ///
    /// # Arguments
    ///
    /// * `bus` - The system bus; the CPU takes exclusive ownership.
    /// * `config` - The emulator configuration.
    pub fn new(bus: Bus, config: &Config) -> Self {
        let mut regs = Gpr::new();
        let sp = config
            .general
            .initial_sp
            .unwrap_or_else(|| config.memory.ram_end());
        regs.write(abi::REG_SP, sp);

        debug!(
            pc = format_args!("{:#x}", config.memory.ram_base),
            sp = format_args!("{sp:#x}"),
            "cpu initialised"
        );

        Self {
            regs,
            pc: config.memory.ram_base,
            bus,
            state: HartState::Running,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }

    /// Creates a CPU with a fresh DRAM-only bus built from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self::new(Bus::with_dram(&config.memory), config)
    }

    /// Returns `true` once the hart has halted.
    pub const fn is_halted(&self) -> bool {
        self.state.is_halted()
    }

    /// Stops the hart; subsequent steps are no-ops.
    pub const fn halt(&mut self) {
        self.state = HartState::Halted;
    }

    /// Dumps the current CPU state (PC and registers) to stdout.
    pub fn dump_state(&self) {
        println!("pc = {:#018x}", self.pc);
        print!("{}", self.regs);
    }
}
