//! Run statistics collection and reporting.
//!
//! This module tracks what a run executed. It provides:
//! 1. **Throughput:** Steps retired, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by format class (R, I, S).

use std::fmt;
use std::time::Instant;

use crate::core::cpu::dispatch::InstClass;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed successfully.
    pub steps: u64,
    /// Count of register-register instructions retired.
    pub inst_reg: u64,
    /// Count of register-immediate instructions retired.
    pub inst_imm: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            inst_reg: 0,
            inst_imm: 0,
            inst_store: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction of the given class.
    pub const fn record(&mut self, class: InstClass) {
        match class {
            InstClass::R => self.inst_reg += 1,
            InstClass::I => self.inst_imm += 1,
            InstClass::S => self.inst_store += 1,
        }
    }

    /// Host seconds elapsed since the statistics were created.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.host_seconds();
        let mips = if seconds > 0.0 {
            (self.steps as f64 / seconds) / 1_000_000.0
        } else {
            0.0
        };
        let pct = |n: u64| {
            if self.steps == 0 {
                0.0
            } else {
                n as f64 / self.steps as f64 * 100.0
            }
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "RV64 EMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.steps)?;
        writeln!(f, "sim_mips                 {mips:.2}")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op_reg                 {:<10} ({:.2}%)", self.inst_reg, pct(self.inst_reg))?;
        writeln!(f, "  op_imm                 {:<10} ({:.2}%)", self.inst_imm, pct(self.inst_imm))?;
        writeln!(f, "  store                  {:<10} ({:.2}%)", self.inst_store, pct(self.inst_store))?;
        writeln!(f, "==========================================================")
    }
}
