//! Main Execution Loop.
//!
//! This module implements the fetch-decode-dispatch-execute cycle. Each step:
//! 1. **Fetch:** Loads a 32-bit word from the bus at the program counter.
//! 2. **Advance:** Adds 4 to the program counter before executing, so a future
//!    branch or jump only has to overwrite it.
//! 3. **Zero:** Clears register slot 0.
//! 4. **Dispatch:** Looks up (opcode, funct3, funct7) in the dispatch table.
//! 5. **Execute:** Applies the micro-operation to registers and/or memory.
//!
//! Any failure halts the hart and is returned to the caller. After a
//! successful step, a program counter of zero also halts the hart.

use tracing::{trace, warn};

use super::Cpu;
use super::dispatch::{self, Operation};
use crate::common::constants::{HALT_PC, INSTRUCTION_SIZE};
use crate::common::{EmuError, Result};
use crate::core::arch::HartState;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Decoded;

/// Why [`Cpu::run`] returned without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The hart halted (the program counter reached zero, or it was already halted).
    Halted,
    /// The step limit was reached while the hart was still running.
    StepLimit,
}

impl Cpu {
    /// Executes a single instruction.
    ///
    /// Does nothing if the hart is already halted.
    ///
    /// # Returns
    ///
    /// The hart state after the step.
    ///
    /// # Errors
    ///
    /// - [`EmuError::Memory`] if the fetch or a store is out of bounds.
    /// - [`EmuError::UnrecognizedInstruction`] if no operation matches.
    ///
    /// In both cases the hart is halted before the error is returned.
    pub fn step(&mut self) -> Result<HartState> {
        if self.state.is_halted() {
            return Ok(self.state);
        }

        if let Err(e) = self.cycle() {
            self.halt();
            return Err(e);
        }

        self.stats.steps += 1;
        if self.pc == HALT_PC {
            self.halt();
        }
        Ok(self.state)
    }

    /// Runs until the hart halts, an error occurs, or `max_steps` steps have executed.
    ///
    /// `on_step` is called after every successful step, before the sentinel
    /// program counter check ends the run.
    ///
    /// # Errors
    ///
    /// The first error returned by [`Cpu::step`].
    pub fn run<F>(&mut self, max_steps: Option<u64>, mut on_step: F) -> Result<ExitReason>
    where
        F: FnMut(&Self),
    {
        let mut executed: u64 = 0;
        loop {
            if self.state.is_halted() {
                return Ok(ExitReason::Halted);
            }
            if max_steps.is_some_and(|limit| executed >= limit) {
                return Ok(ExitReason::StepLimit);
            }
            let _ = self.step()?;
            executed += 1;
            on_step(self);
        }
    }

    fn cycle(&mut self) -> Result<()> {
        let pc = self.pc;
        let inst = self.fetch()?;
        self.pc = pc.wrapping_add(INSTRUCTION_SIZE);
        self.regs.clear_zero();

        let d = decode(inst);
        if self.trace {
            trace!("{pc:#010x}: {inst:08x}  {}", disassemble(inst));
        }

        let Some(op) = dispatch::lookup(d.opcode, d.funct3, d.funct7) else {
            warn!(
                pc = format_args!("{pc:#x}"),
                opcode = format_args!("{:#04x}", d.opcode),
                funct3 = format_args!("{:#x}", d.funct3),
                funct7 = format_args!("{:#04x}", d.funct7),
                "unrecognized instruction, halting"
            );
            return Err(EmuError::UnrecognizedInstruction {
                pc,
                raw: inst,
                opcode: d.opcode,
                funct3: d.funct3,
                funct7: d.funct7,
            });
        };

        self.execute(op, &d)?;
        self.stats.record(op.class());
        Ok(())
    }

    /// Applies a dispatched micro-operation to the architectural state.
    ///
    /// # Errors
    ///
    /// [`EmuError::Memory`] if a store is out of bounds.
    pub fn execute(&mut self, op: Operation, d: &Decoded) -> Result<()> {
        let rs1 = self.regs.read(d.rs1);
        match op {
            Operation::Reg(alu) => {
                let rs2 = self.regs.read(d.rs2);
                self.regs.write(d.rd, Alu::execute(alu, rs1, rs2));
            }
            Operation::Imm(alu) => {
                self.regs.write(d.rd, Alu::execute(alu, rs1, d.imm as u64));
            }
            Operation::ShiftImm(alu) => {
                self.regs
                    .write(d.rd, Alu::execute(alu, rs1, u64::from(d.shamt)));
            }
            Operation::Store(width) => {
                let addr = rs1.wrapping_add(d.imm as u64);
                let value = self.regs.read(d.rs2);
                self.store(addr, width, value)?;
            }
        }
        Ok(())
    }
}
