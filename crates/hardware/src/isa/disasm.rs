//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for instruction tracing and diagnostics. Only the instruction
//! classes the execution engine implements are named; anything else renders
//! as `unknown`.
//!
//! # Usage
//!
//! ```
//! use rvemu_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x00A0_0513), "addi a0, zero, 10");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::{imm_i, imm_s};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// encodings outside the supported subset.
pub fn disassemble(inst: u32) -> String {
    let rd = reg_name(inst.rd());
    let rs1 = reg_name(inst.rs1());
    let rs2 = reg_name(inst.rs2());

    match inst.opcode() {
        op::OP_REG => match reg_mnemonic(inst.funct3(), inst.funct7()) {
            Some(m) => format!("{m} {rd}, {rs1}, {rs2}"),
            None => unknown(inst),
        },
        op::OP_IMM => match (inst.funct3(), inst.funct7()) {
            (f3::SLL, _) => format!("slli {rd}, {rs1}, {}", inst.shamt()),
            (f3::SRL_SRA, f7::DEFAULT) => format!("srli {rd}, {rs1}, {}", inst.shamt()),
            (f3::SRL_SRA, f7::ALT) => format!("srai {rd}, {rs1}, {}", inst.shamt()),
            (f3::SRL_SRA, _) => unknown(inst),
            (funct3, _) => {
                let m = match funct3 {
                    f3::ADD_SUB => "addi",
                    f3::SLT => "slti",
                    f3::SLTU => "sltiu",
                    f3::XOR => "xori",
                    f3::OR => "ori",
                    _ => "andi",
                };
                format!("{m} {rd}, {rs1}, {}", imm_i(inst))
            }
        },
        op::OP_STORE => {
            let m = match inst.funct3() {
                f3::SB => "sb",
                f3::SH => "sh",
                f3::SW => "sw",
                f3::SD => "sd",
                _ => return unknown(inst),
            };
            format!("{m} {rs2}, {}({rs1})", imm_s(inst))
        }
        _ => unknown(inst),
    }
}

fn reg_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    Some(match (funct3, funct7) {
        (f3::ADD_SUB, f7::DEFAULT) => "add",
        (f3::ADD_SUB, f7::ALT) => "sub",
        (f3::SRL_SRA, f7::DEFAULT) => "srl",
        (f3::SRL_SRA, f7::ALT) => "sra",
        (f3::ADD_SUB | f3::SRL_SRA, _) => return None,
        (f3::SLL, _) => "sll",
        (f3::SLT, _) => "slt",
        (f3::SLTU, _) => "sltu",
        (f3::XOR, _) => "xor",
        (f3::OR, _) => "or",
        _ => "and",
    })
}

fn unknown(inst: u32) -> String {
    format!("unknown ({inst:#010x})")
}
