//! Instruction Dispatch Table.
//!
//! Maps a decoded (opcode, funct3, funct7) triple to the micro-operation that
//! implements it. The lookup is a single match over the triple; encodings that
//! do not use funct7 have it replaced by [`FUNCT7_UNUSED`] before the match, so
//! their immediate bits never influence selection.
//!
//! funct7 only takes part in selection for ADD/SUB, SRL/SRA and SRLI/SRAI.
//! Every other register-register operation, SLLI, and all stores ignore it.

use crate::common::AccessWidth;
use crate::core::units::alu::AluOp;
use crate::isa::rv64i::funct3::{
    ADD_SUB, AND, OR, SB, SD, SH, SLL, SLT, SLTU, SRL_SRA, SW, XOR,
};
use crate::isa::rv64i::funct7::{ALT, DEFAULT};
use crate::isa::rv64i::opcodes::{OP_IMM, OP_REG, OP_STORE};

/// funct7 key used for encodings whose bits 31:25 are not an opcode field.
pub const FUNCT7_UNUSED: u32 = u32::MAX;

/// Micro-operation selected by dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `rd = rs1 op rs2`.
    Reg(AluOp),
    /// `rd = rs1 op imm_I`.
    Imm(AluOp),
    /// `rd = rs1 op shamt`.
    ShiftImm(AluOp),
    /// Store the low bits of `rs2` at `rs1 + imm_S`.
    Store(AccessWidth),
}

impl Operation {
    /// Returns the instruction-format class of the operation.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Reg(_) => InstClass::R,
            Self::Imm(_) | Self::ShiftImm(_) => InstClass::I,
            Self::Store(_) => InstClass::S,
        }
    }
}

/// Instruction-format class selected by the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstClass {
    /// Register-register arithmetic/logic (opcode `0x33`).
    R,
    /// Register-immediate arithmetic/logic (opcode `0x13`).
    I,
    /// Stores (opcode `0x23`).
    S,
}

/// Builds the dispatch key for an instruction, masking funct7 where unused.
pub const fn dispatch_key(opcode: u32, funct3: u32, funct7: u32) -> (u32, u32, u32) {
    let uses_funct7 = match opcode {
        OP_REG => matches!(funct3, ADD_SUB | SRL_SRA),
        OP_IMM => funct3 == SRL_SRA,
        _ => false,
    };
    (opcode, funct3, if uses_funct7 { funct7 } else { FUNCT7_UNUSED })
}

/// Looks up the operation for an (opcode, funct3, funct7) triple.
///
/// # Returns
///
/// `None` if the triple does not name an implemented instruction.
///
/// # Examples
///
/// ```
/// use rvemu_core::core::cpu::dispatch::{lookup, Operation};
/// use rvemu_core::core::units::alu::AluOp;
///
/// assert_eq!(lookup(0x33, 0, 0x20), Some(Operation::Reg(AluOp::Sub)));
/// assert_eq!(lookup(0x13, 0, 0x7f), Some(Operation::Imm(AluOp::Add)));
/// assert_eq!(lookup(0x7f, 7, 0x7f), None);
/// ```
pub const fn lookup(opcode: u32, funct3: u32, funct7: u32) -> Option<Operation> {
    const ANY: u32 = FUNCT7_UNUSED;

    Some(match dispatch_key(opcode, funct3, funct7) {
        (OP_REG, ADD_SUB, DEFAULT) => Operation::Reg(AluOp::Add),
        (OP_REG, ADD_SUB, ALT) => Operation::Reg(AluOp::Sub),
        (OP_REG, SLL, ANY) => Operation::Reg(AluOp::Sll),
        (OP_REG, SLT, ANY) => Operation::Reg(AluOp::Slt),
        (OP_REG, SLTU, ANY) => Operation::Reg(AluOp::Sltu),
        (OP_REG, XOR, ANY) => Operation::Reg(AluOp::Xor),
        (OP_REG, SRL_SRA, DEFAULT) => Operation::Reg(AluOp::Srl),
        (OP_REG, SRL_SRA, ALT) => Operation::Reg(AluOp::Sra),
        (OP_REG, OR, ANY) => Operation::Reg(AluOp::Or),
        (OP_REG, AND, ANY) => Operation::Reg(AluOp::And),

        (OP_IMM, ADD_SUB, ANY) => Operation::Imm(AluOp::Add),
        (OP_IMM, SLL, ANY) => Operation::ShiftImm(AluOp::Sll),
        (OP_IMM, SLT, ANY) => Operation::Imm(AluOp::Slt),
        (OP_IMM, SLTU, ANY) => Operation::Imm(AluOp::Sltu),
        (OP_IMM, XOR, ANY) => Operation::Imm(AluOp::Xor),
        (OP_IMM, SRL_SRA, DEFAULT) => Operation::ShiftImm(AluOp::Srl),
        (OP_IMM, SRL_SRA, ALT) => Operation::ShiftImm(AluOp::Sra),
        (OP_IMM, OR, ANY) => Operation::Imm(AluOp::Or),
        (OP_IMM, AND, ANY) => Operation::Imm(AluOp::And),

        (OP_STORE, SB, ANY) => Operation::Store(AccessWidth::Byte),
        (OP_STORE, SH, ANY) => Operation::Store(AccessWidth::Half),
        (OP_STORE, SW, ANY) => Operation::Store(AccessWidth::Word),
        (OP_STORE, SD, ANY) => Operation::Store(AccessWidth::Double),

        _ => return None,
    })
}
