//! RISC-V Instruction Decoder.
//!
//! This module decodes 32-bit RISC-V instruction words into a structured
//! `Decoded` value and exposes the five immediate decoders (I, S, B, U, J).
//!
//! Every immediate is sign-extended by widening the raw word to a signed
//! 32-bit value first, so bit 31 of the instruction is always the sign bit.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::rv64i::opcodes;

/// Bit shift for extracting the I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
const I_IMM_SHIFT: u32 = 20;

/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
///
/// The high part is obtained by an arithmetic shift of the whole word by 20,
/// which leaves imm[11:5] at bits 11:5; the low five bits are then replaced.
const S_IMM_HIGH_MASK: i64 = !0x1F;

/// Bit shift for the S-Type imm[4:0] field (bits 7-11).
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for the S-Type imm[4:0] field.
const S_IMM_LOW_MASK: u32 = 0x1F;

/// B-Type sign bit (instruction bit 31 = imm[12]).
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
const B_SIGN_MASK: u32 = 0x8000_0000;

/// Arithmetic shift moving instruction bit 31 to imm[12].
const B_SIGN_SHIFT: u32 = 19;

/// Instruction bit 7 (imm[11]).
const B_IMM_11_MASK: u32 = 0x80;

/// Left shift moving instruction bit 7 to imm[11].
const B_IMM_11_SHIFT: u32 = 4;

/// imm[10:5] after shifting instruction bits 30:25 down by 20.
const B_IMM_10_5_MASK: u32 = 0x7E0;

/// imm[4:1] after shifting instruction bits 11:8 down by 7.
const B_IMM_4_1_MASK: u32 = 0x1E;

/// Bit mask for the U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type sign bit (instruction bit 31 = imm[20]).
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
const J_SIGN_MASK: u32 = 0x8000_0000;

/// Arithmetic shift moving instruction bit 31 to imm[20].
const J_SIGN_SHIFT: u32 = 11;

/// imm[19:12], already in place in the instruction word.
const J_IMM_19_12_MASK: u32 = 0x000F_F000;

/// imm[11] after shifting instruction bit 20 down by 9.
const J_IMM_11_MASK: u32 = 0x800;

/// imm[10:1] after shifting instruction bits 30:21 down by 20.
const J_IMM_10_1_MASK: u32 = 0x7FE;

/// Decodes a RISC-V instruction into its component fields.
///
/// The immediate is chosen by opcode: I-type for OP-IMM, S-type for STORE,
/// zero otherwise.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM => imm_i(inst),
        opcodes::OP_STORE => imm_s(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        shamt: inst.shamt(),
        imm,
    }
}

/// Widens the raw word to a sign-extended 64-bit value.
#[inline(always)]
const fn widen(inst: u32) -> i64 {
    inst as i32 as i64
}

/// Decodes the I-Type immediate: `inst[31:20]`, sign-extended.
///
/// Used by OP-IMM, loads and JALR.
///
/// # Examples
///
/// ```
/// use rvemu_core::isa::decode::imm_i;
///
/// // addi x1, x0, -1
/// assert_eq!(imm_i(0xFFF0_0093), -1);
/// assert_eq!(imm_i(0xFFF0_0093) as u64, u64::MAX);
/// ```
pub const fn imm_i(inst: u32) -> i64 {
    widen(inst) >> I_IMM_SHIFT
}

/// Decodes the S-Type immediate: `{inst[31:25], inst[11:7]}`, sign-extended.
pub const fn imm_s(inst: u32) -> i64 {
    ((widen(inst) >> I_IMM_SHIFT) & S_IMM_HIGH_MASK)
        | ((inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK) as i64
}

/// Decodes the B-Type immediate: a 13-bit even branch offset, sign-extended.
///
/// Bits are reassembled as `{inst[31], inst[7], inst[30:25], inst[11:8], 0}`.
pub const fn imm_b(inst: u32) -> i64 {
    let sign = widen(inst & B_SIGN_MASK) >> B_SIGN_SHIFT;
    let rest = ((inst & B_IMM_11_MASK) << B_IMM_11_SHIFT)
        | ((inst >> 20) & B_IMM_10_5_MASK)
        | ((inst >> 7) & B_IMM_4_1_MASK);
    sign | rest as i64
}

/// Decodes the U-Type immediate: `inst[31:12]` in the upper 20 bits, sign-extended.
///
/// The low 12 bits are always zero.
///
/// # Examples
///
/// ```
/// use rvemu_core::isa::decode::imm_u;
///
/// // lui a0, 0x12345
/// assert_eq!(imm_u(0x1234_5537), 0x1234_5000);
/// ```
pub const fn imm_u(inst: u32) -> i64 {
    widen(inst & U_IMM_MASK)
}

/// Decodes the J-Type immediate: a 21-bit even jump offset, sign-extended.
///
/// Bits are reassembled as `{inst[31], inst[19:12], inst[20], inst[30:21], 0}`.
pub const fn imm_j(inst: u32) -> i64 {
    let sign = widen(inst & J_SIGN_MASK) >> J_SIGN_SHIFT;
    let rest = (inst & J_IMM_19_12_MASK)
        | ((inst >> 9) & J_IMM_11_MASK)
        | ((inst >> 20) & J_IMM_10_1_MASK);
    sign | rest as i64
}
