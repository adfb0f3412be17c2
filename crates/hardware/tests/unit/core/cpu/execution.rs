//! # CPU Execution Tests
//!
//! Tests for the step protocol, instruction semantics, and run-loop termination.

use pretty_assertions::assert_eq;
use rvemu_core::EmuError;
use rvemu_core::common::{AccessWidth, MemError};
use rvemu_core::config::Config;
use rvemu_core::core::arch::HartState;
use rvemu_core::core::cpu::execution::ExitReason;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{TEST_RAM_SIZE, TestContext};

fn ib() -> InstructionBuilder {
    InstructionBuilder::new()
}

// ══════════════════════════════════════════════════════════
// Register-register operations
// ══════════════════════════════════════════════════════════

#[test]
fn test_add_registers() {
    let mut ctx = TestContext::new().with_program(&[ib().add(5, 10, 11).build()]);
    ctx.set_reg(10, 5);
    ctx.set_reg(11, 3);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 8);
}

#[test]
fn test_sub_registers() {
    let mut ctx = TestContext::new().with_program(&[ib().sub(5, 10, 11).build()]);
    ctx.set_reg(10, 5);
    ctx.set_reg(11, 3);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 2);
}

#[test]
fn test_register_ops_program() {
    let program = [
        ib().sll(12, 10, 11).build(),
        ib().slt(13, 14, 10).build(),
        ib().sltu(15, 14, 10).build(),
        ib().xor(16, 10, 14).build(),
        ib().srl(17, 14, 11).build(),
        ib().sra(18, 14, 11).build(),
        ib().or(19, 10, 11).build(),
        ib().and(20, 14, 10).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);
    ctx.set_reg(10, 0x0F);
    ctx.set_reg(11, 4);
    ctx.set_reg(14, -32_i64 as u64);

    ctx.run(program.len() as u64).unwrap();

    assert_eq!(ctx.get_reg(12), 0xF0);
    assert_eq!(ctx.get_reg(13), 1);
    assert_eq!(ctx.get_reg(15), 0);
    assert_eq!(ctx.get_reg(16), 0xFFFF_FFFF_FFFF_FFEF);
    assert_eq!(ctx.get_reg(17), 0x0FFF_FFFF_FFFF_FFFE);
    assert_eq!(ctx.get_reg(18), -2_i64 as u64);
    assert_eq!(ctx.get_reg(19), 0x0F);
    assert_eq!(ctx.get_reg(20), 0);
}

#[test]
fn test_register_shift_uses_low_six_bits_of_rs2() {
    let mut ctx = TestContext::new().with_program(&[ib().sll(5, 6, 7).build()]);
    ctx.set_reg(6, 1);
    ctx.set_reg(7, 64 + 3);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 8);
}

// ══════════════════════════════════════════════════════════
// Register-immediate operations
// ══════════════════════════════════════════════════════════

#[test]
fn test_addi_negative_immediate() {
    let mut ctx = TestContext::new().with_program(&[ib().addi(5, 6, -1).build()]);
    ctx.set_reg(6, 10);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 9);
}

#[test]
fn test_immediate_ops_sign_extend() {
    let program = [
        ib().slti(10, 5, -1).build(),
        ib().sltiu(11, 5, -1).build(),
        ib().xori(12, 5, -1).build(),
        ib().ori(13, 5, 0x700).build(),
        ib().andi(14, 5, -16).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);
    ctx.set_reg(5, 0x1234);

    ctx.run(program.len() as u64).unwrap();

    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(ctx.get_reg(11), 1);
    assert_eq!(ctx.get_reg(12), !0x1234_u64);
    assert_eq!(ctx.get_reg(13), 0x1734);
    assert_eq!(ctx.get_reg(14), 0x1230);
}

#[test]
fn test_immediate_shifts() {
    let program = [
        ib().slli(10, 5, 4).build(),
        ib().srli(11, 6, 31).build(),
        ib().srai(12, 6, 31).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);
    ctx.set_reg(5, 0x0F);
    ctx.set_reg(6, i64::MIN as u64);

    ctx.run(program.len() as u64).unwrap();

    assert_eq!(ctx.get_reg(10), 0xF0);
    assert_eq!(ctx.get_reg(11), 0x1_0000_0000);
    assert_eq!(ctx.get_reg(12), 0xFFFF_FFFF_0000_0000);
}

#[test]
fn test_wide_immediate_shift_is_unrecognized() {
    // srai with shamt 33 sets bit 25, which is not a valid funct7.
    let mut ctx = TestContext::new().with_program(&[ib().srai(5, 6, 33).build()]);

    let err = ctx.step().unwrap_err();
    assert!(err.is_unrecognized_instruction());
}

#[test]
fn test_slli_masks_shift_amount_to_five_bits() {
    // shamt 36 sets bit 25; only the low five bits (4) are applied.
    let mut ctx = TestContext::new().with_program(&[ib().slli(5, 6, 36).build()]);
    ctx.set_reg(6, 1);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(5), 16);
}

#[test]
fn test_register_ops_ignore_funct7_outside_add_and_shift_right() {
    let program = [
        ib().sll(5, 6, 7).funct7(0x01).build(),
        ib().slt(8, 9, 6).funct7(0x20).build(),
        ib().and(10, 7, 7).funct7(0x7F).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);
    ctx.set_reg(6, 1);
    ctx.set_reg(7, 4);
    ctx.set_reg(9, (-3_i64) as u64);

    ctx.run(program.len() as u64).unwrap();

    assert_eq!(ctx.get_reg(5), 16);
    assert_eq!(ctx.get_reg(8), 1);
    assert_eq!(ctx.get_reg(10), 4);
    assert!(!ctx.cpu.is_halted());
}

// ══════════════════════════════════════════════════════════
// Register zero
// ══════════════════════════════════════════════════════════

#[test]
fn test_x0_reads_zero_after_write() {
    let mut ctx = TestContext::new().with_program(&[
        ib().addi(0, 0, 5).build(),
        ib().add(6, 0, 0).build(),
    ]);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.cpu.regs.raw(0), 5);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.regs.raw(0), 0);
    assert_eq!(ctx.get_reg(6), 0);
}

// ══════════════════════════════════════════════════════════
// Stores
// ══════════════════════════════════════════════════════════

#[test]
fn test_sd_then_load() {
    let mut ctx = TestContext::new().with_program(&[ib().sd(6, 5, 8).build()]);
    let addr = ctx.base() + 0x100;
    ctx.set_reg(5, addr);
    ctx.set_reg(6, 0x0123_4567_89AB_CDEF);

    let _ = ctx.step().unwrap();
    assert_eq!(
        ctx.cpu.load(addr + 8, AccessWidth::Double).unwrap(),
        0x0123_4567_89AB_CDEF
    );
}

#[test]
fn test_store_widths_write_low_bits_only() {
    let program = [
        ib().sb(6, 5, 0).build(),
        ib().sh(6, 5, 8).build(),
        ib().sw(6, 5, 16).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);
    let addr = ctx.base() + 0x200;
    ctx.set_reg(5, addr);
    ctx.set_reg(6, 0x1122_3344_5566_7788);

    ctx.run(program.len() as u64).unwrap();

    assert_eq!(ctx.cpu.load(addr, AccessWidth::Double).unwrap(), 0x88);
    assert_eq!(ctx.cpu.load(addr + 8, AccessWidth::Double).unwrap(), 0x7788);
    assert_eq!(ctx.cpu.load(addr + 16, AccessWidth::Double).unwrap(), 0x5566_7788);
}

#[test]
fn test_store_negative_offset() {
    let mut ctx = TestContext::new().with_program(&[ib().sw(6, 5, -4).build()]);
    let addr = ctx.base() + 0x300;
    ctx.set_reg(5, addr);
    ctx.set_reg(6, 0xCAFE_BABE);

    let _ = ctx.step().unwrap();
    assert_eq!(ctx.cpu.load(addr - 4, AccessWidth::Word).unwrap(), 0xCAFE_BABE);
}

#[test]
fn test_store_out_of_bounds_halts() {
    let mut ctx = TestContext::new().with_program(&[ib().sd(6, 5, 0).build()]);
    let end = ctx.base() + TEST_RAM_SIZE as u64;
    ctx.set_reg(5, end - 4);
    ctx.set_reg(6, u64::MAX);

    let err = ctx.step().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(matches!(
        err,
        EmuError::Memory(MemError::OutOfBounds { width: AccessWidth::Double, .. })
    ));
    assert_eq!(ctx.cpu.state, HartState::Halted);
    assert_eq!(ctx.cpu.load(end - 4, AccessWidth::Word).unwrap(), 0);
}

// ══════════════════════════════════════════════════════════
// Step protocol
// ══════════════════════════════════════════════════════════

#[test]
fn test_end_to_end_add_program() {
    let mut ctx = TestContext::new().with_program(&[
        ib().addi(5, 0, 10).build(),
        ib().addi(6, 0, 20).build(),
        ib().add(7, 5, 6).build(),
    ]);

    ctx.run(3).unwrap();

    assert_eq!(ctx.get_reg(7), 30);
    assert_eq!(ctx.cpu.pc, ctx.base() + 12);
    assert_eq!(ctx.cpu.stats.steps, 3);
}

#[test]
fn test_unrecognized_instruction_halts_without_mutation() {
    let mut ctx = TestContext::new().with_program(&[0xFFFF_FFFF]);
    ctx.set_reg(5, 77);
    let before = ctx.cpu.regs.clone();
    let base = ctx.base();

    let err = ctx.step().unwrap_err();

    match err {
        EmuError::UnrecognizedInstruction {
            pc,
            raw,
            opcode,
            funct3,
            funct7,
        } => {
            assert_eq!(pc, base);
            assert_eq!(raw, 0xFFFF_FFFF);
            assert_eq!(opcode, 0x7F);
            assert_eq!(funct3, 0x7);
            assert_eq!(funct7, 0x7F);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ctx.cpu.regs, before);
    assert!(ctx.cpu.is_halted());
    assert_eq!(ctx.cpu.pc, base + 4);
    assert_eq!(ctx.cpu.stats.steps, 0);
}

#[test]
fn test_step_after_halt_is_noop() {
    let mut ctx = TestContext::new().with_program(&[ib().addi(5, 0, 1).build()]);
    ctx.cpu.halt();

    assert_eq!(ctx.step().unwrap(), HartState::Halted);
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.cpu.pc, ctx.base());
}

#[test]
fn test_fetch_out_of_bounds_halts() {
    let mut ctx = TestContext::new();
    ctx.cpu.pc = 0x1000;

    let err = ctx.step().unwrap_err();
    assert!(err.is_out_of_bounds());
    assert!(ctx.cpu.is_halted());
}

#[test]
fn test_zero_pc_sentinel_halts() {
    let mut config = Config::default();
    config.memory.ram_base = 0xFFFF_FFFF_FFFF_F000;
    config.memory.ram_size = 0x1000;
    let mut ctx = TestContext::with_config(config)
        .load_program(0xFFFF_FFFF_FFFF_FFFC, &[ib().addi(5, 0, 9).build()]);

    let state = ctx.step().unwrap();

    assert_eq!(state, HartState::Halted);
    assert_eq!(ctx.cpu.pc, 0);
    assert_eq!(ctx.get_reg(5), 9);
}

// ══════════════════════════════════════════════════════════
// Run loop
// ══════════════════════════════════════════════════════════

#[test]
fn test_run_stops_at_step_limit() {
    let mut ctx = TestContext::new().with_program(&[ib().addi(5, 5, 1).build(); 8]);

    let mut observed = 0;
    let reason = ctx.cpu.run(Some(5), |_| observed += 1).unwrap();

    assert_eq!(reason, ExitReason::StepLimit);
    assert_eq!(observed, 5);
    assert_eq!(ctx.get_reg(5), 5);
    assert!(!ctx.cpu.is_halted());
}

#[test]
fn test_run_until_sentinel() {
    let mut config = Config::default();
    config.memory.ram_base = 0xFFFF_FFFF_FFFF_F000;
    config.memory.ram_size = 0x1000;
    let program = [ib().addi(5, 0, 1).build(), ib().addi(6, 0, 2).build()];
    let mut ctx = TestContext::with_config(config).load_program(0xFFFF_FFFF_FFFF_FFF8, &program);

    let mut dumps = Vec::new();
    let reason = ctx.cpu.run(None, |cpu| dumps.push(cpu.regs.to_string())).unwrap();

    assert_eq!(reason, ExitReason::Halted);
    assert_eq!(dumps.len(), 2);
    assert_eq!(ctx.get_reg(6), 2);
}

#[test]
fn test_run_propagates_unrecognized_instruction() {
    let mut ctx = TestContext::new().with_program(&[ib().addi(5, 0, 1).build(), 0]);

    let err = ctx.cpu.run(None, |_| {}).unwrap_err();

    assert!(err.is_unrecognized_instruction());
    assert_eq!(ctx.get_reg(5), 1);
    assert!(ctx.cpu.is_halted());
}

#[test]
fn test_stats_count_classes() {
    let program = [
        ib().addi(5, 0, 1).build(),
        ib().add(6, 5, 5).build(),
        ib().sd(6, 2, -8).build(),
        ib().srai(7, 6, 1).build(),
    ];
    let mut ctx = TestContext::new().with_program(&program);

    ctx.run(program.len() as u64).unwrap();

    let stats = &ctx.cpu.stats;
    assert_eq!(stats.steps, 4);
    assert_eq!(stats.inst_reg, 1);
    assert_eq!(stats.inst_imm, 2);
    assert_eq!(stats.inst_store, 1);
}
