/*
 * Copyright (C) 2022-2025 by Christian Fischer
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use libdotmatrix::cpu::cpu::{CpuFlag, RegisterR8, RegisterR16};
use libdotmatrix::emulator_core::EmulatorError;

use testrunner::*;


#[test]
fn add_sets_half_carry_and_carry() {
    let mut core = new_core_with_program(&[0x80]); // ADD A, B

    core.cpu.set_r8(RegisterR8::A, 0x3a);
    core.cpu.set_r8(RegisterR8::B, 0xc6);
    core.cpu.set_r8(RegisterR8::F, 0x00);

    let results = core.run_single_step().unwrap();

    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x00);
    assert_eq!(core.cpu.get_r8(RegisterR8::F), 0xb0);
    assert_eq!(results.cycles, 1);
}


#[test]
fn daa_adjusts_bcd_addition() {
    let mut core = new_core_with_program(&[0x80, 0x27]); // ADD A, B; DAA

    core.cpu.set_r8(RegisterR8::A, 0x45);
    core.cpu.set_r8(RegisterR8::B, 0x38);
    core.cpu.set_r8(RegisterR8::F, 0x00);

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x7d);

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x83);
    assert!(!core.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(!core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn bit_set_res_on_accumulator() {
    let mut core = new_core_with_program(&[
        0xcb, 0x47, // BIT 0, A
        0xcb, 0xc7, // SET 0, A
        0xcb, 0xbf, // RES 7, A
    ]);

    core.cpu.set_r8(RegisterR8::A, 0xfe);
    core.cpu.set_flag(CpuFlag::Carry, true);

    let results = run_steps(&mut core, 1);
    assert!(core.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!core.cpu.is_flag_set(CpuFlag::Negative));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));
    assert_eq!(results.cycles, 2);

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0xff);

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x7f);
}


#[test]
fn register_roundtrip() {
    let mut core = new_core();

    let registers = [
        RegisterR8::A, RegisterR8::B, RegisterR8::C, RegisterR8::D,
        RegisterR8::E, RegisterR8::H, RegisterR8::L,
    ];

    for register in registers {
        for value in 0 ..= 255u8 {
            core.cpu.set_r8(register, value);
            assert_eq!(core.cpu.get_r8(register), value);
        }
    }

    // the F register keeps its upper nibble only
    for value in 0 ..= 255u8 {
        core.cpu.set_r8(RegisterR8::F, value);
        assert_eq!(core.cpu.get_r8(RegisterR8::F), value & 0xf0);
    }
}


#[test]
fn pop_af_masks_flags() {
    let mut core = new_core_with_program(&[0xf1]); // POP AF

    core.cpu.set_stack_pointer(0xdff0);
    core.cpu.push_u16(0x12ff);

    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r16(RegisterR16::AF), 0x12f0);
    assert_eq!(core.cpu.get_stack_pointer(), 0xdff0);
}


#[test]
fn push_pop_restores_register_pair() {
    let mut core = new_core_with_program(&[
        0xc5, // PUSH BC
        0xd1, // POP DE
    ]);

    core.cpu.set_stack_pointer(0xdff0);
    core.cpu.set_r16(RegisterR16::BC, 0xbeef);

    run_steps(&mut core, 2);

    assert_eq!(core.cpu.get_r16(RegisterR16::DE), 0xbeef);
    assert_eq!(core.cpu.get_stack_pointer(), 0xdff0);
}


#[test]
fn pc_advances_by_encoded_length() {
    // (program, expected length)
    let cases: [(&[u8], u16); 6] = [
        (&[0x00],             1), // NOP
        (&[0x06, 0x42],       2), // LD B, u8
        (&[0x01, 0x34, 0x12], 3), // LD BC, u16
        (&[0xcb, 0x37],       2), // SWAP A
        (&[0x20, 0x10],       2), // JR NZ (untaken)
        (&[0xc6, 0x01],       2), // ADD A, u8
    ];

    for (program, length) in cases {
        let mut core = new_core_with_program(program);
        core.cpu.set_flag(CpuFlag::Zero, true); // keeps JR NZ untaken

        run_steps(&mut core, 1);

        assert_eq!(
            core.cpu.get_instruction_pointer(),
            TEST_PROGRAM_ADDRESS + length,
            "wrong length for opcode {:02x}", program[0]
        );
    }
}


#[test]
fn conditional_branch_cycles() {
    // JR Z taken: 3 cycles
    let mut core = new_core_with_program(&[0x28, 0x02]);
    core.cpu.set_flag(CpuFlag::Zero, true);
    assert_eq!(run_steps(&mut core, 1).cycles, 3);
    assert_eq!(core.cpu.get_instruction_pointer(), TEST_PROGRAM_ADDRESS + 4);

    // JR Z untaken: 2 cycles
    let mut core = new_core_with_program(&[0x28, 0x02]);
    core.cpu.set_flag(CpuFlag::Zero, false);
    assert_eq!(run_steps(&mut core, 1).cycles, 2);

    // CALL Z taken: 6 cycles, untaken: 3
    let mut core = new_core_with_program(&[0xcc, 0x00, 0xd0]);
    core.cpu.set_stack_pointer(0xdff0);
    core.cpu.set_flag(CpuFlag::Zero, true);
    assert_eq!(run_steps(&mut core, 1).cycles, 6);
    assert_eq!(core.cpu.get_instruction_pointer(), 0xd000);

    let mut core = new_core_with_program(&[0xcc, 0x00, 0xd0]);
    core.cpu.set_flag(CpuFlag::Zero, false);
    assert_eq!(run_steps(&mut core, 1).cycles, 3);

    // RET Z taken: 5 cycles, untaken: 2
    let mut core = new_core_with_program(&[0xc8]);
    core.cpu.set_stack_pointer(0xdff0);
    core.cpu.push_u16(0xd000);
    core.cpu.set_flag(CpuFlag::Zero, true);
    assert_eq!(run_steps(&mut core, 1).cycles, 5);
    assert_eq!(core.cpu.get_instruction_pointer(), 0xd000);

    let mut core = new_core_with_program(&[0xc8]);
    core.cpu.set_flag(CpuFlag::Zero, false);
    assert_eq!(run_steps(&mut core, 1).cycles, 2);
}


#[test]
fn call_pushes_return_address() {
    let mut core = new_core_with_program(&[0xcd, 0x00, 0xd0]); // CALL 0xd000

    core.cpu.set_stack_pointer(0xdff0);
    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_instruction_pointer(), 0xd000);
    assert_eq!(core.cpu.get_stack_pointer(), 0xdfee);
    assert_eq!(core.get_mmu().read_u16(0xdfee), (TEST_PROGRAM_ADDRESS + 3));
}


#[test]
fn inc_dec_leave_carry_untouched() {
    let mut core = new_core_with_program(&[0x3c, 0x3d]); // INC A; DEC A

    core.cpu.set_r8(RegisterR8::A, 0xff);
    core.cpu.set_flag(CpuFlag::Carry, true);

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x00);
    assert!(core.cpu.is_flag_set(CpuFlag::Zero));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));

    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0xff);
    assert!(core.cpu.is_flag_set(CpuFlag::Negative));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn add_hl_sets_carries_from_bit_11_and_15() {
    let mut core = new_core_with_program(&[0x09]); // ADD HL, BC

    core.cpu.set_r16(RegisterR16::HL, 0x8fff);
    core.cpu.set_r16(RegisterR16::BC, 0x7001);
    core.cpu.set_flag(CpuFlag::Zero, true);

    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r16(RegisterR16::HL), 0x0000);
    assert!(core.cpu.is_flag_set(CpuFlag::Zero)); // untouched
    assert!(!core.cpu.is_flag_set(CpuFlag::Negative));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn accumulator_rotations_clear_zero_flag() {
    let mut core = new_core_with_program(&[0x07]); // RLCA

    core.cpu.set_r8(RegisterR8::A, 0x80);
    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x01);
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));
    assert!(!core.cpu.is_flag_set(CpuFlag::Zero));

    // the 0xcb rotation on the other hand reports a zero result
    let mut core = new_core_with_program(&[0xcb, 0x07]); // RLC A
    core.cpu.set_r8(RegisterR8::A, 0x00);
    run_steps(&mut core, 1);

    assert!(core.cpu.is_flag_set(CpuFlag::Zero));
    assert!(!core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn swap_clears_carry() {
    let mut core = new_core_with_program(&[0xcb, 0x37]); // SWAP A

    core.cpu.set_r8(RegisterR8::A, 0xab);
    core.cpu.set_flag(CpuFlag::Carry, true);

    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0xba);
    assert!(!core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn cpl_leaves_carry_untouched() {
    let mut core = new_core_with_program(&[0x2f]); // CPL

    core.cpu.set_r8(RegisterR8::A, 0x35);
    core.cpu.set_flag(CpuFlag::Carry, true);

    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0xca);
    assert!(core.cpu.is_flag_set(CpuFlag::Negative));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));
}


#[test]
fn cb_operand_cycles() {
    // register operand: 2 cycles
    let mut core = new_core_with_program(&[0xcb, 0x00]); // RLC B
    assert_eq!(run_steps(&mut core, 1).cycles, 2);

    // (HL) operand: 4 cycles
    let mut core = new_core_with_program(&[0xcb, 0x06]); // RLC (HL)
    core.cpu.set_r16(RegisterR16::HL, 0xd000);
    assert_eq!(run_steps(&mut core, 1).cycles, 4);

    // BIT with (HL) operand: 3 cycles
    let mut core = new_core_with_program(&[0xcb, 0x46]); // BIT 0, (HL)
    core.cpu.set_r16(RegisterR16::HL, 0xd000);
    assert_eq!(run_steps(&mut core, 1).cycles, 3);
}


#[test]
fn ldh_targets_io_page() {
    let mut core = new_core_with_program(&[
        0xe0, 0x80, // LDH $ff80, A
        0xf0, 0x80, // LDH A, $ff80
    ]);

    core.cpu.set_r8(RegisterR8::A, 0x42);
    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(0xff80), 0x42);

    core.cpu.set_r8(RegisterR8::A, 0x00);
    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x42);
}


#[test]
fn ld_with_increment_and_decrement() {
    let mut core = new_core_with_program(&[
        0x22, // LD (HL+), A
        0x32, // LD (HL-), A
    ]);

    core.cpu.set_r16(RegisterR16::HL, 0xd000);
    core.cpu.set_r8(RegisterR8::A, 0x99);

    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(0xd000), 0x99);
    assert_eq!(core.cpu.get_r16(RegisterR16::HL), 0xd001);

    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(0xd001), 0x99);
    assert_eq!(core.cpu.get_r16(RegisterR16::HL), 0xd000);
}


#[test]
fn add_sp_uses_low_byte_carries() {
    let mut core = new_core_with_program(&[0xe8, 0x01]); // ADD SP, 1

    core.cpu.set_stack_pointer(0xdfff);
    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_stack_pointer(), 0xe000);
    assert!(!core.cpu.is_flag_set(CpuFlag::Zero));
    assert!(core.cpu.is_flag_set(CpuFlag::HalfCarry));
    assert!(core.cpu.is_flag_set(CpuFlag::Carry));

    // negative offset
    let mut core = new_core_with_program(&[0xf8, 0xff]); // LD HL, SP-1
    core.cpu.set_stack_pointer(0xd000);
    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_r16(RegisterR16::HL), 0xcfff);
}


#[test]
fn halt_idles_one_cycle_per_step() {
    let mut core = new_core_with_program(&[0x76]); // HALT

    run_steps(&mut core, 1);
    assert!(!core.cpu.is_running());

    let pc = core.cpu.get_instruction_pointer();
    let results = run_steps(&mut core, 3);

    assert_eq!(results.cycles, 3);
    assert_eq!(core.cpu.get_instruction_pointer(), pc);
}


#[test]
fn illegal_opcode_fails_the_step() {
    let mut core = new_core_with_program(&[0xd3]);

    let result = core.run_single_step();

    assert_eq!(
        result.unwrap_err(),
        EmulatorError::IllegalInstruction {
            opcode: 0xd3,
            pc:     TEST_PROGRAM_ADDRESS,
        }
    );
}
