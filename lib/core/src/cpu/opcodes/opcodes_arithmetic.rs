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

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR8, RegisterR16};
use crate::cpu::opcode::OpCodeContext;
use crate::cpu::opcodes::opcodes_cb::{op_rl, op_rlc, op_rr, op_rrc};
use crate::cpu::opcodes::{read_hlptr, write_hlptr};
use crate::utils::{borrowing_sub_u8, carrying_add_u8};


/// Adds a value to the accumulator, with or without the incoming carry.
fn add_to_a(cpu: &mut Cpu, value: u8, with_carry: bool) {
    let carry_in = with_carry && cpu.is_flag_set(CpuFlag::Carry);
    let a        = cpu.get_r8(RegisterR8::A);

    let (result, half, carry) = carrying_add_u8(a, value, carry_in);

    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, half, carry);
}


/// Subtracts a value from the accumulator, with or without the incoming
/// carry. CP uses the same operation, just without storing the result.
fn sub_from_a(cpu: &mut Cpu, value: u8, with_carry: bool, store_result: bool) {
    let carry_in = with_carry && cpu.is_flag_set(CpuFlag::Carry);
    let a        = cpu.get_r8(RegisterR8::A);

    let (result, half, carry) = borrowing_sub_u8(a, value, carry_in);

    if store_result {
        cpu.set_r8(RegisterR8::A, result);
    }

    cpu.set_flags(result == 0, true, half, carry);
}


fn and_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) & value;
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, true, false);
}


fn xor_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) ^ value;
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, false, false);
}


fn or_with_a(cpu: &mut Cpu, value: u8) {
    let result = cpu.get_r8(RegisterR8::A) | value;
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flags(result == 0, false, false, false);
}


/// Increments a byte; the carry flag stays untouched.
fn increment_u8(cpu: &mut Cpu, value: u8) -> u8 {
    let (result, half, _) = carrying_add_u8(value, 1, false);

    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, half);

    result
}


/// Decrements a byte; the carry flag stays untouched.
fn decrement_u8(cpu: &mut Cpu, value: u8) -> u8 {
    let (result, half, _) = borrowing_sub_u8(value, 1, false);

    cpu.set_flag(CpuFlag::Zero,      result == 0);
    cpu.set_flag(CpuFlag::Negative,  true);
    cpu.set_flag(CpuFlag::HalfCarry, half);

    result
}


fn inc_r8(cpu: &mut Cpu, register: RegisterR8) {
    let value  = cpu.get_r8(register);
    let result = increment_u8(cpu, value);
    cpu.set_r8(register, result);
}


fn dec_r8(cpu: &mut Cpu, register: RegisterR8) {
    let value  = cpu.get_r8(register);
    let result = decrement_u8(cpu, value);
    cpu.set_r8(register, result);
}


fn inc_r16(cpu: &mut Cpu, register: RegisterR16) {
    let value = cpu.get_r16(register);
    cpu.set_r16(register, value.wrapping_add(1));
}


fn dec_r16(cpu: &mut Cpu, register: RegisterR16) {
    let value = cpu.get_r16(register);
    cpu.set_r16(register, value.wrapping_sub(1));
}


/// ADD HL, value: the zero flag stays untouched, half carry comes from
/// bit 11 and carry from bit 15.
fn add_to_hl(cpu: &mut Cpu, value: u16) {
    let hl     = cpu.get_r16(RegisterR16::HL);
    let result = (hl as u32) + (value as u32);
    let half   = ((hl & 0x0fff) + (value & 0x0fff)) > 0x0fff;

    cpu.set_r16(RegisterR16::HL, result as u16);

    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, half);
    cpu.set_flag(CpuFlag::Carry,     result > 0xffff);
}


pub fn inc_b(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::B); }
pub fn inc_c(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::C); }
pub fn inc_d(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::D); }
pub fn inc_e(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::E); }
pub fn inc_h(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::H); }
pub fn inc_l(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::L); }
pub fn inc_a(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r8(cpu, RegisterR8::A); }

pub fn dec_b(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::B); }
pub fn dec_c(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::C); }
pub fn dec_d(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::D); }
pub fn dec_e(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::E); }
pub fn dec_h(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::H); }
pub fn dec_l(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::L); }
pub fn dec_a(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r8(cpu, RegisterR8::A); }


/// INC (HL) - read, modify and write back the byte addressed by HL.
pub fn inc_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = read_hlptr(cpu);
    let result = increment_u8(cpu, value);
    write_hlptr(cpu, result);
}


/// DEC (HL) - read, modify and write back the byte addressed by HL.
pub fn dec_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = read_hlptr(cpu);
    let result = decrement_u8(cpu, value);
    write_hlptr(cpu, result);
}


pub fn inc_bc(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r16(cpu, RegisterR16::BC); }
pub fn inc_de(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r16(cpu, RegisterR16::DE); }
pub fn inc_hl(cpu: &mut Cpu, _: &mut OpCodeContext) { inc_r16(cpu, RegisterR16::HL); }
pub fn dec_bc(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r16(cpu, RegisterR16::BC); }
pub fn dec_de(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r16(cpu, RegisterR16::DE); }
pub fn dec_hl(cpu: &mut Cpu, _: &mut OpCodeContext) { dec_r16(cpu, RegisterR16::HL); }

pub fn inc_sp(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.get_stack_pointer();
    cpu.set_stack_pointer(value.wrapping_add(1));
}

pub fn dec_sp(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.get_stack_pointer();
    cpu.set_stack_pointer(value.wrapping_sub(1));
}


pub fn add_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); add_to_a(cpu, value, false); }
pub fn add_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); add_to_a(cpu, value, false); }
pub fn add_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); add_to_a(cpu, value, false); }
pub fn add_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); add_to_a(cpu, value, false); }
pub fn add_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); add_to_a(cpu, value, false); }
pub fn add_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); add_to_a(cpu, value, false); }
pub fn add_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); add_to_a(cpu, value, false); }
pub fn add_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); add_to_a(cpu, value, false); }
pub fn add_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); add_to_a(cpu, value, false); }

pub fn adc_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); add_to_a(cpu, value, true); }
pub fn adc_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); add_to_a(cpu, value, true); }
pub fn adc_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); add_to_a(cpu, value, true); }
pub fn adc_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); add_to_a(cpu, value, true); }
pub fn adc_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); add_to_a(cpu, value, true); }
pub fn adc_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); add_to_a(cpu, value, true); }
pub fn adc_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); add_to_a(cpu, value, true); }
pub fn adc_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); add_to_a(cpu, value, true); }
pub fn adc_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); add_to_a(cpu, value, true); }

pub fn sub_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); sub_from_a(cpu, value, false, true); }
pub fn sub_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); sub_from_a(cpu, value, false, true); }
pub fn sub_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); sub_from_a(cpu, value, false, true); }
pub fn sub_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); sub_from_a(cpu, value, false, true); }
pub fn sub_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); sub_from_a(cpu, value, false, true); }
pub fn sub_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); sub_from_a(cpu, value, false, true); }
pub fn sub_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); sub_from_a(cpu, value, false, true); }
pub fn sub_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); sub_from_a(cpu, value, false, true); }
pub fn sub_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); sub_from_a(cpu, value, false, true); }

pub fn sbc_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); sub_from_a(cpu, value, true, true); }
pub fn sbc_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); sub_from_a(cpu, value, true, true); }

pub fn and_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); and_with_a(cpu, value); }
pub fn and_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); and_with_a(cpu, value); }
pub fn and_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); and_with_a(cpu, value); }
pub fn and_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); and_with_a(cpu, value); }
pub fn and_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); and_with_a(cpu, value); }
pub fn and_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); and_with_a(cpu, value); }
pub fn and_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); and_with_a(cpu, value); }
pub fn and_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); and_with_a(cpu, value); }
pub fn and_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); and_with_a(cpu, value); }

pub fn xor_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); xor_with_a(cpu, value); }
pub fn xor_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); xor_with_a(cpu, value); }
pub fn xor_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); xor_with_a(cpu, value); }
pub fn xor_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); xor_with_a(cpu, value); }
pub fn xor_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); xor_with_a(cpu, value); }
pub fn xor_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); xor_with_a(cpu, value); }
pub fn xor_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); xor_with_a(cpu, value); }
pub fn xor_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); xor_with_a(cpu, value); }
pub fn xor_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); xor_with_a(cpu, value); }

pub fn or_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); or_with_a(cpu, value); }
pub fn or_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); or_with_a(cpu, value); }
pub fn or_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); or_with_a(cpu, value); }
pub fn or_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); or_with_a(cpu, value); }
pub fn or_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); or_with_a(cpu, value); }
pub fn or_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); or_with_a(cpu, value); }
pub fn or_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); or_with_a(cpu, value); }
pub fn or_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); or_with_a(cpu, value); }
pub fn or_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); or_with_a(cpu, value); }

pub fn cp_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); sub_from_a(cpu, value, false, false); }
pub fn cp_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); sub_from_a(cpu, value, false, false); }
pub fn cp_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); sub_from_a(cpu, value, false, false); }
pub fn cp_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); sub_from_a(cpu, value, false, false); }
pub fn cp_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); sub_from_a(cpu, value, false, false); }
pub fn cp_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); sub_from_a(cpu, value, false, false); }
pub fn cp_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); sub_from_a(cpu, value, false, false); }
pub fn cp_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); sub_from_a(cpu, value, false, false); }
pub fn cp_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.fetch_u8(); sub_from_a(cpu, value, false, false); }


pub fn add_hl_bc(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::BC); add_to_hl(cpu, value); }
pub fn add_hl_de(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::DE); add_to_hl(cpu, value); }
pub fn add_hl_hl(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r16(RegisterR16::HL); add_to_hl(cpu, value); }
pub fn add_hl_sp(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_stack_pointer(); add_to_hl(cpu, value); }


/// ADD SP, i8 - adds a signed offset to the stack pointer.
/// The flags are computed from the unsigned addition of the low bytes.
pub fn add_sp_i8(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.fetch_i8();
    let sp     = cpu.get_stack_pointer();
    let result = sp.wrapping_add(offset as u16);

    let half  = ((sp & 0x000f) + ((offset as u16) & 0x000f)) > 0x000f;
    let carry = ((sp & 0x00ff) + ((offset as u16) & 0x00ff)) > 0x00ff;

    cpu.set_stack_pointer(result);
    cpu.set_flags(false, false, half, carry);
}


/// DAA - adjusts the accumulator after BCD arithmetic, based on the
/// negative, half carry and carry flags of the preceding operation.
pub fn daa(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let mut a     = cpu.get_r8(RegisterR8::A);
    let mut carry = cpu.is_flag_set(CpuFlag::Carry);

    let negative   = cpu.is_flag_set(CpuFlag::Negative);
    let half_carry = cpu.is_flag_set(CpuFlag::HalfCarry);

    if !negative {
        if carry || a > 0x99 {
            a     = a.wrapping_add(0x60);
            carry = true;
        }

        if half_carry || (a & 0x0f) > 0x09 {
            a = a.wrapping_add(0x06);
        }
    }
    else {
        if carry {
            a = a.wrapping_sub(0x60);
        }

        if half_carry {
            a = a.wrapping_sub(0x06);
        }
    }

    cpu.set_r8(RegisterR8::A, a);

    cpu.set_flag(CpuFlag::Zero,      a == 0);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     carry);
}


/// CPL - complement the accumulator. Only the negative and half carry
/// flags are set; the carry flag stays untouched.
pub fn cpl_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.get_r8(RegisterR8::A);
    cpu.set_r8(RegisterR8::A, !value);

    cpu.set_flag(CpuFlag::Negative,  true);
    cpu.set_flag(CpuFlag::HalfCarry, true);
}


/// SCF - set the carry flag.
pub fn scf(cpu: &mut Cpu, _: &mut OpCodeContext) {
    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     true);
}


/// CCF - toggle the carry flag.
pub fn ccf(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let carry = cpu.is_flag_set(CpuFlag::Carry);

    cpu.set_flag(CpuFlag::Negative,  false);
    cpu.set_flag(CpuFlag::HalfCarry, false);
    cpu.set_flag(CpuFlag::Carry,     !carry);
}


/// RLCA - rotates the accumulator; unlike the 0xcb rotations,
/// the zero flag is always cleared.
pub fn rlc_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = cpu.get_r8(RegisterR8::A);
    let result = op_rlc(cpu, value);
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flag(CpuFlag::Zero, false);
}


/// RRCA - rotates the accumulator; the zero flag is always cleared.
pub fn rrc_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = cpu.get_r8(RegisterR8::A);
    let result = op_rrc(cpu, value);
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flag(CpuFlag::Zero, false);
}


/// RLA - rotates the accumulator through carry; the zero flag is always cleared.
pub fn rl_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = cpu.get_r8(RegisterR8::A);
    let result = op_rl(cpu, value);
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flag(CpuFlag::Zero, false);
}


/// RRA - rotates the accumulator through carry; the zero flag is always cleared.
pub fn rr_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value  = cpu.get_r8(RegisterR8::A);
    let result = op_rr(cpu, value);
    cpu.set_r8(RegisterR8::A, result);
    cpu.set_flag(CpuFlag::Zero, false);
}
