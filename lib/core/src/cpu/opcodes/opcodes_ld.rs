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

use crate::cpu::cpu::{Cpu, RegisterR8, RegisterR16};
use crate::cpu::opcode::OpCodeContext;
use crate::cpu::opcodes::{read_hlptr, write_hlptr};


/// Copies the value of one 8 bit register into another one.
fn ld_r8_r8(cpu: &mut Cpu, dst: RegisterR8, src: RegisterR8) {
    let value = cpu.get_r8(src);
    cpu.set_r8(dst, value);
}


/// Loads an immediate byte into a 8 bit register.
fn ld_r8_u8(cpu: &mut Cpu, dst: RegisterR8) {
    let value = cpu.fetch_u8();
    cpu.set_r8(dst, value);
}


/// Loads an immediate 16 bit value into a register pair.
fn ld_r16_u16(cpu: &mut Cpu, dst: RegisterR16) {
    let value = cpu.fetch_u16();
    cpu.set_r16(dst, value);
}


/// Stores the accumulator into the address held by a register pair.
fn ld_r16ptr_a(cpu: &mut Cpu, ptr: RegisterR16) {
    let address = cpu.get_r16(ptr);
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}


/// Loads the accumulator from the address held by a register pair.
fn ld_a_r16ptr(cpu: &mut Cpu, ptr: RegisterR16) {
    let address = cpu.get_r16(ptr);
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}


/// Pushes the value of a register pair onto the stack.
fn push_r16(cpu: &mut Cpu, src: RegisterR16) {
    let value = cpu.get_r16(src);
    cpu.push_u16(value);
}


/// Pops a value from the stack into a register pair.
fn pop_r16(cpu: &mut Cpu, dst: RegisterR16) {
    let value = cpu.pop_u16();
    cpu.set_r16(dst, value);
}


pub fn ld_b_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::B); }
pub fn ld_b_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::C); }
pub fn ld_b_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::D); }
pub fn ld_b_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::E); }
pub fn ld_b_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::H); }
pub fn ld_b_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::L); }
pub fn ld_b_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::B, RegisterR8::A); }

pub fn ld_c_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::B); }
pub fn ld_c_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::C); }
pub fn ld_c_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::D); }
pub fn ld_c_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::E); }
pub fn ld_c_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::H); }
pub fn ld_c_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::L); }
pub fn ld_c_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::C, RegisterR8::A); }

pub fn ld_d_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::B); }
pub fn ld_d_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::C); }
pub fn ld_d_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::D); }
pub fn ld_d_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::E); }
pub fn ld_d_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::H); }
pub fn ld_d_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::L); }
pub fn ld_d_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::D, RegisterR8::A); }

pub fn ld_e_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::B); }
pub fn ld_e_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::C); }
pub fn ld_e_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::D); }
pub fn ld_e_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::E); }
pub fn ld_e_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::H); }
pub fn ld_e_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::L); }
pub fn ld_e_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::E, RegisterR8::A); }

pub fn ld_h_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::B); }
pub fn ld_h_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::C); }
pub fn ld_h_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::D); }
pub fn ld_h_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::E); }
pub fn ld_h_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::H); }
pub fn ld_h_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::L); }
pub fn ld_h_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::H, RegisterR8::A); }

pub fn ld_l_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::B); }
pub fn ld_l_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::C); }
pub fn ld_l_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::D); }
pub fn ld_l_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::E); }
pub fn ld_l_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::H); }
pub fn ld_l_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::L); }
pub fn ld_l_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::L, RegisterR8::A); }

pub fn ld_a_b(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::B); }
pub fn ld_a_c(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::C); }
pub fn ld_a_d(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::D); }
pub fn ld_a_e(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::E); }
pub fn ld_a_h(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::H); }
pub fn ld_a_l(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::L); }
pub fn ld_a_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_r8(cpu, RegisterR8::A, RegisterR8::A); }


pub fn ld_b_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::B); }
pub fn ld_c_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::C); }
pub fn ld_d_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::D); }
pub fn ld_e_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::E); }
pub fn ld_h_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::H); }
pub fn ld_l_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::L); }
pub fn ld_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r8_u8(cpu, RegisterR8::A); }


pub fn ld_b_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::B, value); }
pub fn ld_c_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::C, value); }
pub fn ld_d_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::D, value); }
pub fn ld_e_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::E, value); }
pub fn ld_h_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::H, value); }
pub fn ld_l_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::L, value); }
pub fn ld_a_hlptr(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = read_hlptr(cpu); cpu.set_r8(RegisterR8::A, value); }

pub fn ld_hlptr_b(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::B); write_hlptr(cpu, value); }
pub fn ld_hlptr_c(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::C); write_hlptr(cpu, value); }
pub fn ld_hlptr_d(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::D); write_hlptr(cpu, value); }
pub fn ld_hlptr_e(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::E); write_hlptr(cpu, value); }
pub fn ld_hlptr_h(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::H); write_hlptr(cpu, value); }
pub fn ld_hlptr_l(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::L); write_hlptr(cpu, value); }
pub fn ld_hlptr_a(cpu: &mut Cpu, _: &mut OpCodeContext) { let value = cpu.get_r8(RegisterR8::A); write_hlptr(cpu, value); }


/// LD (HL), u8 - store an immediate byte into the address held by HL.
pub fn ld_hlptr_u8(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.fetch_u8();
    write_hlptr(cpu, value);
}


pub fn ld_bc_u16(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::BC); }
pub fn ld_de_u16(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::DE); }
pub fn ld_hl_u16(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r16_u16(cpu, RegisterR16::HL); }

pub fn ld_sp_u16(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.fetch_u16();
    cpu.set_stack_pointer(value);
}


pub fn ld_bcptr_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r16ptr_a(cpu, RegisterR16::BC); }
pub fn ld_deptr_a(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_r16ptr_a(cpu, RegisterR16::DE); }
pub fn ld_a_bcptr(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_a_r16ptr(cpu, RegisterR16::BC); }
pub fn ld_a_deptr(cpu: &mut Cpu, _: &mut OpCodeContext) { ld_a_r16ptr(cpu, RegisterR16::DE); }


/// LD (HL+), A - store the accumulator and increment HL afterwards.
pub fn ld_hlptri_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let hl    = cpu.get_r16(RegisterR16::HL);
    let value = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(hl, value);
    cpu.set_r16(RegisterR16::HL, hl.wrapping_add(1));
}


/// LD (HL-), A - store the accumulator and decrement HL afterwards.
pub fn ld_hlptrd_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let hl    = cpu.get_r16(RegisterR16::HL);
    let value = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(hl, value);
    cpu.set_r16(RegisterR16::HL, hl.wrapping_sub(1));
}


/// LD A, (HL+) - load the accumulator and increment HL afterwards.
pub fn ld_a_hlptri(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let hl    = cpu.get_r16(RegisterR16::HL);
    let value = cpu.get_mmu().read_u8(hl);
    cpu.set_r8(RegisterR8::A, value);
    cpu.set_r16(RegisterR16::HL, hl.wrapping_add(1));
}


/// LD A, (HL-) - load the accumulator and decrement HL afterwards.
pub fn ld_a_hlptrd(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let hl    = cpu.get_r16(RegisterR16::HL);
    let value = cpu.get_mmu().read_u8(hl);
    cpu.set_r8(RegisterR8::A, value);
    cpu.set_r16(RegisterR16::HL, hl.wrapping_sub(1));
}


/// LD (u16), SP - store the stack pointer at an immediate address.
pub fn ld_u16ptr_sp(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_stack_pointer();
    cpu.get_mmu_mut().write_u16(address, value);
}


/// LD (u16), A - store the accumulator at an immediate address.
pub fn ld_u16ptr_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(address, value);
}


/// LD A, (u16) - load the accumulator from an immediate address.
pub fn ld_a_u16ptr(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let address = cpu.fetch_u16();
    let value   = cpu.get_mmu().read_u8(address);
    cpu.set_r8(RegisterR8::A, value);
}


/// LDH (u8), A - store the accumulator into the IO page at 0xff00 + u8.
pub fn ldh_u8_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.fetch_u8();
    let value  = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(0xff00 + (offset as u16), value);
}


/// LDH A, (u8) - load the accumulator from the IO page at 0xff00 + u8.
pub fn ldh_a_u8(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.fetch_u8();
    let value  = cpu.get_mmu().read_u8(0xff00 + (offset as u16));
    cpu.set_r8(RegisterR8::A, value);
}


/// LD (C), A - store the accumulator into the IO page at 0xff00 + C.
pub fn ld_cptr_a(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.get_r8(RegisterR8::C);
    let value  = cpu.get_r8(RegisterR8::A);
    cpu.get_mmu_mut().write_u8(0xff00 + (offset as u16), value);
}


/// LD A, (C) - load the accumulator from the IO page at 0xff00 + C.
pub fn ld_a_cptr(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.get_r8(RegisterR8::C);
    let value  = cpu.get_mmu().read_u8(0xff00 + (offset as u16));
    cpu.set_r8(RegisterR8::A, value);
}


/// LD SP, HL - copy HL into the stack pointer.
pub fn ld_sp_hl(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let value = cpu.get_r16(RegisterR16::HL);
    cpu.set_stack_pointer(value);
}


/// LD HL, SP+i8 - load HL with the stack pointer plus a signed offset.
/// The flags are computed from the unsigned addition of the low bytes.
pub fn ld_hl_sp_i8(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let offset = cpu.fetch_i8();
    let sp     = cpu.get_stack_pointer();
    let result = sp.wrapping_add(offset as u16);

    let half  = ((sp & 0x000f) + ((offset as u16) & 0x000f)) > 0x000f;
    let carry = ((sp & 0x00ff) + ((offset as u16) & 0x00ff)) > 0x00ff;

    cpu.set_r16(RegisterR16::HL, result);
    cpu.set_flags(false, false, half, carry);
}


pub fn push_bc(cpu: &mut Cpu, _: &mut OpCodeContext) { push_r16(cpu, RegisterR16::BC); }
pub fn push_de(cpu: &mut Cpu, _: &mut OpCodeContext) { push_r16(cpu, RegisterR16::DE); }
pub fn push_hl(cpu: &mut Cpu, _: &mut OpCodeContext) { push_r16(cpu, RegisterR16::HL); }
pub fn push_af(cpu: &mut Cpu, _: &mut OpCodeContext) { push_r16(cpu, RegisterR16::AF); }

pub fn pop_bc(cpu: &mut Cpu, _: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::BC); }
pub fn pop_de(cpu: &mut Cpu, _: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::DE); }
pub fn pop_hl(cpu: &mut Cpu, _: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::HL); }

/// POP AF - the lower four bits of F are not backed by anything
/// and stay zero, whatever was on the stack.
pub fn pop_af(cpu: &mut Cpu, _: &mut OpCodeContext) { pop_r16(cpu, RegisterR16::AF); }
