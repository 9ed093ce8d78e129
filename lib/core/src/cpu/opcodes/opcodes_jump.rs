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

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR16};
use crate::cpu::opcode::OpCodeContext;


/// The branch conditions of conditional jumps, calls and returns.
#[derive(Copy, Clone)]
enum Condition {
    NotZero,
    Zero,
    NotCarry,
    Carry,
}


impl Condition {
    /// Checks whether this condition is fulfilled by the current CPU flags.
    fn check(&self, cpu: &Cpu) -> bool {
        match self {
            Condition::NotZero  => !cpu.is_flag_set(CpuFlag::Zero),
            Condition::Zero     =>  cpu.is_flag_set(CpuFlag::Zero),
            Condition::NotCarry => !cpu.is_flag_set(CpuFlag::Carry),
            Condition::Carry    =>  cpu.is_flag_set(CpuFlag::Carry),
        }
    }
}


/// JR - jump relative to the address following the instruction.
/// The offset is always fetched, whether the branch is taken or not.
fn jump_relative(cpu: &mut Cpu, context: &mut OpCodeContext, condition: Option<Condition>) {
    let offset = cpu.fetch_i8();

    let take_branch = match condition {
        Some(condition) => condition.check(cpu),
        None            => true,
    };

    if take_branch {
        let target = cpu.get_instruction_pointer().wrapping_add(offset as u16);
        cpu.set_instruction_pointer(target);
        context.branch_taken();
    }
}


/// JP - jump to an immediate absolute address.
fn jump_absolute(cpu: &mut Cpu, context: &mut OpCodeContext, condition: Option<Condition>) {
    let target = cpu.fetch_u16();

    let take_branch = match condition {
        Some(condition) => condition.check(cpu),
        None            => true,
    };

    if take_branch {
        cpu.set_instruction_pointer(target);
        context.branch_taken();
    }
}


/// CALL - push the address of the next instruction and jump to an
/// immediate absolute address.
fn call_absolute(cpu: &mut Cpu, context: &mut OpCodeContext, condition: Option<Condition>) {
    let target = cpu.fetch_u16();

    let take_branch = match condition {
        Some(condition) => condition.check(cpu),
        None            => true,
    };

    if take_branch {
        let return_address = cpu.get_instruction_pointer();
        cpu.push_u16(return_address);
        cpu.set_instruction_pointer(target);
        context.branch_taken();
    }
}


/// RET - pop the return address from the stack.
fn return_from_call(cpu: &mut Cpu, context: &mut OpCodeContext, condition: Option<Condition>) {
    let take_branch = match condition {
        Some(condition) => condition.check(cpu),
        None            => true,
    };

    if take_branch {
        let return_address = cpu.pop_u16();
        cpu.set_instruction_pointer(return_address);
        context.branch_taken();
    }
}


/// RST - push the address of the next instruction and jump to one of
/// the fixed restart vectors in the first page.
fn restart(cpu: &mut Cpu, vector: u16) {
    let return_address = cpu.get_instruction_pointer();
    cpu.push_u16(return_address);
    cpu.set_instruction_pointer(vector);
}


pub fn jr_i8(cpu: &mut Cpu, context: &mut OpCodeContext)    { jump_relative(cpu, context, None); }
pub fn jr_nz_i8(cpu: &mut Cpu, context: &mut OpCodeContext) { jump_relative(cpu, context, Some(Condition::NotZero)); }
pub fn jr_z_i8(cpu: &mut Cpu, context: &mut OpCodeContext)  { jump_relative(cpu, context, Some(Condition::Zero)); }
pub fn jr_nc_i8(cpu: &mut Cpu, context: &mut OpCodeContext) { jump_relative(cpu, context, Some(Condition::NotCarry)); }
pub fn jr_c_i8(cpu: &mut Cpu, context: &mut OpCodeContext)  { jump_relative(cpu, context, Some(Condition::Carry)); }

pub fn jp_u16(cpu: &mut Cpu, context: &mut OpCodeContext)    { jump_absolute(cpu, context, None); }
pub fn jp_nz_u16(cpu: &mut Cpu, context: &mut OpCodeContext) { jump_absolute(cpu, context, Some(Condition::NotZero)); }
pub fn jp_z_u16(cpu: &mut Cpu, context: &mut OpCodeContext)  { jump_absolute(cpu, context, Some(Condition::Zero)); }
pub fn jp_nc_u16(cpu: &mut Cpu, context: &mut OpCodeContext) { jump_absolute(cpu, context, Some(Condition::NotCarry)); }
pub fn jp_c_u16(cpu: &mut Cpu, context: &mut OpCodeContext)  { jump_absolute(cpu, context, Some(Condition::Carry)); }


/// JP HL - jump to the address held by the HL register pair.
pub fn jp_hl(cpu: &mut Cpu, _: &mut OpCodeContext) {
    let target = cpu.get_r16(RegisterR16::HL);
    cpu.set_instruction_pointer(target);
}


pub fn call_u16(cpu: &mut Cpu, context: &mut OpCodeContext)    { call_absolute(cpu, context, None); }
pub fn call_nz_u16(cpu: &mut Cpu, context: &mut OpCodeContext) { call_absolute(cpu, context, Some(Condition::NotZero)); }
pub fn call_z_u16(cpu: &mut Cpu, context: &mut OpCodeContext)  { call_absolute(cpu, context, Some(Condition::Zero)); }
pub fn call_nc_u16(cpu: &mut Cpu, context: &mut OpCodeContext) { call_absolute(cpu, context, Some(Condition::NotCarry)); }
pub fn call_c_u16(cpu: &mut Cpu, context: &mut OpCodeContext)  { call_absolute(cpu, context, Some(Condition::Carry)); }

pub fn ret(cpu: &mut Cpu, context: &mut OpCodeContext)    { return_from_call(cpu, context, None); }
pub fn ret_nz(cpu: &mut Cpu, context: &mut OpCodeContext) { return_from_call(cpu, context, Some(Condition::NotZero)); }
pub fn ret_z(cpu: &mut Cpu, context: &mut OpCodeContext)  { return_from_call(cpu, context, Some(Condition::Zero)); }
pub fn ret_nc(cpu: &mut Cpu, context: &mut OpCodeContext) { return_from_call(cpu, context, Some(Condition::NotCarry)); }
pub fn ret_c(cpu: &mut Cpu, context: &mut OpCodeContext)  { return_from_call(cpu, context, Some(Condition::Carry)); }


/// RETI - return from an interrupt service routine,
/// setting the interrupt master enable flag immediately.
pub fn reti(cpu: &mut Cpu, context: &mut OpCodeContext) {
    return_from_call(cpu, context, None);
    cpu.set_ime(true);
}


pub fn rst_00h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0000); }
pub fn rst_08h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0008); }
pub fn rst_10h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0010); }
pub fn rst_18h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0018); }
pub fn rst_20h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0020); }
pub fn rst_28h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0028); }
pub fn rst_30h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0030); }
pub fn rst_38h(cpu: &mut Cpu, _: &mut OpCodeContext) { restart(cpu, 0x0038); }
