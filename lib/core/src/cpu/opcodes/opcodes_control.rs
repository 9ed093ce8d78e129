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

use crate::cpu::cpu::Cpu;
use crate::cpu::opcode::OpCodeContext;


/// NOP - does nothing.
pub fn nop(_cpu: &mut Cpu, _: &mut OpCodeContext) {
}


/// STOP - handled as a plain no-op which resets the divider register.
/// The low power mode of the real hardware is not entered.
pub fn stop(cpu: &mut Cpu, _: &mut OpCodeContext) {
    cpu.get_mmu_mut().get_peripherals_mut().timer.reset_divider();
}


/// HALT - the CPU idles until an interrupt becomes pending.
pub fn halt(cpu: &mut Cpu, _: &mut OpCodeContext) {
    cpu.enter_halt();
}


/// DI - clears the interrupt master enable flag immediately.
pub fn disable_interrupts(cpu: &mut Cpu, _: &mut OpCodeContext) {
    cpu.set_ime(false);
}


/// EI - schedules the interrupt master enable flag to be set after
/// the following instruction was executed.
pub fn enable_interrupts(cpu: &mut Cpu, _: &mut OpCodeContext) {
    cpu.schedule_ime();
}
