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

use testrunner::*;


const INTERRUPTS_REQUESTED: u16 = 0xff0f;
const INTERRUPTS_ENABLED:   u16 = 0xffff;


#[test]
fn interrupt_vectoring() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED,   0x01);
    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x01);
    core.cpu.set_ime(true);
    core.cpu.set_instruction_pointer(0x2000);
    core.cpu.set_stack_pointer(0xdff0);

    let results = core.run_single_step().unwrap();

    assert_eq!(results.cycles, 5);
    assert!(!core.cpu.is_ime_enabled());
    assert_eq!(core.get_mmu().read_u8(INTERRUPTS_REQUESTED), 0xe0);
    assert_eq!(core.cpu.get_stack_pointer(), 0xdfee);
    assert_eq!(core.get_mmu().read_u8(0xdfee), 0x00);
    assert_eq!(core.get_mmu().read_u8(0xdfef), 0x20);
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0040);
}


#[test]
fn lowest_numbered_interrupt_wins() {
    let mut core = new_core();

    // timer (bit 2) and joypad (bit 4) pending
    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED,   0x1f);
    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x14);
    core.cpu.set_ime(true);
    core.cpu.set_stack_pointer(0xdff0);

    core.run_single_step().unwrap();

    // the timer got vectored and only its bit was cleared
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0050);
    assert_eq!(core.get_mmu().read_u8(INTERRUPTS_REQUESTED), 0xf0);
}


#[test]
fn ei_takes_effect_after_the_following_instruction() {
    let mut core = new_core_with_program(&[
        0xfb, // EI
        0x00, // NOP
        0x00, // NOP
    ]);

    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED,   0x01);
    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x01);
    core.cpu.set_stack_pointer(0xdff0);

    // EI itself does not enable the master flag yet
    run_steps(&mut core, 1);
    assert!(!core.cpu.is_ime_enabled());

    // the following instruction still executes without being interrupted
    run_steps(&mut core, 1);
    assert!(core.cpu.is_ime_enabled());
    assert_eq!(core.cpu.get_instruction_pointer(), TEST_PROGRAM_ADDRESS + 2);

    // now the pending interrupt gets dispatched
    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0040);
}


#[test]
fn di_clears_the_master_flag_immediately() {
    let mut core = new_core_with_program(&[
        0xf3, // DI
        0x00, // NOP
    ]);

    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED, 0x01);
    core.cpu.set_ime(true);

    run_steps(&mut core, 1);
    assert!(!core.cpu.is_ime_enabled());

    // an interrupt requested afterwards does not get dispatched
    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x01);
    run_steps(&mut core, 1);

    assert_eq!(core.cpu.get_instruction_pointer(), TEST_PROGRAM_ADDRESS + 2);
}


#[test]
fn reti_restores_the_master_flag() {
    let mut core = new_core_with_program(&[0xd9]); // RETI

    core.cpu.set_stack_pointer(0xdff0);
    core.cpu.push_u16(0xd000);

    let results = run_steps(&mut core, 1);

    assert_eq!(results.cycles, 4);
    assert!(core.cpu.is_ime_enabled());
    assert_eq!(core.cpu.get_instruction_pointer(), 0xd000);
}


#[test]
fn halt_wakes_on_pending_interrupt_without_dispatch() {
    let mut core = new_core_with_program(&[
        0x76, // HALT
        0x00, // NOP
    ]);

    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED, 0x04);

    run_steps(&mut core, 2);
    assert!(!core.cpu.is_running());

    // requesting the enabled interrupt wakes the CPU; with the master
    // flag cleared execution continues without vectoring
    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x04);
    run_steps(&mut core, 1);

    assert!(core.cpu.is_running());
    assert_eq!(core.cpu.get_instruction_pointer(), TEST_PROGRAM_ADDRESS + 2);

    // the request is still pending
    assert_eq!(core.get_mmu().read_u8(INTERRUPTS_REQUESTED), 0xe4);
}


#[test]
fn halted_cpu_dispatches_with_master_flag_set() {
    let mut core = new_core_with_program(&[0x76]); // HALT

    core.get_mmu_mut().write_u8(INTERRUPTS_ENABLED, 0x01);
    core.cpu.set_ime(true);
    core.cpu.set_stack_pointer(0xdff0);

    run_steps(&mut core, 2);
    assert!(!core.cpu.is_running());

    core.get_mmu_mut().write_u8(INTERRUPTS_REQUESTED, 0x01);
    let results = run_steps(&mut core, 1);

    assert_eq!(results.cycles, 5);
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0040);
    assert!(core.cpu.is_running());
}
