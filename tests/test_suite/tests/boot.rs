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

use libdotmatrix::boot_rom::BootRom;
use libdotmatrix::cpu::cpu::{RegisterR8, RegisterR16};

use testrunner::*;


/// Builds a minimal boot ROM image: it disables the boot ROM overlay by
/// writing 0x01 into 0xff50 and hands over to the cartridge at 0x0100.
fn build_boot_rom() -> BootRom {
    let mut image = [0u8; 256];

    let program = [
        0x3e, 0x01,       // LD A, 0x01
        0xe0, 0x50,       // LDH $ff50, A
        0xc3, 0x00, 0x01, // JP 0x0100
    ];

    image[..program.len()].copy_from_slice(&program);

    BootRom::new(image)
}


#[test]
fn boot_rom_handoff() {
    let mut core = new_core();

    core.get_peripherals_mut().mem.set_boot_rom(build_boot_rom());
    core.get_peripherals_mut().mem.set_cartridge(
        build_test_cartridge(&[0x00, 0xc3, 0x50, 0x01]) // NOP; JP 0x0150
    );

    core.initialize();
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0000);
    assert!(core.get_peripherals().mem.is_boot_rom_enabled());

    // LD A; LDH -> the write into 0xff50 removes the overlay
    run_steps(&mut core, 2);
    assert!(!core.get_peripherals().mem.is_boot_rom_enabled());

    // JP hands over to the cartridge entry point
    run_steps(&mut core, 1);
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0100);

    // the cartridge program is now visible at 0x0000-0x00ff as well
    run_steps(&mut core, 2); // NOP; JP 0x0150
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0150);
}


#[test]
fn boot_rom_cannot_be_reenabled() {
    let mut core = new_core();

    core.get_peripherals_mut().mem.set_boot_rom(build_boot_rom());
    core.initialize();

    core.get_mmu_mut().write_u8(0xff50, 0x01);
    assert!(!core.get_peripherals().mem.is_boot_rom_enabled());

    core.get_mmu_mut().write_u8(0xff50, 0x00);
    assert!(!core.get_peripherals().mem.is_boot_rom_enabled());
}


#[test]
fn boot_rom_shadows_the_first_page_only() {
    let mut core = new_core();

    core.get_peripherals_mut().mem.set_boot_rom(build_boot_rom());
    core.get_peripherals_mut().mem.set_cartridge(
        build_test_cartridge(&[0xaa])
    );
    core.initialize();

    // below 0x0100 the boot ROM is visible
    assert_eq!(core.get_mmu().read_u8(0x0000), 0x3e);

    // above it the cartridge shines through
    assert_eq!(core.get_mmu().read_u8(0x0100), 0xaa);
}


#[test]
fn initialize_without_boot_rom_sets_documented_registers() {
    let mut core = new_core();

    core.get_peripherals_mut().mem.set_cartridge(
        build_test_cartridge(&[0x00])
    );
    core.initialize();

    assert_eq!(core.cpu.get_r8(RegisterR8::A), 0x01);
    assert_eq!(core.cpu.get_r8(RegisterR8::F), 0xb0);
    assert_eq!(core.cpu.get_r16(RegisterR16::BC), 0x0013);
    assert_eq!(core.cpu.get_r16(RegisterR16::DE), 0x00d8);
    assert_eq!(core.cpu.get_r16(RegisterR16::HL), 0x014d);
    assert_eq!(core.cpu.get_stack_pointer(), 0xfffe);
    assert_eq!(core.cpu.get_instruction_pointer(), 0x0100);

    // the LCD got enabled the way the boot ROM leaves it
    assert_eq!(core.get_mmu().read_u8(0xff40), 0x91);
}
