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

//! Shared helpers for the emulator test suite.

use libdotmatrix::cartridge::{Cartridge, CARTRIDGE_HEADER_LOGO};
use libdotmatrix::emulator_core::{DeviceConfig, EmulatorCore, EmulatorUpdateResults};


/// The address test programs are loaded to; running from working RAM
/// does not need any cartridge to be present.
pub const TEST_PROGRAM_ADDRESS: u16 = 0xc000;


/// Creates a fresh emulator core without cartridge or boot ROM.
pub fn new_core() -> EmulatorCore {
    EmulatorCore::new(DeviceConfig::default())
}


/// Creates a fresh emulator core with a test program placed in working
/// RAM and the instruction pointer set to its first byte.
pub fn new_core_with_program(program: &[u8]) -> EmulatorCore {
    let mut core = new_core();
    load_program(&mut core, program);

    core
}


/// Places a program into working RAM and moves the instruction pointer
/// onto its first byte.
pub fn load_program(core: &mut EmulatorCore, program: &[u8]) {
    for (index, byte) in program.iter().enumerate() {
        core.get_mmu_mut().write_u8(TEST_PROGRAM_ADDRESS + (index as u16), *byte);
    }

    core.cpu.set_instruction_pointer(TEST_PROGRAM_ADDRESS);
}


/// Executes a number of single steps, accumulating the update results.
pub fn run_steps(core: &mut EmulatorCore, steps: usize) -> EmulatorUpdateResults {
    let mut results = EmulatorUpdateResults::default();

    for _ in 0..steps {
        results += core.run_single_step().unwrap();
    }

    results
}


/// Builds a minimal valid ROM image: correct logo bitmap, a title and
/// a matching header checksum, with the given bytes placed at the
/// program entry point 0x0100.
pub fn build_rom_image(entry: &[u8]) -> Vec<u8> {
    let mut image = vec![0u8; 0x8000];

    image[0x0104 .. 0x0134].copy_from_slice(&CARTRIDGE_HEADER_LOGO);
    image[0x0134 .. 0x0138].copy_from_slice(b"TEST");

    image[0x0100 .. 0x0100 + entry.len()].copy_from_slice(entry);

    image[0x014d] = Cartridge::compute_header_checksum(&image);

    image
}


/// Builds a cartridge from a minimal valid ROM image.
pub fn build_test_cartridge(entry: &[u8]) -> Cartridge {
    Cartridge::from_bytes(build_rom_image(entry)).unwrap()
}
