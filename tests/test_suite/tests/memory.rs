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

use libdotmatrix::debug::DebugEvent;

use testrunner::*;


#[test]
fn wram_echo_aliases_wram() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(0xc123, 0xab);
    assert_eq!(core.get_mmu().read_u8(0xe123), 0xab);

    core.get_mmu_mut().write_u8(0xfdff, 0xcd);
    assert_eq!(core.get_mmu().read_u8(0xddff), 0xcd);
}


#[test]
fn hram_roundtrip() {
    let mut core = new_core();

    for offset in 0..0x7fu16 {
        core.get_mmu_mut().write_u8(0xff80 + offset, offset as u8);
    }

    for offset in 0..0x7fu16 {
        assert_eq!(core.get_mmu().read_u8(0xff80 + offset), offset as u8);
    }
}


#[test]
fn external_ram_roundtrip() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(0xa000, 0x11);
    core.get_mmu_mut().write_u8(0xbfff, 0x22);

    assert_eq!(core.get_mmu().read_u8(0xa000), 0x11);
    assert_eq!(core.get_mmu().read_u8(0xbfff), 0x22);
}


#[test]
fn unusable_region_reads_zero() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(0xfea0, 0xff);
    assert_eq!(core.get_mmu().read_u8(0xfea0), 0x00);
    assert_eq!(core.get_mmu().read_u8(0xfeff), 0x00);
}


#[test]
fn unmapped_io_reads_ff_and_drops_writes() {
    let mut core = new_core();

    assert_eq!(core.get_mmu().read_u8(0xff7f), 0xff);

    core.get_mmu_mut().write_u8(0xff7f, 0x12);
    assert_eq!(core.get_mmu().read_u8(0xff7f), 0xff);

    // the dropped write gets reported as an event
    let signals = core.get_mmu_mut().take_signals();
    assert!(signals.events.contains(DebugEvent::UnmappedWrite));
}


#[test]
fn rom_area_without_cartridge_reads_ff() {
    let core = new_core();

    assert_eq!(core.get_mmu().read_u8(0x0000), 0xff);
    assert_eq!(core.get_mmu().read_u8(0x7fff), 0xff);

    // writes into the ROM area are dropped silently
    let mut core = new_core();
    core.get_mmu_mut().write_u8(0x4000, 0x55);
    assert_eq!(core.get_mmu().read_u8(0x4000), 0xff);
}


#[test]
fn cartridge_rom_is_readable_through_the_bus() {
    let mut core = new_core();
    core.get_peripherals_mut().mem.set_cartridge(
        build_test_cartridge(&[0x00, 0xc3, 0x50, 0x01])
    );

    assert_eq!(core.get_mmu().read_u8(0x0100), 0x00);
    assert_eq!(core.get_mmu().read_u8(0x0101), 0xc3);
    assert_eq!(core.get_mmu().read_u16(0x0102), 0x0150);

    // writes do not change the ROM
    core.get_mmu_mut().write_u8(0x0101, 0x00);
    assert_eq!(core.get_mmu().read_u8(0x0101), 0xc3);
}
