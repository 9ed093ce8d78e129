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

//! Well known locations within the device's 16 bit address space.

pub const MEMORY_LOCATION_ROM_BANK_0_BEGIN:       u16 = 0x0000;
pub const MEMORY_LOCATION_ROM_BANK_0_END:         u16 = 0x3fff;
pub const MEMORY_LOCATION_ROM_BANK_N_BEGIN:       u16 = 0x4000;
pub const MEMORY_LOCATION_ROM_BANK_N_END:         u16 = 0x7fff;
pub const MEMORY_LOCATION_VRAM_BEGIN:             u16 = 0x8000;
pub const MEMORY_LOCATION_VRAM_END:               u16 = 0x9fff;
pub const MEMORY_LOCATION_EXTERNAL_RAM_BEGIN:     u16 = 0xa000;
pub const MEMORY_LOCATION_EXTERNAL_RAM_END:       u16 = 0xbfff;
pub const MEMORY_LOCATION_WRAM_BEGIN:             u16 = 0xc000;
pub const MEMORY_LOCATION_WRAM_END:               u16 = 0xdfff;
pub const MEMORY_LOCATION_WRAM_ECHO_BEGIN:        u16 = 0xe000;
pub const MEMORY_LOCATION_WRAM_ECHO_END:          u16 = 0xfdff;
pub const MEMORY_LOCATION_OAM_BEGIN:              u16 = 0xfe00;
pub const MEMORY_LOCATION_OAM_END:                u16 = 0xfe9f;
pub const MEMORY_LOCATION_UNUSABLE_BEGIN:         u16 = 0xfea0;
pub const MEMORY_LOCATION_UNUSABLE_END:           u16 = 0xfeff;
pub const MEMORY_LOCATION_HRAM_BEGIN:             u16 = 0xff80;
pub const MEMORY_LOCATION_HRAM_END:               u16 = 0xfffe;

pub const MEMORY_LOCATION_JOYP:                   u16 = 0xff00;
pub const MEMORY_LOCATION_DIV:                    u16 = 0xff04;
pub const MEMORY_LOCATION_TIMA:                   u16 = 0xff05;
pub const MEMORY_LOCATION_TMA:                    u16 = 0xff06;
pub const MEMORY_LOCATION_TAC:                    u16 = 0xff07;
pub const MEMORY_LOCATION_INTERRUPTS_REQUESTED:   u16 = 0xff0f;
pub const MEMORY_LOCATION_LCD_CONTROL:            u16 = 0xff40;
pub const MEMORY_LOCATION_LCD_STATUS:             u16 = 0xff41;
pub const MEMORY_LOCATION_SCY:                    u16 = 0xff42;
pub const MEMORY_LOCATION_SCX:                    u16 = 0xff43;
pub const MEMORY_LOCATION_LY:                     u16 = 0xff44;
pub const MEMORY_LOCATION_LYC:                    u16 = 0xff45;
pub const MEMORY_LOCATION_DMA:                    u16 = 0xff46;
pub const MEMORY_LOCATION_PALETTE_BG:             u16 = 0xff47;
pub const MEMORY_LOCATION_PALETTE_OBP0:           u16 = 0xff48;
pub const MEMORY_LOCATION_PALETTE_OBP1:           u16 = 0xff49;
pub const MEMORY_LOCATION_WY:                     u16 = 0xff4a;
pub const MEMORY_LOCATION_WX:                     u16 = 0xff4b;
pub const MEMORY_LOCATION_BOOT_ROM_DISABLE:       u16 = 0xff50;
pub const MEMORY_LOCATION_INTERRUPTS_ENABLED:     u16 = 0xffff;

/// Address of the cartridge header checksum within the ROM.
pub const MEMORY_LOCATION_HEADER_CHECKSUM:        u16 = 0x014d;

/// The address where the boot ROM hands over control to the cartridge.
pub const MEMORY_LOCATION_PROGRAM_START:          u16 = 0x0100;
