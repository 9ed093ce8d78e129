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

use crate::boot_rom::{BootRom, BOOT_ROM_SIZE};
use crate::mmu::locations::*;
use crate::mmu::memory_bus::MemoryBusConnection;
use crate::mmu::memory_data::{MemoryData, MemoryDataFixedSize};

#[cfg(feature = "dyn_alloc")]
use crate::cartridge::Cartridge;


type WRam        = MemoryDataFixedSize<0x2000>;
type ExternalRam = MemoryDataFixedSize<0x2000>;
type HRam        = MemoryDataFixedSize<0x7f>;


/// The memory component owning the plain storage areas of the device:
/// the boot ROM overlay, the cartridge ROM, working RAM, external
/// cartridge RAM and high RAM.
pub struct Memory {
    boot_rom: Option<BootRom>,

    /// Once cleared by a write into 0xff50, the boot ROM overlay is gone
    /// for good; there is no way to re-enable it.
    boot_rom_enabled: bool,

    #[cfg(feature = "dyn_alloc")]
    cartridge: Option<Cartridge>,

    wram: WRam,
    external_ram: ExternalRam,
    hram: HRam,
}


impl Memory {
    /// Creates a new memory component with empty RAM areas
    /// and neither boot ROM nor cartridge attached.
    pub fn new() -> Memory {
        Memory {
            boot_rom: None,
            boot_rom_enabled: false,

            #[cfg(feature = "dyn_alloc")]
            cartridge: None,

            wram:         WRam::new(),
            external_ram: ExternalRam::new(),
            hram:         HRam::new(),
        }
    }


    /// Set the boot ROM to be executed before the cartridge program.
    /// This also enables the boot ROM overlay.
    pub fn set_boot_rom(&mut self, boot_rom: BootRom) {
        self.boot_rom         = Some(boot_rom);
        self.boot_rom_enabled = true;
    }


    /// Checks whether a boot ROM is attached.
    pub fn has_boot_rom(&self) -> bool {
        self.boot_rom.is_some()
    }


    /// Checks whether the boot ROM overlay is currently visible.
    pub fn is_boot_rom_enabled(&self) -> bool {
        self.boot_rom_enabled
    }


    /// Insert a cartridge, which ROM will be executed.
    #[cfg(feature = "dyn_alloc")]
    pub fn set_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }


    /// Get the cartridge currently inserted, if any.
    #[cfg(feature = "dyn_alloc")]
    pub fn get_cartridge(&self) -> &Option<Cartridge> {
        &self.cartridge
    }


    /// Read a byte from the cartridge ROM area, honouring the boot ROM overlay.
    fn read_rom(&self, address: u16) -> u8 {
        if self.boot_rom_enabled && (address as usize) < BOOT_ROM_SIZE {
            if let Some(boot_rom) = &self.boot_rom {
                return boot_rom.read(address);
            }
        }

        #[cfg(feature = "dyn_alloc")]
        if let Some(cartridge) = &self.cartridge {
            return cartridge.read_rom(address);
        }

        0xff
    }
}


impl MemoryBusConnection for Memory {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_BANK_N_END => {
                self.read_rom(address)
            }

            MEMORY_LOCATION_EXTERNAL_RAM_BEGIN ..= MEMORY_LOCATION_EXTERNAL_RAM_END => {
                self.external_ram.get_at((address - MEMORY_LOCATION_EXTERNAL_RAM_BEGIN) as usize)
            }

            MEMORY_LOCATION_WRAM_BEGIN ..= MEMORY_LOCATION_WRAM_END => {
                self.wram.get_at((address - MEMORY_LOCATION_WRAM_BEGIN) as usize)
            }

            // echo RAM aliases 0xc000-0xddff
            MEMORY_LOCATION_WRAM_ECHO_BEGIN ..= MEMORY_LOCATION_WRAM_ECHO_END => {
                self.wram.get_at((address - MEMORY_LOCATION_WRAM_ECHO_BEGIN) as usize)
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.hram.get_at((address - MEMORY_LOCATION_HRAM_BEGIN) as usize)
            }

            MEMORY_LOCATION_BOOT_ROM_DISABLE => 0xff,

            _ => 0xff
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_BANK_N_END => {
                // writes into the ROM area address the memory bank controller;
                // flat ROM cartridges have none, so the value is dropped
            }

            MEMORY_LOCATION_EXTERNAL_RAM_BEGIN ..= MEMORY_LOCATION_EXTERNAL_RAM_END => {
                self.external_ram.set_at((address - MEMORY_LOCATION_EXTERNAL_RAM_BEGIN) as usize, value);
            }

            MEMORY_LOCATION_WRAM_BEGIN ..= MEMORY_LOCATION_WRAM_END => {
                self.wram.set_at((address - MEMORY_LOCATION_WRAM_BEGIN) as usize, value);
            }

            MEMORY_LOCATION_WRAM_ECHO_BEGIN ..= MEMORY_LOCATION_WRAM_ECHO_END => {
                self.wram.set_at((address - MEMORY_LOCATION_WRAM_ECHO_BEGIN) as usize, value);
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.hram.set_at((address - MEMORY_LOCATION_HRAM_BEGIN) as usize, value);
            }

            MEMORY_LOCATION_BOOT_ROM_DISABLE => {
                // any write disables the overlay permanently
                self.boot_rom_enabled = false;
            }

            _ => { }
        }
    }
}
