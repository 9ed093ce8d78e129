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

use crate::debug::DebugEvent;
use crate::emulator_core::Peripherals;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::ppu::ppu::Mode;
use crate::utils::{get_high, get_low, to_u16};


/// The number of bytes transferred by a single OAM DMA transfer.
const OAM_DMA_LENGTH: u16 = 160;


/// The memory management unit routing each bus access to the component
/// owning the addressed location. The MMU also applies the access
/// limitations of video and object attribute memory while the PPU is
/// using them, and performs OAM DMA transfers.
pub struct Mmu {
    peripherals: Peripherals,

    /// The last value written into the DMA register.
    dma_register: u8,

    signals: MemoryBusSignals,
}


impl Mmu {
    /// Creates a new MMU connecting the given peripheral components.
    pub fn new(peripherals: Peripherals) -> Mmu {
        Mmu {
            peripherals,
            dma_register: 0xff,
            signals: MemoryBusSignals::default(),
        }
    }


    /// Get the peripheral components connected to the memory bus.
    pub fn get_peripherals(&self) -> &Peripherals {
        &self.peripherals
    }


    /// Get the peripheral components connected to the memory bus.
    pub fn get_peripherals_mut(&mut self) -> &mut Peripherals {
        &mut self.peripherals
    }


    /// Takes the signals collected since the last call.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Checks whether the CPU may access video and object attribute
    /// memory in the PPU's current mode. Both areas are taken by the PPU
    /// during OAM scan and while it draws the current scanline.
    fn is_video_memory_accessible(&self) -> bool {
        !matches!(
            self.peripherals.ppu.get_mode(),
            Mode::OamScan | Mode::DrawLine
        )
    }


    /// Performs an OAM DMA transfer, copying 160 bytes from the source
    /// page into the object attribute memory. The transfer bypasses the
    /// mode based OAM access limitation.
    fn do_oam_dma_transfer(&mut self, value: u8) {
        let source = (value as u16) << 8;

        for index in 0..OAM_DMA_LENGTH {
            let byte = self.read_u8(source + index);
            self.peripherals.ppu.write_oam_by_index(index as u8, byte);
        }
    }


    /// Read a single byte from the given address.
    pub fn read_u8(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_BANK_N_END => {
                self.peripherals.mem.on_read(address)
            }

            MEMORY_LOCATION_VRAM_BEGIN ..= MEMORY_LOCATION_VRAM_END => {
                if self.is_video_memory_accessible() {
                    self.peripherals.ppu.read_vram(address)
                }
                else {
                    0xff
                }
            }

            MEMORY_LOCATION_EXTERNAL_RAM_BEGIN ..= MEMORY_LOCATION_WRAM_ECHO_END => {
                self.peripherals.mem.on_read(address)
            }

            MEMORY_LOCATION_OAM_BEGIN ..= MEMORY_LOCATION_OAM_END => {
                if self.is_video_memory_accessible() {
                    self.peripherals.ppu.read_oam(address)
                }
                else {
                    0xff
                }
            }

            MEMORY_LOCATION_UNUSABLE_BEGIN ..= MEMORY_LOCATION_UNUSABLE_END => 0x00,

            MEMORY_LOCATION_JOYP => {
                self.peripherals.input.on_read(address)
            }

            MEMORY_LOCATION_DIV ..= MEMORY_LOCATION_TAC => {
                self.peripherals.timer.on_read(address)
            }

            MEMORY_LOCATION_INTERRUPTS_REQUESTED | MEMORY_LOCATION_INTERRUPTS_ENABLED => {
                self.peripherals.interrupts.on_read(address)
            }

            MEMORY_LOCATION_DMA => self.dma_register,

            MEMORY_LOCATION_LCD_CONTROL ..= MEMORY_LOCATION_WX => {
                self.peripherals.ppu.on_read(address)
            }

            MEMORY_LOCATION_BOOT_ROM_DISABLE => {
                self.peripherals.mem.on_read(address)
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.peripherals.mem.on_read(address)
            }

            _ => 0xff
        }
    }


    /// Writes a single byte to the given address.
    pub fn write_u8(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_ROM_BANK_0_BEGIN ..= MEMORY_LOCATION_ROM_BANK_N_END => {
                self.peripherals.mem.on_write(address, value);
            }

            MEMORY_LOCATION_VRAM_BEGIN ..= MEMORY_LOCATION_VRAM_END => {
                if self.is_video_memory_accessible() {
                    self.peripherals.ppu.write_vram(address, value);
                }
            }

            MEMORY_LOCATION_EXTERNAL_RAM_BEGIN ..= MEMORY_LOCATION_WRAM_ECHO_END => {
                self.peripherals.mem.on_write(address, value);
            }

            MEMORY_LOCATION_OAM_BEGIN ..= MEMORY_LOCATION_OAM_END => {
                if self.is_video_memory_accessible() {
                    self.peripherals.ppu.write_oam(address, value);
                }
            }

            MEMORY_LOCATION_UNUSABLE_BEGIN ..= MEMORY_LOCATION_UNUSABLE_END => { }

            MEMORY_LOCATION_JOYP => {
                self.peripherals.input.on_write(address, value);
            }

            MEMORY_LOCATION_DIV ..= MEMORY_LOCATION_TAC => {
                self.peripherals.timer.on_write(address, value);
            }

            MEMORY_LOCATION_INTERRUPTS_REQUESTED | MEMORY_LOCATION_INTERRUPTS_ENABLED => {
                self.peripherals.interrupts.on_write(address, value);
            }

            MEMORY_LOCATION_DMA => {
                self.dma_register = value;
                self.do_oam_dma_transfer(value);
            }

            MEMORY_LOCATION_LCD_CONTROL ..= MEMORY_LOCATION_WX => {
                self.peripherals.ppu.on_write(address, value);
            }

            MEMORY_LOCATION_BOOT_ROM_DISABLE => {
                self.peripherals.mem.on_write(address, value);
            }

            MEMORY_LOCATION_HRAM_BEGIN ..= MEMORY_LOCATION_HRAM_END => {
                self.peripherals.mem.on_write(address, value);
            }

            _ => {
                // DMG programs routinely touch IO locations without a
                // backing component; the value is dropped
                self.signals.events |= DebugEvent::UnmappedWrite;
            }
        }
    }


    /// Read a 16 bit value in little endian byte order from the given address.
    pub fn read_u16(&self, address: u16) -> u16 {
        let low  = self.read_u8(address);
        let high = self.read_u8(address.wrapping_add(1));

        to_u16(high, low)
    }


    /// Writes a 16 bit value in little endian byte order to the given address.
    pub fn write_u16(&mut self, address: u16, value: u16) {
        self.write_u8(address, get_low(value));
        self.write_u8(address.wrapping_add(1), get_high(value));
    }
}
