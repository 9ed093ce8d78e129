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

use flagset::{flags, FlagSet};

use crate::mmu::locations::*;
use crate::mmu::memory_bus::MemoryBusConnection;


/// Mask of the interrupt bits actually backed by an interrupt source.
const INTERRUPT_BITS_MASK: u8 = 0x1f;

/// The unused upper bits of the IF register always read as set.
const INTERRUPTS_REQUESTED_UNUSED_BITS: u8 = 0xe0;


flags! {
    /// The interrupt sources of the device, ordered by their priority.
    /// The flag value of each entry matches its bit within the IE and IF
    /// registers.
    pub enum Interrupt: u8 {
        VBlank  = 0b_0000_0001,
        LcdStat = 0b_0000_0010,
        Timer   = 0b_0000_0100,
        Serial  = 0b_0000_1000,
        Joypad  = 0b_0001_0000,
    }
}


impl Interrupt {
    /// Get the bit of this interrupt within the IE and IF registers.
    pub fn bit(&self) -> u8 {
        match self {
            Interrupt::VBlank  => 0,
            Interrupt::LcdStat => 1,
            Interrupt::Timer   => 2,
            Interrupt::Serial  => 3,
            Interrupt::Joypad  => 4,
        }
    }


    /// Get the address of the interrupt service routine the CPU jumps to
    /// when this interrupt gets serviced.
    pub fn address(&self) -> u16 {
        match self {
            Interrupt::VBlank  => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer   => 0x0050,
            Interrupt::Serial  => 0x0058,
            Interrupt::Joypad  => 0x0060,
        }
    }
}


/// The interrupt controller holding the IE and IF registers.
/// Components request interrupts through the signal collection of the
/// emulator loop; the CPU queries and acknowledges pending interrupts
/// before fetching the next instruction.
pub struct InterruptRegisters {
    /// The IE register at 0xffff.
    interrupts_enabled: u8,

    /// The IF register at 0xff0f.
    interrupts_requested: u8,
}


impl InterruptRegisters {
    pub fn new() -> InterruptRegisters {
        InterruptRegisters {
            interrupts_enabled:   0x00,
            interrupts_requested: 0x00,
        }
    }


    /// Adds a set of interrupts to the pending interrupts of the IF register.
    pub fn request_interrupts(&mut self, interrupts: FlagSet<Interrupt>) {
        self.interrupts_requested |= interrupts.bits();
    }


    /// Get the pending interrupt with the highest priority, which is both
    /// requested in IF and enabled in IE, if any.
    pub fn get_pending(&self) -> Option<Interrupt> {
        let pending = self.interrupts_enabled & self.interrupts_requested & INTERRUPT_BITS_MASK;

        FlagSet::<Interrupt>::new_truncated(pending)
            .into_iter()
            .next()
    }


    /// Checks whether any interrupt is both requested and enabled.
    /// This is the condition waking the CPU from HALT state, independent
    /// of the CPU's master enable flag.
    pub fn has_pending(&self) -> bool {
        (self.interrupts_enabled & self.interrupts_requested & INTERRUPT_BITS_MASK) != 0
    }


    /// Acknowledges a single interrupt when it gets serviced,
    /// clearing only its bit within the IF register.
    pub fn acknowledge(&mut self, interrupt: Interrupt) {
        self.interrupts_requested &= !(interrupt as u8);
    }
}


impl MemoryBusConnection for InterruptRegisters {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_INTERRUPTS_REQUESTED => {
                INTERRUPTS_REQUESTED_UNUSED_BITS | self.interrupts_requested
            }

            MEMORY_LOCATION_INTERRUPTS_ENABLED => {
                self.interrupts_enabled
            }

            _ => 0xff
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_INTERRUPTS_REQUESTED => {
                self.interrupts_requested = value & INTERRUPT_BITS_MASK;
            }

            MEMORY_LOCATION_INTERRUPTS_ENABLED => {
                self.interrupts_enabled = value;
            }

            _ => { }
        }
    }
}
