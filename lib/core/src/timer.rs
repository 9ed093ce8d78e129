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

use crate::cpu::interrupts::Interrupt;
use crate::emulator_core::Clock;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::utils::get_bit;


/// Number of machine cycles between two increments of the DIV register.
/// The divider runs at 16384Hz, which is one tick every 64 machine cycles.
pub const TIMER_DIV_PERIOD: Clock = 64;

/// The unused upper bits of the TAC register always read as set.
const TIMER_CONTROL_UNUSED_BITS: u8 = 0xf8;


/// The timer peripheral consisting of the free running divider DIV and the
/// configurable counter TIMA, which reloads from TMA and requests the timer
/// interrupt when it overflows.
pub struct Timer {
    /// The DIV register at 0xff04.
    divider: u8,

    /// The TIMA register at 0xff05.
    counter: u8,

    /// The TMA register at 0xff06.
    modulo: u8,

    /// The TAC register at 0xff07.
    control: u8,

    /// Prescaler counting machine cycles towards the next DIV increment.
    divider_clock: Clock,

    /// Prescaler counting machine cycles towards the next TIMA increment.
    counter_clock: Clock,

    signals: MemoryBusSignals,
}


impl Timer {
    pub fn new() -> Timer {
        Timer {
            divider: 0,
            counter: 0,
            modulo:  0,
            control: 0,

            divider_clock: 0,
            counter_clock: 0,

            signals: MemoryBusSignals::default(),
        }
    }


    /// Updates the timer with the time passed since the last update.
    pub fn update(&mut self, cycles: Clock) {
        self.divider_clock += cycles;

        while self.divider_clock >= TIMER_DIV_PERIOD {
            self.divider_clock -= TIMER_DIV_PERIOD;
            self.divider        = self.divider.wrapping_add(1);
        }

        if !self.is_counter_enabled() {
            return;
        }

        let period = self.get_counter_period();
        self.counter_clock += cycles;

        while self.counter_clock >= period {
            self.counter_clock -= period;

            if self.counter == 0xff {
                // on overflow, the counter reloads from the modulo register
                // and requests the timer interrupt
                self.counter             = self.modulo;
                self.signals.interrupts |= Interrupt::Timer;
            }
            else {
                self.counter += 1;
            }
        }
    }


    /// Takes the signals collected since the last call.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Resets the divider and both internal prescalers.
    /// This happens on any write into the DIV register and on the
    /// STOP instruction.
    pub fn reset_divider(&mut self) {
        self.divider       = 0;
        self.divider_clock = 0;
        self.counter_clock = 0;
    }


    /// Checks whether the TIMA counter is enabled by TAC bit 2.
    fn is_counter_enabled(&self) -> bool {
        get_bit(self.control, 2)
    }


    /// Get the number of machine cycles between two TIMA increments,
    /// selected by the lower two bits of TAC.
    fn get_counter_period(&self) -> Clock {
        match self.control & 0x03 {
            0b00 => 256,    //   4096 Hz
            0b01 =>   4,    // 262144 Hz
            0b10 =>  16,    //  65536 Hz
            _    =>  64,    //  16384 Hz
        }
    }


    /// Get the current value of the DIV register.
    pub fn get_divider(&self) -> u8 {
        self.divider
    }


    /// Get the current value of the TIMA register.
    pub fn get_counter(&self) -> u8 {
        self.counter
    }
}


impl MemoryBusConnection for Timer {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_DIV  => self.divider,
            MEMORY_LOCATION_TIMA => self.counter,
            MEMORY_LOCATION_TMA  => self.modulo,
            MEMORY_LOCATION_TAC  => TIMER_CONTROL_UNUSED_BITS | self.control,
            _                    => 0xff,
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_DIV  => self.reset_divider(),
            MEMORY_LOCATION_TIMA => self.counter = value,
            MEMORY_LOCATION_TMA  => self.modulo  = value,
            MEMORY_LOCATION_TAC  => self.control = value & 0x07,
            _                    => { }
        }
    }
}
