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

use flagset::FlagSet;

use crate::cpu::interrupts::Interrupt;
use crate::debug::DebugEvents;


/// A connection of a component to the memory bus.
/// Each component implementing this trait can receive read and write
/// operations for the memory locations routed to it by the MMU.
pub trait MemoryBusConnection {
    /// Called when a byte is read from a memory location owned by this component.
    fn on_read(&self, address: u16) -> u8;

    /// Called when a byte is written into a memory location owned by this component.
    fn on_write(&mut self, address: u16, value: u8);
}


/// A set of signals produced by components while the emulator is running.
/// Signals are collected after each instruction and carry both debug events
/// to be delivered to the caller and interrupts to be requested.
#[derive(Copy, Clone, Default)]
pub struct MemoryBusSignals {
    /// Any events occurred within a component.
    pub events: DebugEvents,

    /// Interrupts requested by a component.
    pub interrupts: FlagSet<Interrupt>,
}


impl core::ops::BitOr for MemoryBusSignals {
    type Output = MemoryBusSignals;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            events:     self.events     | rhs.events,
            interrupts: self.interrupts | rhs.interrupts,
        }
    }
}


impl core::ops::BitOrAssign for MemoryBusSignals {
    fn bitor_assign(&mut self, rhs: Self) {
        self.events     |= rhs.events;
        self.interrupts |= rhs.interrupts;
    }
}
