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
use crate::mmu::locations::MEMORY_LOCATION_JOYP;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::utils::get_bit;


/// The column select bit choosing the direction keys (active low).
const JOYP_BIT_SELECT_DIRECTIONS: u8 = 4;

/// The column select bit choosing the action keys (active low).
const JOYP_BIT_SELECT_ACTIONS: u8 = 5;

/// The unused upper bits of the JOYP register always read as set.
const JOYP_UNUSED_BITS: u8 = 0xc0;


/// The buttons of the device.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Right,
    Left,
    Up,
    Down,
}


/// The two key columns addressed through the JOYP select bits.
#[derive(Copy, Clone, PartialEq, Eq)]
enum ButtonColumn {
    Actions,
    Directions,
}


/// The joypad peripheral. The host delivers button state changes between
/// instruction steps; the CPU reads them through the JOYP register, four
/// keys at a time, selected by the column bits it wrote before.
pub struct Input {
    /// The column select bits 4-5 as written by the CPU.
    column_select: u8,

    /// Pressed state of the action keys A, B, Select, Start (bits 0-3, 1 = pressed).
    pressed_actions: u8,

    /// Pressed state of the direction keys Right, Left, Up, Down (bits 0-3, 1 = pressed).
    pressed_directions: u8,

    signals: MemoryBusSignals,
}


impl Button {
    /// Get the column this button is wired to.
    fn column(&self) -> ButtonColumn {
        match self {
            Button::A | Button::B | Button::Select | Button::Start => ButtonColumn::Actions,
            _                                                      => ButtonColumn::Directions,
        }
    }


    /// Get the bit of this button within its column nibble.
    fn bit(&self) -> u8 {
        match self {
            Button::A      | Button::Right => 0,
            Button::B      | Button::Left  => 1,
            Button::Select | Button::Up    => 2,
            Button::Start  | Button::Down  => 3,
        }
    }
}


impl Input {
    pub fn new() -> Input {
        Input {
            // no column selected after power on
            column_select: (1 << JOYP_BIT_SELECT_DIRECTIONS) | (1 << JOYP_BIT_SELECT_ACTIONS),

            pressed_actions:    0x00,
            pressed_directions: 0x00,

            signals: MemoryBusSignals::default(),
        }
    }


    /// Set the pressed state of a single button.
    /// To be called by the host between instruction steps. A transition
    /// from released to pressed requests the joypad interrupt when the
    /// button's column is currently selected.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        let mask   = 1 << button.bit();
        let column = button.column();

        let keys = match column {
            ButtonColumn::Actions    => &mut self.pressed_actions,
            ButtonColumn::Directions => &mut self.pressed_directions,
        };

        let was_pressed = (*keys & mask) != 0;

        if pressed {
            *keys |= mask;
        }
        else {
            *keys &= !mask;
        }

        if pressed && !was_pressed && self.is_column_selected(column) {
            self.signals.interrupts |= Interrupt::Joypad;
        }
    }


    /// Checks whether a button is currently pressed.
    pub fn is_button_pressed(&self, button: Button) -> bool {
        let mask = 1 << button.bit();

        match button.column() {
            ButtonColumn::Actions    => (self.pressed_actions & mask)    != 0,
            ButtonColumn::Directions => (self.pressed_directions & mask) != 0,
        }
    }


    /// Takes the signals collected since the last call.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Checks whether a column is selected by its (active low) select bit.
    fn is_column_selected(&self, column: ButtonColumn) -> bool {
        match column {
            ButtonColumn::Actions    => !get_bit(self.column_select, JOYP_BIT_SELECT_ACTIONS),
            ButtonColumn::Directions => !get_bit(self.column_select, JOYP_BIT_SELECT_DIRECTIONS),
        }
    }
}


impl MemoryBusConnection for Input {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_JOYP => {
                // keys of the selected columns pull their line low;
                // with both columns selected the nibbles combine
                let mut keys = 0x00;

                if self.is_column_selected(ButtonColumn::Actions) {
                    keys |= self.pressed_actions;
                }

                if self.is_column_selected(ButtonColumn::Directions) {
                    keys |= self.pressed_directions;
                }

                JOYP_UNUSED_BITS | self.column_select | (!keys & 0x0f)
            }

            _ => 0xff
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_JOYP => {
                // only the column select bits are writable
                self.column_select = value & 0x30;
            }

            _ => { }
        }
    }
}
