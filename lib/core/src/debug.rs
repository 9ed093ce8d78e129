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


flags! {
    /// Notable events which may occur while running the emulator.
    /// Events are collected by the emulator while processing and
    /// delivered to the caller along with each update result.
    pub enum DebugEvent: u8 {
        /// The PPU completed a frame by entering the vertical blank period.
        /// The LCD buffer now contains the finished image.
        PpuFrameCompleted,

        /// A write into a memory location not backed by any component.
        /// The written value was dropped.
        UnmappedWrite,
    }
}


/// A set of [DebugEvent] flags.
pub type DebugEvents = FlagSet<DebugEvent>;
