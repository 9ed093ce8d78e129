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

#![no_std]

use dotmatrix_core::emulator_core::{DeviceConfig, EmulatorCore};


#[test]
fn test_nostd() {
    // create the emulator instance without cartridge or boot ROM
    let mut emulator = EmulatorCore::new(DeviceConfig::default());
    emulator.initialize();

    // run one single frame
    let results = emulator.run_frame().unwrap();
    assert_ne!(results.cycles, 0);
}
