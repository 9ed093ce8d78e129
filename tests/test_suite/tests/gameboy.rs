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

use std::cell::Cell;
use std::rc::Rc;

use libdotmatrix::input::Button;
use libdotmatrix::ppu::ppu::CPU_CYCLES_PER_FRAME;
use libdotmatrix::support::GameBoy;

use testrunner::*;


/// Builds a device running a tight loop at the cartridge entry point.
fn build_looping_device() -> GameBoy {
    let mut builder = GameBoy::build();
    builder.set_cartridge(build_test_cartridge(&[0x18, 0xfe])); // JR -2

    let mut gb = builder.finish().unwrap();
    gb.initialize();

    gb
}


#[test]
fn frame_callback_fires_once_per_frame() {
    let mut gb = build_looping_device();

    let frames = Rc::new(Cell::new(0u32));
    let frames_in_callback = frames.clone();

    gb.set_frame_callback(Box::new(move |lcd| {
        assert_eq!(lcd.get_width(), 160);
        assert_eq!(lcd.get_height(), 144);
        frames_in_callback.set(frames_in_callback.get() + 1);
    }));

    gb.run_frame().unwrap();
    assert_eq!(frames.get(), 1);

    gb.run_frame().unwrap();
    assert_eq!(frames.get(), 2);
}


#[test]
fn buttons_are_forwarded_into_the_joypad_register() {
    let mut gb = build_looping_device();

    // select the action column
    gb.get_mmu_mut().write_u8(0xff00, 0x10);

    gb.set_button(Button::Start, true);
    assert_eq!(gb.get_mmu().read_u8(0xff00), 0xd7);

    gb.set_button(Button::Start, false);
    assert_eq!(gb.get_mmu().read_u8(0xff00), 0xdf);
}


#[test]
fn steady_state_frames_consume_constant_cycles() {
    let mut gb = build_looping_device();

    // the first frame is shorter, since it ends when the PPU enters the
    // vertical blank period for the first time
    gb.run_frame().unwrap();

    for _ in 0..5 {
        let results = gb.run_frame().unwrap();
        assert_eq!(results.cycles, CPU_CYCLES_PER_FRAME);
    }
}
