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

use libdotmatrix::debug::DebugEvent;
use libdotmatrix::ppu::ppu::CPU_CYCLES_PER_FRAME;

use testrunner::*;


const LCD_CONTROL: u16 = 0xff40;
const LCD_STATUS:  u16 = 0xff41;
const LY:          u16 = 0xff44;
const PALETTE_BG:  u16 = 0xff47;
const IF:          u16 = 0xff0f;


#[test]
fn frame_pacing() {
    // a tight relative jump loop of 3 machine cycles per iteration;
    // 5852 iterations make up exactly one frame of 17556 cycles
    let mut core = new_core_with_program(&[0x18, 0xfe]);
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);

    let mut frames = 0;
    let mut cycles = 0;

    for _ in 0..5852 {
        let results = core.run_single_step().unwrap();
        cycles += results.cycles;

        if results.events.contains(DebugEvent::PpuFrameCompleted) {
            frames += 1;
        }
    }

    assert_eq!(cycles, CPU_CYCLES_PER_FRAME);
    assert_eq!(frames, 1);

    // back at the first scanline in OAM scan mode
    assert_eq!(core.get_mmu().read_u8(LY), 0);
    assert_eq!(core.get_mmu().read_u8(LCD_STATUS) & 0x03, 0x02);

    // the vblank interrupt was requested once
    assert_eq!(core.get_mmu().read_u8(IF) & 0x01, 0x01);
}


#[test]
fn ly_is_reset_by_writing() {
    let mut core = new_core();
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);

    core.get_peripherals_mut().ppu.update(114 * 5);
    assert_eq!(core.get_mmu().read_u8(LY), 5);

    core.get_mmu_mut().write_u8(LY, 0x77);
    assert_eq!(core.get_mmu().read_u8(LY), 0);
}


#[test]
fn vram_and_oam_are_gated_by_mode() {
    let mut core = new_core();

    // while the LCD is off, both areas are accessible
    core.get_mmu_mut().write_u8(0x8000, 0x12);
    core.get_mmu_mut().write_u8(0xfe00, 0x34);
    assert_eq!(core.get_mmu().read_u8(0x8000), 0x12);
    assert_eq!(core.get_mmu().read_u8(0xfe00), 0x34);

    // enabling the LCD starts the OAM scan, where the PPU claims both areas
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);
    assert_eq!(core.get_mmu().read_u8(0x8000), 0xff);
    assert_eq!(core.get_mmu().read_u8(0xfe00), 0xff);
    core.get_mmu_mut().write_u8(0xfe00, 0x99);

    // they stay blocked while the scanline gets drawn
    core.get_peripherals_mut().ppu.update(20);
    assert_eq!(core.get_mmu().read_u8(0x8000), 0xff);
    assert_eq!(core.get_mmu().read_u8(0xfe00), 0xff);
    core.get_mmu_mut().write_u8(0x8000, 0x56);

    // in hblank everything is accessible again; the blocked writes
    // were dropped
    core.get_peripherals_mut().ppu.update(43);
    assert_eq!(core.get_mmu().read_u8(0x8000), 0x12);
    assert_eq!(core.get_mmu().read_u8(0xfe00), 0x34);
}


#[test]
fn disabling_the_lcd_resets_the_ppu() {
    let mut core = new_core();
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);

    core.get_peripherals_mut().ppu.update(114 * 3);
    assert_eq!(core.get_mmu().read_u8(LY), 3);

    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x11);
    assert_eq!(core.get_mmu().read_u8(LY), 0);
    assert_eq!(core.get_mmu().read_u8(LCD_STATUS) & 0x03, 0x00);

    // time passing while disabled does not change anything
    core.get_peripherals_mut().ppu.update(CPU_CYCLES_PER_FRAME);
    assert_eq!(core.get_mmu().read_u8(LY), 0);
    assert_eq!(core.get_mmu().read_u8(IF) & 0x01, 0x00);
}


#[test]
fn background_line_rendering() {
    let mut core = new_core();

    // tile #1: all pixels use color value 1 (low bitplane set)
    for row in 0..8 {
        core.get_mmu_mut().write_u8(0x8010 + row * 2, 0xff);
        core.get_mmu_mut().write_u8(0x8011 + row * 2, 0x00);
    }

    // the first tilemap entry selects tile #1
    core.get_mmu_mut().write_u8(0x9800, 0x01);

    // identity palette: color i maps to shade i
    core.get_mmu_mut().write_u8(PALETTE_BG, 0xe4);

    // LCD on, background on, tile data at 0x8000
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);

    // complete the first scanline
    core.get_peripherals_mut().ppu.update(20 + 43);

    let lcd = core.get_peripherals().ppu.get_lcd();
    for x in 0..8 {
        assert_eq!(lcd.get_pixel(x, 0), 1);
    }
    for x in 8..16 {
        assert_eq!(lcd.get_pixel(x, 0), 0);
    }
}


#[test]
fn sprite_line_rendering() {
    let mut core = new_core();

    // tile #2: all pixels use color value 2 (high bitplane set)
    for row in 0..8 {
        core.get_mmu_mut().write_u8(0x8020 + row * 2, 0x00);
        core.get_mmu_mut().write_u8(0x8021 + row * 2, 0xff);
    }

    // sprite #0 at screen position 0:0 using tile #2 and OBP0
    core.get_mmu_mut().write_u8(0xfe00, 16); // y
    core.get_mmu_mut().write_u8(0xfe01, 8);  // x
    core.get_mmu_mut().write_u8(0xfe02, 2);  // tile
    core.get_mmu_mut().write_u8(0xfe03, 0);  // flags

    // identity palettes
    core.get_mmu_mut().write_u8(PALETTE_BG, 0xe4);
    core.get_mmu_mut().write_u8(0xff48, 0xe4);

    // LCD on, background and sprites enabled
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x93);

    core.get_peripherals_mut().ppu.update(20 + 43);

    let lcd = core.get_peripherals().ppu.get_lcd();
    for x in 0..8 {
        assert_eq!(lcd.get_pixel(x, 0), 2);
    }
    assert_eq!(lcd.get_pixel(8, 0), 0);
}


#[test]
fn stat_interrupt_on_coincidence() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(0xff45, 2);    // LYC = 2
    core.get_mmu_mut().write_u8(LCD_STATUS, 0x40); // LYC interrupt enable
    core.get_mmu_mut().write_u8(LCD_CONTROL, 0x91);

    // run until line 2 via the stepper so signals get collected
    load_program(&mut core, &[0x18, 0xfe]);
    let results = run_steps(&mut core, 114 * 2 / 3 + 1);

    assert!(results.cycles >= 114 * 2);
    assert_eq!(core.get_mmu().read_u8(IF) & 0x02, 0x02);
    assert_eq!(core.get_mmu().read_u8(LCD_STATUS) & 0x04, 0x04);
}


#[test]
fn oam_dma_transfer() {
    let mut core = new_core();

    // prepare source data in working RAM
    for index in 0..160u16 {
        core.get_mmu_mut().write_u8(0xc100 + index, index as u8);
    }

    core.get_mmu_mut().write_u8(0xff46, 0xc1);

    for index in 0..160u16 {
        assert_eq!(core.get_mmu().read_u8(0xfe00 + index), index as u8);
    }

    assert_eq!(core.get_mmu().read_u8(0xff46), 0xc1);
}
