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

use libdotmatrix::input::Button;

use testrunner::*;


const JOYP: u16 = 0xff00;
const IF:   u16 = 0xff0f;


#[test]
fn no_selected_column_reads_all_released() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(JOYP, 0x30);
    core.get_peripherals_mut().input.set_button(Button::A, true);

    assert_eq!(core.get_mmu().read_u8(JOYP), 0xff);
}


#[test]
fn selected_column_reports_pressed_keys_active_low() {
    let mut core = new_core();

    // select the direction column (bit 4 low)
    core.get_mmu_mut().write_u8(JOYP, 0x20);

    core.get_peripherals_mut().input.set_button(Button::Right, true);
    assert_eq!(core.get_mmu().read_u8(JOYP), 0xee);

    core.get_peripherals_mut().input.set_button(Button::Down, true);
    assert_eq!(core.get_mmu().read_u8(JOYP), 0xe6);

    // the action keys are not visible in this column
    core.get_peripherals_mut().input.set_button(Button::A, true);
    assert_eq!(core.get_mmu().read_u8(JOYP), 0xe6);

    // switching the column shows the action keys instead
    core.get_mmu_mut().write_u8(JOYP, 0x10);
    assert_eq!(core.get_mmu().read_u8(JOYP), 0xde);
}


#[test]
fn writes_only_change_the_select_bits() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(JOYP, 0xff);
    assert_eq!(core.get_mmu().read_u8(JOYP) & 0x30, 0x30);

    core.get_mmu_mut().write_u8(JOYP, 0x0f);
    assert_eq!(core.get_mmu().read_u8(JOYP) & 0x30, 0x00);
}


#[test]
fn press_in_selected_column_requests_interrupt() {
    let mut core = new_core_with_program(&[0x00]); // NOP

    core.get_mmu_mut().write_u8(JOYP, 0x20);
    core.get_peripherals_mut().input.set_button(Button::Left, true);

    // the signal is collected with the next step
    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(IF) & 0x10, 0x10);
}


#[test]
fn press_in_deselected_column_stays_silent() {
    let mut core = new_core_with_program(&[0x00]); // NOP

    core.get_mmu_mut().write_u8(JOYP, 0x30);
    core.get_peripherals_mut().input.set_button(Button::Start, true);

    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(IF) & 0x10, 0x00);
}


#[test]
fn holding_a_button_raises_only_one_interrupt() {
    let mut core = new_core_with_program(&[0x00, 0x00]);

    core.get_mmu_mut().write_u8(JOYP, 0x10);
    core.get_peripherals_mut().input.set_button(Button::B, true);
    run_steps(&mut core, 1);

    // acknowledge and repeat the press while held
    core.get_mmu_mut().write_u8(IF, 0x00);
    core.get_peripherals_mut().input.set_button(Button::B, true);
    run_steps(&mut core, 1);

    assert_eq!(core.get_mmu().read_u8(IF) & 0x10, 0x00);
}
