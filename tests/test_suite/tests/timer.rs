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

use testrunner::*;


const DIV:  u16 = 0xff04;
const TIMA: u16 = 0xff05;
const TMA:  u16 = 0xff06;
const TAC:  u16 = 0xff07;
const IF:   u16 = 0xff0f;


#[test]
fn divider_increments_every_64_cycles() {
    let mut core = new_core();

    core.get_peripherals_mut().timer.update(63);
    assert_eq!(core.get_mmu().read_u8(DIV), 0);

    core.get_peripherals_mut().timer.update(1);
    assert_eq!(core.get_mmu().read_u8(DIV), 1);

    core.get_peripherals_mut().timer.update(64 * 10);
    assert_eq!(core.get_mmu().read_u8(DIV), 11);
}


#[test]
fn divider_write_resets_the_prescaler() {
    let mut core = new_core();

    core.get_peripherals_mut().timer.update(200);
    assert_ne!(core.get_mmu().read_u8(DIV), 0);

    core.get_mmu_mut().write_u8(DIV, 0x55);
    assert_eq!(core.get_mmu().read_u8(DIV), 0);

    // the prescaler was reset as well, so the next tick is 64 cycles away
    core.get_peripherals_mut().timer.update(63);
    assert_eq!(core.get_mmu().read_u8(DIV), 0);
    core.get_peripherals_mut().timer.update(1);
    assert_eq!(core.get_mmu().read_u8(DIV), 1);
}


#[test]
fn counter_rates_follow_the_control_register() {
    // (TAC value, machine cycles per increment)
    let cases = [
        (0x04u8, 256u64),
        (0x05,     4),
        (0x06,    16),
        (0x07,    64),
    ];

    for (tac, period) in cases {
        let mut core = new_core();
        core.get_mmu_mut().write_u8(TAC, tac);

        core.get_peripherals_mut().timer.update(period - 1);
        assert_eq!(core.get_mmu().read_u8(TIMA), 0, "TAC {tac:02x}");

        core.get_peripherals_mut().timer.update(1);
        assert_eq!(core.get_mmu().read_u8(TIMA), 1, "TAC {tac:02x}");
    }
}


#[test]
fn counter_is_gated_by_the_enable_bit() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(TAC, 0x01); // fastest rate, but disabled
    core.get_peripherals_mut().timer.update(1000);

    assert_eq!(core.get_mmu().read_u8(TIMA), 0);
}


#[test]
fn counter_overflow_reloads_and_requests_interrupt() {
    let mut core = new_core_with_program(&[0x00, 0x00]); // NOP; NOP

    core.get_mmu_mut().write_u8(TAC,  0x05); // enabled, one tick per 4 cycles
    core.get_mmu_mut().write_u8(TIMA, 0xff);
    core.get_mmu_mut().write_u8(TMA,  0x23);

    // four machine cycles pass; the counter wraps and reloads
    let results = run_steps(&mut core, 4);

    assert_eq!(results.cycles, 4);
    assert_eq!(core.get_mmu().read_u8(TIMA), 0x23);
    assert_eq!(core.get_mmu().read_u8(IF) & 0x04, 0x04);
}


#[test]
fn control_register_reads_with_unused_bits_set() {
    let mut core = new_core();

    core.get_mmu_mut().write_u8(TAC, 0x05);
    assert_eq!(core.get_mmu().read_u8(TAC), 0xfd);
}


#[test]
fn stop_resets_the_divider() {
    let mut core = new_core_with_program(&[0x10]); // STOP

    core.get_peripherals_mut().timer.update(64 * 5);
    assert_eq!(core.get_mmu().read_u8(DIV), 5);

    run_steps(&mut core, 1);
    assert_eq!(core.get_mmu().read_u8(DIV), 0);
}
