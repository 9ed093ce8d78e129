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

use crate::cpu::opcode::Instruction;
use crate::cpu::opcodes::OPCODE_TABLE;
use crate::emulator_core::Clock;
use crate::mmu::mmu::Mmu;
use crate::utils::{change_bit, get_bit, get_high, get_low, to_u16};

#[cfg(feature = "std")]
use std::fmt::{Display, Formatter};


/// The clock speed of the CPU, measured in machine cycles per second.
/// One machine cycle equals four cycles of the 4.19 MHz oscillator.
pub const CPU_CLOCK_SPEED: Clock = 1_048_576;

/// Machine cycles consumed by dispatching an interrupt to its
/// service routine.
pub const CPU_IRQ_DISPATCH_CYCLES: Clock = 5;

/// Machine cycles the CPU idles per step while being in HALT state.
pub const CPU_HALT_IDLE_CYCLES: Clock = 1;


/// The 8 bit registers of the CPU.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RegisterR8 {
    A, F,
    B, C,
    D, E,
    H, L,
}


/// The 16 bit register pairs of the CPU, each built of two 8 bit registers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RegisterR16 {
    AF,
    BC,
    DE,
    HL,
}


/// The flags stored in the F register.
/// The lower four bits of F are not backed by anything and always read zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CpuFlag {
    Zero,
    Negative,
    HalfCarry,
    Carry,
}


impl CpuFlag {
    /// Get the bit of this flag within the F register.
    pub fn bit(&self) -> u8 {
        match self {
            CpuFlag::Zero      => 7,
            CpuFlag::Negative  => 6,
            CpuFlag::HalfCarry => 5,
            CpuFlag::Carry     => 4,
        }
    }
}


/// The CPU of the device, owning the MMU and through it all peripheral
/// components. It fetches, decodes and executes one instruction per step
/// and dispatches pending interrupts in between.
pub struct Cpu {
    mmu: Mmu,

    reg_a: u8,
    reg_f: u8,
    reg_b: u8,
    reg_c: u8,
    reg_d: u8,
    reg_e: u8,
    reg_h: u8,
    reg_l: u8,

    instruction_pointer: u16,
    stack_pointer: u16,

    /// The interrupt master enable flag, gating all maskable interrupts.
    ime: bool,

    /// Set by EI; the master enable flag gets set after the instruction
    /// following EI was executed.
    ime_scheduled: bool,

    /// Set by HALT; the CPU idles until an interrupt becomes pending.
    halted: bool,

    cycles: Clock,
}


impl Cpu {
    /// Creates a new CPU connected to the given MMU.
    pub fn new(mmu: Mmu) -> Cpu {
        Cpu {
            mmu,

            reg_a: 0,
            reg_f: 0,
            reg_b: 0,
            reg_c: 0,
            reg_d: 0,
            reg_e: 0,
            reg_h: 0,
            reg_l: 0,

            instruction_pointer: 0x0000,
            stack_pointer: 0x0000,

            ime: false,
            ime_scheduled: false,
            halted: false,

            cycles: 0,
        }
    }


    /// Get the device MMU.
    pub fn get_mmu(&self) -> &Mmu {
        &self.mmu
    }


    /// Get the device MMU.
    pub fn get_mmu_mut(&mut self) -> &mut Mmu {
        &mut self.mmu
    }


    /// Get the value of a 8 bit register.
    pub fn get_r8(&self, register: RegisterR8) -> u8 {
        match register {
            RegisterR8::A => self.reg_a,
            RegisterR8::F => self.reg_f,
            RegisterR8::B => self.reg_b,
            RegisterR8::C => self.reg_c,
            RegisterR8::D => self.reg_d,
            RegisterR8::E => self.reg_e,
            RegisterR8::H => self.reg_h,
            RegisterR8::L => self.reg_l,
        }
    }


    /// Set the value of a 8 bit register.
    /// The lower four bits of the F register are not writable
    /// and stay zero.
    pub fn set_r8(&mut self, register: RegisterR8, value: u8) {
        match register {
            RegisterR8::A => self.reg_a = value,
            RegisterR8::F => self.reg_f = value & 0xf0,
            RegisterR8::B => self.reg_b = value,
            RegisterR8::C => self.reg_c = value,
            RegisterR8::D => self.reg_d = value,
            RegisterR8::E => self.reg_e = value,
            RegisterR8::H => self.reg_h = value,
            RegisterR8::L => self.reg_l = value,
        }
    }


    /// Get the value of a 16 bit register pair.
    pub fn get_r16(&self, register: RegisterR16) -> u16 {
        match register {
            RegisterR16::AF => to_u16(self.reg_a, self.reg_f),
            RegisterR16::BC => to_u16(self.reg_b, self.reg_c),
            RegisterR16::DE => to_u16(self.reg_d, self.reg_e),
            RegisterR16::HL => to_u16(self.reg_h, self.reg_l),
        }
    }


    /// Set the value of a 16 bit register pair.
    pub fn set_r16(&mut self, register: RegisterR16, value: u16) {
        let high = get_high(value);
        let low  = get_low(value);

        match register {
            RegisterR16::AF => { self.reg_a = high; self.reg_f = low & 0xf0; }
            RegisterR16::BC => { self.reg_b = high; self.reg_c = low; }
            RegisterR16::DE => { self.reg_d = high; self.reg_e = low; }
            RegisterR16::HL => { self.reg_h = high; self.reg_l = low; }
        }
    }


    /// Checks whether a single CPU flag is set.
    pub fn is_flag_set(&self, flag: CpuFlag) -> bool {
        get_bit(self.reg_f, flag.bit())
    }


    /// Set or clear a single CPU flag.
    pub fn set_flag(&mut self, flag: CpuFlag, value: bool) {
        self.reg_f = change_bit(self.reg_f, flag.bit(), value);
    }


    /// Set all four CPU flags at once.
    pub fn set_flags(&mut self, zero: bool, negative: bool, half_carry: bool, carry: bool) {
        self.reg_f = 0
            |   (if zero       { 1 << CpuFlag::Zero.bit() }      else { 0 })
            |   (if negative   { 1 << CpuFlag::Negative.bit() }  else { 0 })
            |   (if half_carry { 1 << CpuFlag::HalfCarry.bit() } else { 0 })
            |   (if carry      { 1 << CpuFlag::Carry.bit() }     else { 0 })
        ;
    }


    /// Get the current instruction pointer.
    pub fn get_instruction_pointer(&self) -> u16 {
        self.instruction_pointer
    }


    /// Moves the instruction pointer to a new location.
    pub fn set_instruction_pointer(&mut self, address: u16) {
        self.instruction_pointer = address;
    }


    /// Get the current stack pointer.
    pub fn get_stack_pointer(&self) -> u16 {
        self.stack_pointer
    }


    /// Moves the stack pointer to a new location.
    pub fn set_stack_pointer(&mut self, address: u16) {
        self.stack_pointer = address;
    }


    /// Fetches the next byte at the instruction pointer and advances it.
    pub fn fetch_u8(&mut self) -> u8 {
        let value = self.mmu.read_u8(self.instruction_pointer);
        self.instruction_pointer = self.instruction_pointer.wrapping_add(1);

        value
    }


    /// Fetches the next byte at the instruction pointer as a signed offset.
    pub fn fetch_i8(&mut self) -> i8 {
        self.fetch_u8() as i8
    }


    /// Fetches the next two bytes at the instruction pointer as a 16 bit
    /// value in little endian byte order.
    pub fn fetch_u16(&mut self) -> u16 {
        let low  = self.fetch_u8();
        let high = self.fetch_u8();

        to_u16(high, low)
    }


    /// Pushes a 16 bit value onto the stack, high byte first.
    pub fn push_u16(&mut self, value: u16) {
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        self.mmu.write_u8(self.stack_pointer, get_high(value));

        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
        self.mmu.write_u8(self.stack_pointer, get_low(value));
    }


    /// Pops a 16 bit value from the stack, low byte first.
    pub fn pop_u16(&mut self) -> u16 {
        let low = self.mmu.read_u8(self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_add(1);

        let high = self.mmu.read_u8(self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_add(1);

        to_u16(high, low)
    }


    /// Fetches the next instruction at the instruction pointer.
    pub fn fetch_next_instruction(&mut self) -> Instruction {
        let opcode_address = self.instruction_pointer;
        let opcode_id      = self.fetch_u8();

        Instruction {
            opcode: &OPCODE_TABLE[opcode_id as usize],
            opcode_id,
            opcode_address,
        }
    }


    /// Checks whether the CPU is executing instructions,
    /// which is not the case while being in HALT state.
    pub fn is_running(&self) -> bool {
        !self.halted
    }


    /// Enters the HALT state; the CPU idles until an interrupt
    /// becomes pending.
    pub fn enter_halt(&mut self) {
        self.halted = true;
    }


    /// Checks whether the interrupt master enable flag is set.
    pub fn is_ime_enabled(&self) -> bool {
        self.ime
    }


    /// Immediately changes the interrupt master enable flag.
    /// Used by DI, RETI and the interrupt dispatch itself.
    pub fn set_ime(&mut self, enabled: bool) {
        self.ime = enabled;

        if !enabled {
            self.ime_scheduled = false;
        }
    }


    /// Schedules the interrupt master enable flag to be set after the
    /// instruction following the current one. Used by EI.
    pub fn schedule_ime(&mut self) {
        self.ime_scheduled = true;
    }


    /// Checks whether setting the interrupt master enable flag is scheduled.
    pub fn is_ime_scheduled(&self) -> bool {
        self.ime_scheduled
    }


    /// Promotes a scheduled interrupt master enable into the actual flag.
    /// Called by the emulator loop after the instruction following EI
    /// was committed.
    pub fn promote_scheduled_ime(&mut self) {
        if self.ime_scheduled {
            self.ime_scheduled = false;
            self.ime           = true;
        }
    }


    /// Checks for a pending interrupt and dispatches it, if the master
    /// enable flag is set. A pending interrupt always wakes the CPU from
    /// HALT state, even with the master enable flag cleared; in that case
    /// execution just continues without dispatching.
    /// Returns the machine cycles consumed by the dispatch, if any.
    pub fn handle_interrupts(&mut self) -> Option<Clock> {
        if !self.mmu.get_peripherals().interrupts.has_pending() {
            return None;
        }

        self.halted = false;

        if !self.ime {
            return None;
        }

        let interrupt = self.mmu.get_peripherals().interrupts.get_pending()?;

        self.ime           = false;
        self.ime_scheduled = false;

        self.mmu.get_peripherals_mut().interrupts.acknowledge(interrupt);

        self.push_u16(self.instruction_pointer);
        self.instruction_pointer = interrupt.address();

        Some(CPU_IRQ_DISPATCH_CYCLES)
    }


    /// Applies the time passed to the CPU's cycle counter.
    pub fn update(&mut self, cycles: Clock) {
        self.cycles += cycles;
    }


    /// Get the number of machine cycles processed by this CPU.
    pub fn get_cycles_processed(&self) -> Clock {
        self.cycles
    }
}


#[cfg(feature = "std")]
impl Display for Cpu {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AF={:04x} BC={:04x} DE={:04x} HL={:04x} SP={:04x} PC={:04x} ime={}",
            self.get_r16(RegisterR16::AF),
            self.get_r16(RegisterR16::BC),
            self.get_r16(RegisterR16::DE),
            self.get_r16(RegisterR16::HL),
            self.stack_pointer,
            self.instruction_pointer,
            self.ime as u8
        )
    }
}
