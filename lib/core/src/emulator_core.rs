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

use crate::cpu::cpu::{Cpu, CpuFlag, RegisterR8, CPU_CLOCK_SPEED, CPU_HALT_IDLE_CYCLES};
use crate::cpu::interrupts::InterruptRegisters;
use crate::cpu::opcode::OpCodeContext;
use crate::debug::{DebugEvent, DebugEvents};

#[cfg(feature = "std")]
use crate::cpu::opcode::Instruction;
use crate::input::Input;
use crate::mmu::locations::*;
use crate::mmu::memory::Memory;
use crate::mmu::memory_bus::MemoryBusSignals;
use crate::mmu::mmu::Mmu;
use crate::ppu::ppu::{Ppu, CPU_CYCLES_PER_FRAME};
use crate::timer::Timer;

use core::fmt::{Display, Formatter};


/// Type to measure clock ticks of the device.
/// Alias for unsigned 64bit integer.
pub type Clock = u64;


/// A struct containing the setup information of the running device.
#[derive(Copy, Clone, Default)]
pub struct DeviceConfig {
    /// Flag if opcodes should be printed
    pub print_opcodes: bool,
}


/// Errors stopping the emulation. The CPU never tries to resume after
/// hitting one of these; the caller may inspect the device state and
/// terminate.
#[derive(Debug, PartialEq, Eq)]
pub enum EmulatorError {
    /// The byte fetched as an opcode is not a valid instruction.
    IllegalInstruction {
        /// The numerical value of the fetched opcode.
        opcode: u8,

        /// The address the opcode was fetched from.
        pc: u16,
    },
}


/// The emulator core providing access to all emulated components.
pub struct EmulatorCore {
    device_config: DeviceConfig,

    pub cpu: Cpu,

    total_cycles: Clock,
}


/// A set of components connected together via memory bus.
pub struct Peripherals {
    pub ppu:        Ppu,
    pub mem:        Memory,
    pub timer:      Timer,
    pub input:      Input,
    pub interrupts: InterruptRegisters,
}


/// An object containing feedback from running the emulator.
#[derive(Debug, Default)]
pub struct EmulatorUpdateResults {
    /// The number of machine cycles being processed.
    pub cycles: Clock,

    /// Any debug events occurred during updating the emulator.
    pub events: DebugEvents,
}


impl EmulatorCore {
    /// Create a new emulator core with all components powered on.
    pub fn new(device_config: DeviceConfig) -> Self {
        Self {
            device_config,

            cpu: Cpu::new(
                Mmu::new(
                    Peripherals {
                        ppu:        Ppu::new(),
                        mem:        Memory::new(),
                        timer:      Timer::new(),
                        input:      Input::new(),
                        interrupts: InterruptRegisters::new(),
                    }
                )
            ),

            total_cycles: 0,
        }
    }


    /// Boot the device. With a boot ROM attached, execution starts at the
    /// beginning of the boot ROM program; otherwise the registers are set
    /// up with the values the boot ROM would have left behind.
    pub fn initialize(&mut self) {
        if self.get_peripherals().mem.has_boot_rom() {
            self.cpu.set_instruction_pointer(0x0000);
        }
        else {
            self.setup_initial_values();
        }
    }


    /// Setup values like expected after the boot rom was executed
    /// on the original device.
    fn setup_initial_values(&mut self) {
        // the carry and half carry flags depend on the cartridge
        // header checksum being non-zero
        let header_checksum = self.get_mmu().read_u8(MEMORY_LOCATION_HEADER_CHECKSUM);
        let ch              = header_checksum != 0;

        let f = 0
            |   (1 << CpuFlag::Zero.bit())
            |   (if ch { 1 << CpuFlag::HalfCarry.bit() } else { 0 })
            |   (if ch { 1 << CpuFlag::Carry.bit() }     else { 0 })
        ;

        self.cpu.set_r8(RegisterR8::A, 0x01);
        self.cpu.set_r8(RegisterR8::F, f);
        self.cpu.set_r8(RegisterR8::B, 0x00);
        self.cpu.set_r8(RegisterR8::C, 0x13);
        self.cpu.set_r8(RegisterR8::D, 0x00);
        self.cpu.set_r8(RegisterR8::E, 0xd8);
        self.cpu.set_r8(RegisterR8::H, 0x01);
        self.cpu.set_r8(RegisterR8::L, 0x4d);
        self.cpu.set_stack_pointer(0xfffe);
        self.cpu.set_instruction_pointer(MEMORY_LOCATION_PROGRAM_START);

        // initialize the IO registers the boot rom would have written
        let io_reg_data = [
            (MEMORY_LOCATION_INTERRUPTS_REQUESTED, 0xe1),
            (MEMORY_LOCATION_LCD_CONTROL,          0x91),
            (MEMORY_LOCATION_SCY,                  0x00),
            (MEMORY_LOCATION_SCX,                  0x00),
            (MEMORY_LOCATION_LYC,                  0x00),
            (MEMORY_LOCATION_PALETTE_BG,           0xfc),
            (MEMORY_LOCATION_PALETTE_OBP0,         0xff),
            (MEMORY_LOCATION_PALETTE_OBP1,         0xff),
            (MEMORY_LOCATION_WY,                   0x00),
            (MEMORY_LOCATION_WX,                   0x00),
            (MEMORY_LOCATION_INTERRUPTS_ENABLED,   0x00),
        ];

        for (address, value) in io_reg_data {
            self.get_mmu_mut().write_u8(address, value);
        }
    }


    /// Get the number of cycles processed by the emulator since it started.
    pub fn get_total_cycles_processed(&self) -> Clock {
        self.total_cycles
    }


    /// Get the time in seconds the emulator did run.
    pub fn get_total_seconds_processed(&self) -> f32 {
        (self.total_cycles as f32) / (CPU_CLOCK_SPEED as f32)
    }


    /// Get the device MMU.
    pub fn get_mmu(&self) -> &Mmu {
        self.cpu.get_mmu()
    }


    /// Get the device MMU.
    pub fn get_mmu_mut(&mut self) -> &mut Mmu {
        self.cpu.get_mmu_mut()
    }


    /// Get the device peripheral components.
    pub fn get_peripherals(&self) -> &Peripherals {
        self.get_mmu().get_peripherals()
    }


    /// Get the device peripheral components.
    pub fn get_peripherals_mut(&mut self) -> &mut Peripherals {
        self.get_mmu_mut().get_peripherals_mut()
    }


    /// Runs the emulator for a single step, either an instruction,
    /// an interrupt dispatch or a single HALT idle cycle.
    pub fn run_single_step(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        self.process_next()
    }


    /// Continues running the program located on the cartridge,
    /// until the PPU has completed one single frame.
    pub fn run_frame(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        let mut results = EmulatorUpdateResults::default();

        // update until receiving the 'frame completed' event.
        loop {
            results += self.process_next()?;

            // stop after completing one frame
            if results.events.contains(DebugEvent::PpuFrameCompleted) {
                break;
            }

            // in case the screen was disabled, stop after the time of one frame has passed
            if results.cycles >= CPU_CYCLES_PER_FRAME {
                break;
            }
        }

        Ok(results)
    }


    /// Continues processing the next pending operation.
    fn process_next(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        // a pending interrupt gets dispatched before the next fetch;
        // this also wakes the CPU from HALT state
        if let Some(cycles) = self.cpu.handle_interrupts() {
            let signals = self.update_components(cycles);

            return Ok(EmulatorUpdateResults {
                cycles,
                events: signals.events,
            });
        }

        if self.cpu.is_running() {
            self.process_next_opcode()
        }
        else {
            // while in HALT state the CPU idles one machine cycle per step
            let signals = self.update_components(CPU_HALT_IDLE_CYCLES);

            Ok(EmulatorUpdateResults {
                cycles: CPU_HALT_IDLE_CYCLES,
                events: signals.events,
            })
        }
    }


    /// Process the next opcode.
    fn process_next_opcode(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        // an interrupt enable scheduled by EI gets promoted after the
        // *following* instruction, so take the state before executing
        let promote_ime = self.cpu.is_ime_scheduled();

        let instruction = self.cpu.fetch_next_instruction();
        let mut context = OpCodeContext::for_instruction(&instruction);

        (instruction.opcode.proc)(&mut self.cpu, &mut context);

        if context.is_illegal_opcode() {
            return Err(EmulatorError::IllegalInstruction {
                opcode: instruction.opcode_id,
                pc:     instruction.opcode_address,
            });
        }

        if promote_ime {
            self.cpu.promote_scheduled_ime();
        }

        let cycles  = context.get_cycles_consumed();
        let signals = self.update_components(cycles);

        // print opcode and CPU state if enabled
        #[cfg(feature = "std")]
        if self.device_config.print_opcodes {
            println!(
                "/* {:04x} [{:02x}] */ {:<16}    ; {}",
                instruction.opcode_address,
                instruction.opcode_id,
                self.format_instruction(&instruction),
                self.cpu
            );
        }

        Ok(EmulatorUpdateResults {
            cycles,
            events: signals.events,
        })
    }


    /// Applies the time passed during CPU execution to other components as well.
    /// MMIO accesses of the instruction executed before have seen the
    /// peripheral state prior to this advancement.
    #[must_use]
    fn update_components(&mut self, cycles: Clock) -> MemoryBusSignals {
        self.cpu.update(cycles);
        self.get_peripherals_mut().ppu.update(cycles);
        self.get_peripherals_mut().timer.update(cycles);

        // collects all signals received from components
        let signals =
                self.get_mmu_mut().take_signals()
            |   self.get_peripherals_mut().ppu.take_signals()
            |   self.get_peripherals_mut().timer.take_signals()
            |   self.get_peripherals_mut().input.take_signals()
        ;

        // forward all requested interrupts into the interrupt controller.
        self.get_peripherals_mut().interrupts.request_interrupts(signals.interrupts);

        // increment clock counters
        self.total_cycles += cycles;

        signals
    }


    /// Renders the mnemonic of an instruction, replacing operand
    /// placeholders by the operand bytes following the opcode.
    #[cfg(feature = "std")]
    fn format_instruction(&self, instruction: &Instruction) -> String {
        let operand_address = instruction.opcode_address.wrapping_add(1);
        let mut name        = String::from(instruction.opcode.name);

        if name.contains("{x16}") {
            let value = self.get_mmu().read_u16(operand_address);
            name = name.replace("{x16}", &format!("{value:04x}"));
        }

        if name.contains("{x8}") {
            let value = self.get_mmu().read_u8(operand_address);
            name = name.replace("{x8}", &format!("{value:02x}"));
        }

        if name.contains("{u8}") {
            let value = self.get_mmu().read_u8(operand_address);
            name = name.replace("{u8}", &format!("{value}"));
        }

        if name.contains("{i8}") {
            let value = self.get_mmu().read_u8(operand_address) as i8;
            name = name.replace("{i8}", &format!("{value}"));
        }

        name
    }
}


impl Display for EmulatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            EmulatorError::IllegalInstruction { opcode, pc } => {
                write!(f, "illegal instruction {opcode:02x} at {pc:04x}")
            }
        }
    }
}


impl core::ops::Add for EmulatorUpdateResults {
    type Output = EmulatorUpdateResults;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            cycles: self.cycles + rhs.cycles,
            events: self.events | rhs.events,
        }
    }
}


impl core::ops::AddAssign for EmulatorUpdateResults {
    fn add_assign(&mut self, rhs: Self) {
        self.cycles += rhs.cycles;
        self.events |= rhs.events;
    }
}
