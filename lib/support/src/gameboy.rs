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

use std::fmt::{Display, Formatter};

use dotmatrix_core::boot_rom::BootRom;
use dotmatrix_core::cartridge::{Cartridge, CartridgeType};
use dotmatrix_core::cpu::cpu::Cpu;
use dotmatrix_core::debug::DebugEvent;
use dotmatrix_core::emulator_core::{
    Clock, DeviceConfig, EmulatorCore, EmulatorError, EmulatorUpdateResults,
};
use dotmatrix_core::input::{Button, Input};
use dotmatrix_core::mmu::memory::Memory;
use dotmatrix_core::mmu::mmu::Mmu;
use dotmatrix_core::ppu::ppu::{LcdBuffer, Ppu};


/// The callback receiving each finished frame.
pub type FrameCallback = Box<dyn FnMut(&LcdBuffer)>;


/// A factory class to construct a GameBoy device object.
/// Usually created via GameBoy::build()
pub struct Builder {
    boot_rom:      Option<BootRom>,
    cartridge:     Option<Cartridge>,
    print_opcodes: bool,
}


/// Error codes occurred during creating an emulator instance.
#[derive(Debug)]
pub enum BuilderErrorCode {
    /// The inserted cartridge needs a memory bank controller,
    /// which is not supported.
    UnsupportedCartridgeType(CartridgeType),
}


/// The GameBoy object providing access to all its emulated components.
/// Drives the emulator core and forwards finished frames and button
/// state changes between the core and the hosting frontend.
pub struct GameBoy {
    device_config: DeviceConfig,

    emulator: Box<EmulatorCore>,

    frame_callback: Option<FrameCallback>,
}


impl Builder {
    /// Creates a new empty GameBoy builder
    pub fn new() -> Self {
        Self {
            boot_rom:      None,
            cartridge:     None,
            print_opcodes: false,
        }
    }


    /// Set the boot ROM, which will be executed before the actual ROM.
    pub fn set_boot_rom(&mut self, boot_rom: BootRom) {
        self.boot_rom = Some(boot_rom);
    }


    /// Set the cartridge, which ROM will be executed.
    pub fn set_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }


    /// Configures whether the emulator should print all opcodes being executed or not.
    pub fn set_print_opcodes(&mut self, print: bool) {
        self.print_opcodes = print;
    }


    /// Build the GameBoy device emulator based on the properties specified with this builder.
    pub fn finish(mut self) -> Result<GameBoy, BuilderErrorCode> {
        // only flat ROM cartridges can be executed; fail early on
        // anything which needs a memory bank controller
        if let Some(cartridge) = &self.cartridge {
            let cartridge_type = cartridge.get_cartridge_type();

            if cartridge_type.has_mapper() {
                return Err(BuilderErrorCode::UnsupportedCartridgeType(cartridge_type));
            }
        }

        let device_config = DeviceConfig {
            print_opcodes: self.print_opcodes,
        };

        // construct the emulator core
        let mut emulator = Box::new(EmulatorCore::new(device_config));

        // set boot ROM, if any
        if let Some(boot_rom) = self.boot_rom.take() {
            emulator.get_peripherals_mut().mem.set_boot_rom(boot_rom);
        }

        // insert cartridge, if any
        if let Some(cartridge) = self.cartridge.take() {
            emulator.get_peripherals_mut().mem.set_cartridge(cartridge);
        }

        Ok(GameBoy {
            device_config,
            emulator,
            frame_callback: None,
        })
    }
}


impl GameBoy {
    /// Creates a builder to build up the device.
    pub fn build() -> Builder {
        Builder::new()
    }


    /// Boot the device, initializing the Boot ROM program.
    pub fn initialize(&mut self) {
        self.emulator.initialize();
    }


    /// Set the callback receiving each finished frame together with the
    /// LCD buffer holding the rendered image.
    pub fn set_frame_callback(&mut self, callback: FrameCallback) {
        self.frame_callback = Some(callback);
    }


    /// Set the pressed state of a single button.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.emulator.get_peripherals_mut().input.set_button(button, pressed);
    }


    /// Get the number of cycles processed by the emulator since it started.
    pub fn get_total_cycles_processed(&self) -> Clock {
        self.emulator.get_total_cycles_processed()
    }


    /// Get the time in seconds the emulator did run.
    pub fn get_total_seconds_processed(&self) -> f32 {
        self.emulator.get_total_seconds_processed()
    }


    /// Runs the emulator for a single step, either an instruction
    /// or to process a single HALT cycle.
    pub fn run_single_step(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        let results = self.emulator.run_single_step()?;
        self.dispatch_frame(&results);

        Ok(results)
    }


    /// Continues running the program located on the cartridge,
    /// until the PPU has completed one single frame.
    pub fn run_frame(&mut self) -> Result<EmulatorUpdateResults, EmulatorError> {
        let results = self.emulator.run_frame()?;
        self.dispatch_frame(&results);

        Ok(results)
    }


    /// Invokes the frame callback when the update results carry a
    /// completed frame.
    fn dispatch_frame(&mut self, results: &EmulatorUpdateResults) {
        if results.events.contains(DebugEvent::PpuFrameCompleted) {
            if let Some(callback) = &mut self.frame_callback {
                callback(self.emulator.get_peripherals().ppu.get_lcd());
            }
        }
    }


    /// Get the emulator device configuration.
    pub fn get_config(&self) -> &DeviceConfig {
        &self.device_config
    }


    /// Get the actual emulator instance.
    pub fn get_emulator(&self) -> &EmulatorCore {
        &self.emulator
    }


    /// Get the actual emulator instance.
    pub fn get_emulator_mut(&mut self) -> &mut EmulatorCore {
        &mut self.emulator
    }


    /// Get the device CPU.
    pub fn get_cpu(&self) -> &Cpu {
        &self.emulator.cpu
    }


    /// Get the device CPU.
    pub fn get_cpu_mut(&mut self) -> &mut Cpu {
        &mut self.emulator.cpu
    }


    /// Get the device MMU.
    pub fn get_mmu(&self) -> &Mmu {
        self.emulator.get_mmu()
    }


    /// Get the device MMU.
    pub fn get_mmu_mut(&mut self) -> &mut Mmu {
        self.emulator.get_mmu_mut()
    }


    /// Get the device memory component.
    pub fn get_memory(&self) -> &Memory {
        &self.emulator.get_peripherals().mem
    }


    /// Get the device memory component.
    pub fn get_memory_mut(&mut self) -> &mut Memory {
        &mut self.emulator.get_peripherals_mut().mem
    }


    /// Get the device PPU.
    pub fn get_ppu(&self) -> &Ppu {
        &self.emulator.get_peripherals().ppu
    }


    /// Get the device PPU.
    pub fn get_ppu_mut(&mut self) -> &mut Ppu {
        &mut self.emulator.get_peripherals_mut().ppu
    }


    /// Get the device input component.
    pub fn get_input(&self) -> &Input {
        &self.emulator.get_peripherals().input
    }


    /// Get the device input component.
    pub fn get_input_mut(&mut self) -> &mut Input {
        &mut self.emulator.get_peripherals_mut().input
    }
}


impl Display for BuilderErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderErrorCode::UnsupportedCartridgeType(cartridge_type) => {
                write!(f, "unsupported cartridge type: {cartridge_type:?}")
            }
        }
    }
}
