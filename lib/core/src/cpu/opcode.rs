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

use crate::cpu::cpu::Cpu;
use crate::emulator_core::Clock;


/// The signature of a function implementing a single opcode.
pub type OpCodeProc = fn(&mut Cpu, &mut OpCodeContext);


/// A single entry of the opcode table.
/// Timings are machine cycles; for conditional instructions `cycles` holds
/// the duration of the untaken and `cycles_taken` the duration of the taken
/// branch. For all other instructions both values are identical.
pub struct OpCode {
    /// The mnemonic of this opcode.
    pub name: &'static str,

    /// The length of this instruction in bytes, including the opcode itself.
    pub bytes: u16,

    /// Machine cycles consumed by this instruction.
    pub cycles: Clock,

    /// Machine cycles consumed when a conditional branch was taken.
    pub cycles_taken: Clock,

    /// The function implementing this opcode.
    pub proc: OpCodeProc,
}


/// A single instruction fetched from memory, combining the opcode table
/// entry with the location it was read from.
pub struct Instruction {
    /// The opcode table entry of this instruction.
    pub opcode: &'static OpCode,

    /// The numerical value of the opcode.
    pub opcode_id: u8,

    /// The address the opcode was fetched from.
    pub opcode_address: u16,
}


/// The context of a single opcode being executed.
/// Tracks the number of machine cycles consumed and whether the fetched
/// opcode turned out to be not a valid instruction at all.
pub struct OpCodeContext {
    cycles: Clock,
    cycles_taken: Clock,
    illegal: bool,
}


impl OpCodeContext {
    /// Creates the context for a fetched instruction.
    pub fn for_instruction(instruction: &Instruction) -> OpCodeContext {
        OpCodeContext {
            cycles:       instruction.opcode.cycles,
            cycles_taken: instruction.opcode.cycles_taken,
            illegal:      false,
        }
    }


    /// To be called by conditional instructions when their branch was
    /// taken, switching the cycle accounting to the taken duration.
    pub fn branch_taken(&mut self) {
        self.cycles = self.cycles_taken;
    }


    /// Adds extra cycles on top of the table value.
    /// Used by the 0xcb extension table, where the operand decides
    /// about the duration.
    pub fn add_cycles(&mut self, cycles: Clock) {
        self.cycles += cycles;
    }


    /// Get the total number of machine cycles consumed by this instruction.
    pub fn get_cycles_consumed(&self) -> Clock {
        self.cycles
    }


    /// Marks the executed opcode as illegal.
    pub fn flag_illegal_opcode(&mut self) {
        self.illegal = true;
    }


    /// Checks whether the executed opcode was illegal.
    pub fn is_illegal_opcode(&self) -> bool {
        self.illegal
    }
}
