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

use alloc::string::String;
use alloc::vec::Vec;

use core::fmt::{Display, Formatter};

use crate::mmu::memory_data::{MemoryData, MemoryDataDynamic};

#[cfg(feature = "file_io")]
use std::{
    fs::File,
    io,
    io::Read,
    path::Path,
};


/// The minimum size of a ROM image; anything below cannot contain
/// a complete cartridge header.
pub const MIN_ROM_IMAGE_SIZE: usize = 0x0150;

/// Address range of the logo bitmap within the cartridge header.
pub const HEADER_LOGO_BEGIN:        usize = 0x0104;
pub const HEADER_LOGO_END:          usize = 0x0134;

/// Address range of the game title within the cartridge header.
pub const HEADER_TITLE_BEGIN:       usize = 0x0134;
pub const HEADER_TITLE_END:         usize = 0x0144;

pub const HEADER_NEW_LICENSEE_CODE: usize = 0x0144;
pub const HEADER_CARTRIDGE_TYPE:    usize = 0x0147;
pub const HEADER_ROM_SIZE:          usize = 0x0148;
pub const HEADER_RAM_SIZE:          usize = 0x0149;
pub const HEADER_OLD_LICENSEE_CODE: usize = 0x014b;
pub const HEADER_VERSION:           usize = 0x014c;
pub const HEADER_CHECKSUM:          usize = 0x014d;
pub const HEADER_GLOBAL_CHECKSUM:   usize = 0x014e;


/// The logo bitmap each cartridge header has to carry.
/// The boot ROM compares this data against the fixed pattern and refuses
/// to start the program when it does not match; the emulator performs the
/// same check when a cartridge gets inserted.
pub const CARTRIDGE_HEADER_LOGO: [u8; 48] = [
    0xce, 0xed, 0x66, 0x66, 0xcc, 0x0d, 0x00, 0x0b, 0x03, 0x73, 0x00, 0x83,
    0x00, 0x0c, 0x00, 0x0d, 0x00, 0x08, 0x11, 0x1f, 0x88, 0x89, 0x00, 0x0e,
    0xdc, 0xcc, 0x6e, 0xe6, 0xdd, 0xdd, 0xd9, 0x99, 0xbb, 0xbb, 0x67, 0x63,
    0x6e, 0x0e, 0xec, 0xcc, 0xdd, 0xdc, 0x99, 0x9f, 0xbb, 0xb9, 0x33, 0x3e,
];


/// The memory bank controller built into a cartridge, as announced by the
/// cartridge type byte of the header. Only flat ROM cartridges are currently
/// executable; the other tags are recognized so a caller can reject them.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CartridgeType {
    RomOnly,
    RomRam,
    RomRamBattery,
    Mbc1,
    Mbc1Ram,
    Mbc1RamBattery,
    Mbc2,
    Mbc2Battery,
    Mbc3,
    Mbc3Ram,
    Mbc3RamBattery,
    Mbc3TimerBattery,
    Mbc3TimerRamBattery,
    Mbc5,
    Mbc5Ram,
    Mbc5RamBattery,
    Unknown(u8),
}


/// The licensee code stored in the cartridge header,
/// either in the old single byte or the newer two character format.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum LicenseeCode {
    Old(u8),
    New(u8),
}


/// Error codes occurring when a ROM image fails validation.
#[derive(Debug, PartialEq, Eq)]
pub enum CartridgeError {
    /// The ROM image is too small to contain a cartridge header.
    ImageTooSmall,

    /// The logo bitmap in the header does not match the fixed pattern.
    InvalidLogo,

    /// The checksum computed over the header bytes does not match
    /// the checksum stored in the header.
    InvalidHeaderChecksum {
        computed: u8,
        stored:   u8,
    },
}


/// A cartridge containing a validated ROM image and its parsed header.
pub struct Cartridge {
    rom: MemoryDataDynamic,

    title: String,
    cartridge_type: CartridgeType,
    rom_size_code: u8,
    ram_size_code: u8,
    licensee_code: LicenseeCode,
    version: u8,
}


impl CartridgeType {
    /// Get the cartridge type announced by the type byte of the header.
    pub fn from_byte(value: u8) -> CartridgeType {
        match value {
            0x00 => CartridgeType::RomOnly,
            0x01 => CartridgeType::Mbc1,
            0x02 => CartridgeType::Mbc1Ram,
            0x03 => CartridgeType::Mbc1RamBattery,
            0x05 => CartridgeType::Mbc2,
            0x06 => CartridgeType::Mbc2Battery,
            0x08 => CartridgeType::RomRam,
            0x09 => CartridgeType::RomRamBattery,
            0x0f => CartridgeType::Mbc3TimerBattery,
            0x10 => CartridgeType::Mbc3TimerRamBattery,
            0x11 => CartridgeType::Mbc3,
            0x12 => CartridgeType::Mbc3Ram,
            0x13 => CartridgeType::Mbc3RamBattery,
            0x19 => CartridgeType::Mbc5,
            0x1a => CartridgeType::Mbc5Ram,
            0x1b => CartridgeType::Mbc5RamBattery,
            _    => CartridgeType::Unknown(value),
        }
    }


    /// Checks whether this cartridge type requires a memory bank controller.
    pub fn has_mapper(&self) -> bool {
        !matches!(
            self,
            CartridgeType::RomOnly | CartridgeType::RomRam | CartridgeType::RomRamBattery
        )
    }
}


impl Cartridge {
    /// Load a cartridge ROM image from a file.
    #[cfg(feature = "file_io")]
    pub fn load_file(filepath: &Path) -> Result<Cartridge, io::Error> {
        let mut file = File::open(filepath)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Self::from_bytes(data).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, e.to_string())
        })
    }


    /// Creates a cartridge from a ROM image, validating the logo bitmap
    /// and the header checksum.
    pub fn from_bytes(data: Vec<u8>) -> Result<Cartridge, CartridgeError> {
        if data.len() < MIN_ROM_IMAGE_SIZE {
            return Err(CartridgeError::ImageTooSmall);
        }

        if data[HEADER_LOGO_BEGIN .. HEADER_LOGO_END] != CARTRIDGE_HEADER_LOGO {
            return Err(CartridgeError::InvalidLogo);
        }

        let computed = Self::compute_header_checksum(&data);
        let stored   = data[HEADER_CHECKSUM];
        if computed != stored {
            return Err(CartridgeError::InvalidHeaderChecksum { computed, stored });
        }

        let title = data[HEADER_TITLE_BEGIN .. HEADER_TITLE_END].iter()
            .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || **b == b' ')
            .map(|b| *b as char)
            .collect::<String>()
        ;

        // licensee code 0x33 announces the newer two character format
        let licensee_code = match data[HEADER_OLD_LICENSEE_CODE] {
            0x33 => LicenseeCode::New(data[HEADER_NEW_LICENSEE_CODE]),
            old  => LicenseeCode::Old(old),
        };

        Ok(Cartridge {
            title,
            cartridge_type: CartridgeType::from_byte(data[HEADER_CARTRIDGE_TYPE]),
            rom_size_code:  data[HEADER_ROM_SIZE],
            ram_size_code:  data[HEADER_RAM_SIZE],
            licensee_code,
            version:        data[HEADER_VERSION],

            rom: MemoryDataDynamic::from(data),
        })
    }


    /// Computes the checksum over the header bytes 0x134..0x14d.
    pub fn compute_header_checksum(data: &[u8]) -> u8 {
        data[HEADER_TITLE_BEGIN .. HEADER_CHECKSUM].iter()
            .fold(0u8, |x, byte| x.wrapping_sub(*byte).wrapping_sub(1))
    }


    /// Computes the checksum over the whole ROM image, skipping the two
    /// bytes storing the global checksum itself. The value is advisory
    /// only and not enforced on cartridge construction.
    pub fn compute_global_checksum(&self) -> u16 {
        self.rom.as_slice().iter()
            .enumerate()
            .filter(|(i, _)| *i != HEADER_GLOBAL_CHECKSUM && *i != HEADER_GLOBAL_CHECKSUM + 1)
            .fold(0u16, |x, (_, byte)| x.wrapping_add(*byte as u16))
    }


    /// Get the global checksum stored in the header (big endian).
    pub fn get_stored_global_checksum(&self) -> u16 {
        ((self.rom[HEADER_GLOBAL_CHECKSUM] as u16) << 8)
            | (self.rom[HEADER_GLOBAL_CHECKSUM + 1] as u16)
    }


    /// Get the game title stored in the cartridge header.
    pub fn get_title(&self) -> &str {
        &self.title
    }


    /// Get the cartridge type announced by the header.
    pub fn get_cartridge_type(&self) -> CartridgeType {
        self.cartridge_type
    }


    /// Get the licensee code stored in the header.
    pub fn get_licensee_code(&self) -> LicenseeCode {
        self.licensee_code
    }


    /// Get the mask ROM version number of this cartridge.
    pub fn get_version(&self) -> u8 {
        self.version
    }


    /// Get the ROM size in bytes as announced by the header size code.
    pub fn get_rom_size(&self) -> usize {
        0x8000 << self.rom_size_code
    }


    /// Get the RAM size in bytes as announced by the header size code.
    pub fn get_ram_size(&self) -> usize {
        match self.ram_size_code {
            0x01 => 0x0800,
            0x02 => 0x2000,
            0x03 => 0x8000,
            _    => 0,
        }
    }


    /// Get the actual size of the ROM image.
    pub fn get_image_size(&self) -> usize {
        self.rom.size()
    }


    /// Read a byte from the cartridge ROM.
    /// With a flat ROM cartridge the whole address range 0x0000-0x7fff maps
    /// directly into the image; a memory bank controller implementation
    /// would translate the upper half to the selected bank instead.
    pub fn read_rom(&self, address: u16) -> u8 {
        let address = address as usize;

        if address < self.rom.size() {
            self.rom[address]
        }
        else {
            0xff
        }
    }
}


impl Display for CartridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            CartridgeError::ImageTooSmall => {
                write!(f, "ROM image too small to contain a cartridge header")
            }

            CartridgeError::InvalidLogo => {
                write!(f, "logo bitmap in the cartridge header does not match")
            }

            CartridgeError::InvalidHeaderChecksum { computed, stored } => {
                write!(f, "header checksum mismatch: computed {computed:02x}, stored {stored:02x}")
            }
        }
    }
}
