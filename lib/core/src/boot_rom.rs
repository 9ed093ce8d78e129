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

#[cfg(feature = "file_io")]
use std::{fs, io, path::Path};


/// The size of the boot ROM image in bytes.
pub const BOOT_ROM_SIZE: usize = 256;


/// A data object containing a 256 byte boot ROM.
/// The boot ROM shadows the first 256 bytes of the cartridge ROM after
/// power on, until it gets disabled by a write into 0xff50.
pub struct BootRom {
    rom: [u8; BOOT_ROM_SIZE],
}


impl BootRom {
    /// Load a boot ROM image from a file.
    /// Anything but an image of exactly 256 bytes gets refused.
    #[cfg(feature = "file_io")]
    pub fn load_file(filepath: &Path) -> Result<BootRom, io::Error> {
        use crate::utils::ioerr;

        let data = fs::read(filepath)?;

        let rom: [u8; BOOT_ROM_SIZE] = data.try_into().map_err(|data: Vec<u8>| {
            ioerr::Error {
                source: ioerr::Source::BootRomImage,
                source_file: Some(filepath.to_path_buf()),
                error_code: ioerr::ErrorCode::InvalidFileSize(ioerr::InvalidFileSizeError {
                    expected: BOOT_ROM_SIZE,
                    actual: data.len(),
                }),
            }
        })?;

        Ok(BootRom::new(rom))
    }


    /// Wraps an in-memory boot ROM image.
    pub fn new(data: [u8; BOOT_ROM_SIZE]) -> BootRom {
        BootRom {
            rom: data
        }
    }


    /// Read a byte from the boot ROM.
    pub fn read(&self, address: u16) -> u8 {
        self.rom[address as usize]
    }
}
