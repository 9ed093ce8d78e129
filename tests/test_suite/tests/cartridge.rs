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

use libdotmatrix::cartridge::{Cartridge, CartridgeError, CartridgeType};
use libdotmatrix::support::GameBoy;

use testrunner::*;


#[test]
fn valid_image_is_accepted() {
    let cartridge = Cartridge::from_bytes(build_rom_image(&[0x00])).unwrap();

    assert_eq!(cartridge.get_title(), "TEST");
    assert_eq!(cartridge.get_cartridge_type(), CartridgeType::RomOnly);
    assert_eq!(cartridge.get_rom_size(), 0x8000);
    assert_eq!(cartridge.get_ram_size(), 0);
    assert_eq!(cartridge.get_image_size(), 0x8000);
}


#[test]
fn undersized_image_is_rejected() {
    let result = Cartridge::from_bytes(vec![0u8; 0x100]);
    assert_eq!(result.err(), Some(CartridgeError::ImageTooSmall));
}


#[test]
fn broken_logo_is_rejected() {
    let mut image = build_rom_image(&[0x00]);
    image[0x0104] ^= 0xff;

    let result = Cartridge::from_bytes(image);
    assert_eq!(result.err(), Some(CartridgeError::InvalidLogo));
}


#[test]
fn broken_header_checksum_is_rejected() {
    let mut image = build_rom_image(&[0x00]);
    let stored = image[0x014d].wrapping_add(1);
    image[0x014d] = stored;

    match Cartridge::from_bytes(image).err() {
        Some(CartridgeError::InvalidHeaderChecksum { computed, stored: s }) => {
            assert_eq!(s, stored);
            assert_eq!(computed, stored.wrapping_sub(1));
        }

        other => panic!("expected checksum error, got {other:?}"),
    }
}


#[test]
fn cartridge_type_tags_are_recognized() {
    let mut image = build_rom_image(&[0x00]);
    image[0x0147] = 0x01; // MBC1
    image[0x014d] = Cartridge::compute_header_checksum(&image);

    let cartridge = Cartridge::from_bytes(image).unwrap();
    assert_eq!(cartridge.get_cartridge_type(), CartridgeType::Mbc1);
    assert!(cartridge.get_cartridge_type().has_mapper());

    assert!(!CartridgeType::RomOnly.has_mapper());
    assert!(!CartridgeType::RomRamBattery.has_mapper());
    assert_eq!(CartridgeType::from_byte(0xfc), CartridgeType::Unknown(0xfc));
}


#[test]
fn builder_rejects_cartridges_with_mapper() {
    let mut image = build_rom_image(&[0x00]);
    image[0x0147] = 0x01; // MBC1
    image[0x014d] = Cartridge::compute_header_checksum(&image);

    let mut builder = GameBoy::build();
    builder.set_cartridge(Cartridge::from_bytes(image).unwrap());

    assert!(builder.finish().is_err());
}


#[test]
fn builder_accepts_flat_rom_cartridges() {
    let mut builder = GameBoy::build();
    builder.set_cartridge(build_test_cartridge(&[0x00, 0xc3, 0x50, 0x01]));

    let mut gb = builder.finish().unwrap();
    gb.initialize();

    // NOP; JP 0x0150
    gb.run_single_step().unwrap();
    gb.run_single_step().unwrap();

    assert_eq!(gb.get_cpu().get_instruction_pointer(), 0x0150);
}


#[test]
fn global_checksum_is_advisory() {
    let image = build_rom_image(&[0x00]);
    let cartridge = Cartridge::from_bytes(image).unwrap();

    // the stored global checksum of the test image is zero and does not
    // match, the cartridge loads anyway
    assert_eq!(cartridge.get_stored_global_checksum(), 0x0000);
    assert_ne!(cartridge.compute_global_checksum(), 0x0000);
}
