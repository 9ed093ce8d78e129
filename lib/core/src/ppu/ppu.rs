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

use crate::cpu::interrupts::Interrupt;
use crate::debug::DebugEvent;
use crate::emulator_core::Clock;
use crate::mmu::locations::*;
use crate::mmu::memory_bus::{MemoryBusConnection, MemoryBusSignals};
use crate::mmu::memory_data::{MemoryData, MemoryDataFixedSize};
use crate::utils::{as_bit_flag, get_bit};

#[cfg(feature = "std")]
use std::fmt::{Display, Formatter};


pub const SCREEN_W: u32 = 160;
pub const SCREEN_H: u32 = 144;

pub const SCREEN_PIXELS: usize = (SCREEN_W * SCREEN_H) as usize;

/// Machine cycles spent in each mode of a single scanline.
pub const CPU_CYCLES_PER_OAM_SCAN: Clock =  20;
pub const CPU_CYCLES_PER_DRAW:     Clock =  43;
pub const CPU_CYCLES_PER_HBLANK:   Clock =  51;

/// Machine cycles per scanline; also the length of each vblank line.
pub const CPU_CYCLES_PER_LINE:     Clock = 114;

/// Machine cycles per frame: 154 lines of 114 cycles each.
pub const CPU_CYCLES_PER_FRAME:    Clock = 17_556;

/// The number of scanlines of a whole frame, including the vblank lines.
pub const LINES_PER_FRAME: u8 = 154;

/// The first scanline belonging to the vertical blank period.
pub const FIRST_VBLANK_LINE: u8 = 144;

pub const LCD_CONTROL_BIT_BG_ENABLED:               u8 = 0;
pub const LCD_CONTROL_BIT_SPRITES_ENABLED:          u8 = 1;
pub const LCD_CONTROL_BIT_SPRITE_SIZE:              u8 = 2;
pub const LCD_CONTROL_BIT_BG_TILE_MAP_SELECT:       u8 = 3;
pub const LCD_CONTROL_BIT_TILE_DATA_SELECT:         u8 = 4;
pub const LCD_CONTROL_BIT_WINDOW_ENABLED:           u8 = 5;
pub const LCD_CONTROL_BIT_WINDOW_TILE_MAP_SELECT:   u8 = 6;
pub const LCD_CONTROL_BIT_LCD_ENABLED:              u8 = 7;

pub const LCD_STATUS_BIT_FLAG_COINCIDENCE:          u8 = 2;
pub const LCD_STATUS_BIT_ENABLE_IRQ_MODE_0:         u8 = 3;
pub const LCD_STATUS_BIT_ENABLE_IRQ_MODE_1:         u8 = 4;
pub const LCD_STATUS_BIT_ENABLE_IRQ_MODE_2:         u8 = 5;
pub const LCD_STATUS_BIT_ENABLE_IRQ_LYC_EQ_LY:      u8 = 6;

/// Mask of the writable bits of the LCD status register.
const LCD_STATUS_WRITABLE_BITS: u8 = 0b_0111_1000;

/// The unused bit 7 of the LCD status register always reads as set.
const LCD_STATUS_UNUSED_BITS: u8 = 0b_1000_0000;

/// The maximum number of sprites the PPU can display on a single scanline.
const MAX_SPRITES_PER_LINE: usize = 10;


type VRam = MemoryDataFixedSize<0x2000>;
type Oam  = MemoryDataFixedSize<0xa0>;

type PixelBuffer160x144 = [u8; SCREEN_PIXELS];


/// The data buffer storing the viewport content presented to the display.
/// Each pixel holds a two bit shade value, zero being the lightest one.
pub struct LcdBuffer {
    pixels: PixelBuffer160x144,
}


/// The modes the PPU cycles through while processing a frame.
/// The numeric value of each mode is reported in the lower two bits
/// of the LCD status register.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    HBlank      = 0,
    VBlank      = 1,
    OamScan     = 2,
    DrawLine    = 3,
}


/// A list of possible tilesets the device can handle.
#[derive(Copy, Clone)]
pub enum TileSet {
    /// The tileset is based on the 0x8000 address plus tile index as unsigned integer.
    H8000,

    /// The tileset is based on the 0x8800 address plus tile index as signed integer.
    H8800,
}


/// A list of possible tilemaps the device can handle.
#[derive(Copy, Clone)]
pub enum TileMap {
    /// This tilemap is stored in the video memory at 0x9800 - 0x9bff
    H9800,

    /// This tilemap is stored in the video memory at 0x9c00 - 0x9fff
    H9C00,
}


/// Stores the data of a single sprite entry, how
/// it's stored in the OAM memory.
#[derive(Copy, Clone)]
pub struct Sprite {
    /// The sprites position on Y axis.
    pos_y: u8,

    /// The sprites position on X axis.
    pos_x: u8,

    /// The tile number containing the sprites image data to be displayed.
    tile: u8,

    /// Flags to control the sprites behaviour.
    flags: u8,
}


/// Delivers the result of obtaining pixel data from a sprite.
struct SpritePixelData {
    /// The color index of the pixel data.
    color_index: u8,

    /// The index of the palette to be used to obtain the pixel color.
    palette_index: u8,
}


/// An object storing data of any scanline to be processed by the PPU.
struct ScanlineData {
    /// The line number stored in this object.
    line: u8,

    /// Stores the sprites to be displayed within the current scanline.
    sprites: [Sprite; MAX_SPRITES_PER_LINE],

    /// The number of sprites found.
    sprites_found: u8,

    /// Stores if the window was enabled for this scanline.
    window_enabled: bool,
}


/// An object representing the device's picture processing unit.
/// The PPU owns the video memory, the object attribute memory and its
/// register set; the MMU routes the according bus accesses here.
pub struct Ppu {
    clock: Clock,

    /// The PPU's current mode.
    mode: Mode,

    /// The currently processed scanline.
    ly: u8,

    /// The LYC register to be compared with the current scanline.
    lyc: u8,

    /// The LCD control register.
    lcd_control: u8,

    /// The writable interrupt enable bits of the LCD status register.
    lcd_status: u8,

    scroll_x: u8,
    scroll_y: u8,

    window_x: u8,
    window_y: u8,

    palette_bg:   u8,
    palette_obp0: u8,
    palette_obp1: u8,

    /// The level of the LCD status interrupt line. The interrupt is
    /// requested on each raising edge only.
    stat_interrupt_line: bool,

    /// Stores the current line being processed for a window.
    /// This is independent of the frame line counter (LY) and just updated
    /// when window pixels were drawn for the current scanline.
    window_line: u8,

    /// The cached data of the currently processed scanline.
    current_scanline: ScanlineData,

    vram: VRam,
    oam:  Oam,

    /// The data buffer to store the actual viewport content presented to the display.
    lcd_buffer: LcdBuffer,

    signals: MemoryBusSignals,
}


impl LcdBuffer {
    pub fn alloc() -> LcdBuffer {
        LcdBuffer {
            pixels: [0x00; SCREEN_PIXELS]
        }
    }

    /// Get the width of the buffer image content.
    pub fn get_width(&self) -> u32 {
        SCREEN_W
    }

    /// Get the height of the buffer image content.
    pub fn get_height(&self) -> u32 {
        SCREEN_H
    }

    /// Get the value of a specific pixel.
    pub fn get_pixel(&self, x: u32, y: u32) -> u8 {
        let index = x + (y * SCREEN_W);
        self.pixels[index as usize]
    }

    /// Set the value of a specific pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        let index = x + (y * SCREEN_W);
        self.pixels[index as usize] = value & 0x03;
    }

    /// Get the pixel data to be displayed.
    pub fn get_pixels(&self) -> &PixelBuffer160x144 {
        &self.pixels
    }
}


impl TileSet {
    /// Selects a TileSet based on the value of a selection bit from the LCD control register.
    pub fn by_select_bit(bit: bool) -> TileSet {
        match bit {
            false => TileSet::H8800,
            true  => TileSet::H8000,
        }
    }

    /// Get the address of a tile when this tileset is used.
    pub fn address_of_tile(&self, tile: u8) -> u16 {
        let tile_u16 = tile as u16;

        match *self {
            TileSet::H8000 => 0x8000 + (tile_u16 << 4),
            TileSet::H8800 => 0x9000 + (tile_u16 << 4) - ((tile_u16 & 0x80) << 5),
        }
    }
}


impl TileMap {
    /// Selects a TileMap based on the value of a selection bit from the LCD control register.
    pub fn by_select_bit(bit: bool) -> TileMap {
        match bit {
            false => TileMap::H9800,
            true  => TileMap::H9C00,
        }
    }

    /// Get the base address where the tilemap is stored.
    pub fn base_address(&self) -> u16 {
        match *self {
            TileMap::H9800 => 0x9800,
            TileMap::H9C00 => 0x9c00,
        }
    }
}


impl Sprite {
    /// Creates an empty sprite with all values zero.
    pub fn empty() -> Sprite {
        Sprite {
            pos_x: 0,
            pos_y: 0,
            tile:  0,
            flags: 0,
        }
    }

    /// Checks whether the sprite is mirrored on X axis.
    pub fn is_flip_x(&self) -> bool {
        get_bit(self.flags, 5)
    }

    /// Checks whether the sprite is mirrored on Y axis.
    pub fn is_flip_y(&self) -> bool {
        get_bit(self.flags, 6)
    }

    /// Get the palette used by this sprite.
    pub fn get_palette(&self) -> u8 {
        if get_bit(self.flags, 4) {
            1
        }
        else {
            0
        }
    }

    /// Checks whether the sprite should be drawn behind non-zero background pixels.
    pub fn is_bg_priority(&self) -> bool {
        get_bit(self.flags, 7)
    }
}


#[cfg(feature = "std")]
impl Display for Sprite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tile #{} @ {}:{} flipX={} flipY={}",
            self.tile,
            self.pos_x as i32 - 8,
            self.pos_y as i32 - 16,
            self.is_flip_x(),
            self.is_flip_y()
        )
    }
}


impl ScanlineData {
    fn new() -> ScanlineData {
        ScanlineData {
            line: 0,
            sprites: [Sprite::empty(); MAX_SPRITES_PER_LINE],
            sprites_found: 0,
            window_enabled: false,
        }
    }
}


impl Ppu {
    /// Creates a new PPU object.
    pub fn new() -> Ppu {
        Ppu {
            clock: 0,

            // the LCD is disabled at power on; the reported mode is HBlank
            // until the control register enables the display
            mode: Mode::HBlank,

            ly: 0,
            lyc: 0,

            lcd_control: 0,
            lcd_status: 0,

            scroll_x: 0,
            scroll_y: 0,
            window_x: 0,
            window_y: 0,

            palette_bg:   0,
            palette_obp0: 0,
            palette_obp1: 0,

            stat_interrupt_line: false,
            window_line: 0,
            current_scanline: ScanlineData::new(),

            vram: VRam::new(),
            oam:  Oam::new(),

            lcd_buffer: LcdBuffer::alloc(),

            signals: MemoryBusSignals::default(),
        }
    }


    /// Let the PPU process the time passed by the instruction executed before.
    /// While the LCD is disabled, the PPU stays in its reset state and
    /// neither renders nor requests interrupts.
    pub fn update(&mut self, cycles: Clock) {
        if !self.is_lcd_enabled() {
            return;
        }

        self.clock += cycles;

        loop {
            match self.mode {
                Mode::OamScan => {
                    if self.clock < CPU_CYCLES_PER_OAM_SCAN {
                        break;
                    }

                    self.clock -= CPU_CYCLES_PER_OAM_SCAN;
                    self.current_scanline = self.do_oam_scan_for_line(self.ly);

                    self.enter_mode(Mode::DrawLine);
                }

                Mode::DrawLine => {
                    if self.clock < CPU_CYCLES_PER_DRAW {
                        break;
                    }

                    self.clock -= CPU_CYCLES_PER_DRAW;
                    self.render_scanline();

                    self.enter_mode(Mode::HBlank);
                }

                Mode::HBlank => {
                    if self.clock < CPU_CYCLES_PER_HBLANK {
                        break;
                    }

                    self.clock -= CPU_CYCLES_PER_HBLANK;
                    self.next_ly();
                }

                Mode::VBlank => {
                    if self.clock < CPU_CYCLES_PER_LINE {
                        break;
                    }

                    self.clock -= CPU_CYCLES_PER_LINE;
                    self.next_ly();
                }
            }
        }
    }


    /// Takes the signals collected since the last call.
    pub fn take_signals(&mut self) -> MemoryBusSignals {
        let signals  = self.signals;
        self.signals = MemoryBusSignals::default();

        signals
    }


    /// Switches into a given PPU mode.
    /// Entering the vertical blank period requests the vblank interrupt
    /// and signals the completed frame.
    fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;

        if let Mode::VBlank = mode {
            self.signals.interrupts |= Interrupt::VBlank;
            self.signals.events     |= DebugEvent::PpuFrameCompleted;
        }

        self.update_stat_interrupt_line();
    }


    /// Switches to the next scanline.
    /// Enters either Mode::OamScan or Mode::VBlank depending on
    /// the next scanline.
    fn next_ly(&mut self) {
        if self.ly == (LINES_PER_FRAME - 1) {
            self.ly = 0;
        }
        else {
            self.ly += 1;
        }

        // also progress the window line counter,
        // if the window was drawn in this line
        if self.current_scanline.window_enabled {
            self.window_line += 1;
            self.current_scanline.window_enabled = false;
        }

        match self.ly {
            0 => {
                // back on line #0 after vblank, starting a new frame
                self.window_line = 0;
                self.enter_mode(Mode::OamScan);
            }

            1 ..= 143 => {
                self.enter_mode(Mode::OamScan);
            }

            FIRST_VBLANK_LINE => {
                self.enter_mode(Mode::VBlank);
            }

            _ => {
                // remains in vblank; the coincidence flag still needs a refresh
                self.update_stat_interrupt_line();
            }
        }
    }


    /// Recomputes the level of the LCD status interrupt line from the
    /// current mode, the coincidence flag and the enable bits written
    /// into the status register. A raising edge requests the interrupt.
    fn update_stat_interrupt_line(&mut self) {
        let status = self.lcd_status;

        let line = self.is_lcd_enabled() && (
                (get_bit(status, LCD_STATUS_BIT_ENABLE_IRQ_MODE_0)    && self.mode == Mode::HBlank)
            ||  (get_bit(status, LCD_STATUS_BIT_ENABLE_IRQ_MODE_1)    && self.mode == Mode::VBlank)
            ||  (get_bit(status, LCD_STATUS_BIT_ENABLE_IRQ_MODE_2)    && self.mode == Mode::OamScan)
            ||  (get_bit(status, LCD_STATUS_BIT_ENABLE_IRQ_LYC_EQ_LY) && self.ly == self.lyc)
        );

        if line && !self.stat_interrupt_line {
            self.signals.interrupts |= Interrupt::LcdStat;
        }

        self.stat_interrupt_line = line;
    }


    /// Called when the LCD enable bit of the control register changes.
    /// Disabling the LCD resets the PPU into the first scanline with the
    /// reported mode being HBlank; no interrupts are generated while off.
    fn on_lcd_enabled_changed(&mut self, enabled: bool) {
        self.clock       = 0;
        self.ly          = 0;
        self.window_line = 0;

        self.current_scanline = ScanlineData::new();

        if enabled {
            self.mode = Mode::OamScan;
            self.update_stat_interrupt_line();
        }
        else {
            self.mode = Mode::HBlank;
            self.stat_interrupt_line = false;
        }
    }


    /// Checks whether the LCD is enabled by bit 7 of the control register.
    pub fn is_lcd_enabled(&self) -> bool {
        get_bit(self.lcd_control, LCD_CONTROL_BIT_LCD_ENABLED)
    }


    /// Get the PPU's current mode.
    pub fn get_mode(&self) -> Mode {
        self.mode
    }


    /// Get the currently processed scanline.
    pub fn get_ly(&self) -> u8 {
        self.ly
    }


    /// Get the LCD buffer which contains the actual data sent to the device's display.
    pub fn get_lcd(&self) -> &LcdBuffer {
        &self.lcd_buffer
    }


    /// Read a byte from video memory through the memory bus.
    pub fn read_vram(&self, address: u16) -> u8 {
        self.vram.get_at((address - MEMORY_LOCATION_VRAM_BEGIN) as usize)
    }


    /// Write a byte into video memory through the memory bus.
    pub fn write_vram(&mut self, address: u16, value: u8) {
        self.vram.set_at((address - MEMORY_LOCATION_VRAM_BEGIN) as usize, value);
    }


    /// Read a byte from the object attribute memory through the memory bus.
    pub fn read_oam(&self, address: u16) -> u8 {
        self.oam.get_at((address - MEMORY_LOCATION_OAM_BEGIN) as usize)
    }


    /// Write a byte into the object attribute memory through the memory bus.
    pub fn write_oam(&mut self, address: u16, value: u8) {
        self.oam.set_at((address - MEMORY_LOCATION_OAM_BEGIN) as usize, value);
    }


    /// Write a byte into the object attribute memory by its index within OAM.
    /// Used by the OAM DMA transfer, which is not affected by mode gating.
    pub fn write_oam_by_index(&mut self, index: u8, value: u8) {
        self.oam.set_at(index as usize, value);
    }


    /// Reads sprite data from its OAM entry.
    fn get_sprite(&self, index: u8) -> Sprite {
        let offset = (index as usize) * 4;

        Sprite {
            pos_y: self.oam.get_at(offset),
            pos_x: self.oam.get_at(offset + 1),
            tile:  self.oam.get_at(offset + 2),
            flags: self.oam.get_at(offset + 3),
        }
    }


    /// Compute the background location of any screen pixel.
    fn screen_to_background(&self, screen_x: u8, screen_y: u8) -> (u8, u8) {
        let background_x = ((screen_x as u32 + self.scroll_x as u32) & 0xff) as u8;
        let background_y = ((screen_y as u32 + self.scroll_y as u32) & 0xff) as u8;
        (background_x, background_y)
    }


    /// Performs an OAM scan for a single scanline, collecting up to ten
    /// sprites covering the line, ordered by their x position.
    fn do_oam_scan_for_line(&self, line_number: u8) -> ScanlineData {
        let mut scanline = ScanlineData::new();
        scanline.line = line_number;

        let big_sprites = get_bit(self.lcd_control, LCD_CONTROL_BIT_SPRITE_SIZE);
        let sprite_h    = if big_sprites { 16u16 } else { 8u16 };

        // sprite position 0 is not on scanline 0, but 16 pixel above the screen to
        // allow sprites being partially outside the screen.
        // Adjust the value here to avoid doing it for each check.
        let ly_plus_16 = (line_number as u16) + 16;

        // iterate through all OAM entries
        for oam_entry in 0..40 {
            let sprite = self.get_sprite(oam_entry);

            // take a sprite if x > 0 and it intersects the current scanline
            if
                    sprite.pos_x > 0
                &&  ly_plus_16 >= (sprite.pos_y as u16)
                &&  ly_plus_16 < (sprite.pos_y as u16 + sprite_h)
            {
                scanline.sprites[scanline.sprites_found as usize] = sprite;
                scanline.sprites_found += 1;

                if scanline.sprites_found as usize >= MAX_SPRITES_PER_LINE {
                    break;
                }
            }
        }

        // the ppu prioritizes sprites with lower x position over higher x position
        // independent of their order in the OAM list, so all found sprites get
        // sorted by their x position
        scanline.sprites[0 .. scanline.sprites_found as usize].sort_unstable_by(
            |a, b| a.pos_x.cmp(&b.pos_x)
        );

        scanline
    }


    /// Renders the current scanline into the LCD buffer.
    fn render_scanline(&mut self) {
        let lcdc            = self.lcd_control;
        let bg_enabled      = get_bit(lcdc, LCD_CONTROL_BIT_BG_ENABLED);
        let window_enabled  = get_bit(lcdc, LCD_CONTROL_BIT_WINDOW_ENABLED);
        let sprites_enabled = get_bit(lcdc, LCD_CONTROL_BIT_SPRITES_ENABLED);
        let tileset         = TileSet::by_select_bit(get_bit(lcdc, LCD_CONTROL_BIT_TILE_DATA_SELECT));
        let bg_tilemap      = TileMap::by_select_bit(get_bit(lcdc, LCD_CONTROL_BIT_BG_TILE_MAP_SELECT));
        let window_tilemap  = TileMap::by_select_bit(get_bit(lcdc, LCD_CONTROL_BIT_WINDOW_TILE_MAP_SELECT));
        let wx              = self.window_x;
        let wy              = self.window_y;

        for screen_x in 0 .. (SCREEN_W as u8) {
            let pixel_background = {
                if bg_enabled {
                    // check if the window is enabled and the current screen pixel
                    // is inside the area covered by wx/wy
                    if !self.current_scanline.window_enabled && window_enabled {
                        if (screen_x + 7 >= wx) && ((wy as u32) < SCREEN_H) && (wy <= self.ly) {
                            self.current_scanline.window_enabled = true;
                        }
                    }

                    // process window pixels instead of background,
                    // if the window was enabled for this scanline
                    if self.current_scanline.window_enabled {
                        self.read_tilemap_pixel(
                            window_tilemap,
                            tileset,
                            screen_x + 7 - wx,
                            self.window_line
                        )
                    }
                    else {
                        let (background_x, background_y) = self.screen_to_background(
                            screen_x,
                            self.ly
                        );

                        self.read_tilemap_pixel(
                            bg_tilemap,
                            tileset,
                            background_x,
                            background_y
                        )
                    }
                }
                else {
                    0
                }
            };

            // get the foreground pixel by reading the color of any sprite on the
            // current position within this scanline
            let sprite_data = if sprites_enabled {
                self.read_scanline_sprite_pixel(screen_x, pixel_background)
            }
            else {
                None
            };

            let (pixel, palette) = if let Some(sprite_pixel_data) = sprite_data {
                let sprite_palette = if sprite_pixel_data.palette_index == 0 {
                    self.palette_obp0
                }
                else {
                    self.palette_obp1
                };

                (sprite_pixel_data.color_index, sprite_palette)
            }
            else {
                (pixel_background, self.palette_bg)
            };

            let pixel_color = (palette >> (pixel << 1)) & 0x03;

            self.lcd_buffer.set_pixel(
                screen_x as u32,
                self.ly as u32,
                pixel_color
            );
        }
    }


    /// Reads a pixel from the current scanline sprite data on a given x position.
    fn read_scanline_sprite_pixel(&self, x: u8, pixel_background: u8) -> Option<SpritePixelData> {
        // screen position considering the border offset of -8 / -16
        let screen_x = x + 8;
        let screen_y = self.current_scanline.line + 16;

        let big_sprites = get_bit(self.lcd_control, LCD_CONTROL_BIT_SPRITE_SIZE);
        let sprite_h    = if big_sprites { 16 } else { 8 };
        let sprite_w    = 8;

        // when big sprites are enabled, the top sprite always has the least significant bit
        // set to 0, and the bottom sprite is using the same sprite number with the LSB set
        // to 1, so the LSB gets masked out to address the top sprite memory location.
        let sprite_mask = if big_sprites { 0xfe } else { 0xff };

        // iterate over all sprites previously found by the OAM scan
        for sprite_index in 0 .. self.current_scanline.sprites_found {
            let sprite = &(self.current_scanline.sprites[sprite_index as usize]);

            // check if the sprite overlaps the current scanline pixel
            if screen_x < sprite.pos_x || x >= sprite.pos_x {
                continue;
            }

            // calculate the position inside the sprite including x and y flip
            let mut sprite_pixel_x = screen_x - sprite.pos_x;
            let mut sprite_pixel_y = screen_y - sprite.pos_y;

            if sprite.is_flip_x() {
                sprite_pixel_x = sprite_w - sprite_pixel_x - 1;
            }

            if sprite.is_flip_y() {
                sprite_pixel_y = sprite_h - sprite_pixel_y - 1;
            }

            // read the sprite pixel value
            let pixel = self.read_tile_pixel(
                TileSet::H8000,
                sprite.tile & sprite_mask,
                sprite_pixel_x,
                sprite_pixel_y
            );

            // color index 0 is transparent; with bg priority set,
            // the sprite stays behind non-zero background pixels
            if pixel == 0 || (sprite.is_bg_priority() && pixel_background != 0) {
                continue;
            }

            return Some(SpritePixelData {
                color_index: pixel,
                palette_index: sprite.get_palette()
            });
        }

        None
    }


    /// Read the pixel value of the background or window on a given position.
    fn read_tilemap_pixel(&self, tilemap: TileMap, tileset: TileSet, tilemap_x: u8, tilemap_y: u8) -> u8 {
        let tile_x       = (tilemap_x / 8) as u16;
        let tile_y       = (tilemap_y / 8) as u16;
        let tile_pixel_x = tilemap_x % 8;
        let tile_pixel_y = tilemap_y % 8;
        let tile_index   = tile_y * 32 + tile_x;
        let tile_address = tilemap.base_address() + tile_index;
        let tile         = self.read_vram(tile_address);

        self.read_tile_pixel(
            tileset,
            tile,
            tile_pixel_x,
            tile_pixel_y
        )
    }


    /// Read the pixel value of a single tile.
    fn read_tile_pixel(&self, tileset: TileSet, tile: u8, x: u8, y: u8) -> u8 {
        let tile_address      = tileset.address_of_tile(tile);
        let tile_line_address = tile_address + (y as u16) * 2;
        let pixel_mask        = 1u8 << (7 - x);
        let byte0             = self.read_vram(tile_line_address);
        let byte1             = self.read_vram(tile_line_address + 1);

        0
            |   (if (byte0 & pixel_mask) != 0 { 0x01 } else { 0x00 })
            |   (if (byte1 & pixel_mask) != 0 { 0x02 } else { 0x00 })
    }
}


impl MemoryBusConnection for Ppu {
    fn on_read(&self, address: u16) -> u8 {
        match address {
            MEMORY_LOCATION_LCD_CONTROL => self.lcd_control,

            MEMORY_LOCATION_LCD_STATUS => {
                let coincidence = self.ly == self.lyc;

                0
                    |   LCD_STATUS_UNUSED_BITS
                    |   self.lcd_status
                    |   as_bit_flag(coincidence, LCD_STATUS_BIT_FLAG_COINCIDENCE)
                    |   (self.mode as u8)
            }

            MEMORY_LOCATION_SCY          => self.scroll_y,
            MEMORY_LOCATION_SCX          => self.scroll_x,
            MEMORY_LOCATION_LY           => self.ly,
            MEMORY_LOCATION_LYC          => self.lyc,
            MEMORY_LOCATION_PALETTE_BG   => self.palette_bg,
            MEMORY_LOCATION_PALETTE_OBP0 => self.palette_obp0,
            MEMORY_LOCATION_PALETTE_OBP1 => self.palette_obp1,
            MEMORY_LOCATION_WY           => self.window_y,
            MEMORY_LOCATION_WX           => self.window_x,

            _ => 0xff
        }
    }


    fn on_write(&mut self, address: u16, value: u8) {
        match address {
            MEMORY_LOCATION_LCD_CONTROL => {
                let was_enabled  = self.is_lcd_enabled();
                self.lcd_control = value;
                let is_enabled   = self.is_lcd_enabled();

                if was_enabled != is_enabled {
                    self.on_lcd_enabled_changed(is_enabled);
                }
            }

            MEMORY_LOCATION_LCD_STATUS => {
                self.lcd_status = value & LCD_STATUS_WRITABLE_BITS;
                self.update_stat_interrupt_line();
            }

            MEMORY_LOCATION_SCY => self.scroll_y = value,
            MEMORY_LOCATION_SCX => self.scroll_x = value,

            MEMORY_LOCATION_LY => {
                // LY is read only; writing resets the line counter
                self.ly = 0;
                self.update_stat_interrupt_line();
            }

            MEMORY_LOCATION_LYC => {
                self.lyc = value;
                self.update_stat_interrupt_line();
            }

            MEMORY_LOCATION_PALETTE_BG   => self.palette_bg   = value,
            MEMORY_LOCATION_PALETTE_OBP0 => self.palette_obp0 = value,
            MEMORY_LOCATION_PALETTE_OBP1 => self.palette_obp1 = value,
            MEMORY_LOCATION_WY           => self.window_y     = value,
            MEMORY_LOCATION_WX           => self.window_x     = value,

            _ => { }
        }
    }
}
