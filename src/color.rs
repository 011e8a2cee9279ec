//! Packed 32-bit colors.
//!
//! Colors travel through the buffer as `0xWWRRGGBB`. Three-channel strips
//! ignore the top byte; the wire order is applied later by
//! [`ColorLayout::encode`](crate::layout::ColorLayout::encode).

pub const OFF: u32 = 0x0000_0000;
pub const RED: u32 = 0x00FF_0000;
pub const GREEN: u32 = 0x0000_FF00;
pub const BLUE: u32 = 0x0000_00FF;
/// Full white synthesized from the red, green and blue channels.
pub const WHITE: u32 = 0x00FF_FFFF;

/// Mask covering the red, green and blue bytes.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    ((w as u32) << 24) | pack_rgb(r, g, b)
}

pub const fn red(color: u32) -> u8 {
    (color >> 16) as u8
}

pub const fn green(color: u32) -> u8 {
    (color >> 8) as u8
}

pub const fn blue(color: u32) -> u8 {
    color as u8
}

pub const fn white(color: u32) -> u8 {
    (color >> 24) as u8
}

/// Replace the white byte, keeping the color channels.
pub const fn with_white(color: u32, w: u8) -> u32 {
    (color & RGB_MASK) | ((w as u32) << 24)
}
