use crate::{BufferSizeSnafu, InvalidInput};
use snafu::ensure;

pub use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

/// Checks that a buffer of `len` elements holds exactly `width * height` pixels.
#[inline]
pub fn check_dimensions(width: usize, height: usize, len: usize) -> Result<(), InvalidInput> {
    ensure!(
        width.checked_mul(height) == Some(len),
        BufferSizeSnafu { width, height, len }
    );
    Ok(())
}

/// Maps a destination coordinate onto a source axis of a different length, sampling pixel
/// centers (nearest neighbour, no smoothing). `dst` must be below `dst_len`.
#[inline]
pub const fn nearest(dst: usize, dst_len: usize, src_len: usize) -> usize {
    (2 * dst + 1) * src_len / (2 * dst_len)
}

/// Compose the 5-bit R, 6-bit G, and 5-bit B values into a RGB565 u16 pixel. Does not mask off
/// higher bits if they are set.
#[inline]
pub const fn encode_rgb565_unchecked([r, g, b]: [u8; 3]) -> u16 {
    ((r as u16) << 11) | ((g as u16) << 5) | (b as u16)
}

/// Converts an RGB888 pixel into an RGB565 pixel.
#[inline]
pub const fn rgb888_to_rgb565([r, g, b]: [u8; 3]) -> [u8; 3] {
    // https://stackoverflow.com/questions/2442576/how-does-one-convert-16-bit-rgb565-to-24-bit-rgb888
    let r = (r as u32 * 249 + 1014) >> 11;
    let g = (g as u32 * 253 + 505) >> 10;
    let b = (b as u32 * 249 + 1014) >> 11;

    [r as u8, g as u8, b as u8]
}

/// Splits a RGB565 pixel into its 5/6/5-bit components.
#[inline]
pub const fn decode_565(pixel: u16) -> [u8; 3] {
    let r = (pixel & 0b1111_1000_0000_0000) >> 11;
    let g = (pixel & 0b0000_0111_1110_0000) >> 5;
    let b = pixel & 0b0000_0000_0001_1111;

    [r as u8, g as u8, b as u8]
}
