#![allow(dead_code)]

use gbcam::{
    consts::{FIRST_SLOT_OFFSET, PHOTO_BYTES, PHOTO_HEIGHT, PHOTO_WIDTH, SLOT_COUNT, SLOT_STRIDE},
    PhotoPlane,
};

/// Size of a save holding every photo slot.
pub const SAVE_LEN: usize = FIRST_SLOT_OFFSET + SLOT_COUNT * SLOT_STRIDE;

/// Tile data with a few known pixels set:
///
/// - `(0, 0)..(3, 0)`: `3, 1, 2, 0`
/// - `(8, 0)`: `1`
/// - `(7, 9)`: `2`
/// - `(127, 111)`: `3`
///
/// Every other pixel is 0.
pub fn fixture_tiles() -> Vec<u8> {
    let mut data = vec![0; PHOTO_BYTES];
    data[0] = 0b1100_0000;
    data[1] = 0b1010_0000;
    data[16] = 0b1000_0000;
    data[16 * 16 + 2 + 1] = 0b0000_0001;
    data[PHOTO_BYTES - 2] = 0b0000_0001;
    data[PHOTO_BYTES - 1] = 0b0000_0001;
    data
}

/// A full-size save with `tiles` stored in `slot`.
pub fn save_with(slot: usize, tiles: &[u8]) -> Vec<u8> {
    let mut save = vec![0; SAVE_LEN];
    let offset = FIRST_SLOT_OFFSET + (slot - 1) * SLOT_STRIDE;
    save[offset..offset + tiles.len()].copy_from_slice(tiles);
    save
}

/// Tile data where every pixel has index `value`.
pub fn solid_tiles(value: u8) -> Vec<u8> {
    let low = if value & 1 != 0 { 0xFF } else { 0x00 };
    let high = if value & 2 != 0 { 0xFF } else { 0x00 };
    [low, high].repeat(PHOTO_BYTES / 2)
}

pub fn filled(value: u8) -> PhotoPlane {
    PhotoPlane::filled(PHOTO_WIDTH, PHOTO_HEIGHT, value).unwrap()
}

/// A plane where each pixel is `f(x, y)`.
pub fn plane_from(width: usize, height: usize, f: impl Fn(usize, usize) -> u8) -> PhotoPlane {
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| f(x, y))
        .collect();
    PhotoPlane::new(width, height, pixels).unwrap()
}

pub fn rows(plane: &PhotoPlane) -> Vec<Vec<u8>> {
    plane
        .pixels()
        .chunks(plane.width())
        .map(<[u8]>::to_vec)
        .collect()
}
