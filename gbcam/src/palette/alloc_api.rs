use crate::{
    palette::{Palette, PaletteOrder},
    Rgba8888,
};
use alloc::vec::Vec;
use byteorder::NativeEndian;

/// Maps color indices to RGBA bytes (`[r, g, b, 255]` per index).
pub fn apply_palette(indices: &[u8], palette: &Palette, order: PaletteOrder) -> Vec<u8> {
    let table = palette.lookup_table::<Rgba8888, NativeEndian>(order);

    let mut rgba = Vec::with_capacity(indices.len() * 4);
    for &index in indices {
        rgba.extend_from_slice(&table[usize::from(index & 0b11)]);
    }

    rgba
}
