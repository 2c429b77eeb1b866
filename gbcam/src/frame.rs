use crate::{
    compose::Offsets,
    consts::TRANSPARENT_INDEX,
    palette::{Palette, PaletteOrder},
    utils::check_dimensions,
    IndexOutOfRangeSnafu, InvalidInput, Rgba8888,
};
use alloc::{string::String, vec::Vec};
use byteorder::NativeEndian;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// The fixed shade encoding of frame artwork.
///
/// Unlike photo indices, these values do not depend on any palette: a frame is authored in
/// grayscale and recolored to match the photo it surrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FrameShade {
    White = 0,
    LightGray = 1,
    DarkGray = 2,
    Black = 3,
    Transparent = TRANSPARENT_INDEX,
}

impl FrameShade {
    /// Classifies an RGBA pixel of frame artwork. Only the red channel and alpha are inspected.
    #[inline]
    pub const fn from_rgba([r, _, _, a]: [u8; 4]) -> Self {
        if a < 128 {
            FrameShade::Transparent
        } else if r >= 200 {
            FrameShade::White
        } else if r >= 120 {
            FrameShade::LightGray
        } else if r >= 40 {
            FrameShade::DarkGray
        } else {
            FrameShade::Black
        }
    }
}

/// A decorative border in [`FrameShade`] encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAsset {
    width: usize,
    height: usize,
    index_data: Vec<u8>,
    name: String,
}

impl FrameAsset {
    /// Creates a frame from shade indices (`0..=4`).
    pub fn new(
        name: impl Into<String>,
        width: usize,
        height: usize,
        index_data: Vec<u8>,
    ) -> Result<Self, InvalidInput> {
        check_dimensions(width, height, index_data.len())?;
        if let Some(position) = index_data.iter().position(|&v| v > TRANSPARENT_INDEX) {
            return IndexOutOfRangeSnafu {
                position,
                value: index_data[position],
                max: TRANSPARENT_INDEX,
            }
            .fail();
        }

        Ok(Self {
            width,
            height,
            index_data,
            name: name.into(),
        })
    }

    /// Creates a frame from RGBA artwork, classifying each pixel with [`FrameShade::from_rgba`].
    pub fn from_rgba(
        name: impl Into<String>,
        width: usize,
        height: usize,
        rgba: &[u8],
    ) -> Result<Self, InvalidInput> {
        check_dimensions(width, height, rgba.len() / 4)?;
        check_dimensions(width * 4, height, rgba.len())?;

        let index_data = rgba
            .chunks_exact(4)
            .map(|p| FrameShade::from_rgba([p[0], p[1], p[2], p[3]]) as u8)
            .collect();

        Ok(Self {
            width,
            height,
            index_data,
            name: name.into(),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn index_data(&self) -> &[u8] {
        &self.index_data
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wild frames are taller than standard ones and leave more room above and below the photo.
    pub fn is_wild(&self) -> bool {
        self.name.contains("wild")
    }

    /// Where the photo sits inside this frame.
    pub fn offsets(&self) -> Offsets {
        if self.is_wild() {
            Offsets::WILD
        } else {
            Offsets::STANDARD
        }
    }
}

/// Recolors a frame with a palette. Transparent pixels come out as `[0, 0, 0, 0]`, all others
/// opaque.
pub fn recolor_frame(frame: &FrameAsset, palette: &Palette, order: PaletteOrder) -> Vec<u8> {
    let table = palette.lookup_table::<Rgba8888, NativeEndian>(order);

    let mut rgba = Vec::with_capacity(frame.index_data.len() * 4);
    for &index in &frame.index_data {
        if index == TRANSPARENT_INDEX {
            rgba.extend_from_slice(&[0; 4]);
        } else {
            rgba.extend_from_slice(&table[usize::from(index)]);
        }
    }

    rgba
}
