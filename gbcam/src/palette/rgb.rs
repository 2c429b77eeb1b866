//! Combining three planes into one color image, one plane per RGB channel.

use crate::{utils::check_dimensions, InvalidInput, OutputTooSmallSnafu};
use itertools::izip;
use snafu::ensure;

/// Brightness and contrast applied when combining channels.
///
/// The interactive range is `-0.5..=0.5` for brightness and `-1.0..=1.0` for contrast. Values
/// outside of it are accepted; the output channels are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbConfig {
    pub brightness: f32,
    pub contrast: f32,
}

const MID_POINT: f32 = 128.0;

impl RgbConfig {
    pub const fn new(brightness: f32, contrast: f32) -> Self {
        Self {
            brightness,
            contrast,
        }
    }

    /// The channel value for indices 0..=3.
    pub fn channel_table(&self) -> [u8; 4] {
        [0u8, 1, 2, 3].map(|index| {
            let value = f32::from(index) / 3.0 * 255.0;
            let value = (value - MID_POINT) * (1.0 + self.contrast) + MID_POINT;
            let value = value + self.brightness * 255.0;

            // `as` saturates and maps NaN to 0.
            (value.clamp(0.0, 255.0) + 0.5) as u8
        })
    }
}

/// Combines three planes into RGBA bytes, writing 4 bytes per pixel.
///
/// The argument order is the channel order: swapping planes swaps channels. Returns the number
/// of pixels written.
pub fn apply_rgb_into(
    red: &[u8],
    green: &[u8],
    blue: &[u8],
    width: usize,
    height: usize,
    config: &RgbConfig,
    output: &mut [u8],
) -> Result<usize, InvalidInput> {
    check_dimensions(width, height, red.len())?;
    check_dimensions(width, height, green.len())?;
    check_dimensions(width, height, blue.len())?;

    let pixel_count = width * height;
    ensure!(
        output.len() >= pixel_count * 4,
        OutputTooSmallSnafu {
            required: pixel_count * 4,
            len: output.len()
        }
    );

    let table = config.channel_table();
    let channel = |index: u8| table[usize::from(index & 0b11)];

    for (&r, &g, &b, pixel) in izip!(red, green, blue, output.chunks_exact_mut(4)) {
        pixel.copy_from_slice(&[channel(r), channel(g), channel(b), u8::MAX]);
    }

    Ok(pixel_count)
}

/// Combines three planes into newly allocated RGBA bytes. See [`apply_rgb_into`].
#[cfg(feature = "alloc")]
pub fn apply_rgb(
    red: &[u8],
    green: &[u8],
    blue: &[u8],
    width: usize,
    height: usize,
    config: &RgbConfig,
) -> Result<alloc::vec::Vec<u8>, InvalidInput> {
    let mut rgba = alloc::vec![0; red.len() * 4];
    apply_rgb_into(red, green, blue, width, height, config, &mut rgba)?;

    Ok(rgba)
}
