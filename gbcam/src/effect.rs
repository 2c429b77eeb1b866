//! Trick lens effects: geometric remappings of a single plane.
//!
//! Effects work on color indices, before any palette is applied. All of them return a new buffer
//! of the same dimensions.
//!
//! # Mirrors are not involutions
//!
//! A mirror copies one half of the image, flipped, over the other half. The source half is left
//! untouched, so mirroring an already mirrored image changes nothing, and the overwritten half
//! cannot be recovered:
//!
//! ```plain
//! input      mirror-rtl   mirror-rtl again
//! a b c d    d c c d      d c c d
//! ```

use crate::{consts::MAX_INDEX, plane::PhotoPlane, utils::check_dimensions, InvalidInput};
use alloc::vec::Vec;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EffectKind {
    #[default]
    None,
    /// `3 - index` for every pixel. Applying it twice restores the input.
    Invert,
    /// Right half mirrored onto the left half.
    MirrorRtl,
    /// Left half mirrored onto the right half.
    MirrorLtr,
    /// Bottom half mirrored onto the top half.
    MirrorBtt,
    /// Top half mirrored onto the bottom half.
    MirrorTtb,
    /// The central region of half width and half height, doubled in both directions.
    Zoom,
    /// The central half-width band, doubled horizontally.
    ZoomH,
    /// The central half-height band, doubled vertically.
    ZoomV,
    /// The whole image at half size, repeated 2x2.
    Tile,
}

impl EffectKind {
    pub const ALL: [EffectKind; 10] = [
        EffectKind::None,
        EffectKind::Invert,
        EffectKind::MirrorRtl,
        EffectKind::MirrorLtr,
        EffectKind::MirrorBtt,
        EffectKind::MirrorTtb,
        EffectKind::Zoom,
        EffectKind::ZoomH,
        EffectKind::ZoomV,
        EffectKind::Tile,
    ];

    /// Parses an effect id. Unknown ids fall back to [`EffectKind::None`].
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|effect| effect.id() == id)
            .unwrap_or_else(|| {
                tracing::warn!(id, "unknown effect, using none");
                EffectKind::None
            })
    }

    pub const fn id(self) -> &'static str {
        match self {
            EffectKind::None => "none",
            EffectKind::Invert => "invert",
            EffectKind::MirrorRtl => "mirror-rtl",
            EffectKind::MirrorLtr => "mirror-ltr",
            EffectKind::MirrorBtt => "mirror-btt",
            EffectKind::MirrorTtb => "mirror-ttb",
            EffectKind::Zoom => "zoom",
            EffectKind::ZoomH => "zoom-h",
            EffectKind::ZoomV => "zoom-v",
            EffectKind::Tile => "tile",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Applies an effect to a `width` x `height` index buffer.
pub fn apply_effect(
    indices: &[u8],
    width: usize,
    height: usize,
    effect: EffectKind,
) -> Result<Vec<u8>, InvalidInput> {
    check_dimensions(width, height, indices.len())?;

    Ok(transform(indices, width, height, effect))
}

/// [`apply_effect`] without the dimension check.
fn transform(indices: &[u8], width: usize, height: usize, effect: EffectKind) -> Vec<u8> {
    let (half_width, half_height) = (width / 2, height / 2);
    let (quarter_width, quarter_height) = (width / 4, height / 4);

    match effect {
        EffectKind::None => indices.to_vec(),
        EffectKind::Invert => indices
            .iter()
            .map(|&index| MAX_INDEX - (index & MAX_INDEX))
            .collect(),
        EffectKind::MirrorRtl => remap(indices, width, height, |x, y| {
            let x = if x < half_width { width - 1 - x } else { x };
            (x, y)
        }),
        EffectKind::MirrorLtr => remap(indices, width, height, |x, y| {
            let x = if x >= width - half_width { width - 1 - x } else { x };
            (x, y)
        }),
        EffectKind::MirrorBtt => remap(indices, width, height, |x, y| {
            let y = if y < half_height { height - 1 - y } else { y };
            (x, y)
        }),
        EffectKind::MirrorTtb => remap(indices, width, height, |x, y| {
            let y = if y >= height - half_height {
                height - 1 - y
            } else {
                y
            };
            (x, y)
        }),
        EffectKind::Zoom => remap(indices, width, height, |x, y| {
            (quarter_width + x / 2, quarter_height + y / 2)
        }),
        EffectKind::ZoomH => remap(indices, width, height, |x, y| (quarter_width + x / 2, y)),
        EffectKind::ZoomV => remap(indices, width, height, |x, y| (x, quarter_height + y / 2)),
        EffectKind::Tile => remap(indices, width, height, |x, y| {
            let x = if half_width == 0 { x } else { 2 * (x % half_width) };
            let y = if half_height == 0 { y } else { 2 * (y % half_height) };
            (x, y)
        }),
    }
}

/// Builds an output buffer where each pixel is read from the source coordinate returned by
/// `source`. Source coordinates must lie within the buffer.
fn remap(
    indices: &[u8],
    width: usize,
    height: usize,
    source: impl Fn(usize, usize) -> (usize, usize),
) -> Vec<u8> {
    let mut output = Vec::with_capacity(indices.len());
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = source(x, y);
            output.push(indices[sy * width + sx]);
        }
    }

    output
}

impl PhotoPlane {
    /// Returns a new plane with `effect` applied.
    pub fn with_effect(&self, effect: EffectKind) -> PhotoPlane {
        let pixels = transform(self.pixels(), self.width(), self.height(), effect);
        PhotoPlane::from_decoded(self.width(), self.height(), pixels)
    }
}
