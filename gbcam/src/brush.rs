use crate::{
    compose::Offsets, consts::MAX_INDEX, plane::PhotoPlane, IndexOutOfRangeSnafu, InvalidInput,
    ZeroScaleSnafu,
};
use core::ops::Range;
use snafu::ensure;

/// A square brush painting a single color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brush {
    pub color: u8,
    pub size: usize,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: MAX_INDEX,
            size: 1,
        }
    }
}

impl PhotoPlane {
    /// Returns a new plane with a `brush.size` square painted from `(x, y)` towards the bottom
    /// right. The parts of the square outside the plane are dropped.
    pub fn paint(&self, x: isize, y: isize, brush: Brush) -> Result<PhotoPlane, InvalidInput> {
        ensure!(
            brush.color <= MAX_INDEX,
            IndexOutOfRangeSnafu {
                position: 0usize,
                value: brush.color,
                max: MAX_INDEX
            }
        );

        let (width, height) = (self.width(), self.height());
        let columns = clip(x, brush.size, width);
        let rows = clip(y, brush.size, height);

        let mut pixels = self.pixels().to_vec();
        for py in rows {
            pixels[py * width..][columns.clone()].fill(brush.color);
        }

        Ok(PhotoPlane::from_decoded(width, height, pixels))
    }
}

/// The part of `origin..origin + size` that lies within `0..len`. Empty if there is none.
fn clip(origin: isize, size: usize, len: usize) -> Range<usize> {
    let end = usize::try_from(origin.saturating_add_unsigned(size))
        .unwrap_or(0)
        .min(len);
    let start = usize::try_from(origin).unwrap_or(0).min(end);
    start..end
}

/// Maps a pixel of a composite scaled by `scale` back to plane coordinates.
///
/// The result lies outside the plane for points on the frame.
pub fn plane_point(
    raster_x: usize,
    raster_y: usize,
    scale: usize,
    offsets: Offsets,
) -> Result<(isize, isize), InvalidInput> {
    ensure!(scale > 0, ZeroScaleSnafu);

    let x = (raster_x / scale) as isize - offsets.left as isize;
    let y = (raster_y / scale) as isize - offsets.top as isize;
    Ok((x, y))
}
