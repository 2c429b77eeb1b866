//! Spatial compositions of several photos into one plane.

use crate::{
    plane::PhotoPlane, InvalidInput, NotEnoughPlanesSnafu, PlaneSizeMismatchSnafu,
};
use alloc::vec::Vec;
use core::fmt;
use snafu::ensure;

/// Height of one bar of [`MontageLayout::HorizontalBars`].
pub const BAR_HEIGHT: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MontageLayout {
    /// The first photo, unchanged.
    #[default]
    None,
    /// Photos stacked top to bottom; the output is `N` photos tall.
    Vertical,
    /// Photos side by side; the output is `N` photos wide.
    Horizontal,
    /// A 2x2 grid of photos at half resolution, cycling through the photos.
    Quadrant,
    /// The top two thirds of the first photo above the bottom third of the second.
    HorizontalTwoThirds,
    /// The first photo at half resolution in the center, the others around it.
    Border,
    /// Horizontal bars of [`BAR_HEIGHT`] rows, cycling through the photos.
    HorizontalBars,
    /// Each quarter of the output copied from the same quarter of a different photo.
    FourQuadrant,
}

impl MontageLayout {
    pub const ALL: [MontageLayout; 8] = [
        MontageLayout::None,
        MontageLayout::Vertical,
        MontageLayout::Horizontal,
        MontageLayout::Quadrant,
        MontageLayout::HorizontalTwoThirds,
        MontageLayout::Border,
        MontageLayout::HorizontalBars,
        MontageLayout::FourQuadrant,
    ];

    /// Layouts offered for any non-empty selection.
    pub const BASE: [MontageLayout; 6] = [
        MontageLayout::None,
        MontageLayout::Vertical,
        MontageLayout::Horizontal,
        MontageLayout::Quadrant,
        MontageLayout::HorizontalTwoThirds,
        MontageLayout::Border,
    ];

    /// Parses a layout id. Unknown ids fall back to [`MontageLayout::None`].
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|layout| layout.id() == id)
            .unwrap_or_else(|| {
                tracing::warn!(id, "unknown montage layout, using none");
                MontageLayout::None
            })
    }

    pub const fn id(self) -> &'static str {
        match self {
            MontageLayout::None => "none",
            MontageLayout::Vertical => "vertical",
            MontageLayout::Horizontal => "horizontal",
            MontageLayout::Quadrant => "quadrant",
            MontageLayout::HorizontalTwoThirds => "horizontal-2/3",
            MontageLayout::Border => "border",
            MontageLayout::HorizontalBars => "horizontal-bars",
            MontageLayout::FourQuadrant => "four-quadrant",
        }
    }

    /// The smallest number of photos [`create_montage`] accepts for this layout.
    pub const fn min_planes(self) -> usize {
        match self {
            MontageLayout::None => 1,
            MontageLayout::FourQuadrant => 3,
            _ => 2,
        }
    }

    /// The dimensions of the montage of `count` planes of `width` x `height`.
    pub const fn output_size(self, width: usize, height: usize, count: usize) -> (usize, usize) {
        match self {
            MontageLayout::Vertical => (width, height * count),
            MontageLayout::Horizontal => (width * count, height),
            _ => (width, height),
        }
    }
}

impl fmt::Display for MontageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The layouts to offer for a selection of `count` photos.
///
/// Empty for no photos. `horizontal-bars` needs at least two photos, `four-quadrant` three.
pub fn available_layouts(count: usize) -> Vec<MontageLayout> {
    if count == 0 {
        return Vec::new();
    }

    let mut layouts = MontageLayout::BASE.to_vec();
    if count >= MontageLayout::HorizontalBars.min_planes() {
        layouts.push(MontageLayout::HorizontalBars);
    }
    if count >= MontageLayout::FourQuadrant.min_planes() {
        layouts.push(MontageLayout::FourQuadrant);
    }

    layouts
}

/// Arranges `planes` according to `layout`.
///
/// All planes must have the same dimensions. Fewer planes than
/// [`MontageLayout::min_planes`] is an error for every layout; surplus planes are ignored by
/// layouts with a fixed number of cells.
pub fn create_montage(
    planes: &[PhotoPlane],
    layout: MontageLayout,
) -> Result<PhotoPlane, InvalidInput> {
    ensure!(
        planes.len() >= layout.min_planes(),
        NotEnoughPlanesSnafu {
            layout: layout.id(),
            required: layout.min_planes(),
            given: planes.len()
        }
    );

    let first = &planes[0];
    if let Some((position, plane)) = planes
        .iter()
        .enumerate()
        .find(|(_, plane)| !plane.same_size(first))
    {
        return PlaneSizeMismatchSnafu {
            position,
            width: plane.width(),
            height: plane.height(),
            expected_width: first.width(),
            expected_height: first.height(),
        }
        .fail();
    }

    let count = planes.len();
    let (width, height) = (first.width(), first.height());
    let (half_width, half_height) = (width / 2, height / 2);

    // Every closure returns `(plane, x, y)`: the source pixel of an output pixel.
    let montage = match layout {
        MontageLayout::None => return Ok(first.clone()),
        MontageLayout::Vertical => sample(planes, layout, |x, y| (y / height, x, y % height)),
        MontageLayout::Horizontal => sample(planes, layout, |x, y| (x / width, x % width, y)),
        MontageLayout::Quadrant => sample(planes, layout, |x, y| {
            let (cell_x, local_x) = cell(x, half_width);
            let (cell_y, local_y) = cell(y, half_height);
            let plane = (cell_y * 2 + cell_x) % count;

            (plane, (2 * local_x).min(width - 1), (2 * local_y).min(height - 1))
        }),
        MontageLayout::HorizontalTwoThirds => {
            let split = 2 * height / 3;
            sample(planes, layout, |x, y| (usize::from(y >= split), x, y))
        }
        MontageLayout::Border => {
            let (left, top) = (width / 4, height / 4);
            sample(planes, layout, |x, y| {
                let inside = (left..left + half_width).contains(&x)
                    && (top..top + half_height).contains(&y);
                if inside {
                    (0, 2 * (x - left), 2 * (y - top))
                } else {
                    (1 + x * (count - 1) / width, x, y)
                }
            })
        }
        MontageLayout::HorizontalBars => {
            sample(planes, layout, |x, y| ((y / BAR_HEIGHT) % count, x, y))
        }
        MontageLayout::FourQuadrant => sample(planes, layout, |x, y| {
            let quadrant = 2 * usize::from(y >= half_height) + usize::from(x >= half_width);
            (quadrant % count, x, y)
        }),
    };

    tracing::debug!(
        %layout,
        count,
        width = montage.width(),
        height = montage.height(),
        "created montage"
    );
    Ok(montage)
}

/// Splits a coordinate into a 2-cell grid position and the offset within that cell.
#[inline]
fn cell(position: usize, cell_size: usize) -> (usize, usize) {
    if cell_size == 0 || position < cell_size {
        (0, position)
    } else {
        (1, position - cell_size)
    }
}

fn sample(
    planes: &[PhotoPlane],
    layout: MontageLayout,
    source: impl Fn(usize, usize) -> (usize, usize, usize),
) -> PhotoPlane {
    let first = &planes[0];
    let (width, height) = layout.output_size(first.width(), first.height(), planes.len());

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let (plane, sx, sy) = source(x, y);
            let plane = &planes[plane];
            pixels.push(plane.pixels()[sy * plane.width() + sx]);
        }
    }

    PhotoPlane::from_decoded(width, height, pixels)
}
