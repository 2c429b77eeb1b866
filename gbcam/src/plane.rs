use crate::{
    consts::{MAX_INDEX, PHOTO_HEIGHT, PHOTO_PIXELS, PHOTO_WIDTH},
    utils::check_dimensions,
    IndexOutOfRangeSnafu, InvalidInput,
};
use alloc::vec::Vec;
use snafu::ensure;

/// A single-channel buffer of color indices (`0..=3`), row-major.
///
/// Planes never change after construction. Effects, montages and brush strokes all return new
/// planes, so the decoded original stays available.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhotoPlane {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PhotoPlane {
    /// Creates a plane, checking that `pixels` holds `width * height` indices of at most 3.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, InvalidInput> {
        check_dimensions(width, height, pixels.len())?;
        if let Some(position) = pixels.iter().position(|&value| value > MAX_INDEX) {
            return IndexOutOfRangeSnafu {
                position,
                value: pixels[position],
                max: MAX_INDEX,
            }
            .fail();
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A plane filled with a single index.
    pub fn filled(width: usize, height: usize, index: u8) -> Result<Self, InvalidInput> {
        ensure!(
            index <= MAX_INDEX,
            IndexOutOfRangeSnafu {
                position: 0usize,
                value: index,
                max: MAX_INDEX
            }
        );

        Ok(Self {
            width,
            height,
            pixels: alloc::vec![index; width * height],
        })
    }

    /// Wraps a buffer produced by one of the crate's own transforms, which already guarantee the
    /// invariants.
    pub(crate) fn from_decoded(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(width * height, pixels.len());
        debug_assert!(pixels.iter().all(|&p| p <= MAX_INDEX));

        Self {
            width,
            height,
            pixels,
        }
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
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns the index at `(x, y)`, or `None` outside the plane.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Whether the plane has the dimensions of a camera photo.
    pub fn is_photo_sized(&self) -> bool {
        self.width == PHOTO_WIDTH && self.height == PHOTO_HEIGHT
    }

    #[inline]
    pub(crate) fn same_size(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl Default for PhotoPlane {
    /// A blank (index 0) photo-sized plane.
    fn default() -> Self {
        Self::from_decoded(PHOTO_WIDTH, PHOTO_HEIGHT, alloc::vec![0; PHOTO_PIXELS])
    }
}
