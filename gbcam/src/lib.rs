//! Decoding, recoloring and compositing of Game Boy Camera photos.
//!
//! The camera stores each photo as 2-bit-per-pixel tile data: 128x112 pixels, four shades. This
//! crate turns that data into color-index planes ([`PhotoPlane`]), applies trick lens effects and
//! montages to those planes, maps them to colors through a four-entry [`Palette`](palette::Palette)
//! (or combines three planes as RGB channels), overlays a recolored frame and produces rasters
//! for display and export.
//!
//! # Pipeline
//!
//! Every stage works on its own buffer and returns a new one. The order is fixed:
//!
//! ```plain
//! save bytes -> decode -> montage -> effect -> palette | rgb -> frame compose -> scale -> encode
//! ```
//!
//! [`Pipeline`](pipeline::Pipeline) runs these stages in that order; the individual functions are
//! public for callers that only need one of them.
//!
//! # `no_std`
//!
//! Without the `alloc` feature, the tile decoder ([`decode::decode_tiles_to_slice`]) and the
//! palette mapper ([`palette::apply_palette_into`]) write into caller-provided slices, in either
//! [`Rgba8888`] or [`Rgb565`] output. Everything producing new buffers needs `alloc`; frame loading
//! from encoded images and PNG/JPEG export need `std`.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod decode;
pub mod palette;
pub mod utils;

#[cfg(feature = "alloc")]
pub mod brush;
#[cfg(feature = "alloc")]
pub mod compose;
#[cfg(feature = "alloc")]
pub mod effect;
#[cfg(feature = "std")]
pub mod export;
#[cfg(feature = "alloc")]
pub mod frame;
#[cfg(feature = "alloc")]
pub mod montage;
#[cfg(feature = "alloc")]
pub mod pipeline;
#[cfg(feature = "alloc")]
pub mod plane;

use byteorder::{ByteOrder, NativeEndian};
use palette::Color;
use snafu::Snafu;

#[cfg(feature = "alloc")]
pub use compose::{Offsets, Raster};
#[cfg(feature = "alloc")]
pub use effect::EffectKind;
#[cfg(feature = "alloc")]
pub use frame::FrameAsset;
#[cfg(feature = "alloc")]
pub use montage::MontageLayout;
#[cfg(feature = "alloc")]
pub use pipeline::Pipeline;
#[cfg(feature = "alloc")]
pub use plane::PhotoPlane;

/// Fixed geometry of the camera, its save file and the frames drawn around photos.
pub mod consts {
    /// Width of a photo, in pixels.
    pub const PHOTO_WIDTH: usize = 128;

    /// Height of a photo, in pixels.
    pub const PHOTO_HEIGHT: usize = 112;

    /// Number of pixels in a photo.
    pub const PHOTO_PIXELS: usize = PHOTO_WIDTH * PHOTO_HEIGHT;

    /// Edge length of a square tile, in pixels.
    pub const TILE_SIZE: usize = 8;

    /// Number of tiles in one row of a photo.
    pub const TILES_PER_ROW: usize = PHOTO_WIDTH / TILE_SIZE;

    /// Number of tile rows in a photo.
    pub const TILES_PER_COLUMN: usize = PHOTO_HEIGHT / TILE_SIZE;

    /// Size of one encoded tile.
    ///
    /// ```plain
    /// .- tile row y (2 bytes) ---------------------------------.
    /// |         Byte[2y]          |        Byte[2y + 1]        |
    /// |  7  6  5  4  3  2  1  0   |  7  6  5  4  3  2  1  0    |
    /// |---------------------------+----------------------------|
    /// | low bit of pixels x=0..7  | high bit of pixels x=0..7  |
    /// `--------------------------------------------------------`
    /// ```
    ///
    /// - pixel `x` of the row lives in bit `7 - x` of both bytes
    /// - the color index is `low + 2 * high`: 0..3
    /// - tiles are stored row-major, 16 tiles per row, 14 rows
    pub const BYTES_PER_TILE: usize = 16;

    /// Size of one encoded photo.
    pub const PHOTO_BYTES: usize = TILES_PER_ROW * TILES_PER_COLUMN * BYTES_PER_TILE;

    /// Number of photo slots in a save file. Slots are numbered `1..=SLOT_COUNT`.
    pub const SLOT_COUNT: usize = 30;

    /// Offset of slot 1 in the save file.
    pub const FIRST_SLOT_OFFSET: usize = 0x2000;

    /// Distance between two consecutive slots in the save file.
    pub const SLOT_STRIDE: usize = 0x1000;

    /// Largest color index a photo pixel can hold.
    pub const MAX_INDEX: u8 = 3;

    /// Frame index marking a transparent pixel.
    pub const TRANSPARENT_INDEX: u8 = 4;

    /// Border around a photo drawn with a standard frame, on every side.
    pub const FRAME_BORDER: usize = 16;

    /// Border above a photo drawn with a wild frame.
    pub const WILD_FRAME_TOP: usize = 40;

    /// Border below a photo drawn with a wild frame.
    pub const WILD_FRAME_BOTTOM: usize = 72;

    /// Border left and right of a photo drawn with a wild frame.
    pub const WILD_FRAME_SIDE: usize = 16;

    /// Upscaling factor of exported rasters.
    pub const EXPORT_SCALE: usize = 10;

    /// Display rasters are scaled by this times the user-selected display scale.
    pub const DISPLAY_SCALE_MULTIPLIER: usize = 2;
}

/// Errors caused by buffers or arguments that cannot be processed.
///
/// Unknown effect, layout or palette order ids are not errors; they fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InvalidInput {
    #[snafu(display(
        "Buffer of {len} pixels doesn't match the dimensions {width}x{height} == {} pixels",
        width.saturating_mul(*height)
    ))]
    BufferSize {
        width: usize,
        height: usize,
        len: usize,
    },
    #[snafu(display(
        "Photo data is {len} bytes long, expected {} bytes",
        consts::PHOTO_BYTES
    ))]
    TruncatedPhoto { len: usize },
    #[snafu(display("Save data is {len} bytes long, slot {slot} needs {required} bytes"))]
    TruncatedSave {
        slot: usize,
        required: usize,
        len: usize,
    },
    #[snafu(display("Output holds {len} elements, {required} are needed"))]
    OutputTooSmall { required: usize, len: usize },
    #[snafu(display("Pixel {position} holds index {value}, the maximum is {max}"))]
    IndexOutOfRange { position: usize, value: u8, max: u8 },
    #[snafu(display(
        "Plane {position} is {width}x{height}, expected {expected_width}x{expected_height}"
    ))]
    PlaneSizeMismatch {
        position: usize,
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },
    #[snafu(display("Layout `{layout}` needs at least {required} photos, {given} given"))]
    NotEnoughPlanes {
        layout: &'static str,
        required: usize,
        given: usize,
    },
    #[snafu(display("Scale factor must be at least 1"))]
    ZeroScale,
    #[snafu(display("Scaling {width}x{height} pixels by {factor} overflows"))]
    ScaleTooLarge {
        width: usize,
        height: usize,
        factor: usize,
    },
}

/// An output pixel format the palette mapper can write.
pub trait PixelFormat {
    type OutputElement: Copy;

    /// Converts an opaque color into the output representation.
    ///
    /// Multi-byte formats are laid out in the byte order `B`.
    fn to_output<B: ByteOrder>(color: Color) -> Self::OutputElement;
}

/// 8 bits per channel, `[r, g, b, a]`, always opaque.
pub struct Rgba8888;

impl PixelFormat for Rgba8888 {
    type OutputElement = [u8; 4];

    #[inline]
    fn to_output<B: ByteOrder>(Color { r, g, b }: Color) -> Self::OutputElement {
        [r, g, b, u8::MAX]
    }
}

/// 16-bit RGB565, for framebuffers of small displays.
pub struct Rgb565;

impl PixelFormat for Rgb565 {
    type OutputElement = u16;

    #[inline]
    fn to_output<B: ByteOrder>(Color { r, g, b }: Color) -> Self::OutputElement {
        let pixel = utils::encode_rgb565_unchecked(utils::rgb888_to_rgb565([r, g, b]));

        let mut buf = [0u8; 2];
        NativeEndian::write_u16(&mut buf, pixel);
        B::read_u16(&buf)
    }
}
