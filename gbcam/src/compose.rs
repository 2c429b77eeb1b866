use crate::{
    consts::{
        DISPLAY_SCALE_MULTIPLIER, EXPORT_SCALE, FRAME_BORDER, WILD_FRAME_BOTTOM, WILD_FRAME_SIDE,
        WILD_FRAME_TOP,
    },
    frame::FrameAsset,
    utils::{check_dimensions, nearest},
    InvalidInput, ScaleTooLargeSnafu, ZeroScaleSnafu,
};
use alloc::{vec, vec::Vec};
use snafu::{ensure, OptionExt};

/// An RGBA8 image with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wraps RGBA bytes, checking that they hold `width * height` pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, InvalidInput> {
        check_dimensions(width, height, pixels.len() / 4)?;
        check_dimensions(width * 4, height, pixels.len())?;

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fully transparent raster.
    pub fn transparent(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
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

    /// Returns the pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = (y * self.width + x) * 4;
        let p = &self.pixels[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// Space left around the photo for a frame, in photo pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offsets {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Offsets {
    /// No frame.
    pub const NONE: Offsets = Offsets::uniform(0);

    /// Standard frames: 160x144 around a 128x112 photo.
    pub const STANDARD: Offsets = Offsets::uniform(FRAME_BORDER);

    /// Wild frames: 160x224 around a 128x112 photo.
    pub const WILD: Offsets = Offsets {
        top: WILD_FRAME_TOP,
        bottom: WILD_FRAME_BOTTOM,
        left: WILD_FRAME_SIDE,
        right: WILD_FRAME_SIDE,
    };

    pub const fn uniform(border: usize) -> Self {
        Self {
            top: border,
            bottom: border,
            left: border,
            right: border,
        }
    }

    pub fn for_frame(frame: Option<&FrameAsset>) -> Self {
        frame.map_or(Offsets::NONE, FrameAsset::offsets)
    }

    /// The size of a composite around a `width` x `height` photo.
    pub const fn outer_size(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width + self.left + self.right,
            height + self.top + self.bottom,
        )
    }
}

/// Draws the photo at `(offsets.left, offsets.top)`, then the frame (if any) stretched over the
/// whole composite.
///
/// The composite is `offsets` larger than the photo. Pixels covered by neither stay transparent.
pub fn compose(photo: &Raster, frame: Option<&Raster>, offsets: Offsets) -> Raster {
    let (width, height) = offsets.outer_size(photo.width, photo.height);
    let mut composite = Raster::transparent(width, height);

    let row_len = photo.width * 4;
    for y in 0..photo.height {
        let start = ((offsets.top + y) * width + offsets.left) * 4;
        composite.pixels[start..start + row_len]
            .copy_from_slice(&photo.pixels[y * row_len..(y + 1) * row_len]);
    }

    if let Some(frame) = frame.filter(|f| f.width > 0 && f.height > 0) {
        for y in 0..height {
            let fy = nearest(y, height, frame.height);
            for x in 0..width {
                let fx = nearest(x, width, frame.width);
                let src = (fy * frame.width + fx) * 4;
                let dst = (y * width + x) * 4;

                let blended = over(
                    pixel_at(&composite.pixels, dst),
                    pixel_at(&frame.pixels, src),
                );
                composite.pixels[dst..dst + 4].copy_from_slice(&blended);
            }
        }
    }

    composite
}

#[inline]
fn pixel_at(pixels: &[u8], i: usize) -> [u8; 4] {
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

/// Source-over blending of straight-alpha pixels.
pub fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    match (src[3], dst[3]) {
        (0, _) => dst,
        (255, _) | (_, 0) => src,
        (sa, da) => {
            let sa = u32::from(sa);
            let da = u32::from(da) * (255 - sa) / 255;
            let out_a = sa + da;

            let mut out = [0u8; 4];
            for i in 0..3 {
                let c = (u32::from(src[i]) * sa + u32::from(dst[i]) * da + out_a / 2) / out_a;
                out[i] = c as u8;
            }
            out[3] = out_a as u8;
            out
        }
    }
}

/// Upscales a raster by an integer factor, nearest neighbour, no smoothing.
pub fn scale_nearest(raster: &Raster, factor: usize) -> Result<Raster, InvalidInput> {
    ensure!(factor > 0, ZeroScaleSnafu);
    if factor == 1 {
        return Ok(raster.clone());
    }

    let too_large = || ScaleTooLargeSnafu {
        width: raster.width,
        height: raster.height,
        factor,
    };
    let (Some(width), Some(height), Some(len)) = (
        raster.width.checked_mul(factor),
        raster.height.checked_mul(factor),
        raster
            .pixels
            .len()
            .checked_mul(factor)
            .and_then(|len| len.checked_mul(factor)),
    ) else {
        return too_large().fail();
    };
    ensure!(len <= isize::MAX as usize, too_large());

    if raster.pixels.is_empty() {
        return Ok(Raster::transparent(width, height));
    }

    let mut pixels = Vec::with_capacity(len);
    for row in raster.pixels.chunks_exact(raster.width * 4) {
        let start = pixels.len();
        for pixel in row.chunks_exact(4) {
            for _ in 0..factor {
                pixels.extend_from_slice(pixel);
            }
        }
        for _ in 1..factor {
            pixels.extend_from_within(start..start + width * 4);
        }
    }

    Ok(Raster {
        width,
        height,
        pixels,
    })
}

/// The raster offered for download or sharing: `factor` times the composite,
/// [`EXPORT_SCALE`] by default.
pub fn to_export_raster(raster: &Raster, factor: Option<usize>) -> Result<Raster, InvalidInput> {
    scale_nearest(raster, factor.unwrap_or(EXPORT_SCALE))
}

/// The raster shown on screen for a display scale setting (`1..=4` in the interactive view).
pub fn to_display_raster(raster: &Raster, display_scale: usize) -> Result<Raster, InvalidInput> {
    let factor = display_scale
        .checked_mul(DISPLAY_SCALE_MULTIPLIER)
        .context(ScaleTooLargeSnafu {
            width: raster.width,
            height: raster.height,
            factor: display_scale,
        })?;
    scale_nearest(raster, factor)
}
