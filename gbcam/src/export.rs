//! Encoding rasters for download or sharing.

use crate::{
    compose::{to_export_raster, Raster},
    InvalidInput,
};
use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    ColorType, ImageEncoder,
};
use snafu::{ResultExt, Snafu};
use std::{fmt, str::FromStr};

/// JPEG quality used when none is given, on the `0.0..=1.0` scale.
pub const DEFAULT_QUALITY: f32 = 0.9;

#[derive(Debug, Snafu)]
pub enum ExportError {
    #[snafu(display("Failed to scale raster for export"))]
    Scale { source: InvalidInput },
    #[snafu(display("Raster of {width}x{height} pixels is too large to encode"))]
    TooLarge { width: usize, height: usize },
    #[snafu(display("Failed to encode {format} image"))]
    Encode {
        format: ExportFormat,
        source: image::ImageError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(ExportFormat::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(ExportFormat::Jpeg))
               .or_else(|| s.eq_ignore_ascii_case("jpeg").then_some(ExportFormat::Jpeg))
        else { return Err("invalid export format, expected png or jpg"); };

        Ok(format)
    }
}

/// Upscales a composite by `scale` ([`EXPORT_SCALE`](crate::consts::EXPORT_SCALE) if `None`)
/// and encodes it.
///
/// `quality` (`0.0..=1.0`, [`DEFAULT_QUALITY`] if `None`) only affects JPEG. JPEG has no alpha,
/// so transparent pixels are flattened onto black.
pub fn export_raster(
    raster: &Raster,
    scale: Option<usize>,
    format: ExportFormat,
    quality: Option<f32>,
) -> Result<Vec<u8>, ExportError> {
    let scaled = to_export_raster(raster, scale).context(ScaleSnafu)?;
    let (width, height) = (scaled.width(), scaled.height());
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return TooLargeSnafu { width, height }.fail();
    };

    let mut encoded = Vec::new();
    match format {
        ExportFormat::Png => PngEncoder::new(&mut encoded)
            .write_image(scaled.pixels(), w, h, ColorType::Rgba8)
            .context(EncodeSnafu { format })?,
        ExportFormat::Jpeg => {
            let quality = jpeg_quality(quality.unwrap_or(DEFAULT_QUALITY));
            let rgb = flatten_alpha(scaled.pixels());
            JpegEncoder::new_with_quality(&mut encoded, quality)
                .write_image(&rgb, w, h, ColorType::Rgb8)
                .context(EncodeSnafu { format })?
        }
    }

    tracing::debug!(%format, width, height, bytes = encoded.len(), "exported raster");
    Ok(encoded)
}

/// Maps a `0.0..=1.0` quality onto the encoder's `1..=100`.
fn jpeg_quality(quality: f32) -> u8 {
    (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
}

fn flatten_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for p in rgba.chunks_exact(4) {
        let alpha = u16::from(p[3]);
        rgb.extend(
            p[..3]
                .iter()
                .map(|&c| ((u16::from(c) * alpha + 127) / 255) as u8),
        );
    }
    rgb
}

/// The download file name: `gbcam[-<user>]-<palette>-<timestamp>.<ext>`.
///
/// The user name is lowercased with whitespace replaced by `-`.
pub fn export_file_name(
    username: Option<&str>,
    palette_id: &str,
    timestamp_ms: u128,
    format: ExportFormat,
) -> String {
    let user = username
        .filter(|name| !name.is_empty())
        .map(|name| {
            let name: String = name
                .to_lowercase()
                .chars()
                .map(|c| if c.is_whitespace() { '-' } else { c })
                .collect();
            format!("-{name}")
        })
        .unwrap_or_default();

    format!(
        "gbcam{user}-{palette_id}-{timestamp_ms}.{}",
        format.extension()
    )
}
