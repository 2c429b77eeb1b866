use crate::{frame::FrameAsset, InvalidInput};
use snafu::{ResultExt, Snafu};
use std::path::Path;

#[derive(Debug, Snafu)]
pub enum FrameLoadError {
    #[snafu(display("Failed to read frame file"))]
    ReadIo { source: std::io::Error },
    #[snafu(display("Failed to decode frame image"))]
    DecodeImage { source: image::ImageError },
    #[snafu(display("Invalid frame image"))]
    InvalidFrame { source: InvalidInput },
}

impl FrameAsset {
    /// Decodes frame artwork from an encoded image (PNG, or any format enabled in `image`).
    pub fn from_image_bytes(
        name: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self, FrameLoadError> {
        let image = image::load_from_memory(bytes)
            .context(DecodeImageSnafu)?
            .into_rgba8();
        let (width, height) = image.dimensions();

        Self::from_rgba(name, width as usize, height as usize, image.as_raw())
            .context(InvalidFrameSnafu)
    }

    /// Reads and decodes frame artwork from a file. The file stem becomes the frame name.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FrameLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).context(ReadIoSnafu)?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(path = %path.display(), %name, "loading frame");
        Self::from_image_bytes(name, &bytes)
    }
}
