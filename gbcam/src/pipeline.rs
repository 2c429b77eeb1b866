//! The canonical render order, from planes to scaled rasters.

use crate::{
    compose::{compose, to_display_raster, to_export_raster, Offsets, Raster},
    effect::EffectKind,
    frame::{recolor_frame, FrameAsset},
    montage::{create_montage, MontageLayout},
    palette::{
        apply_palette,
        rgb::{apply_rgb, RgbConfig},
        Palette, PaletteOrder,
    },
    plane::PhotoPlane,
    InvalidInput, PlaneSizeMismatchSnafu,
};
use alloc::vec::Vec;
use snafu::ensure;

/// The planes a render starts from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Single(PhotoPlane),
    /// Several photos arranged by a layout. [`MontageLayout::None`] renders the first photo as
    /// is; every other layout needs at least [`MontageLayout::min_planes`] photos.
    Montage {
        planes: Vec<PhotoPlane>,
        layout: MontageLayout,
    },
    /// Three photos used as the red, green and blue channels of one color image.
    Rgb {
        red: PhotoPlane,
        green: PhotoPlane,
        blue: PhotoPlane,
        config: RgbConfig,
    },
}

/// Render settings, applied in a fixed order:
///
/// 1. montage (for [`Source::Montage`])
/// 2. effect (for [`Source::Rgb`], on each channel)
/// 3. palette, or channel combination for [`Source::Rgb`]
/// 4. frame composition
///
/// Scaling for display or export happens on the [`Rendered`] result.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    source: Source,
    effect: EffectKind,
    palette: Palette,
    order: PaletteOrder,
    frame: Option<FrameAsset>,
}

impl Pipeline {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            effect: EffectKind::None,
            palette: Palette::default(),
            order: PaletteOrder::Normal,
            frame: None,
        }
    }

    pub fn single(plane: PhotoPlane) -> Self {
        Self::new(Source::Single(plane))
    }

    pub fn montage(planes: Vec<PhotoPlane>, layout: MontageLayout) -> Self {
        Self::new(Source::Montage { planes, layout })
    }

    pub fn rgb(red: PhotoPlane, green: PhotoPlane, blue: PhotoPlane, config: RgbConfig) -> Self {
        Self::new(Source::Rgb {
            red,
            green,
            blue,
            config,
        })
    }

    pub fn effect(mut self, effect: EffectKind) -> Self {
        self.effect = effect;
        self
    }

    /// Ignored for [`Source::Rgb`] photos; frames are still recolored with it.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn order(mut self, order: PaletteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn frame(mut self, frame: Option<FrameAsset>) -> Self {
        self.frame = frame;
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(
            effect = %self.effect,
            palette = self.palette.id,
            order = self.order.id(),
            frame = self.frame.as_ref().map(FrameAsset::name),
        )
    )]
    pub fn render(&self) -> Result<Rendered, InvalidInput> {
        let (plane, photo) = match &self.source {
            Source::Single(plane) => {
                let plane = plane.with_effect(self.effect);
                let photo = self.colorize(&plane)?;
                (Some(plane), photo)
            }
            Source::Montage { planes, layout } => {
                let plane = create_montage(planes, *layout)?.with_effect(self.effect);
                let photo = self.colorize(&plane)?;
                (Some(plane), photo)
            }
            Source::Rgb {
                red,
                green,
                blue,
                config,
            } => {
                for (position, channel) in [green, blue].into_iter().enumerate() {
                    ensure!(
                        channel.same_size(red),
                        PlaneSizeMismatchSnafu {
                            position: position + 1,
                            width: channel.width(),
                            height: channel.height(),
                            expected_width: red.width(),
                            expected_height: red.height(),
                        }
                    );
                }

                let [red, green, blue] =
                    [red, green, blue].map(|channel| channel.with_effect(self.effect));
                let rgba = apply_rgb(
                    red.pixels(),
                    green.pixels(),
                    blue.pixels(),
                    red.width(),
                    red.height(),
                    config,
                )?;
                (None, Raster::new(red.width(), red.height(), rgba)?)
            }
        };
        tracing::debug!(width = photo.width(), height = photo.height(), "colorized");

        let offsets = Offsets::for_frame(self.frame.as_ref());
        let frame = self
            .frame
            .as_ref()
            .map(|frame| {
                let rgba = recolor_frame(frame, &self.palette, self.order);
                Raster::new(frame.width(), frame.height(), rgba)
            })
            .transpose()?;

        let raster = compose(&photo, frame.as_ref(), offsets);
        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            "composed"
        );

        Ok(Rendered {
            plane,
            raster,
            offsets,
        })
    }

    fn colorize(&self, plane: &PhotoPlane) -> Result<Raster, InvalidInput> {
        let rgba = apply_palette(plane.pixels(), &self.palette, self.order);
        Raster::new(plane.width(), plane.height(), rgba)
    }
}

/// The output of [`Pipeline::render`], at 1:1 scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    plane: Option<PhotoPlane>,
    raster: Raster,
    offsets: Offsets,
}

impl Rendered {
    /// The plane that was colorized, after montage and effect. `None` for RGB sources.
    pub fn plane(&self) -> Option<&PhotoPlane> {
        self.plane.as_ref()
    }

    /// The composite of photo and frame.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Where the photo sits inside [`Rendered::raster`].
    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// The composite scaled for display. See [`to_display_raster`].
    pub fn display(&self, display_scale: usize) -> Result<Raster, InvalidInput> {
        to_display_raster(&self.raster, display_scale)
    }

    /// The composite scaled for export. See [`to_export_raster`].
    pub fn export(&self, factor: Option<usize>) -> Result<Raster, InvalidInput> {
        to_export_raster(&self.raster, factor)
    }
}
