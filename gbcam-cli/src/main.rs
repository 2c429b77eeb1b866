use argh::FromArgs;
use gbcam::{
    export::{export_raster, ExportFormat},
    montage::available_layouts,
    palette::{rgb::RgbConfig, Palette, PaletteOrder, DEFAULT_PALETTE_ID},
    EffectKind, FrameAsset, MontageLayout, Pipeline,
};
use image::{ImageFormat, RgbaImage};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Game Boy Camera photo renderer.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Render(Render),
    Palettes(Palettes),
    Layouts(Layouts),
}

/// Renders photos from a save file to an image.
#[derive(FromArgs)]
#[argh(subcommand, name = "render")]
struct Render {
    /// photo slot (1-30). Repeat for montages; with --rgb, exactly three slots as R, G, B.
    #[argh(option)]
    slot: Vec<usize>,
    /// montage layout (none, vertical, horizontal, quadrant, horizontal-2/3, border,
    /// horizontal-bars, four-quadrant)
    #[argh(option, default = "MontageLayout::None", from_str_fn(layout))]
    layout: MontageLayout,
    /// trick lens effect (none, invert, mirror-rtl, mirror-ltr, mirror-btt, mirror-ttb, zoom,
    /// zoom-h, zoom-v, tile)
    #[argh(option, default = "EffectKind::None", from_str_fn(effect))]
    effect: EffectKind,
    /// palette id, see `gbcam palettes`
    #[argh(option, default = "DEFAULT_PALETTE_ID.to_string()")]
    palette: String,
    /// palette order (normal, i, a, b, c, d)
    #[argh(option, default = "PaletteOrder::Normal", from_str_fn(order))]
    order: PaletteOrder,
    /// frame image (PNG, JPG or BMP), 160x144 or 160x224
    #[argh(option)]
    frame: Option<String>,
    /// combine three slots as red, green and blue channels
    #[argh(switch)]
    rgb: bool,
    /// RGB brightness, -0.5 to 0.5
    #[argh(option, default = "0.0")]
    brightness: f32,
    /// RGB contrast, -1 to 1
    #[argh(option, default = "0.0")]
    contrast: f32,
    /// upscale factor (default 10)
    #[argh(option)]
    scale: Option<usize>,
    /// output format (png, jpg, bmp). Guessed from the output file name if omitted.
    #[argh(option)]
    format: Option<Format>,
    /// JPEG quality, 0 to 1 (default 0.9)
    #[argh(option)]
    quality: Option<f32>,

    /// the save file
    #[argh(positional)]
    save: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

/// Lists the built-in palettes.
#[derive(FromArgs)]
#[argh(subcommand, name = "palettes")]
struct Palettes {}

/// Lists the montage layouts available for a number of photos.
#[derive(FromArgs)]
#[argh(subcommand, name = "layouts")]
struct Layouts {
    /// the number of photos
    #[argh(positional)]
    count: usize,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Export(ExportFormat),
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("bmp") {
            return Ok(Format::Bmp);
        }

        s.parse()
            .map(Format::Export)
            .map_err(|_| "invalid format, expected png, jpg or bmp")
    }
}

// The library falls back to defaults on unknown ids; the CLI rejects them instead.
fn layout(value: &str) -> Result<MontageLayout, String> {
    MontageLayout::ALL
        .into_iter()
        .find(|layout| layout.id() == value)
        .ok_or_else(|| format!("unknown layout `{value}`"))
}

fn effect(value: &str) -> Result<EffectKind, String> {
    EffectKind::ALL
        .into_iter()
        .find(|effect| effect.id() == value)
        .ok_or_else(|| format!("unknown effect `{value}`"))
}

fn order(value: &str) -> Result<PaletteOrder, String> {
    PaletteOrder::ALL
        .into_iter()
        .find(|order| order.id() == value)
        .ok_or_else(|| format!("unknown palette order `{value}`"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = argh::from_env();

    match command {
        Command::Render(options) => render(options),
        Command::Palettes(_) => {
            list_palettes();
            Ok(())
        }
        Command::Layouts(Layouts { count }) => {
            for layout in available_layouts(count) {
                println!("{layout}");
            }
            Ok(())
        }
    }
}

fn list_palettes() {
    for palette in Palette::builtins() {
        let colors = palette
            .colors
            .iter()
            .map(|c| format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b))
            .collect::<Vec<_>>()
            .join(" ");
        let default = if palette.id == DEFAULT_PALETTE_ID {
            " (default)"
        } else {
            ""
        };
        println!("{:<16}{colors}{default}", palette.id);
    }
}

fn render(options: Render) -> Result<(), Box<dyn std::error::Error>> {
    let Render {
        slot,
        layout,
        effect,
        palette,
        order,
        frame,
        rgb,
        brightness,
        contrast,
        scale,
        format,
        quality,
        save,
        output,
    } = options;

    let palette =
        *Palette::builtin(&palette).ok_or_else(|| format!("unknown palette `{palette}`"))?;
    let format = match format {
        Some(format) => format,
        None => guess_format(&output)?,
    };

    if slot.is_empty() {
        return Err("at least one --slot is required".into());
    }

    let save_data = std::fs::read(&save)?;
    println!("Reading {} photo(s) from `{save}`", slot.len());

    let mut planes = Vec::with_capacity(slot.len());
    for &n in &slot {
        let plane = gbcam::decode::decode_photo(&save_data, n)?
            .ok_or_else(|| format!("slot {n} does not exist, expected 1 to 30"))?;
        planes.push(plane);
    }

    let pipeline = if rgb {
        let Ok([red, green, blue]) = <[_; 3]>::try_from(planes) else {
            return Err("--rgb requires exactly three slots".into());
        };
        Pipeline::rgb(red, green, blue, RgbConfig::new(brightness, contrast))
    } else {
        Pipeline::montage(planes, layout)
    };

    let frame = frame.map(FrameAsset::open).transpose()?;
    if let Some(frame) = &frame {
        println!(
            "Using frame `{}` ({}x{})",
            frame.name(),
            frame.width(),
            frame.height()
        );
    }

    let rendered = pipeline
        .effect(effect)
        .palette(palette)
        .order(order)
        .frame(frame)
        .render()?;

    let scaled = rendered.export(scale)?;
    let (width, height) = (scaled.width(), scaled.height());

    match format {
        Format::Export(format) => {
            let encoded = export_raster(&scaled, Some(1), format, quality)?;
            std::fs::write(&output, &encoded)?;
            println!("Written {} bytes to `{output}`", encoded.len());
        }
        Format::Bmp => {
            let (Ok(image_width), Ok(image_height)) = (u32::try_from(width), u32::try_from(height))
            else {
                return Err(format!("{width}x{height} is too large for a BMP").into());
            };
            RgbaImage::from_raw(image_width, image_height, scaled.into_pixels())
                .ok_or("failed to create image")?
                .save_with_format(&output, ImageFormat::Bmp)?;
        }
    }

    println!("Written {width}x{height} image to `{output}`");

    Ok(())
}

fn guess_format(output: &str) -> Result<Format, Box<dyn std::error::Error>> {
    let extension = std::path::Path::new(output)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or("cannot guess the output format, use --format")?;

    Ok(extension.parse()?)
}
