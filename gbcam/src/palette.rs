use crate::{InvalidInput, OutputTooSmallSnafu, PixelFormat};
use byteorder::ByteOrder;
use snafu::ensure;

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

pub mod rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from `0xRRGGBB`.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }
}

/// A four-color lookup table. Index 0 is the lightest shade of the camera, index 3 the darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub id: &'static str,
    pub colors: [Color; 4],
}

/// Id of the palette used when none is selected.
pub const DEFAULT_PALETTE_ID: &str = "sgb1a";

macro_rules! palette {
    ($id:literal: $c0:literal, $c1:literal, $c2:literal, $c3:literal) => {
        Palette::new(
            $id,
            [
                Color::from_hex($c0),
                Color::from_hex($c1),
                Color::from_hex($c2),
                Color::from_hex($c3),
            ],
        )
    };
}

static BUILTIN_PALETTES: [Palette; 16] = [
    palette!("grayscale": 0xFFFFFF, 0xAAAAAA, 0x555555, 0x000000),
    palette!("dmg": 0x9BBC0F, 0x8BAC0F, 0x306230, 0x0F380F),
    palette!("pocket": 0xC4CFA1, 0x8B956D, 0x4D533C, 0x1F1F1F),
    palette!("sgb1a": 0xF8E8C8, 0xD89048, 0xA82820, 0x301850),
    // Game Boy Color compatibility palettes, named after their boot button combination.
    palette!("gbc-up": 0xFFFFFF, 0xFFAD63, 0x843100, 0x000000),
    palette!("gbc-up-a": 0xFFFFFF, 0xFF8484, 0x943A3A, 0x000000),
    palette!("gbc-up-b": 0xFFE6C5, 0xCE9C84, 0x846B29, 0x5A3108),
    palette!("gbc-left": 0xFFFFFF, 0x63A5FF, 0x0000FF, 0x000000),
    palette!("gbc-left-a": 0xFFFFFF, 0x8C8CDE, 0x52528C, 0x000000),
    palette!("gbc-left-b": 0xFFFFFF, 0xA5A5A5, 0x525252, 0x000000),
    palette!("gbc-down": 0xFFFFA5, 0xFF9494, 0x9494FF, 0x000000),
    palette!("gbc-down-a": 0xFFFFFF, 0xFFFF00, 0xFF0000, 0x000000),
    palette!("gbc-down-b": 0xFFFFFF, 0xFFFF00, 0x7B4A00, 0x000000),
    palette!("gbc-right": 0xFFFFFF, 0x52FF00, 0xFF4200, 0x000000),
    palette!("gbc-right-a": 0xFFFFFF, 0x7BFF31, 0x0063C5, 0x000000),
    palette!("gbc-right-b": 0x000000, 0x008486, 0xFFDE00, 0xFFFFFF),
];

impl Palette {
    pub const fn new(id: &'static str, colors: [Color; 4]) -> Self {
        Self { id, colors }
    }

    /// Looks up a built-in palette by id.
    pub fn builtin(id: &str) -> Option<&'static Palette> {
        BUILTIN_PALETTES.iter().find(|palette| palette.id == id)
    }

    /// All built-in palettes, in display order.
    pub fn builtins() -> &'static [Palette] {
        &BUILTIN_PALETTES
    }

    /// Returns the color for a photo index, after remapping it through `order`.
    ///
    /// Only the low two bits of `index` are significant.
    #[inline]
    pub fn color(&self, index: u8, order: PaletteOrder) -> Color {
        self.colors[usize::from(order.remap(index))]
    }

    /// The four output pixels for indices 0..=3.
    #[inline]
    pub fn lookup_table<C: PixelFormat, B: ByteOrder>(
        &self,
        order: PaletteOrder,
    ) -> [C::OutputElement; 4] {
        [0, 1, 2, 3].map(|index| C::to_output::<B>(self.color(index, order)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        BUILTIN_PALETTES[3]
    }
}

/// A permutation of the four palette slots, applied to an index before the color lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteOrder {
    #[default]
    Normal,
    Inverted,
    A,
    B,
    C,
    D,
}

impl PaletteOrder {
    pub const ALL: [PaletteOrder; 6] = [
        PaletteOrder::Normal,
        PaletteOrder::Inverted,
        PaletteOrder::A,
        PaletteOrder::B,
        PaletteOrder::C,
        PaletteOrder::D,
    ];

    /// Parses an order id (`normal`, `i`, `a`..`d`). Unknown ids fall back to
    /// [`PaletteOrder::Normal`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "normal" => PaletteOrder::Normal,
            "i" => PaletteOrder::Inverted,
            "a" => PaletteOrder::A,
            "b" => PaletteOrder::B,
            "c" => PaletteOrder::C,
            "d" => PaletteOrder::D,
            _ => {
                #[cfg(feature = "alloc")]
                tracing::warn!(id, "unknown palette order, using normal");
                PaletteOrder::Normal
            }
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            PaletteOrder::Normal => "normal",
            PaletteOrder::Inverted => "i",
            PaletteOrder::A => "a",
            PaletteOrder::B => "b",
            PaletteOrder::C => "c",
            PaletteOrder::D => "d",
        }
    }

    /// `table()[index]` is the palette slot used for `index`.
    pub const fn table(self) -> [u8; 4] {
        match self {
            PaletteOrder::Normal => [0, 1, 2, 3],
            PaletteOrder::Inverted => [3, 2, 1, 0],
            PaletteOrder::A => [0, 2, 1, 3],
            PaletteOrder::B => [1, 0, 3, 2],
            PaletteOrder::C => [2, 3, 0, 1],
            PaletteOrder::D => [3, 1, 2, 0],
        }
    }

    #[inline]
    pub const fn remap(self, index: u8) -> u8 {
        self.table()[(index & 0b11) as usize]
    }
}

/// Maps color indices to pixels of format `C`, writing one output element per index.
///
/// Returns the number of pixels written to the output buffer.
pub fn apply_palette_into<C: PixelFormat, B: ByteOrder>(
    indices: &[u8],
    palette: &Palette,
    order: PaletteOrder,
    output: &mut [C::OutputElement],
) -> Result<usize, InvalidInput> {
    ensure!(
        output.len() >= indices.len(),
        OutputTooSmallSnafu {
            required: indices.len(),
            len: output.len()
        }
    );

    let table = palette.lookup_table::<C, B>(order);
    for (pixel, &index) in output.iter_mut().zip(indices) {
        *pixel = table[usize::from(index & 0b11)];
    }

    Ok(indices.len())
}
