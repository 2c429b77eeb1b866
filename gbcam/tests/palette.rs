mod common;

use common::{filled, plane_from};
use gbcam::{
    consts::PHOTO_PIXELS,
    palette::{
        apply_palette, apply_palette_into,
        rgb::{apply_rgb, apply_rgb_into, RgbConfig},
        Color, Palette, PaletteOrder, DEFAULT_PALETTE_ID,
    },
    utils::{decode_565, encode_rgb565_unchecked, rgb888_to_rgb565, BigEndian, LittleEndian},
    InvalidInput, Rgb565,
};

fn grayscale() -> &'static Palette {
    Palette::builtin("grayscale").unwrap()
}

#[test]
fn blank_photo_in_grayscale() {
    let rgba = apply_palette(filled(0).pixels(), grayscale(), PaletteOrder::Normal);

    assert_eq!(rgba.len(), PHOTO_PIXELS * 4);
    assert!(rgba.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn every_pixel_is_opaque() {
    let plane = plane_from(16, 16, |x, y| ((x + y) % 4) as u8);
    for palette in Palette::builtins() {
        for order in PaletteOrder::ALL {
            let rgba = apply_palette(plane.pixels(), palette, order);
            assert!(
                rgba.chunks_exact(4).all(|p| p[3] == 255),
                "{} / {}",
                palette.id,
                order.id()
            );
        }
    }
}

#[test]
fn builtins() {
    assert_eq!(Palette::builtins().len(), 16);
    assert_eq!(Palette::default().id, DEFAULT_PALETTE_ID);
    assert!(Palette::builtin("nope").is_none());

    let dmg = Palette::builtin("dmg").unwrap();
    assert_eq!(dmg.colors[0], Color::new(0x9B, 0xBC, 0x0F));
    assert_eq!(dmg.colors[3], Color::new(0x0F, 0x38, 0x0F));

    let mut ids = Palette::builtins().iter().map(|p| p.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16, "duplicate palette ids");
}

#[test]
fn orders_are_permutations() {
    for order in PaletteOrder::ALL {
        let mut table = order.table();
        table.sort_unstable();
        assert_eq!(table, [0, 1, 2, 3], "{}", order.id());
        assert_eq!(PaletteOrder::from_id(order.id()), order);
    }
}

#[test]
fn order_tables() {
    let palette = grayscale();
    let shades = |order| {
        [0, 1, 2, 3].map(|index| palette.color(index, order).r)
    };

    assert_eq!(shades(PaletteOrder::Normal), [0xFF, 0xAA, 0x55, 0x00]);
    assert_eq!(shades(PaletteOrder::Inverted), [0x00, 0x55, 0xAA, 0xFF]);
    assert_eq!(shades(PaletteOrder::A), [0xFF, 0x55, 0xAA, 0x00]);
    assert_eq!(shades(PaletteOrder::B), [0xAA, 0xFF, 0x00, 0x55]);
    assert_eq!(shades(PaletteOrder::C), [0x55, 0x00, 0xFF, 0xAA]);
    assert_eq!(shades(PaletteOrder::D), [0x00, 0xAA, 0x55, 0xFF]);
}

#[test]
fn unknown_order_is_normal() {
    assert_eq!(PaletteOrder::from_id("z"), PaletteOrder::Normal);
    assert_eq!(PaletteOrder::from_id(""), PaletteOrder::Normal);
}

#[test]
fn rgb565_output() {
    let dmg = Palette::builtin("dmg").unwrap();
    let indices = [0, 3, 0];
    let light = encode_rgb565_unchecked(rgb888_to_rgb565([0x9B, 0xBC, 0x0F]));
    let dark = encode_rgb565_unchecked(rgb888_to_rgb565([0x0F, 0x38, 0x0F]));

    let mut le = [0u16; 3];
    let written =
        apply_palette_into::<Rgb565, LittleEndian>(&indices, dmg, PaletteOrder::Normal, &mut le)
            .unwrap();
    assert_eq!(written, 3);
    assert_eq!(le[0].to_ne_bytes(), light.to_le_bytes());
    assert_eq!(le[1].to_ne_bytes(), dark.to_le_bytes());

    let mut be = [0u16; 3];
    apply_palette_into::<Rgb565, BigEndian>(&indices, dmg, PaletteOrder::Normal, &mut be).unwrap();
    assert_eq!(be[0].to_ne_bytes(), light.to_be_bytes());

    let white = encode_rgb565_unchecked(rgb888_to_rgb565([255, 255, 255]));
    assert_eq!(white, 0xFFFF);
    assert_eq!(decode_565(white), [31, 63, 31]);

    let mut short = [0u16; 2];
    assert!(matches!(
        apply_palette_into::<Rgb565, LittleEndian>(&indices, dmg, PaletteOrder::Normal, &mut short),
        Err(InvalidInput::OutputTooSmall { required: 3, len: 2 })
    ));
}

#[test]
fn rgb_gray_levels() {
    let expected = [0, 85, 170, 255];
    for value in 0..=3u8 {
        let plane = filled(value);
        let rgba = apply_rgb(
            plane.pixels(),
            plane.pixels(),
            plane.pixels(),
            plane.width(),
            plane.height(),
            &RgbConfig::default(),
        )
        .unwrap();

        let level = expected[usize::from(value)];
        assert!(
            rgba.chunks_exact(4).all(|p| p == [level, level, level, 255]),
            "value {value}"
        );
    }
}

#[test]
fn rgb_channel_order() {
    let (on, off) = (filled(3), filled(0));
    let config = RgbConfig::default();
    let (w, h) = (on.width(), on.height());

    let red = apply_rgb(on.pixels(), off.pixels(), off.pixels(), w, h, &config).unwrap();
    assert_eq!(&red[..4], &[255, 0, 0, 255]);

    let blue = apply_rgb(off.pixels(), off.pixels(), on.pixels(), w, h, &config).unwrap();
    assert_eq!(&blue[..4], &[0, 0, 255, 255]);
}

#[test]
fn rgb_brightness_and_contrast() {
    assert_eq!(RgbConfig::default().channel_table(), [0, 85, 170, 255]);
    assert_eq!(RgbConfig::new(1.0, 0.0).channel_table(), [255; 4]);
    assert_eq!(RgbConfig::new(-1.0, 0.0).channel_table(), [0; 4]);
    assert_eq!(RgbConfig::new(0.0, -1.0).channel_table(), [128; 4]);

    let [black, _, _, white] = RgbConfig::new(0.0, 1.0).channel_table();
    assert_eq!((black, white), (0, 255));

    let brighter = RgbConfig::new(0.1, 0.0).channel_table();
    assert!(brighter[1] > 85 && brighter[2] > 170);
}

#[test]
fn rgb_size_mismatch() {
    let plane = filled(1);
    let short = &plane.pixels()[1..];

    assert!(matches!(
        apply_rgb(
            plane.pixels(),
            short,
            plane.pixels(),
            plane.width(),
            plane.height(),
            &RgbConfig::default()
        ),
        Err(InvalidInput::BufferSize { .. })
    ));

    let mut output = vec![0; 4];
    assert!(matches!(
        apply_rgb_into(&[0, 1], &[0, 1], &[0, 1], 2, 1, &RgbConfig::default(), &mut output),
        Err(InvalidInput::OutputTooSmall { required: 8, len: 4 })
    ));
}
