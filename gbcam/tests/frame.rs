use gbcam::{
    compose::Offsets,
    consts::TRANSPARENT_INDEX,
    frame::{recolor_frame, FrameLoadError, FrameShade},
    palette::{Palette, PaletteOrder},
    FrameAsset, InvalidInput,
};
use image::{ImageOutputFormat, RgbaImage};
use std::io::Cursor;

fn shade(r: u8, a: u8) -> FrameShade {
    FrameShade::from_rgba([r, r, r, a])
}

#[test]
fn shade_thresholds() {
    assert_eq!(shade(255, 255), FrameShade::White);
    assert_eq!(shade(200, 255), FrameShade::White);
    assert_eq!(shade(199, 255), FrameShade::LightGray);
    assert_eq!(shade(120, 255), FrameShade::LightGray);
    assert_eq!(shade(119, 255), FrameShade::DarkGray);
    assert_eq!(shade(40, 255), FrameShade::DarkGray);
    assert_eq!(shade(39, 255), FrameShade::Black);
    assert_eq!(shade(0, 255), FrameShade::Black);

    assert_eq!(shade(255, 128), FrameShade::White);
    assert_eq!(shade(255, 127), FrameShade::Transparent);
    assert_eq!(shade(0, 0), FrameShade::Transparent);
}

#[test]
fn only_red_is_inspected() {
    assert_eq!(
        FrameShade::from_rgba([250, 0, 0, 255]),
        FrameShade::White
    );
    assert_eq!(
        FrameShade::from_rgba([10, 255, 255, 255]),
        FrameShade::Black
    );
}

#[test]
fn from_rgba_artwork() {
    let rgba = [
        255, 255, 255, 255, //
        150, 150, 150, 255, //
        60, 60, 60, 255, //
        0, 0, 0, 255, //
        0, 0, 0, 0, //
        255, 255, 255, 10,
    ];
    let frame = FrameAsset::from_rgba("standard", 3, 2, &rgba).unwrap();

    assert_eq!(frame.index_data(), &[0, 1, 2, 3, 4, 4]);
    assert_eq!(frame.name(), "standard");

    assert!(matches!(
        FrameAsset::from_rgba("bad", 2, 2, &rgba),
        Err(InvalidInput::BufferSize { .. })
    ));
}

#[test]
fn rejects_out_of_range_shades() {
    assert!(matches!(
        FrameAsset::new("bad", 2, 1, vec![0, 5]),
        Err(InvalidInput::IndexOutOfRange { position: 1, value: 5, max: TRANSPARENT_INDEX })
    ));
}

#[test]
fn recolor() {
    let frame = FrameAsset::new("standard", 5, 1, vec![0, 1, 2, 3, 4]).unwrap();
    let grayscale = Palette::builtin("grayscale").unwrap();

    let rgba = recolor_frame(&frame, grayscale, PaletteOrder::Normal);
    assert_eq!(
        rgba,
        [
            255, 255, 255, 255, //
            170, 170, 170, 255, //
            85, 85, 85, 255, //
            0, 0, 0, 255, //
            0, 0, 0, 0,
        ]
    );

    let inverted = recolor_frame(&frame, grayscale, PaletteOrder::Inverted);
    assert_eq!(&inverted[..4], &[0, 0, 0, 255]);
    assert_eq!(&inverted[16..], &[0, 0, 0, 0]);
}

#[test]
fn offsets() {
    let standard = FrameAsset::new("frame-01", 1, 1, vec![0]).unwrap();
    let wild = FrameAsset::new("wild-frame-03", 1, 1, vec![0]).unwrap();

    assert!(!standard.is_wild());
    assert!(wild.is_wild());

    assert_eq!(standard.offsets(), Offsets::STANDARD);
    assert_eq!(wild.offsets(), Offsets::WILD);
    assert_eq!(Offsets::for_frame(None), Offsets::NONE);

    assert_eq!(Offsets::STANDARD.outer_size(128, 112), (160, 144));
    assert_eq!(Offsets::WILD.outer_size(128, 112), (160, 224));
}

#[test]
fn decode_image_bytes() {
    let mut artwork = RgbaImage::new(4, 2);
    artwork.put_pixel(1, 0, image::Rgba([0, 0, 0, 255]));
    artwork.put_pixel(2, 1, image::Rgba([0, 0, 0, 0]));

    let mut png = Vec::new();
    artwork
        .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
        .unwrap();

    let frame = FrameAsset::from_image_bytes("wild", &png).unwrap();
    assert_eq!((frame.width(), frame.height()), (4, 2));
    assert_eq!(frame.index_data(), &[4, 3, 4, 4, 4, 4, 4, 4]);

    assert!(matches!(
        FrameAsset::from_image_bytes("garbage", b"not an image"),
        Err(FrameLoadError::DecodeImage { .. })
    ));
}
