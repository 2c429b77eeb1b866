mod common;

use common::{fixture_tiles, save_with, solid_tiles, SAVE_LEN};
use gbcam::{
    consts::{FIRST_SLOT_OFFSET, PHOTO_BYTES, PHOTO_HEIGHT, PHOTO_PIXELS, PHOTO_WIDTH},
    decode::{decode_photo, decode_slot_to_slice, decode_tiles, decode_tiles_to_slice, slot_offset},
    InvalidInput, PhotoPlane,
};

#[test]
fn known_pixels() {
    let plane = decode_tiles(&fixture_tiles()).unwrap();

    assert_eq!(plane.width(), PHOTO_WIDTH);
    assert_eq!(plane.height(), PHOTO_HEIGHT);
    assert_eq!(plane.pixels().len(), PHOTO_PIXELS);

    assert_eq!(&plane.pixels()[..5], &[3, 1, 2, 0, 0]);
    assert_eq!(plane.get(8, 0), Some(1));
    assert_eq!(plane.get(7, 9), Some(2));
    assert_eq!(plane.get(127, 111), Some(3));
    assert_eq!(plane.get(128, 0), None);

    let set = plane.pixels().iter().filter(|&&p| p != 0).count();
    assert_eq!(set, 6, "unexpected pixels set");
}

#[test]
fn solid_photos() {
    for value in 0..=3 {
        let plane = decode_tiles(&solid_tiles(value)).unwrap();
        assert!(plane.pixels().iter().all(|&p| p == value), "value {value}");
    }
}

#[test]
fn deterministic() {
    let data = fixture_tiles();
    assert_eq!(decode_tiles(&data).unwrap(), decode_tiles(&data).unwrap());
    assert_eq!(PhotoPlane::decode(&data).unwrap(), decode_tiles(&data).unwrap());
}

#[test]
fn slot_offsets() {
    assert_eq!(slot_offset(0), None);
    assert_eq!(slot_offset(1), Some(FIRST_SLOT_OFFSET));
    assert_eq!(slot_offset(2), Some(0x3000));
    assert_eq!(slot_offset(30), Some(0x1F000));
    assert_eq!(slot_offset(31), None);
}

#[test]
fn photo_from_save() {
    let tiles = fixture_tiles();
    for slot in [1, 7, 30] {
        let save = save_with(slot, &tiles);
        let plane = decode_photo(&save, slot).unwrap().unwrap();
        assert_eq!(plane, decode_tiles(&tiles).unwrap(), "slot {slot}");
    }

    let save = save_with(2, &tiles);
    let other = decode_photo(&save, 1).unwrap().unwrap();
    assert!(other.pixels().iter().all(|&p| p == 0));
}

#[test]
fn missing_slots() {
    let save = vec![0; SAVE_LEN];
    assert_eq!(decode_photo(&save, 0).unwrap(), None);
    assert_eq!(decode_photo(&save, 31).unwrap(), None);
    assert_eq!(decode_photo(&[], 0).unwrap(), None);
}

#[test]
fn truncated_input() {
    assert!(matches!(
        decode_tiles(&[0; PHOTO_BYTES - 1]),
        Err(InvalidInput::TruncatedPhoto { len }) if len == PHOTO_BYTES - 1
    ));

    let save = vec![0; FIRST_SLOT_OFFSET + 100];
    assert!(matches!(
        decode_photo(&save, 1),
        Err(InvalidInput::TruncatedSave { slot: 1, .. })
    ));
}

#[test]
fn slice_api() {
    let tiles = fixture_tiles();

    let mut output = vec![0xAA; PHOTO_PIXELS];
    assert_eq!(decode_tiles_to_slice(&tiles, &mut output).unwrap(), PHOTO_PIXELS);
    assert_eq!(output, decode_tiles(&tiles).unwrap().into_pixels());

    let mut short = vec![0; PHOTO_PIXELS - 1];
    assert!(matches!(
        decode_tiles_to_slice(&tiles, &mut short),
        Err(InvalidInput::OutputTooSmall { .. })
    ));

    let save = save_with(3, &tiles);
    let mut untouched = vec![0xAA; PHOTO_PIXELS];
    assert_eq!(decode_slot_to_slice(&save, 31, &mut untouched).unwrap(), None);
    assert!(untouched.iter().all(|&p| p == 0xAA));
    assert_eq!(
        decode_slot_to_slice(&save, 3, &mut untouched).unwrap(),
        Some(PHOTO_PIXELS)
    );
    assert_eq!(untouched, output);
}
