use crate::{
    consts::{PHOTO_HEIGHT, PHOTO_PIXELS, PHOTO_WIDTH},
    decode::{decode_tiles_to_slice, slot_data},
    plane::PhotoPlane,
    InvalidInput,
};
use alloc::vec;

/// Decodes one tile-encoded photo into a 128x112 plane.
pub fn decode_tiles(data: &[u8]) -> Result<PhotoPlane, InvalidInput> {
    let mut pixels = vec![0; PHOTO_PIXELS];
    decode_tiles_to_slice(data, &mut pixels)?;

    Ok(PhotoPlane::from_decoded(PHOTO_WIDTH, PHOTO_HEIGHT, pixels))
}

/// Decodes the photo stored in `slot` (`1..=30`) of a save file.
///
/// Slots outside that range are absent and yield `Ok(None)`. A save too short to hold the
/// requested slot is an error.
pub fn decode_photo(save: &[u8], slot: usize) -> Result<Option<PhotoPlane>, InvalidInput> {
    let Some(data) = slot_data(save, slot)? else {
        tracing::debug!(slot, "photo slot out of range");
        return Ok(None);
    };

    decode_tiles(data).map(Some)
}

impl PhotoPlane {
    /// Decodes one tile-encoded photo. See [`decode_tiles`].
    pub fn decode(data: &[u8]) -> Result<Self, InvalidInput> {
        decode_tiles(data)
    }
}
