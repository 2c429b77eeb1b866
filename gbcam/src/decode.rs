use crate::{
    consts::*, InvalidInput, OutputTooSmallSnafu, TruncatedPhotoSnafu, TruncatedSaveSnafu,
};
use snafu::ensure;

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

/// Returns the byte offset of a photo slot in the save file, or `None` if no such slot exists.
#[inline]
pub const fn slot_offset(slot: usize) -> Option<usize> {
    if slot == 0 || slot > SLOT_COUNT {
        None
    } else {
        Some(FIRST_SLOT_OFFSET + (slot - 1) * SLOT_STRIDE)
    }
}

/// Returns the encoded tile data of a photo slot.
///
/// Returns `Ok(None)` for slots outside `1..=SLOT_COUNT`.
pub fn slot_data(save: &[u8], slot: usize) -> Result<Option<&[u8]>, InvalidInput> {
    let Some(offset) = slot_offset(slot) else {
        return Ok(None);
    };

    let required = offset + PHOTO_BYTES;
    ensure!(
        save.len() >= required,
        TruncatedSaveSnafu {
            slot,
            required,
            len: save.len()
        }
    );

    Ok(Some(&save[offset..required]))
}

/// Decodes one tile-encoded photo into a buffer, one color index (0..=3) per pixel, row-major.
///
/// Only the first [`PHOTO_BYTES`] bytes of `data` are read. Returns the number of pixels written
/// to the output buffer, which is always [`PHOTO_PIXELS`].
pub fn decode_tiles_to_slice(data: &[u8], output: &mut [u8]) -> Result<usize, InvalidInput> {
    ensure!(
        data.len() >= PHOTO_BYTES,
        TruncatedPhotoSnafu { len: data.len() }
    );
    ensure!(
        output.len() >= PHOTO_PIXELS,
        OutputTooSmallSnafu {
            required: PHOTO_PIXELS,
            len: output.len()
        }
    );

    for (y, row) in output[..PHOTO_PIXELS]
        .chunks_exact_mut(PHOTO_WIDTH)
        .enumerate()
    {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = pixel_index(data, x, y);
        }
    }

    Ok(PHOTO_PIXELS)
}

/// Decodes the photo in `slot` of a save file into a buffer.
///
/// Returns the number of pixels written, or `Ok(None)` if the slot doesn't exist. Nothing is
/// written in that case.
pub fn decode_slot_to_slice(
    save: &[u8],
    slot: usize,
    output: &mut [u8],
) -> Result<Option<usize>, InvalidInput> {
    match slot_data(save, slot)? {
        Some(data) => decode_tiles_to_slice(data, output).map(Some),
        None => Ok(None),
    }
}

#[inline(always)]
fn pixel_index(data: &[u8], x: usize, y: usize) -> u8 {
    let tile = (y >> 3) * TILES_PER_ROW + (x >> 3);
    let row = tile * BYTES_PER_TILE + (y & 7) * 2;
    let bit = 7 - (x & 7);

    let low = (data[row] >> bit) & 1;
    let high = (data[row + 1] >> bit) & 1;

    low + 2 * high
}
