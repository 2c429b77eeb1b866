#![no_std]

use gbcam::{
    decode::{decode_slot_to_slice, decode_tiles_to_slice},
    palette::{apply_palette_into, Palette, PaletteOrder},
    utils::{BigEndian, ByteOrder, LittleEndian, NativeEndian},
    PixelFormat, Rgb565, Rgba8888,
};

#[panic_handler]
fn panic_handler(_info: &core::panic::PanicInfo) -> ! {
    unsafe { core::hint::unreachable_unchecked() }
}

/// Decodes the photo in `slot` (1 to 30) of a Game Boy Camera save into one color index (0 to 3)
/// per pixel, row-major, 128x112.
///
/// - `save`: Pointer to the save file contents
/// - `save_len`: Length of the save file, in bytes
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in bytes (at least 14336)
///
/// Returns the number of pixels written to the output buffer, 0 if the slot doesn't exist, or -1
/// if the save is too short or the output buffer too small.
///
/// # Safety
///
/// `save` must be valid for reads of `save_len` bytes and `output` for writes of `output_len`
/// bytes.
#[no_mangle]
pub unsafe extern "C" fn gbcam_decode_photo(
    save: *const u8,
    save_len: usize,
    slot: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let save = unsafe { core::slice::from_raw_parts(save, save_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match decode_slot_to_slice(save, slot, output) {
        Ok(Some(len)) => len as isize,
        Ok(None) => 0,
        Err(_) => -1,
    }
}

/// Decodes one photo's tile data (3584 bytes) into one color index per pixel, row-major, 128x112.
///
/// - `input`: Pointer to the tile data
/// - `input_len`: Length of the tile data, in bytes
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in bytes (at least 14336)
///
/// Returns the number of pixels written to the output buffer, if successful, or -1 otherwise.
///
/// # Safety
///
/// `input` must be valid for reads of `input_len` bytes and `output` for writes of `output_len`
/// bytes.
#[no_mangle]
pub unsafe extern "C" fn gbcam_decode_tiles(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let input = unsafe { core::slice::from_raw_parts(input, input_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    match decode_tiles_to_slice(input, output) {
        Ok(len) => len as isize,
        Err(_) => -1,
    }
}

/// Returns the number of built-in palettes. Valid `palette` arguments are `0..count`.
#[no_mangle]
pub extern "C" fn gbcam_palette_count() -> usize {
    Palette::builtins().len()
}

/// Maps color indices to RGB565 pixels (little-endian).
///
/// - `indices`: Pointer to the color indices, as written by [`gbcam_decode_photo`]
/// - `indices_len`: Number of indices
/// - `palette`: Built-in palette number, see [`gbcam_palette_count`]
/// - `order`: Palette order (0 normal, 1 inverted, 2 to 5 orders a to d)
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in 16-bit words
///
/// Returns the number of pixels written to the output buffer, if successful, or -1 otherwise.
///
/// # Safety
///
/// `indices` must be valid for reads of `indices_len` bytes and `output` for writes of
/// `output_len` 16-bit words.
#[no_mangle]
pub unsafe extern "C" fn gbcam_apply_palette_rgb565_le(
    indices: *const u8,
    indices_len: usize,
    palette: usize,
    order: usize,
    output: *mut u16,
    output_len: usize,
) -> isize {
    let indices = unsafe { core::slice::from_raw_parts(indices, indices_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    apply::<Rgb565, LittleEndian>(indices, palette, order, output)
}

/// Maps color indices to RGB565 pixels (big-endian).
///
/// - `indices`: Pointer to the color indices, as written by [`gbcam_decode_photo`]
/// - `indices_len`: Number of indices
/// - `palette`: Built-in palette number, see [`gbcam_palette_count`]
/// - `order`: Palette order (0 normal, 1 inverted, 2 to 5 orders a to d)
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in 16-bit words
///
/// Returns the number of pixels written to the output buffer, if successful, or -1 otherwise.
///
/// # Safety
///
/// `indices` must be valid for reads of `indices_len` bytes and `output` for writes of
/// `output_len` 16-bit words.
#[no_mangle]
pub unsafe extern "C" fn gbcam_apply_palette_rgb565_be(
    indices: *const u8,
    indices_len: usize,
    palette: usize,
    order: usize,
    output: *mut u16,
    output_len: usize,
) -> isize {
    let indices = unsafe { core::slice::from_raw_parts(indices, indices_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output, output_len) };

    apply::<Rgb565, BigEndian>(indices, palette, order, output)
}

/// Maps color indices to RGBA8888 pixels (`r, g, b, 255` per pixel).
///
/// - `indices`: Pointer to the color indices, as written by [`gbcam_decode_photo`]
/// - `indices_len`: Number of indices
/// - `palette`: Built-in palette number, see [`gbcam_palette_count`]
/// - `order`: Palette order (0 normal, 1 inverted, 2 to 5 orders a to d)
/// - `output`: Pointer to the output buffer
/// - `output_len`: Length of the output buffer, in pixels (4 bytes each)
///
/// Returns the number of pixels written to the output buffer, if successful, or -1 otherwise.
///
/// # Safety
///
/// `indices` must be valid for reads of `indices_len` bytes and `output` for writes of
/// `output_len * 4` bytes.
#[no_mangle]
pub unsafe extern "C" fn gbcam_apply_palette_rgba8888(
    indices: *const u8,
    indices_len: usize,
    palette: usize,
    order: usize,
    output: *mut u8,
    output_len: usize,
) -> isize {
    let indices = unsafe { core::slice::from_raw_parts(indices, indices_len) };
    let output = unsafe { core::slice::from_raw_parts_mut(output.cast::<[u8; 4]>(), output_len) };

    apply::<Rgba8888, NativeEndian>(indices, palette, order, output)
}

fn apply<C: PixelFormat, B: ByteOrder>(
    indices: &[u8],
    palette: usize,
    order: usize,
    output: &mut [C::OutputElement],
) -> isize {
    let (Some(palette), Some(&order)) = (
        Palette::builtins().get(palette),
        PaletteOrder::ALL.get(order),
    ) else {
        return -1;
    };

    match apply_palette_into::<C, B>(indices, palette, order, output) {
        Ok(len) => len as isize,
        Err(_) => -1,
    }
}
