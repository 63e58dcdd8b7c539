//! BMP encoding.

use std::io::Cursor;

use image::codecs::bmp::BmpEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::types::check_pixels;
use super::EncodeError;

/// Encode RGB pixel data to an uncompressed 24-bit BMP.
pub fn encode_bmp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    check_pixels(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    BmpEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
