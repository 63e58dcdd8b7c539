//! Raster decoding with format detection.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::DecodeError;
use crate::types::RgbBuffer;

/// Decode an image from bytes, detecting the format from its header.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// `DecodeError::CorruptedFile` if decoding fails, and
/// `DecodeError::EmptyImage` for a zero-sized image.
pub fn decode_image(bytes: &[u8]) -> Result<RgbBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgb = img.into_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    debug!(?format, width = rgb.width(), height = rgb.height(), "decoded image");
    Ok(RgbBuffer::from_rgb_image(rgb))
}

/// Read a file from disk and decode it.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbBuffer, DecodeError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| DecodeError::IoError(e.to_string()))?;
    decode_image(&bytes)
}
