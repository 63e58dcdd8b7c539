//! Encoder errors and output format selection.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// The output file extension names a format we cannot write
    #[error("Unsupported output format: .{0} (expected .png, .jpg, .jpeg or .bmp)")]
    UnsupportedFormat(String),
}

/// Check that `pixels` holds exactly `width * height` RGB pixels.
pub(super) fn check_pixels(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

/// File format for saved images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg {
        quality: u8,
    },
    Bmp,
}

impl OutputFormat {
    /// Pick a format from a file extension (case-insensitive).
    ///
    /// A name without an extension is written as PNG. Extensions other than
    /// `png`, `jpg`, `jpeg` and `bmp` are rejected.
    pub fn from_path(path: impl AsRef<Path>, jpeg_quality: u8) -> Result<Self, EncodeError> {
        let Some(ext) = path.as_ref().extension() else {
            return Ok(OutputFormat::Png);
        };
        let ext = ext.to_string_lossy().to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg {
                quality: jpeg_quality,
            }),
            "bmp" => Ok(OutputFormat::Bmp),
            _ => Err(EncodeError::UnsupportedFormat(ext)),
        }
    }
}
