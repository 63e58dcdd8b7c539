//! Core buffer and geometry types shared by every transform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors raised by the geometric transforms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The buffer has a zero dimension or its pixel data does not match
    /// `width * height * 3`.
    #[error("Invalid image: {width}x{height} with {len} bytes of pixel data")]
    InvalidImage { width: u32, height: u32, len: usize },

    /// The requested output shape has a zero dimension.
    #[error("Invalid target shape: width ({width}) and height ({height}) must be non-zero")]
    InvalidShape { width: u32, height: u32 },

    /// The output would exceed the pixel budget or could not be allocated.
    #[error("Output too large: {width}x{height} pixels")]
    OutputTooLarge { width: u32, height: u32 },
}

/// Any error the CartPolar core can produce.
#[derive(Debug, Error)]
pub enum CartPolarError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// A pixel position in image coordinates.
///
/// Values outside the image are allowed; the polar geometry evaluates them
/// like any other center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An RGB image with 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl RgbBuffer {
    /// Create a new RgbBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an RgbBuffer from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Check that the buffer is non-empty and its pixel data matches its
    /// dimensions.
    pub fn validate(&self) -> Result<(), TransformError> {
        let expected = self.width as usize * self.height as usize * 3;
        if self.width == 0 || self.height == 0 || self.pixels.len() != expected {
            return Err(TransformError::InvalidImage {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// (height, width), the order used for target shapes.
    pub fn shape(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Get the pixel at (x, y). Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Set the pixel at (x, y). Panics if out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&rgb);
    }

    /// Midpoint of the image, truncated toward the top-left.
    pub fn midpoint(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
