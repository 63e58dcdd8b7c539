//! Image encoding for saving transform results.
//!
//! Results are written as PNG (lossless, the default save format), BMP, or
//! JPEG with a configurable quality. [`encode_image`] picks the encoder from an
//! [`OutputFormat`], which can be derived from the output file name.
//!
//! # Examples
//!
//! ```ignore
//! use cartpolar_core::encode::{encode_image, OutputFormat};
//!
//! let format = OutputFormat::from_path("polar.jpg", 90)?;
//! let bytes = encode_image(&polar, format).unwrap();
//! std::fs::write("polar.jpg", bytes).unwrap();
//! ```

mod bmp;
mod jpeg;
mod png;
mod types;

pub use bmp::encode_bmp;
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, OutputFormat};

use crate::types::RgbBuffer;

/// Encode a buffer in the given format.
pub fn encode_image(image: &RgbBuffer, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::Jpeg { quality } => {
            encode_jpeg(&image.pixels, image.width, image.height, quality)
        }
        OutputFormat::Bmp => encode_bmp(&image.pixels, image.width, image.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_image_dispatches_on_format() {
        let img = RgbBuffer::filled(8, 8, [40, 80, 120]);

        let png = encode_image(&img, OutputFormat::Png).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let jpeg = encode_image(&img, OutputFormat::Jpeg { quality: 90 }).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let bmp = encode_image(&img, OutputFormat::Bmp).unwrap();
        assert_eq!(&bmp[0..2], b"BM");
    }
}
