//! Image encoding WASM bindings.
//!
//! Transform results are saved as PNG by default, as BMP, or as JPEG with a
//! quality setting.
//!
//! # Example
//!
//! ```typescript
//! const polar = to_polar(image, 540, 540);
//! const png = encode_png(polar);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsRgbBuffer;
use cartpolar_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsRgbBuffer) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer();
    encode::encode_image(&buffer, encode::OutputFormat::Png)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality, recommended: 90)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRgbBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer();
    encode::encode_image(&buffer, encode::OutputFormat::Jpeg { quality })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to uncompressed BMP bytes.
#[wasm_bindgen]
pub fn encode_bmp(image: &JsRgbBuffer) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer();
    encode::encode_image(&buffer, encode::OutputFormat::Bmp)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image in the format implied by a file name.
///
/// `.jpg` and `.jpeg` names produce JPEG at `jpeg_quality`, `.bmp` produces
/// BMP, and `.png` or a name without an extension produces PNG. Other
/// extensions are an error.
#[wasm_bindgen]
pub fn encode_for_filename(
    image: &JsRgbBuffer,
    filename: &str,
    jpeg_quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer();
    encode::OutputFormat::from_path(filename, jpeg_quality)
        .and_then(|format| encode::encode_image(&buffer, format))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let img = JsRgbBuffer::new(10, 10, vec![128u8; 10 * 10 * 3]);
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_encode_jpeg_signature() {
        let img = JsRgbBuffer::new(10, 10, vec![128u8; 10 * 10 * 3]);
        let jpeg = encode_jpeg(&img, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_bmp_signature() {
        let img = JsRgbBuffer::new(10, 10, vec![128u8; 10 * 10 * 3]);
        let bmp = encode_bmp(&img).unwrap();
        assert_eq!(&bmp[0..2], b"BM");
    }

    #[test]
    fn test_encode_for_filename() {
        let img = JsRgbBuffer::new(4, 4, vec![60u8; 4 * 4 * 3]);
        let jpeg = encode_for_filename(&img, "result.JPG", 85).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let png = encode_for_filename(&img, "result.png", 85).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let bmp = encode_for_filename(&img, "result.bmp", 85).unwrap();
        assert_eq!(&bmp[0..2], b"BM");
    }
}
