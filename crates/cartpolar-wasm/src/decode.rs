//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@cartpolar/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsRgbBuffer;
use cartpolar_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG, JPEG or BMP image from bytes.
///
/// The format is detected from the file contents. Grayscale and alpha images
/// are converted to 8-bit RGB.
///
/// # Errors
///
/// Returns an error if the format is not recognized, the data is corrupted,
/// or the image has no pixels.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRgbBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsRgbBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
