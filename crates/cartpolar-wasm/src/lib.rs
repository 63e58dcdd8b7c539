//! CartPolar WASM - WebAssembly bindings for CartPolar
//!
//! This crate exposes the cartpolar-core transforms to JavaScript/TypeScript
//! front-ends.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for RGB images
//! - `decode` - Image decoding (PNG, JPEG, BMP)
//! - `encode` - Image encoding (PNG, JPEG, BMP)
//! - `transform` - Stateless polar transforms and helpers
//! - `session` - Stateful viewer session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, to_polar } from '@cartpolar/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const polar = to_polar(image, image.width / 2, image.height / 2);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod transform;
mod types;

pub use decode::decode_image;
pub use encode::{encode_bmp, encode_for_filename, encode_jpeg, encode_png};
pub use session::JsSession;
pub use transform::{
    click_to_center, compute_radius, rotate, rotation_swaps_dimensions, to_cartesian, to_polar,
};
pub use types::JsRgbBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    cartpolar_core::version().to_string()
}
