//! Image decoding for CartPolar.
//!
//! Source images arrive as file bytes in any common raster format (PNG,
//! JPEG, BMP). They are decoded with the `image` crate and flattened to
//! 8-bit RGB; alpha channels are dropped.
//!
//! # Examples
//!
//! ```ignore
//! use cartpolar_core::decode::decode_image;
//!
//! let bytes = std::fs::read("rings.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod types;

pub use raster::{decode_image, load_image};
pub use types::DecodeError;
