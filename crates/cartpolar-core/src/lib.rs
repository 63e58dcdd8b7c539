//! CartPolar Core - Cartesian/polar image remapping
//!
//! This crate converts RGB images between Cartesian and polar form around a
//! chosen center, and provides the decoding, encoding and viewer state that
//! front-ends build on.
//!
//! # Modules
//!
//! - `transform` - Unwrap radius, polar warp and its inverse, quarter turns
//! - `center` - Click-to-center rescaling for scaled image displays
//! - `decode` / `encode` - Raster file input and output
//! - `pattern` - Built-in concentric ring sample image
//! - `session` - Source/result state owned by a front-end
//!
//! # Example
//!
//! ```ignore
//! use cartpolar_core::{decode, transform, Point};
//!
//! let image = decode::load_image("photo.png")?;
//! let polar = transform::to_polar(&image, Point::new(540, 540))?;
//! let back = transform::to_cartesian(&polar, image.shape())?;
//! ```

pub mod center;
pub mod decode;
pub mod encode;
pub mod pattern;
pub mod session;
pub mod transform;
mod types;

pub use center::click_to_center;
pub use session::{Mode, Session};
pub use transform::{compute_radius, rotate, to_cartesian, to_polar, WarpOptions};
pub use types::{CartPolarError, Point, RgbBuffer, TransformError};

/// Crate version, as reported by front-ends.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
