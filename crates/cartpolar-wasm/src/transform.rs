//! WASM bindings for the polar transforms.
//!
//! These are the stateless entry points. Front-ends that keep a source image
//! and react to clicks should use [`crate::JsSession`] instead.

use crate::types::JsRgbBuffer;
use cartpolar_core::transform::{self, QuarterTurns};
use cartpolar_core::{center, Point};
use wasm_bindgen::prelude::*;

/// Unwrap an image into polar coordinates around `(cx, cy)`.
///
/// The result has 360 rows, one per degree starting at the +x axis and
/// turning towards +y, and one column per unit of radius.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const polar = to_polar(image, image.width / 2, image.height / 2);
/// ```
#[wasm_bindgen]
pub fn to_polar(image: &JsRgbBuffer, cx: i32, cy: i32) -> Result<JsRgbBuffer, JsValue> {
    let src = image.to_buffer();
    transform::to_polar(&src, Point::new(cx, cy))
        .map(JsRgbBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Map a polar image back to a Cartesian image of `width` x `height`,
/// centered on the output midpoint.
#[wasm_bindgen]
pub fn to_cartesian(polar: &JsRgbBuffer, width: u32, height: u32) -> Result<JsRgbBuffer, JsValue> {
    let src = polar.to_buffer();
    transform::to_cartesian(&src, (height, width))
        .map(JsRgbBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rotate an image clockwise by a multiple of 90 degrees.
///
/// Angles that are not a multiple of 90 are truncated to the quarter turn
/// below them.
#[wasm_bindgen]
pub fn rotate(image: &JsRgbBuffer, angle_degrees: u32) -> JsRgbBuffer {
    let src = image.to_buffer();
    JsRgbBuffer::from_buffer(transform::rotate(&src, angle_degrees))
}

/// Whether rotating by `angle_degrees` swaps width and height.
#[wasm_bindgen]
pub fn rotation_swaps_dimensions(angle_degrees: u32) -> bool {
    QuarterTurns::from_degrees(angle_degrees).swaps_dimensions()
}

/// Radius of the polar unwrap for a center in an image of `height` rows and
/// `width` columns. Arguments follow the core order: height first.
#[wasm_bindgen]
pub fn compute_radius(height: u32, width: u32, cx: i32, cy: i32) -> u32 {
    transform::compute_radius(height, width, cx, cy)
}

/// Convert a click inside a display label to a center in the source image.
///
/// Returns `[x, y]`, or `undefined` when the label has a zero dimension.
#[wasm_bindgen]
pub fn click_to_center(
    click_x: f64,
    click_y: f64,
    label_width: u32,
    label_height: u32,
    image_width: u32,
    image_height: u32,
) -> Option<Vec<i32>> {
    center::click_to_center(
        (click_x, click_y),
        (label_width, label_height),
        (image_width, image_height),
    )
    .map(|p| vec![p.x, p.y])
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_to_polar_rejects_bad_buffer() {
        let img = JsRgbBuffer::new(10, 10, vec![0u8; 5]);
        assert!(to_polar(&img, 5, 5).is_err());
    }

    #[wasm_bindgen_test]
    fn test_to_polar_rejects_far_center() {
        let img = JsRgbBuffer::new(10, 10, vec![0u8; 10 * 10 * 3]);
        assert!(to_polar(&img, i32::MAX, 0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_to_cartesian_rejects_zero_shape() {
        let polar = JsRgbBuffer::new(4, 360, vec![0u8; 4 * 360 * 3]);
        assert!(to_cartesian(&polar, 0, 10).is_err());
    }
}
