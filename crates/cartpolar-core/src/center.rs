//! Mapping display clicks to source-image centers.
//!
//! Front-ends show the source image scaled into a fixed-size label. A click
//! is first expressed as a ratio of the label size, then multiplied by the
//! source image's real dimensions and rounded per axis:
//!
//! ```text
//! center.x = round(click.x / label.width  * image.width)
//! center.y = round(click.y / label.height * image.height)
//! ```
//!
//! Ties round to the nearest even integer. Clicks outside the label are not
//! clamped; the resulting off-image center is still a valid transform input.

use crate::types::Point;

/// Express a click position as a fraction of the label size.
///
/// Returns `None` when the label has a zero dimension.
pub fn click_ratio(click: (f64, f64), label_size: (u32, u32)) -> Option<(f64, f64)> {
    let (label_w, label_h) = label_size;
    if label_w == 0 || label_h == 0 {
        return None;
    }
    Some((click.0 / f64::from(label_w), click.1 / f64::from(label_h)))
}

/// Scale a label ratio to pixel coordinates in an image of
/// `image_size = (width, height)`.
pub fn scale_ratio(ratio: (f64, f64), image_size: (u32, u32)) -> Point {
    let x = (ratio.0 * f64::from(image_size.0)).round_ties_even();
    let y = (ratio.1 * f64::from(image_size.1)).round_ties_even();
    Point::new(x as i32, y as i32)
}

/// Convert a click inside a label of `label_size` into a center in a source
/// image of `image_size`. Both sizes are `(width, height)`.
///
/// # Example
///
/// ```
/// use cartpolar_core::center::click_to_center;
/// use cartpolar_core::Point;
///
/// let center = click_to_center((250.0, 250.0), (500, 500), (1080, 1080));
/// assert_eq!(center, Some(Point::new(540, 540)));
/// ```
pub fn click_to_center(
    click: (f64, f64),
    label_size: (u32, u32),
    image_size: (u32, u32),
) -> Option<Point> {
    click_ratio(click, label_size).map(|ratio| scale_ratio(ratio, image_size))
}
