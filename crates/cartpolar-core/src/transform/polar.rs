//! Cartesian ⇄ polar remapping.
//!
//! # Layout
//!
//! A polar image has one row per degree (360 rows) and one column per pixel
//! of distance from the center (`radius` columns):
//!
//! ```text
//!            r = 0 ............ radius - 1
//! angle   0  |  center -> right edge      |
//! angle  90  |  center -> bottom edge     |
//! angle 180  |  center -> left edge       |
//! angle 270  |  center -> top edge        |
//! ```
//!
//! Angles follow image coordinates (y grows downward), so increasing angle
//! sweeps clockwise on screen.
//!
//! # Algorithm
//!
//! The warp first builds a "panorama": 360 angle columns by `radius` rows,
//! outermost ring on the top row and the center on the bottom row. A single
//! clockwise quarter turn then gives the layout above. The inverse turns the
//! polar image back into a panorama (270 degrees) before sampling it, so both
//! directions share the same intermediate form.

use std::f64::consts::TAU;

use tracing::debug;

use super::orient::{rotate_turns, QuarterTurns};
use super::radius::compute_radius;
use super::sample::{Sampler, WarpOptions};
use crate::types::{Point, RgbBuffer, TransformError};

/// Number of angle rows in a polar image (one per degree).
pub const ANGLE_STEPS: u32 = 360;

/// Largest output, in pixels, either warp will allocate.
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Reserve an RGB buffer for `width` x `height` pixels without aborting on
/// huge sizes.
fn reserve_output(width: u32, height: u32) -> Result<Vec<u8>, TransformError> {
    let too_large = || TransformError::OutputTooLarge { width, height };

    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_OUTPUT_PIXELS {
        return Err(too_large());
    }
    let len = usize::try_from(pixels * 3).map_err(|_| too_large())?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| too_large())?;
    Ok(buffer)
}

/// Unwrap an image around `center` into polar form with default options.
///
/// See [`to_polar_with`].
pub fn to_polar(image: &RgbBuffer, center: Point) -> Result<RgbBuffer, TransformError> {
    to_polar_with(image, center, &WarpOptions::default())
}

/// Unwrap an image around `center` into polar form.
///
/// The output is `radius` pixels wide and [`ANGLE_STEPS`] rows tall, where
/// `radius` comes from [`compute_radius`]. Output pixel (r, a) is the input
/// sampled at `(cx + r·cos a, cy + r·sin a)`; samples outside the input take
/// `options.fill`.
///
/// # Errors
///
/// Returns `TransformError::InvalidImage` for an empty or inconsistent buffer
/// and `TransformError::OutputTooLarge` when the center is so far away that
/// the result would exceed [`MAX_OUTPUT_PIXELS`].
pub fn to_polar_with(
    image: &RgbBuffer,
    center: Point,
    options: &WarpOptions,
) -> Result<RgbBuffer, TransformError> {
    image.validate()?;

    let radius = compute_radius(image.height, image.width, center.x, center.y);
    debug!(
        width = image.width,
        height = image.height,
        cx = center.x,
        cy = center.y,
        radius,
        "unwrapping to polar"
    );

    let panorama = unwrap_panorama(image, center, radius, options)?;
    Ok(rotate_turns(&panorama, QuarterTurns::CW_90))
}

/// Sample the source into the panorama layout.
fn unwrap_panorama(
    image: &RgbBuffer,
    center: Point,
    radius: u32,
    options: &WarpOptions,
) -> Result<RgbBuffer, TransformError> {
    let mut output = reserve_output(ANGLE_STEPS, radius)?;
    let sampler = Sampler::new(image, *options);
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));

    let directions: Vec<(f64, f64)> = (0..ANGLE_STEPS)
        .map(|a| {
            let theta = f64::from(a) * TAU / f64::from(ANGLE_STEPS);
            (theta.cos(), theta.sin())
        })
        .collect();

    for row in 0..radius {
        let r = f64::from(radius - 1 - row);
        for &(cos, sin) in &directions {
            output.extend_from_slice(&sampler.sample(cx + r * cos, cy + r * sin));
        }
    }

    Ok(RgbBuffer {
        width: ANGLE_STEPS,
        height: radius,
        pixels: output,
    })
}

/// Rebuild a Cartesian image from polar form with default options.
///
/// See [`to_cartesian_with`].
pub fn to_cartesian(polar: &RgbBuffer, target: (u32, u32)) -> Result<RgbBuffer, TransformError> {
    to_cartesian_with(polar, target, &WarpOptions::default())
}

/// Rebuild a Cartesian image of shape `target = (height, width)` from a
/// polar image.
///
/// The center is the target's midpoint (integer division) and the radius is
/// [`compute_radius`] for that center. Each output pixel is mapped to its
/// angle and distance from the center and read from the polar image; the
/// angle axis wraps from 359 back to 0 degrees. Polar images of any size are
/// accepted: their rows are spread over 360 degrees and their columns over
/// the radius. Pixels beyond the radius take `options.fill`.
///
/// # Errors
///
/// Returns `TransformError::InvalidImage` for an empty or inconsistent polar
/// buffer, `TransformError::InvalidShape` for a zero-sized target and
/// `TransformError::OutputTooLarge` for a target above [`MAX_OUTPUT_PIXELS`].
pub fn to_cartesian_with(
    polar: &RgbBuffer,
    target: (u32, u32),
    options: &WarpOptions,
) -> Result<RgbBuffer, TransformError> {
    polar.validate()?;

    let (height, width) = target;
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidShape { width, height });
    }
    let mut output = reserve_output(width, height)?;

    let center = Point::new((width / 2) as i32, (height / 2) as i32);
    let radius = compute_radius(height, width, center.x, center.y);
    debug!(
        polar_width = polar.width,
        polar_height = polar.height,
        width,
        height,
        radius,
        "rebuilding cartesian image"
    );

    let panorama = rotate_turns(polar, QuarterTurns::CW_270);
    let sampler = Sampler::new(&panorama, *options).wrapping_x();

    let angle_scale = f64::from(panorama.width) / TAU;
    let radius_scale = f64::from(panorama.height) / f64::from(radius);
    let bottom_row = f64::from(panorama.height - 1);
    let (cx, cy) = (f64::from(center.x), f64::from(center.y));

    for y in 0..height {
        let dy = f64::from(y) - cy;
        for x in 0..width {
            let dx = f64::from(x) - cx;
            let theta = dy.atan2(dx).rem_euclid(TAU);
            let ring = dx.hypot(dy) * radius_scale;

            output.extend_from_slice(&sampler.sample(theta * angle_scale, bottom_row - ring));
        }
    }

    Ok(RgbBuffer {
        width,
        height,
        pixels: output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Interpolation;

    const RED: [u8; 3] = [255, 0, 0];
    const GRAY: [u8; 3] = [90, 120, 150];

    /// Smooth image where every channel is linear in x and y.
    fn gradient(width: u32, height: u32) -> RgbBuffer {
        let mut img = RgbBuffer::filled(width, height, [0, 0, 0]);
        for y in 0..height {
            for x in 0..width {
                img.set_pixel(x, y, [(x + y) as u8, (2 * x) as u8, (2 * y) as u8]);
            }
        }
        img
    }

    fn channel_diff(a: [u8; 3], b: [u8; 3]) -> u8 {
        (0..3).map(|i| a[i].abs_diff(b[i])).max().unwrap_or(0)
    }

    #[test]
    fn test_polar_dimensions() {
        let img = gradient(100, 100);
        let polar = to_polar(&img, Point::new(50, 50)).unwrap();
        assert_eq!(polar.height, ANGLE_STEPS);
        assert_eq!(polar.width, 50);
        assert_eq!(polar.pixels.len(), 50 * 360 * 3);
    }

    #[test]
    fn test_polar_dimensions_rectangular() {
        let img = gradient(120, 40);
        let polar = to_polar(&img, Point::new(30, 10)).unwrap();
        assert_eq!(polar.height, 360);
        assert_eq!(polar.width, compute_radius(40, 120, 30, 10));
    }

    #[test]
    fn test_polar_rows_follow_angle() {
        let mut img = RgbBuffer::filled(100, 100, [0, 0, 0]);
        img.set_pixel(60, 50, RED); // right of center
        img.set_pixel(50, 70, [0, 255, 0]); // below
        img.set_pixel(35, 50, [0, 0, 255]); // left
        img.set_pixel(50, 25, [255, 255, 0]); // above

        let polar = to_polar(&img, Point::new(50, 50)).unwrap();
        assert_eq!(polar.pixel(10, 0), RED);
        assert_eq!(polar.pixel(20, 90), [0, 255, 0]);
        assert_eq!(polar.pixel(15, 180), [0, 0, 255]);
        assert_eq!(polar.pixel(25, 270), [255, 255, 0]);
    }

    #[test]
    fn test_polar_first_column_is_center() {
        let mut img = RgbBuffer::filled(40, 40, GRAY);
        img.set_pixel(20, 20, RED);

        let polar = to_polar(&img, Point::new(20, 20)).unwrap();
        for angle in 0..360 {
            assert_eq!(polar.pixel(0, angle), RED, "angle {}", angle);
        }
    }

    #[test]
    fn test_uniform_image_stays_uniform() {
        let img = RgbBuffer::filled(100, 100, GRAY);
        let polar = to_polar(&img, Point::new(50, 50)).unwrap();
        assert!(polar.pixels.chunks_exact(3).all(|p| p == GRAY));
    }

    #[test]
    fn test_uniform_image_stays_uniform_nearest() {
        let img = RgbBuffer::filled(81, 81, GRAY);
        let options = WarpOptions {
            interpolation: Interpolation::Nearest,
            ..Default::default()
        };
        let polar = to_polar_with(&img, Point::new(40, 40), &options).unwrap();
        assert!(polar.pixels.chunks_exact(3).all(|p| p == GRAY));
    }

    #[test]
    fn test_off_center_fills_outside() {
        let img = RgbBuffer::filled(100, 100, GRAY);
        let options = WarpOptions {
            fill: [1, 2, 3],
            ..Default::default()
        };
        // radius 90: the leftward ray leaves the image after 10 pixels
        let polar = to_polar_with(&img, Point::new(10, 50), &options).unwrap();
        assert_eq!(polar.width, 90);
        assert_eq!(polar.pixel(5, 180), GRAY);
        assert_eq!(polar.pixel(89, 180), [1, 2, 3]);
        assert_eq!(polar.pixel(89, 0), GRAY);
    }

    #[test]
    fn test_center_outside_image() {
        let img = RgbBuffer::filled(20, 20, GRAY);
        let polar = to_polar(&img, Point::new(-10, 10)).unwrap();
        assert_eq!(polar.height, 360);
        // Pointing left, away from the image
        assert_eq!(polar.pixel(5, 180), [0, 0, 0]);
        // Pointing right, 15 pixels in lands at x = 5
        assert_eq!(polar.pixel(15, 0), GRAY);
    }

    #[test]
    fn test_polar_rejects_empty_image() {
        let img = RgbBuffer {
            width: 0,
            height: 0,
            pixels: vec![],
        };
        assert!(matches!(
            to_polar(&img, Point::new(0, 0)),
            Err(TransformError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_far_center_is_rejected() {
        let img = RgbBuffer::filled(10, 10, GRAY);
        let result = to_polar(&img, Point::new(i32::MAX, 0));
        assert!(matches!(
            result,
            Err(TransformError::OutputTooLarge {
                width: ANGLE_STEPS,
                ..
            })
        ));

        let result = to_polar(&img, Point::new(i32::MIN, i32::MIN));
        assert!(matches!(result, Err(TransformError::OutputTooLarge { .. })));
    }

    #[test]
    fn test_output_budget_boundary() {
        // 360 * 745_655 pixels is the first radius over the budget
        assert!(reserve_output(ANGLE_STEPS, 745_655).is_err());
        assert!(reserve_output(ANGLE_STEPS, 64).unwrap().capacity() >= 360 * 64 * 3);
    }

    #[test]
    fn test_cartesian_rejects_huge_shape() {
        let polar = RgbBuffer::filled(10, 360, GRAY);
        assert_eq!(
            to_cartesian(&polar, (u32::MAX, u32::MAX)),
            Err(TransformError::OutputTooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
        assert!(to_cartesian(&polar, (100_000, 100_000)).is_err());
    }

    #[test]
    fn test_cartesian_dimensions_and_corners() {
        let polar = RgbBuffer::filled(50, 360, GRAY);
        let cart = to_cartesian(&polar, (100, 120)).unwrap();
        assert_eq!((cart.width, cart.height), (120, 100));
        // Center and a pixel inside the radius come from the polar image
        assert_eq!(cart.pixel(60, 50), GRAY);
        assert_eq!(cart.pixel(60, 80), GRAY);
        // Corners lie beyond the radius
        assert_eq!(cart.pixel(0, 0), [0, 0, 0]);
        assert_eq!(cart.pixel(119, 99), [0, 0, 0]);
    }

    #[test]
    fn test_cartesian_reads_angle_rows() {
        // Angles 0..180 red, 180..360 gray: lower half red, upper half gray
        let mut polar = RgbBuffer::filled(50, 360, GRAY);
        for a in 0..180 {
            for r in 0..50 {
                polar.set_pixel(r, a, RED);
            }
        }
        let cart = to_cartesian(&polar, (100, 100)).unwrap();
        assert_eq!(cart.pixel(50, 80), RED);
        assert_eq!(cart.pixel(50, 20), GRAY);
    }

    #[test]
    fn test_cartesian_accepts_mismatched_polar_size() {
        let polar = RgbBuffer::filled(10, 180, GRAY);
        let cart = to_cartesian(&polar, (100, 100)).unwrap();
        assert_eq!((cart.width, cart.height), (100, 100));
        assert_eq!(cart.pixel(50, 50), GRAY);
        assert_eq!(cart.pixel(90, 50), GRAY);
        // Just below angle 0, blending across the 359 -> 0 seam
        assert_eq!(cart.pixel(90, 49), GRAY);
        assert_eq!(cart.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_cartesian_rejects_zero_shape() {
        let polar = RgbBuffer::filled(10, 360, GRAY);
        assert_eq!(
            to_cartesian(&polar, (0, 10)),
            Err(TransformError::InvalidShape {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_cartesian_rejects_invalid_polar() {
        let polar = RgbBuffer {
            width: 10,
            height: 360,
            pixels: vec![0u8; 12],
        };
        assert!(matches!(
            to_cartesian(&polar, (10, 10)),
            Err(TransformError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_round_trip_reconstructs_interior() {
        let img = gradient(100, 100);
        let center = img.midpoint();

        let polar = to_polar(&img, center).unwrap();
        let back = to_cartesian(&polar, img.shape()).unwrap();
        assert_eq!((back.width, back.height), (img.width, img.height));

        for y in 0..img.height {
            for x in 0..img.width {
                let dx = f64::from(x) - 50.0;
                let dy = f64::from(y) - 50.0;
                if dx.hypot(dy) > 48.0 {
                    continue;
                }
                let diff = channel_diff(img.pixel(x, y), back.pixel(x, y));
                assert!(diff <= 2, "pixel ({}, {}) differs by {}", x, y, diff);
            }
        }
    }

    #[test]
    fn test_round_trip_odd_dimensions() {
        let img = gradient(81, 81);
        let polar = to_polar(&img, img.midpoint()).unwrap();
        let back = to_cartesian(&polar, img.shape()).unwrap();

        for (x, y) in [(40, 40), (60, 40), (40, 10), (25, 55)] {
            let diff = channel_diff(img.pixel(x, y), back.pixel(x, y));
            assert!(diff <= 2, "pixel ({}, {}) differs by {}", x, y, diff);
        }
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
