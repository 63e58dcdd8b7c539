//! Built-in sample image shown before the user opens a file.

use crate::types::{RgbBuffer, TransformError};

/// Side length of the default sample image.
pub const DEFAULT_PATTERN_SIZE: u32 = 1080;

/// Disc radii at [`DEFAULT_PATTERN_SIZE`], outermost first. Even entries are
/// white, odd entries black.
const RING_RADII: [f64; 10] = [264.0, 231.0, 194.0, 163.0, 129.0, 100.0, 72.0, 50.0, 29.0, 11.0];

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Generate a `size` x `size` image of concentric black and white rings
/// around the image midpoint.
///
/// Unwrapped around its midpoint, this pattern turns into vertical stripes,
/// which makes an off-center click easy to spot.
pub fn concentric_rings(size: u32) -> Result<RgbBuffer, TransformError> {
    if size == 0 {
        return Err(TransformError::InvalidShape {
            width: size,
            height: size,
        });
    }

    let scale = f64::from(size) / f64::from(DEFAULT_PATTERN_SIZE);
    let center = f64::from(size / 2);
    let mut img = RgbBuffer::filled(size, size, BLACK);

    for y in 0..size {
        for x in 0..size {
            let d = (f64::from(x) - center).hypot(f64::from(y) - center);
            // Smaller discs are painted over larger ones
            let disc = RING_RADII
                .iter()
                .enumerate()
                .rev()
                .find(|&(_, r)| d <= *r * scale);
            if let Some((i, _)) = disc {
                if i % 2 == 0 {
                    img.set_pixel(x, y, WHITE);
                }
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern_rings() {
        let img = concentric_rings(DEFAULT_PATTERN_SIZE).unwrap();
        assert_eq!((img.width, img.height), (1080, 1080));

        // Walking right from the center: black core (11), white (29), ...
        assert_eq!(img.pixel(540, 540), BLACK);
        assert_eq!(img.pixel(540 + 20, 540), WHITE);
        assert_eq!(img.pixel(540 + 40, 540), BLACK);
        assert_eq!(img.pixel(540 + 250, 540), WHITE);
        assert_eq!(img.pixel(540 + 300, 540), BLACK);
        assert_eq!(img.pixel(0, 0), BLACK);
    }

    #[test]
    fn test_pattern_scales_with_size() {
        let img = concentric_rings(108).unwrap();
        // Outer white disc has radius 26.4 at this size
        assert_eq!(img.pixel(54 + 25, 54), WHITE);
        assert_eq!(img.pixel(54 + 28, 54), BLACK);
    }

    #[test]
    fn test_pattern_is_symmetric() {
        let img = concentric_rings(200).unwrap();
        for offset in [3, 17, 40, 48] {
            assert_eq!(img.pixel(100 + offset, 100), img.pixel(100 - offset, 100));
            assert_eq!(img.pixel(100, 100 + offset), img.pixel(100 + offset, 100));
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(concentric_rings(0).is_err());
    }
}
