//! Exact quarter-turn rotation.
//!
//! Used to normalize the polar unwrap so each row holds one angle. No
//! interpolation is involved: every step is a pure pixel permutation, so
//! rotating by 90 and then 270 degrees reproduces the input byte for byte.

use tracing::trace;

use crate::types::RgbBuffer;

/// A rotation by a whole number of clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuarterTurns(u32);

impl QuarterTurns {
    pub const NONE: QuarterTurns = QuarterTurns(0);
    pub const CW_90: QuarterTurns = QuarterTurns(1);
    pub const CW_180: QuarterTurns = QuarterTurns(2);
    pub const CW_270: QuarterTurns = QuarterTurns(3);

    /// Number of quarter turns in `degrees`, truncated by integer division
    /// (e.g. 100 degrees is one quarter turn).
    pub fn from_degrees(degrees: u32) -> Self {
        QuarterTurns(degrees / 90)
    }

    /// Turns left after removing full revolutions.
    pub fn effective(self) -> u32 {
        self.0 % 4
    }

    /// Whether applying this rotation swaps width and height.
    pub fn swaps_dimensions(self) -> bool {
        self.effective() % 2 == 1
    }
}

/// Rotate an image clockwise by `angle_degrees`, in steps of 90 degrees.
///
/// Non-multiples of 90 are truncated down (`angle_degrees / 90` steps).
/// Each step turns source row `j` into destination column `H - 1 - j`.
///
/// # Example
///
/// ```
/// use cartpolar_core::transform::rotate;
/// use cartpolar_core::RgbBuffer;
///
/// let img = RgbBuffer::filled(4, 2, [0, 0, 0]);
/// let turned = rotate(&img, 90);
/// assert_eq!((turned.width, turned.height), (2, 4));
/// ```
pub fn rotate(image: &RgbBuffer, angle_degrees: u32) -> RgbBuffer {
    rotate_turns(image, QuarterTurns::from_degrees(angle_degrees))
}

/// Rotate an image clockwise by a number of quarter turns.
pub fn rotate_turns(image: &RgbBuffer, turns: QuarterTurns) -> RgbBuffer {
    let steps = turns.effective();
    if steps == 0 || image.is_empty() {
        return image.clone();
    }

    let mut current = rotate_quarter(image);
    for _ in 1..steps {
        current = rotate_quarter(&current);
    }
    current
}

/// One clockwise quarter turn.
fn rotate_quarter(image: &RgbBuffer) -> RgbBuffer {
    let (src_w, src_h) = (image.width as usize, image.height as usize);
    trace!(width = src_w, height = src_h, "rotating 90 degrees");

    // Destination is src_h wide and src_w tall
    let mut output = vec![0u8; src_w * src_h * 3];

    for (j, row) in image.pixels.chunks_exact(src_w * 3).enumerate() {
        let dst_x = src_h - 1 - j;
        for (c, rgb) in row.chunks_exact(3).enumerate() {
            let dst_idx = (c * src_h + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(rgb);
        }
    }

    RgbBuffer {
        width: image.height,
        height: image.width,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = RgbBuffer> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            let len = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| RgbBuffer::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: 90 then 270 degrees is the identity.
        #[test]
        fn prop_full_circle_identity(img in image_strategy()) {
            prop_assert_eq!(rotate(&rotate(&img, 90), 270), img);
        }

        /// Property: Four quarter turns are the identity.
        #[test]
        fn prop_four_steps_identity(img in image_strategy()) {
            let mut out = img.clone();
            for _ in 0..4 {
                out = rotate(&out, 90);
            }
            prop_assert_eq!(out, img);
        }

        /// Property: Odd step counts swap dimensions, even ones keep them.
        #[test]
        fn prop_dimension_parity(img in image_strategy(), degrees in 0u32..=1080) {
            let out = rotate(&img, degrees);
            if QuarterTurns::from_degrees(degrees).swaps_dimensions() {
                prop_assert_eq!((out.width, out.height), (img.height, img.width));
            } else {
                prop_assert_eq!((out.width, out.height), (img.width, img.height));
            }
            prop_assert_eq!(out.pixels.len(), img.pixels.len());
        }
    }
}
