//! Unwrap radius for a chosen center.

/// Compute the unwrap radius for a center inside an `height` x `width` image.
///
/// The radius is the largest of four axis-aligned extents:
///
/// ```text
/// dA = |H - cy|    dB = |H - dA|
/// dC = |W - cx|    dD = |W - dC|
/// radius = max(dA, dB, dC, dD)
/// ```
///
/// This is a coarse bound, not the distance to the farthest corner: it covers
/// the longest horizontal or vertical run from the center. Centers outside
/// the image go through the same formula and simply produce a larger radius.
///
/// # Example
///
/// ```
/// use cartpolar_core::transform::compute_radius;
///
/// assert_eq!(compute_radius(100, 100, 50, 50), 50);
/// assert_eq!(compute_radius(100, 200, 10, 50), 190);
/// ```
pub fn compute_radius(height: u32, width: u32, cx: i32, cy: i32) -> u32 {
    let (h, w) = (i64::from(height), i64::from(width));
    let (cx, cy) = (i64::from(cx), i64::from(cy));

    let d_a = (h - cy).abs();
    let d_b = (h - d_a).abs();
    let d_c = (w - cx).abs();
    let d_d = (w - d_c).abs();

    let radius = d_a.max(d_b).max(d_c).max(d_d);
    u32::try_from(radius).unwrap_or(u32::MAX)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: The radius equals the max-of-four formula exactly.
        #[test]
        fn prop_matches_formula(
            height in 1u32..=4000,
            width in 1u32..=4000,
            cx in -500i32..=4500,
            cy in -500i32..=4500,
        ) {
            let (h, w) = (height as i64, width as i64);
            let d_a = (h - cy as i64).abs();
            let d_b = (h - d_a).abs();
            let d_c = (w - cx as i64).abs();
            let d_d = (w - d_c).abs();
            let expected = [d_a, d_b, d_c, d_d].into_iter().max().unwrap();

            prop_assert_eq!(compute_radius(height, width, cx, cy) as i64, expected);
        }

        /// Property: An in-image center reaches at least half the longer side.
        #[test]
        fn prop_inside_center_covers_half_extent(
            (height, width) in (1u32..=2000, 1u32..=2000),
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            let cx = (fx * width as f64) as i32;
            let cy = (fy * height as f64) as i32;
            let radius = compute_radius(height, width, cx, cy);

            prop_assert!(radius >= height.max(width) / 2);
            prop_assert!(radius <= height.max(width));
        }
    }
}
