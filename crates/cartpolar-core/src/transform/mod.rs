//! Geometric transforms: polar unwrap, its inverse, and quarter turns.
//!
//! # Pipeline
//!
//! Forward (Cartesian → polar):
//! 1. [`compute_radius`] for the chosen center
//! 2. Resample into a panorama (angle columns, radius rows)
//! 3. Quarter turn so each row holds one angle
//!
//! Inverse (polar → Cartesian):
//! 1. Center at the target midpoint, [`compute_radius`] for it
//! 2. Three quarter turns back to the panorama layout
//! 3. Resample each output pixel from its angle and distance
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Angles are in degrees, 0 points right, 90 points down
//! - Quarter turns are clockwise

mod orient;
mod polar;
mod radius;
mod sample;

pub use orient::{rotate, rotate_turns, QuarterTurns};
pub use polar::{
    to_cartesian, to_cartesian_with, to_polar, to_polar_with, ANGLE_STEPS, MAX_OUTPUT_PIXELS,
};
pub use radius::compute_radius;
pub use sample::{Interpolation, WarpOptions};
