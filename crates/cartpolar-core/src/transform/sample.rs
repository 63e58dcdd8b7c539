//! Pixel sampling at fractional coordinates.
//!
//! Both polar warps use inverse mapping: for each output pixel they compute
//! where it lands in the input and read the input there. Samples that land
//! outside the input take the configured fill color instead of being
//! clamped to the nearest edge.

use serde::{Deserialize, Serialize};

use crate::types::RgbBuffer;

/// Tolerance for coordinates that land on the last row/column through
/// floating-point error.
const EDGE_EPSILON: f64 = 1e-6;

/// Interpolation used when reading a sample between pixel centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Weighted average of the four surrounding pixels.
    #[default]
    Bilinear,
    /// Closest pixel, no blending.
    Nearest,
}

/// Options shared by the forward and inverse warps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WarpOptions {
    /// Color written where a sample falls outside the input.
    pub fill: [u8; 3],
    /// How samples between pixel centers are read.
    pub interpolation: Interpolation,
}

/// Reads an image at fractional coordinates.
pub(crate) struct Sampler<'a> {
    image: &'a RgbBuffer,
    options: WarpOptions,
    /// Treat the x axis as periodic (used for the angle axis).
    wrap_x: bool,
}

impl<'a> Sampler<'a> {
    pub(crate) fn new(image: &'a RgbBuffer, options: WarpOptions) -> Self {
        Self {
            image,
            options,
            wrap_x: false,
        }
    }

    pub(crate) fn wrapping_x(mut self) -> Self {
        self.wrap_x = true;
        self
    }

    pub(crate) fn sample(&self, x: f64, y: f64) -> [u8; 3] {
        match self.options.interpolation {
            Interpolation::Bilinear => self.sample_bilinear(x, y),
            Interpolation::Nearest => self.sample_nearest(x, y),
        }
    }

    /// Map a coordinate on an axis of `len` pixels into `[0, len - 1]`,
    /// or `None` when it lies outside.
    fn clamp_axis(value: f64, len: u32) -> Option<f64> {
        let max = f64::from(len - 1);
        if !value.is_finite() || value < -EDGE_EPSILON || value > max + EDGE_EPSILON {
            return None;
        }
        Some(value.clamp(0.0, max))
    }

    fn wrap_axis(value: f64, len: u32) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        Some(value.rem_euclid(f64::from(len)))
    }

    fn resolve_x(&self, x: f64) -> Option<f64> {
        if self.wrap_x {
            Self::wrap_axis(x, self.image.width)
        } else {
            Self::clamp_axis(x, self.image.width)
        }
    }

    fn sample_nearest(&self, x: f64, y: f64) -> [u8; 3] {
        let (w, h) = (self.image.width, self.image.height);
        let Some(y) = Self::clamp_axis(y, h) else {
            return self.options.fill;
        };
        let Some(x) = self.resolve_x(x) else {
            return self.options.fill;
        };

        let px = (x.round() as u32) % w;
        let py = (y.round() as u32).min(h - 1);
        self.image.pixel(px, py)
    }

    fn sample_bilinear(&self, x: f64, y: f64) -> [u8; 3] {
        let (w, h) = (self.image.width, self.image.height);
        let Some(y) = Self::clamp_axis(y, h) else {
            return self.options.fill;
        };
        let Some(x) = self.resolve_x(x) else {
            return self.options.fill;
        };

        let x0 = (x.floor() as u32) % w;
        let y0 = (y.floor() as u32).min(h - 1);
        let x1 = if self.wrap_x {
            (x0 + 1) % w
        } else {
            (x0 + 1).min(w - 1)
        };
        let y1 = (y0 + 1).min(h - 1);

        // Fractional distances
        let fx = x - x.floor();
        let fy = y - y.floor();

        let p00 = self.image.pixel(x0, y0);
        let p10 = self.image.pixel(x1, y0);
        let p01 = self.image.pixel(x0, y1);
        let p11 = self.image.pixel(x1, y1);

        let mut result = [0u8; 3];
        for i in 0..3 {
            let v = f64::from(p00[i]) * (1.0 - fx) * (1.0 - fy)
                + f64::from(p10[i]) * fx * (1.0 - fy)
                + f64::from(p01[i]) * (1.0 - fx) * fy
                + f64::from(p11[i]) * fx * fy;
            result[i] = v.clamp(0.0, 255.0).round() as u8;
        }
        result
    }
}
