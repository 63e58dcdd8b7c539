//! Viewer state for front-ends.
//!
//! A [`Session`] holds what a two-pane viewer shows: the source image on one
//! side and its transform on the other. Front-ends own a session and forward
//! user actions to it (open a file, click the source, switch mode); the
//! session calls the pure transforms and keeps the result ready for display
//! or saving.

use tracing::debug;

use crate::center::click_to_center;
use crate::pattern::{concentric_rings, DEFAULT_PATTERN_SIZE};
use crate::transform::{to_cartesian_with, to_polar_with, WarpOptions};
use crate::types::{Point, RgbBuffer, TransformError};

/// Which direction the session transforms the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cartesian source, polar result centered on the chosen point.
    #[default]
    Forward,
    /// Polar source, Cartesian result of the target shape.
    Inverse,
}

/// Source image, current result and the settings that produced it.
#[derive(Debug, Clone)]
pub struct Session {
    source: RgbBuffer,
    result: RgbBuffer,
    mode: Mode,
    center: Point,
    target_shape: Option<(u32, u32)>,
    options: WarpOptions,
}

impl Session {
    /// Start a forward session on the built-in ring pattern.
    pub fn new(options: WarpOptions) -> Result<Self, TransformError> {
        Self::with_source(concentric_rings(DEFAULT_PATTERN_SIZE)?, options)
    }

    /// Start a forward session on `source`, centered on its midpoint.
    pub fn with_source(source: RgbBuffer, options: WarpOptions) -> Result<Self, TransformError> {
        let center = source.midpoint();
        let result = to_polar_with(&source, center, &options)?;
        Ok(Self {
            source,
            result,
            mode: Mode::Forward,
            center,
            target_shape: None,
            options,
        })
    }

    pub fn source(&self) -> &RgbBuffer {
        &self.source
    }

    /// The transformed image, ready to display or save.
    pub fn result(&self) -> &RgbBuffer {
        &self.result
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn options(&self) -> &WarpOptions {
        &self.options
    }

    /// Shape `(height, width)` used for the inverse transform.
    ///
    /// Defaults to a square whose unwrap radius equals the polar source's
    /// width, so a forward result maps back onto a full disc.
    pub fn target_shape(&self) -> (u32, u32) {
        self.target_shape_for(&self.source)
    }

    fn target_shape_for(&self, source: &RgbBuffer) -> (u32, u32) {
        self.target_shape.unwrap_or_else(|| {
            let side = source.width.saturating_mul(2);
            (side, side)
        })
    }

    /// Replace the source image and recompute. The center moves to the new
    /// image's midpoint.
    ///
    /// On error the session is left unchanged.
    pub fn open(&mut self, image: RgbBuffer) -> Result<(), TransformError> {
        image.validate()?;
        let center = image.midpoint();
        let result = self.compute(&image, self.mode, center)?;

        debug!(width = image.width, height = image.height, "opened source image");
        self.source = image;
        self.center = center;
        self.result = result;
        Ok(())
    }

    /// Move the center to a click inside a label of `label_size` showing the
    /// source. Returns `false` when the click is ignored: in inverse mode, or
    /// when the label has no size.
    pub fn click(
        &mut self,
        click: (f64, f64),
        label_size: (u32, u32),
    ) -> Result<bool, TransformError> {
        if self.mode != Mode::Forward {
            return Ok(false);
        }
        let image_size = (self.source.width, self.source.height);
        let Some(center) = click_to_center(click, label_size, image_size) else {
            return Ok(false);
        };
        self.set_center(center)?;
        Ok(true)
    }

    /// Move the center and recompute.
    pub fn set_center(&mut self, center: Point) -> Result<(), TransformError> {
        self.result = self.compute(&self.source, self.mode, center)?;
        self.center = center;
        debug!(cx = center.x, cy = center.y, "center moved");
        Ok(())
    }

    /// Switch direction and recompute.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), TransformError> {
        if mode == self.mode {
            return Ok(());
        }
        self.result = self.compute(&self.source, mode, self.center)?;
        self.mode = mode;
        debug!(?mode, "mode switched");
        Ok(())
    }

    /// Override the inverse target shape (`None` restores the default).
    pub fn set_target_shape(&mut self, shape: Option<(u32, u32)>) -> Result<(), TransformError> {
        let previous = std::mem::replace(&mut self.target_shape, shape);
        if self.mode == Mode::Inverse {
            match self.compute(&self.source, self.mode, self.center) {
                Ok(result) => self.result = result,
                Err(e) => {
                    self.target_shape = previous;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Change fill color or interpolation and recompute.
    pub fn set_options(&mut self, options: WarpOptions) -> Result<(), TransformError> {
        let previous = std::mem::replace(&mut self.options, options);
        match self.compute(&self.source, self.mode, self.center) {
            Ok(result) => {
                self.result = result;
                Ok(())
            }
            Err(e) => {
                self.options = previous;
                Err(e)
            }
        }
    }

    fn compute(
        &self,
        source: &RgbBuffer,
        mode: Mode,
        center: Point,
    ) -> Result<RgbBuffer, TransformError> {
        match mode {
            Mode::Forward => to_polar_with(source, center, &self.options),
            Mode::Inverse => to_cartesian_with(source, self.target_shape_for(source), &self.options),
        }
    }
}
