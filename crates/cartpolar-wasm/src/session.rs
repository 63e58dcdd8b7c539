//! WASM binding for the two-pane viewer session.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsSession({ fill: [0, 0, 0], interpolation: 'bilinear' });
//! session.open_bytes(new Uint8Array(await file.arrayBuffer()));
//!
//! label.onclick = (e) => {
//!   if (session.click(e.offsetX, e.offsetY, label.width, label.height)) {
//!     draw(session.result());
//!   }
//! };
//! ```

use crate::types::JsRgbBuffer;
use cartpolar_core::transform::WarpOptions;
use cartpolar_core::{decode, Mode, Point, Session};
use wasm_bindgen::prelude::*;

/// Viewer state: a source image, the chosen center, and the current result.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    /// Start a session on the built-in ring pattern.
    ///
    /// `options` is an optional `{ fill, interpolation }` object; missing
    /// fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<JsSession, JsValue> {
        let options = options_from_js(options)?;
        Session::new(options)
            .map(|inner| JsSession { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the source with an already decoded image.
    pub fn open(&mut self, image: &JsRgbBuffer) -> Result<(), JsValue> {
        self.inner
            .open(image.to_buffer())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decode file bytes and replace the source with them.
    pub fn open_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let image = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .open(image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Handle a click inside the label showing the source.
    ///
    /// Returns `false` if the click was ignored.
    pub fn click(
        &mut self,
        x: f64,
        y: f64,
        label_width: u32,
        label_height: u32,
    ) -> Result<bool, JsValue> {
        self.inner
            .click((x, y), (label_width, label_height))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_center(&mut self, x: i32, y: i32) -> Result<(), JsValue> {
        self.inner
            .set_center(Point::new(x, y))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Switch between Cartesian→polar (`false`) and polar→Cartesian (`true`).
    pub fn set_inverse(&mut self, inverse: bool) -> Result<(), JsValue> {
        let mode = if inverse { Mode::Inverse } else { Mode::Forward };
        self.inner
            .set_mode(mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Output size for the polar→Cartesian direction.
    pub fn set_target_shape(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .set_target_shape(Some((height, width)))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset_target_shape(&mut self) -> Result<(), JsValue> {
        self.inner
            .set_target_shape(None)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options = options_from_js(options)?;
        self.inner
            .set_options(options)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current options as a `{ fill, interpolation }` object.
    pub fn options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.options())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn inverse(&self) -> bool {
        self.inner.mode() == Mode::Inverse
    }

    #[wasm_bindgen(getter)]
    pub fn center_x(&self) -> i32 {
        self.inner.center().x
    }

    #[wasm_bindgen(getter)]
    pub fn center_y(&self) -> i32 {
        self.inner.center().y
    }

    /// Copy of the source image.
    pub fn source(&self) -> JsRgbBuffer {
        JsRgbBuffer::from_buffer(self.inner.source().clone())
    }

    /// Copy of the current result.
    pub fn result(&self) -> JsRgbBuffer {
        JsRgbBuffer::from_buffer(self.inner.result().clone())
    }
}

fn options_from_js(value: JsValue) -> Result<WarpOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(WarpOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartpolar_core::RgbBuffer;

    fn session() -> JsSession {
        let source = RgbBuffer::filled(40, 40, [70, 80, 90]);
        JsSession {
            inner: Session::with_source(source, WarpOptions::default()).unwrap(),
        }
    }

    #[test]
    fn test_starts_centered_in_forward_mode() {
        let s = session();
        assert_eq!((s.center_x(), s.center_y()), (20, 20));
        assert!(!s.inverse());
        assert_eq!(s.result().height(), 360);
        assert_eq!(s.result().width(), 20);
    }

    #[test]
    fn test_click_recenters() {
        let mut s = session();
        assert!(s.click(100.0, 50.0, 400, 400).unwrap());
        assert_eq!((s.center_x(), s.center_y()), (10, 5));
    }

    #[test]
    fn test_open_replaces_source() {
        let mut s = session();
        s.open(&JsRgbBuffer::new(10, 6, vec![1u8; 10 * 6 * 3]))
            .unwrap();
        assert_eq!((s.source().width(), s.source().height()), (10, 6));
        assert_eq!((s.center_x(), s.center_y()), (5, 3));
    }

    #[test]
    fn test_inverse_mode_and_target_shape() {
        let mut s = session();
        s.set_inverse(true).unwrap();
        assert!(s.inverse());
        assert_eq!((s.result().width(), s.result().height()), (80, 80));

        s.set_target_shape(30, 20).unwrap();
        assert_eq!((s.result().width(), s.result().height()), (30, 20));

        s.reset_target_shape().unwrap();
        assert_eq!(s.result().width(), 80);
    }
}
