//! WASM bindings for the transform directions.
//!
//! The dialog's live preview runs on the JS side through
//! [`apply_direction`]: one cheap incremental step per button press,
//! independent of the full replay the session performs at confirm.

use photoflip_core::Direction;
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// Direction codes for the JS boundary:
///
/// - 0 = rotate left (90° counter-clockwise)
/// - 1 = rotate right (90° clockwise)
/// - 2 = flip horizontal
/// - 3 = flip vertical
pub(crate) fn direction_from_u8(code: u8) -> Result<Direction, JsValue> {
    Direction::from_u8(code)
        .ok_or_else(|| JsValue::from_str(&format!("unknown direction code: {code}")))
}

/// Apply one transform direction to a bitmap.
///
/// # Arguments
///
/// * `image` - Source bitmap
/// * `direction` - Direction code (see [`direction_from_u8`] docs)
///
/// # Returns
///
/// A new `JsBitmap`. Rotations swap the output's width and height; flips
/// keep dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Rotate the dialog preview right
/// preview = apply_direction(preview, 1);
/// ```
#[wasm_bindgen]
pub fn apply_direction(image: &JsBitmap, direction: u8) -> Result<JsBitmap, JsValue> {
    let direction = direction_from_u8(direction)?;
    let result = direction.apply(&image.to_bitmap());
    Ok(JsBitmap::from_bitmap(result))
}
