//! Image encoding WASM bindings.
//!
//! Exposes the core JPEG encoder so the host can export a preview or turn a
//! bitmap back into file bytes. The stateful session encodes at maximum
//! quality internally; these helpers accept any quality.

use photoflip_core::{encode_jpeg as core_encode_jpeg, SAVE_QUALITY};
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The bitmap to encode
/// * `quality` - JPEG quality (1-100; out-of-range values are clamped)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes, or an error if the
/// bitmap's pixel buffer is inconsistent with its dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = encode_jpeg(bitmap, 100);
/// const blob = new Blob([jpeg], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsBitmap, quality: u8) -> Result<Vec<u8>, JsValue> {
    core_encode_jpeg(&image.to_bitmap(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The JPEG quality the save pipeline uses (maximum quality).
#[wasm_bindgen]
pub fn save_quality() -> u8 {
    SAVE_QUALITY
}
