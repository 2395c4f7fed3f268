//! Image decoding WASM bindings.
//!
//! The JavaScript host reads picked files into `Uint8Array`s and decodes
//! them here; EXIF orientation is corrected during decode so the grid and
//! the transform dialog always see upright pixels.

use photoflip_core::decode::{decode_bytes, resize_to_fit};
use photoflip_core::Bitmap;
use wasm_bindgen::prelude::*;

use crate::types::JsBitmap;

/// Decode an image (JPEG or PNG) from raw file bytes.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsBitmap` with RGB pixel data and EXIF orientation applied, or an
/// error if the bytes cannot be decoded.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const bitmap = decode_image(bytes);
/// console.log(`Decoded ${bitmap.width}x${bitmap.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode_bytes(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Downscale a bitmap to fit within `max_edge`, preserving aspect ratio.
///
/// Use this to build the cheap scratch copy the transform dialog previews;
/// bitmaps that already fit are returned unchanged.
#[wasm_bindgen]
pub fn preview_of(image: &JsBitmap, max_edge: u32) -> Result<JsBitmap, JsValue> {
    resize_to_fit(&image.to_bitmap(), max_edge)
        .map(JsBitmap::from_bitmap)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate the gradient placeholder bitmap used when no photo is decoded
/// yet.
#[wasm_bindgen]
pub fn default_preview(width: u32, height: u32) -> JsBitmap {
    JsBitmap::from_bitmap(Bitmap::placeholder(width, height))
}


/// WASM-specific tests that require JsValue.
///
/// These use functions that return `Result<T, JsValue>` and can only run on
/// wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use photoflip_core::encode_jpeg;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_round_trip() {
        let jpeg = encode_jpeg(&Bitmap::placeholder(12, 8), 100).unwrap();
        let decoded = decode_image(&jpeg).unwrap();
        assert_eq!(decoded.width(), 12);
        assert_eq!(decoded.height(), 8);
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(&[0u8; 32]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_preview_of_downscales() {
        let big = default_preview(400, 200);
        let small = preview_of(&big, 100).unwrap();
        assert_eq!(small.width(), 100);
        assert_eq!(small.height(), 50);
    }
}
