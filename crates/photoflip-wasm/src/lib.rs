//! PhotoFlip WASM - WebAssembly bindings for PhotoFlip
//!
//! This crate exposes the photoflip-core editing pipeline to
//! JavaScript/TypeScript applications. The JS host owns the screens (the
//! photo grid, the add-photos button, the transform dialog) and drives one
//! [`PhotoSession`] per editing flow; the host's file input plays the role
//! of the platform media picker.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for bitmap data
//! - `decode` - Image decoding bindings (JPEG/PNG, preview downscaling)
//! - `encode` - Image encoding bindings (JPEG export)
//! - `transform` - Single-direction transforms for the live dialog preview
//! - `session` - The stateful session binding
//!
//! # Usage
//!
//! ```typescript
//! import init, { PhotoSession } from '@photoflip/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new PhotoSession();
//! session.request_photos();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, default_preview, preview_of};
pub use encode::{encode_jpeg, save_quality};
pub use session::PhotoSession;
pub use transform::apply_direction;
pub use types::JsBitmap;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
