//! The stateful session binding.
//!
//! `PhotoSession` wraps the core view-model together with in-memory
//! collaborators. The JavaScript host owns the actual media picker: it asks
//! the session for a pick request, shows its own file input, then registers
//! each picked file's bytes and delivers the locators. Saved files come back
//! as byte payloads for the host to turn into downloads.
//!
//! # Usage (TypeScript)
//!
//! ```typescript
//! const session = new PhotoSession();
//!
//! session.request_photos();
//! for (const file of pickedFiles) {
//!     const bytes = new Uint8Array(await file.arrayBuffer());
//!     session.add_picked(file.name, bytes);
//! }
//! const notice = session.photos_picked(pickedFiles.map(f => f.name));
//!
//! session.open_dialog(512);
//! session.queue_direction(1);          // rotate right
//! const preview = session.preview();   // render in the dialog
//! const saved = session.confirm();     // [{ file_name, bytes }, ...]
//! ```

use photoflip_core::decode::resize_to_fit;
use photoflip_core::{
    Bitmap, MemoryDecoder, MemoryStore, PhotoDecoder, Session, SessionState,
};
use wasm_bindgen::prelude::*;

use crate::transform::direction_from_u8;
use crate::types::JsBitmap;

/// A photo editing session driven from JavaScript.
#[wasm_bindgen]
pub struct PhotoSession {
    session: Session,
    decoder: MemoryDecoder,
    store: MemoryStore,
}

impl Default for PhotoSession {
    fn default() -> Self {
        Self {
            session: Session::new(),
            decoder: MemoryDecoder::new(),
            store: MemoryStore::new(),
        }
    }
}

#[wasm_bindgen]
impl PhotoSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PhotoSession {
        Self::default()
    }

    /// Current state: "idle", "picking", "has-photos" or "transforming".
    pub fn state(&self) -> String {
        match self.session.state() {
            SessionState::Idle => "idle",
            SessionState::Picking => "picking",
            SessionState::HasPhotos => "has-photos",
            SessionState::Transforming => "transforming",
        }
        .to_string()
    }

    /// Begin a pick. The host must show its media picker and answer with
    /// `add_picked` + `photos_picked`.
    pub fn request_photos(&mut self) -> Result<JsValue, JsValue> {
        let request = self.session.request_photos();
        serde_wasm_bindgen::to_value(&request).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Register the raw bytes behind one picked locator.
    pub fn add_picked(&mut self, locator: String, bytes: Vec<u8>) {
        self.decoder.insert(locator, bytes);
    }

    /// Deliver the picker's selection, in order. Returns the user-visible
    /// notice text.
    pub fn photos_picked(&mut self, locators: Vec<String>) -> String {
        self.session.photos_picked(&locators).message()
    }

    /// Number of photos in the grid.
    #[wasm_bindgen(getter)]
    pub fn photo_count(&self) -> usize {
        self.session.photos().len()
    }

    /// Photo locators in display order.
    pub fn photo_urls(&self) -> js_sys::Array {
        self.session
            .photos()
            .iter()
            .map(|photo| JsValue::from_str(&photo.url))
            .collect()
    }

    /// Open the transform dialog.
    ///
    /// The preview seed is the first photo, decoded and downscaled to fit
    /// `max_preview_edge`; a gradient placeholder stands in when nothing
    /// decodes. Returns false when no photos are listed.
    pub fn open_dialog(&mut self, max_preview_edge: u32) -> Result<bool, JsValue> {
        let seed = self
            .session
            .photos()
            .first()
            .and_then(|photo| self.decoder.decode(&photo.url).ok())
            .unwrap_or_else(|| Bitmap::placeholder(max_preview_edge, max_preview_edge));

        let seed = resize_to_fit(&seed, max_preview_edge)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(self.session.open_dialog(seed))
    }

    /// Append a direction (see the transform module for codes) and advance
    /// the live preview.
    pub fn queue_direction(&mut self, direction: u8) -> Result<(), JsValue> {
        let direction = direction_from_u8(direction)?;
        self.session.queue_direction(direction);
        Ok(())
    }

    /// Number of directions queued in the open dialog.
    #[wasm_bindgen(getter)]
    pub fn pending_count(&self) -> usize {
        self.session.pending_directions().len()
    }

    /// The dialog's current preview bitmap, if a dialog is open.
    pub fn preview(&self) -> Option<JsBitmap> {
        self.session
            .preview()
            .map(|bitmap| JsBitmap::from_bitmap(bitmap.clone()))
    }

    /// Close the dialog without saving.
    pub fn cancel_dialog(&mut self) {
        self.session.cancel_dialog();
    }

    /// Close the dialog by saving every photo with the queued directions
    /// applied.
    ///
    /// Returns an array of `{ file_name, bytes }` objects, one per saved
    /// photo, for the host to persist (e.g. as downloads). Photos that fail
    /// to decode are skipped.
    pub fn confirm(&mut self) -> Result<JsValue, JsValue> {
        self.session
            .confirm(&self.decoder, &mut self.store)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let saved = self.store.take_saved();
        serde_wasm_bindgen::to_value(&saved).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
