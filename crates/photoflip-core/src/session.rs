//! The session view-model: photo list, pending directions, dialog state.
//!
//! A [`Session`] owns all mutable state of one editing flow and is driven
//! entirely by its caller on a single thread. It never talks to a platform
//! picker or storage API directly: picking is a message boundary
//! ([`Session::request_photos`] returns the request, the host answers with
//! [`Session::photos_picked`]), and the save pipeline runs through the
//! [`PhotoDecoder`] and [`MediaStore`] collaborators the caller passes in.
//!
//! # State machine
//!
//! ```text
//! Idle ──request_photos──▶ Picking ──photos_picked──▶ HasPhotos
//! HasPhotos ──open_dialog──▶ Transforming
//! Transforming ──cancel_dialog──▶ HasPhotos
//! Transforming ──confirm──▶ Idle   (photos saved, list cleared)
//! ```
//!
//! The pending direction queue is empty immediately after every dialog
//! boundary: `open_dialog` clears it defensively, `cancel_dialog` discards
//! it, `confirm` consumes it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::decode::{Bitmap, PhotoDecoder};
use crate::encode::{encode_jpeg, EncodeError, SAVE_QUALITY};
use crate::photo::{placeholders, Photo};
use crate::store::{file_name_now, MediaStore, StoreError};
use crate::transform::{apply_all, Direction};

/// Errors surfaced by [`Session::confirm`]. Decode failures are not errors
/// here; those photos are skipped.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where the session currently is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Empty grid, nothing in flight.
    #[default]
    Idle,
    /// A picker request is outstanding.
    Picking,
    /// Photos are listed in the grid.
    HasPhotos,
    /// The transform dialog is open.
    Transforming,
}

/// The message handed to the host when the user asks to add photos.
///
/// The host runs its media picker and answers with
/// [`Session::photos_picked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRequest {
    /// Whether the picker should allow selecting more than one image.
    pub multiple: bool,
}

/// Transient user-visible notice produced by a picker result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The picker returned without a selection.
    NoImagesSelected,
    /// This many photos were appended to the grid.
    PhotosAdded(usize),
}

impl Notice {
    /// Display text for a toast/snackbar style surface.
    pub fn message(&self) -> String {
        match self {
            Notice::NoImagesSelected => "No images selected.".to_string(),
            Notice::PhotosAdded(count) => format!("Selected images are added.({count})"),
        }
    }
}

/// The view-model for one editing flow.
#[derive(Debug, Default)]
pub struct Session {
    photos: Vec<Photo>,
    pending: Vec<Direction>,
    preview: Option<Bitmap>,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Photos in display order.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Directions queued in the open dialog, in press order.
    pub fn pending_directions(&self) -> &[Direction] {
        &self.pending
    }

    /// The dialog's live preview bitmap, if a dialog is open.
    pub fn preview(&self) -> Option<&Bitmap> {
        self.preview.as_ref()
    }

    /// Begin a pick: transition to `Picking` and emit the request the host
    /// must execute.
    ///
    /// Ignored while the transform dialog is open (the grid affordance is
    /// not reachable there); the request is still returned so the host can
    /// treat it uniformly.
    pub fn request_photos(&mut self) -> PickRequest {
        if self.state != SessionState::Transforming {
            self.state = SessionState::Picking;
        }
        debug!("requesting photo pick");
        PickRequest { multiple: true }
    }

    /// Deliver the picker's answer.
    ///
    /// An empty selection leaves the photo list untouched and surfaces
    /// [`Notice::NoImagesSelected`]; otherwise one photo is appended per
    /// locator, in order.
    pub fn photos_picked(&mut self, locators: &[String]) -> Notice {
        if locators.is_empty() {
            debug!("picker returned no selection");
            self.state = self.resting_state();
            return Notice::NoImagesSelected;
        }

        for locator in locators {
            debug!(%locator, "photo picked");
            self.photos.push(Photo::from_locator(locator));
        }
        self.state = SessionState::HasPhotos;
        Notice::PhotosAdded(locators.len())
    }

    /// Fill an empty grid with generated placeholder photos.
    pub fn load_placeholder_photos(&mut self, count: usize) {
        self.photos.extend(placeholders(count));
        if self.state == SessionState::Idle && !self.photos.is_empty() {
            self.state = SessionState::HasPhotos;
        }
    }

    /// Open the transform dialog with a preview seed bitmap.
    ///
    /// Returns false (and does nothing) unless photos are listed. The
    /// pending queue is cleared here unconditionally: it must be empty
    /// whenever a dialog opens, however the previous one ended.
    pub fn open_dialog(&mut self, preview_seed: Bitmap) -> bool {
        if self.state != SessionState::HasPhotos {
            warn!(state = ?self.state, "ignoring dialog open");
            return false;
        }

        self.pending.clear();
        self.preview = Some(preview_seed);
        self.state = SessionState::Transforming;
        true
    }

    /// Append one direction to the pending queue and advance the live
    /// preview by the same step.
    ///
    /// Ignored unless the dialog is open.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.state != SessionState::Transforming {
            debug!(?direction, "ignoring direction outside dialog");
            return;
        }

        self.pending.push(direction);
        if let Some(preview) = self.preview.take() {
            self.preview = Some(direction.apply(&preview));
        }
    }

    /// Close the dialog without saving: queue discarded, photos unchanged.
    pub fn cancel_dialog(&mut self) {
        if self.state != SessionState::Transforming {
            return;
        }

        self.pending.clear();
        self.preview = None;
        self.state = SessionState::HasPhotos;
    }

    /// Close the dialog by saving: replay the queued directions against
    /// every photo, persist each result, then clear the grid.
    ///
    /// Photos whose source fails to decode are skipped without notice. A
    /// store failure propagates immediately and leaves the session state
    /// untouched; everything saved so far stays saved.
    ///
    /// Returns the locators of the persisted files, in photo order.
    pub fn confirm<D, S>(&mut self, decoder: &D, store: &mut S) -> Result<Vec<String>, SaveError>
    where
        D: PhotoDecoder + ?Sized,
        S: MediaStore + ?Sized,
    {
        if self.state != SessionState::Transforming {
            debug!(state = ?self.state, "ignoring confirm outside dialog");
            return Ok(Vec::new());
        }

        let mut saved = Vec::with_capacity(self.photos.len());
        for photo in &self.photos {
            let bitmap = match decoder.decode(&photo.url) {
                Ok(bitmap) => bitmap,
                Err(error) => {
                    warn!(url = %photo.url, %error, "skipping photo that failed to decode");
                    continue;
                }
            };

            let edited = apply_all(&bitmap, &self.pending);
            let bytes = encode_jpeg(&edited, SAVE_QUALITY)?;
            let locator = store.save_image(&file_name_now(), &bytes)?;
            saved.push(locator);
        }

        debug!(
            photos = self.photos.len(),
            saved = saved.len(),
            directions = self.pending.len(),
            "confirmed transform dialog"
        );

        self.pending.clear();
        self.photos.clear();
        self.preview = None;
        self.state = SessionState::Idle;

        Ok(saved)
    }

    fn resting_state(&self) -> SessionState {
        if self.photos.is_empty() {
            SessionState::Idle
        } else {
            SessionState::HasPhotos
        }
    }
}
