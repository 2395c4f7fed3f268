//! PhotoFlip Core - rotate/flip editing pipeline
//!
//! This crate provides the full logic of PhotoFlip: decoding picked images,
//! applying queued 90-degree rotations and flips, re-encoding to JPEG, and
//! persisting the results through a shared-media store. The [`session`]
//! module ties it together as the view-model a UI shell drives.
//!
//! The crate owns no UI and calls no platform picker or storage API: hosts
//! answer [`session::PickRequest`] messages and supply the
//! [`decode::PhotoDecoder`] and [`store::MediaStore`] collaborators.

pub mod decode;
pub mod encode;
pub mod photo;
pub mod session;
pub mod store;
pub mod transform;

pub use decode::{decode_bytes, Bitmap, DecodeError, FileDecoder, MemoryDecoder, PhotoDecoder};
pub use encode::{encode_jpeg, EncodeError, SAVE_QUALITY};
pub use photo::Photo;
pub use session::{Notice, PickRequest, SaveError, Session, SessionState};
pub use store::{
    file_name_for, MediaStore, MemoryStore, PicturesStore, SaveMode, SavedImage, StoreError,
};
pub use transform::{apply_all, Direction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        // The whole native pipeline is reachable from the crate root
        let mut session = Session::new();
        session.load_placeholder_photos(3);
        assert_eq!(session.state(), SessionState::HasPhotos);

        let preview = Bitmap::placeholder(10, 5);
        assert!(session.open_dialog(preview));
        session.queue_direction(Direction::RotateLeft);
        assert_eq!(session.preview().map(|p| (p.width, p.height)), Some((5, 10)));
    }
}
