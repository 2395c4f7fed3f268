//! Image decoding pipeline for PhotoFlip.
//!
//! This module provides functionality for:
//! - Decoding picked images (JPEG, PNG) with EXIF orientation correction
//! - Downscaling bitmaps for the transform dialog preview
//! - Resolving photo locators through decode collaborators
//!
//! # Architecture
//!
//! All operations are synchronous and single-threaded; the session drives
//! them on its own thread. Decode failures are recoverable by design: the
//! save pipeline skips photos whose source cannot be decoded.

mod raster;
mod resize;
mod source;
mod types;

pub use raster::{decode_bytes, decode_bytes_no_orientation, orientation_of};
pub use resize::{resize, resize_to_fit};
pub use source::{FileDecoder, MemoryDecoder, PhotoDecoder};
pub use types::{Bitmap, DecodeError, Orientation};
