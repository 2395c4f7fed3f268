//! Image encoding pipeline for PhotoFlip.
//!
//! This module provides functionality for:
//! - Encoding bitmaps to JPEG format with configurable quality
//!
//! The save pipeline always uses [`SAVE_QUALITY`] (maximum quality); hosts
//! that export previews may pass a lower setting.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, SAVE_QUALITY};
