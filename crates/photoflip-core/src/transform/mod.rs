//! Bitmap transform operations: 90-degree rotations and flips.
//!
//! # Transform Order
//!
//! The dialog accumulates a queue of [`Direction`] values; the save pipeline
//! replays the queue in press order via [`apply_all`]. Sequences mixing
//! rotations and flips are order-sensitive.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Rotations are exact quarter turns about the bitmap center; pixel data
//!   is remapped, never interpolated

mod direction;
mod orient;

pub use direction::{apply_all, Direction};
pub use orient::{flip_horizontal, flip_vertical, rotate_ccw, rotate_cw};
