//! The four user-selectable transform directions.
//!
//! A dialog session accumulates `Direction` values in press order; the save
//! pipeline replays them strictly in that order. Mixed rotate+flip sequences
//! do not commute, so the order must match user input exactly.

use serde::{Deserialize, Serialize};

use super::orient::{flip_horizontal, flip_vertical, rotate_ccw, rotate_cw};
use crate::decode::Bitmap;

/// One geometric transform, as selected by a dialog button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Rotate 90 degrees counter-clockwise.
    RotateLeft,
    /// Rotate 90 degrees clockwise.
    RotateRight,
    /// Mirror along the X axis (left-right swap).
    FlipHorizontal,
    /// Mirror along the Y axis (top-bottom swap).
    FlipVertical,
}

impl Direction {
    /// Apply this transform to a bitmap, producing a new bitmap.
    ///
    /// This is also the cheap incremental step the dialog preview uses on
    /// each button press.
    pub fn apply(self, bitmap: &Bitmap) -> Bitmap {
        match self {
            Direction::RotateLeft => rotate_ccw(bitmap),
            Direction::RotateRight => rotate_cw(bitmap),
            Direction::FlipHorizontal => flip_horizontal(bitmap),
            Direction::FlipVertical => flip_vertical(bitmap),
        }
    }

    /// Whether applying this direction swaps the bitmap's width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Direction::RotateLeft | Direction::RotateRight)
    }

    /// Stable numeric code for the JS boundary.
    pub fn as_u8(self) -> u8 {
        match self {
            Direction::RotateLeft => 0,
            Direction::RotateRight => 1,
            Direction::FlipHorizontal => 2,
            Direction::FlipVertical => 3,
        }
    }

    /// Decode a numeric code from the JS boundary.
    pub fn from_u8(value: u8) -> Option<Direction> {
        match value {
            0 => Some(Direction::RotateLeft),
            1 => Some(Direction::RotateRight),
            2 => Some(Direction::FlipHorizontal),
            3 => Some(Direction::FlipVertical),
            _ => None,
        }
    }
}

/// Replay a direction sequence against a bitmap, strictly in order.
///
/// An empty sequence returns an unchanged copy.
pub fn apply_all(bitmap: &Bitmap, directions: &[Direction]) -> Bitmap {
    let Some((first, rest)) = directions.split_first() else {
        return bitmap.clone();
    };

    let mut edited = first.apply(bitmap);
    for direction in rest {
        edited = direction.apply(&edited);
    }
    edited
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_matches_primitives() {
        let bitmap = Bitmap::placeholder(8, 5);

        assert_eq!(Direction::RotateLeft.apply(&bitmap), rotate_ccw(&bitmap));
        assert_eq!(Direction::RotateRight.apply(&bitmap), rotate_cw(&bitmap));
        assert_eq!(
            Direction::FlipHorizontal.apply(&bitmap),
            flip_horizontal(&bitmap)
        );
        assert_eq!(
            Direction::FlipVertical.apply(&bitmap),
            flip_vertical(&bitmap)
        );
    }

    #[test]
    fn test_apply_all_empty_is_copy() {
        let bitmap = Bitmap::placeholder(5, 3);
        assert_eq!(apply_all(&bitmap, &[]), bitmap);
    }

    #[test]
    fn test_apply_all_order_matters() {
        // Rotate-then-flip differs from flip-then-rotate on an asymmetric bitmap
        let bitmap = Bitmap::placeholder(6, 3);

        let rotate_then_flip = apply_all(
            &bitmap,
            &[Direction::RotateRight, Direction::FlipHorizontal],
        );
        let flip_then_rotate = apply_all(
            &bitmap,
            &[Direction::FlipHorizontal, Direction::RotateRight],
        );

        assert_eq!(
            (rotate_then_flip.width, rotate_then_flip.height),
            (flip_then_rotate.width, flip_then_rotate.height)
        );
        assert_ne!(rotate_then_flip.pixels, flip_then_rotate.pixels);
    }

    #[test]
    fn test_rotate_pair_is_identity() {
        let bitmap = Bitmap::placeholder(7, 4);

        let there_and_back = apply_all(&bitmap, &[Direction::RotateRight, Direction::RotateLeft]);
        assert_eq!(there_and_back, bitmap);

        let back_and_there = apply_all(&bitmap, &[Direction::RotateLeft, Direction::RotateRight]);
        assert_eq!(back_and_there, bitmap);
    }

    #[test]
    fn test_u8_codes_round_trip() {
        for direction in [
            Direction::RotateLeft,
            Direction::RotateRight,
            Direction::FlipHorizontal,
            Direction::FlipVertical,
        ] {
            assert_eq!(Direction::from_u8(direction.as_u8()), Some(direction));
        }
        assert_eq!(Direction::from_u8(4), None);
    }

    #[test]
    fn test_swaps_dimensions() {
        assert!(Direction::RotateLeft.swaps_dimensions());
        assert!(Direction::RotateRight.swaps_dimensions());
        assert!(!Direction::FlipHorizontal.swaps_dimensions());
        assert!(!Direction::FlipVertical.swaps_dimensions());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
