//! JPEG encoding for the save pipeline.
//!
//! Edited bitmaps are re-encoded to JPEG before being handed to the media
//! store. The save pipeline always encodes at maximum quality; lower
//! settings exist for hosts that want smaller preview exports.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::Bitmap;

/// JPEG quality used when persisting edited photos.
pub const SAVE_QUALITY: u8 = 100;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a bitmap to JPEG bytes.
///
/// # Arguments
///
/// * `bitmap` - RGB bitmap to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality; values
///   outside the range are clamped)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if the bitmap is inconsistent
/// or encoding fails.
pub fn encode_jpeg(bitmap: &Bitmap, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let expected_len = (bitmap.width as usize) * (bitmap.height as usize) * 3;
    if bitmap.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: bitmap.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());

    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &bitmap.pixels,
            bitmap.width,
            bitmap.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_basic() {
        let bitmap = Bitmap::new(100, 100, vec![128u8; 100 * 100 * 3]);

        let jpeg_bytes = encode_jpeg(&bitmap, 90).unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let bitmap = Bitmap::new(10, 10, vec![128u8; 10 * 10 * 3]);

        // Quality 0 should be clamped to 1
        assert!(encode_jpeg(&bitmap, 0).is_ok());

        // Quality 255 should be clamped to 100
        assert!(encode_jpeg(&bitmap, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let bitmap = Bitmap {
            width: 100,
            height: 100,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };

        let result = encode_jpeg(&bitmap, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        let bitmap = Bitmap {
            width: 0,
            height: 100,
            pixels: vec![],
        };

        let result = encode_jpeg(&bitmap, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_single_pixel() {
        let bitmap = Bitmap::new(1, 1, vec![255, 0, 0]);

        let jpeg_bytes = encode_jpeg(&bitmap, SAVE_QUALITY).unwrap();
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_non_square() {
        let wide = Bitmap::new(200, 50, vec![128u8; 200 * 50 * 3]);
        assert!(encode_jpeg(&wide, 90).is_ok());

        let tall = Bitmap::new(50, 200, vec![128u8; 50 * 200 * 3]);
        assert!(encode_jpeg(&tall, 90).is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
