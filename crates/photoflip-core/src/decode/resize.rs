//! Bitmap downscaling for dialog preview generation.
//!
//! The transform dialog shows a cheap scratch copy of a photo, not the full
//! decoded bitmap. These helpers scale a decoded bitmap down to preview size
//! while preserving aspect ratio; the input is never modified.

use super::{Bitmap, DecodeError};

/// Resize a bitmap to exact dimensions using bilinear interpolation.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero,
/// or `DecodeError::CorruptedFile` if the pixel buffer is inconsistent.
pub fn resize(bitmap: &Bitmap, width: u32, height: u32) -> Result<Bitmap, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if bitmap.width == width && bitmap.height == height {
        return Ok(bitmap.clone());
    }

    let rgb_image = bitmap
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized =
        image::imageops::resize(&rgb_image, width, height, image::imageops::FilterType::Triangle);

    Ok(Bitmap::from_rgb_image(resized))
}

/// Resize a bitmap to fit within a maximum edge length, preserving aspect
/// ratio.
///
/// The bitmap is scaled so that its longest edge equals `max_edge`. If it
/// already fits, a copy is returned unchanged, which keeps repeated preview
/// refreshes cheap for small photos.
pub fn resize_to_fit(bitmap: &Bitmap, max_edge: u32) -> Result<Bitmap, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (src_width, src_height) = (bitmap.width, bitmap.height);

    if src_width <= max_edge && src_height <= max_edge {
        return Ok(bitmap.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(src_width, src_height, max_edge);

    resize(bitmap, new_width, new_height)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_width = max_edge;
        let new_height = ((max_edge as f64 / ratio).round() as u32).max(1);
        (new_width, new_height)
    } else {
        // Portrait: constrain by height
        let new_height = max_edge;
        let new_width = ((max_edge as f64 * ratio).round() as u32).max(1);
        (new_width, new_height)
    }
}
