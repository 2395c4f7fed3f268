//! Decode collaborators: resolving a photo locator to a bitmap.
//!
//! The session never reads platform storage itself. It asks a `PhotoDecoder`
//! to turn a locator into pixels, and the host picks the implementation:
//! `FileDecoder` for filesystem paths, `MemoryDecoder` for bytes handed over
//! a boundary (the WASM host registers picked files this way).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{decode_bytes, Bitmap, DecodeError};

/// Resolves a source locator to a decoded bitmap.
///
/// Failure is an ordinary outcome here: the save pipeline skips photos whose
/// source can no longer be decoded.
pub trait PhotoDecoder {
    /// Decode the image behind `locator`.
    fn decode(&self, locator: &str) -> Result<Bitmap, DecodeError>;
}

/// Decodes locators that are filesystem paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileDecoder;

impl FileDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl PhotoDecoder for FileDecoder {
    fn decode(&self, locator: &str) -> Result<Bitmap, DecodeError> {
        let bytes =
            fs::read(Path::new(locator)).map_err(|e| DecodeError::IoError(e.to_string()))?;
        decode_bytes(&bytes)
    }
}

/// Decodes locators against a registry of in-memory image bytes.
///
/// The host registers each picked image once; unknown locators fail with
/// `DecodeError::UnknownLocator`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDecoder {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the raw bytes behind a locator, replacing any previous entry.
    pub fn insert(&mut self, locator: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(locator.into(), bytes);
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl PhotoDecoder for MemoryDecoder {
    fn decode(&self, locator: &str) -> Result<Bitmap, DecodeError> {
        let bytes = self
            .images
            .get(locator)
            .ok_or_else(|| DecodeError::UnknownLocator(locator.to_string()))?;
        decode_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_jpeg;

    #[test]
    fn test_memory_decoder_roundtrip() {
        let mut decoder = MemoryDecoder::new();
        let jpeg = encode_jpeg(&Bitmap::placeholder(6, 9), 100).unwrap();
        decoder.insert("picked://1", jpeg);

        let bitmap = decoder.decode("picked://1").unwrap();
        assert_eq!((bitmap.width, bitmap.height), (6, 9));
    }

    #[test]
    fn test_memory_decoder_unknown_locator() {
        let decoder = MemoryDecoder::new();
        let result = decoder.decode("picked://missing");
        assert!(matches!(result, Err(DecodeError::UnknownLocator(_))));
    }

    #[test]
    fn test_memory_decoder_corrupt_bytes() {
        let mut decoder = MemoryDecoder::new();
        decoder.insert("picked://bad", vec![0u8; 16]);
        assert!(decoder.decode("picked://bad").is_err());
    }

    #[test]
    fn test_file_decoder_missing_path() {
        let decoder = FileDecoder::new();
        let result = decoder.decode("/definitely/not/here.jpg");
        assert!(matches!(result, Err(DecodeError::IoError(_))));
    }

    #[test]
    fn test_file_decoder_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        let jpeg = encode_jpeg(&Bitmap::placeholder(15, 10), 95).unwrap();
        std::fs::write(&path, jpeg).unwrap();

        let decoder = FileDecoder::new();
        let bitmap = decoder.decode(path.to_str().unwrap()).unwrap();
        assert_eq!((bitmap.width, bitmap.height), (15, 10));
    }
}
