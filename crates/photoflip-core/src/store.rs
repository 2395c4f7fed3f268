//! The shared-media save pipeline.
//!
//! Edited photos are persisted as new JPEG files under a fixed sub-folder of
//! the host's pictures root, named by a millisecond-precision timestamp so
//! consecutive saves never collide.
//!
//! Two write variants exist, for hosts with and without staged-write
//! support:
//! - [`SaveMode::Staged`]: write the bytes under a hidden pending name, then
//!   atomically rename into place (mark pending, write, clear pending).
//! - [`SaveMode::Direct`]: ensure the directory exists, write the file
//!   directly, then append a [`MediaRecord`] to the folder's metadata index.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sub-folder under the pictures root that receives every save.
pub const PICTURES_SUBDIR: &str = "PhotoFlip";

/// MIME type recorded for saved files.
pub const IMAGE_MIME: &str = "image/*";

/// Metadata index file the legacy direct path appends to, one JSON record
/// per line.
pub const MEDIA_INDEX_FILE: &str = ".media-index.jsonl";

/// Errors from the save pipeline. These are not recovered locally; the
/// session propagates them to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to record media metadata: {0}")]
    Metadata(String),
}

/// Persists encoded image bytes and returns a locator for the new file.
///
/// This is the shared-storage collaborator: the session hands it a file name
/// and bytes and never touches the platform storage layer itself.
pub trait MediaStore {
    fn save_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError>;
}

/// Derive a save file name from a timestamp, millisecond precision.
///
/// Format: `yyyyMMdd_HHmmssSSS.jpg`.
pub fn file_name_for(timestamp: DateTime<Local>) -> String {
    format!("{}.jpg", timestamp.format("%Y%m%d_%H%M%S%3f"))
}

/// Derive a save file name from the current wall clock.
pub fn file_name_now() -> String {
    file_name_for(Local::now())
}

/// Which write variant [`PicturesStore`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Stage under a pending name, then rename into place.
    #[default]
    Staged,
    /// Write directly and append a metadata index record.
    Direct,
}

/// One metadata record appended by the direct (legacy) write path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub title: String,
    pub date_added_ms: i64,
    pub data: String,
    pub mime_type: String,
}

/// Filesystem-backed media store rooted at a pictures directory.
///
/// Files land in `<root>/PhotoFlip/`; the directory is created on first
/// save.
#[derive(Debug, Clone)]
pub struct PicturesStore {
    pictures_root: PathBuf,
    mode: SaveMode,
}

impl PicturesStore {
    pub fn new(pictures_root: impl Into<PathBuf>, mode: SaveMode) -> Self {
        Self {
            pictures_root: pictures_root.into(),
            mode,
        }
    }

    /// The folder every save lands in.
    pub fn target_dir(&self) -> PathBuf {
        self.pictures_root.join(PICTURES_SUBDIR)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn save_staged(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let dir = self.target_dir();
        fs::create_dir_all(&dir).map_err(|e| Self::io_error(&dir, e))?;

        // Pending name keeps half-written files invisible to grid scans
        let pending = dir.join(format!(".{file_name}.pending"));
        fs::write(&pending, bytes).map_err(|e| Self::io_error(&pending, e))?;

        let final_path = dir.join(file_name);
        fs::rename(&pending, &final_path).map_err(|e| Self::io_error(&final_path, e))?;

        Ok(final_path)
    }

    fn save_direct(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let dir = self.target_dir();
        fs::create_dir_all(&dir).map_err(|e| Self::io_error(&dir, e))?;

        let final_path = dir.join(file_name);
        fs::write(&final_path, bytes).map_err(|e| Self::io_error(&final_path, e))?;

        let record = MediaRecord {
            title: file_name.to_string(),
            date_added_ms: Utc::now().timestamp_millis(),
            data: final_path.display().to_string(),
            mime_type: IMAGE_MIME.to_string(),
        };
        self.append_record(&dir, &record)?;

        Ok(final_path)
    }

    fn append_record(&self, dir: &Path, record: &MediaRecord) -> Result<(), StoreError> {
        let index_path = dir.join(MEDIA_INDEX_FILE);
        let line = serde_json::to_string(record).map_err(|e| StoreError::Metadata(e.to_string()))?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&index_path)
            .map_err(|e| Self::io_error(&index_path, e))?;
        writeln!(file, "{line}").map_err(|e| Self::io_error(&index_path, e))?;

        Ok(())
    }
}

impl MediaStore for PicturesStore {
    fn save_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        let path = match self.mode {
            SaveMode::Staged => self.save_staged(file_name, bytes)?,
            SaveMode::Direct => self.save_direct(file_name, bytes)?,
        };
        debug!(path = %path.display(), size = bytes.len(), "saved image");
        Ok(path.display().to_string())
    }
}

/// One image captured by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// In-memory media store.
///
/// Used by hosts without filesystem access (the WASM boundary turns captured
/// bytes into downloads) and by session tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Vec<SavedImage>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Images captured so far, in save order.
    pub fn saved(&self) -> &[SavedImage] {
        &self.saved
    }

    /// Drain and return every captured image.
    pub fn take_saved(&mut self) -> Vec<SavedImage> {
        std::mem::take(&mut self.saved)
    }
}

impl MediaStore for MemoryStore {
    fn save_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, StoreError> {
        self.saved.push(SavedImage {
            file_name: file_name.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(format!("memory:{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_file_name_format() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 5, 13, 45, 7).unwrap()
            + Duration::milliseconds(89);
        assert_eq!(file_name_for(timestamp), "20240305_134507089.jpg");
    }

    #[test]
    fn test_file_name_now_shape() {
        let name = file_name_now();
        // 8 date digits + '_' + 9 time digits + ".jpg"
        assert_eq!(name.len(), 22);
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.as_bytes()[8], b'_');
    }

    #[test]
    fn test_staged_save_writes_final_file() {
        let root = tempfile::tempdir().unwrap();
        let mut store = PicturesStore::new(root.path(), SaveMode::Staged);

        let locator = store.save_image("a.jpg", b"jpeg-bytes").unwrap();

        let final_path = root.path().join(PICTURES_SUBDIR).join("a.jpg");
        assert_eq!(locator, final_path.display().to_string());
        assert_eq!(fs::read(&final_path).unwrap(), b"jpeg-bytes");

        // No staging residue left behind
        let leftovers: Vec<_> = fs::read_dir(root.path().join(PICTURES_SUBDIR))
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".pending"))
            .collect();
        assert!(leftovers.is_empty(), "pending files remain: {leftovers:?}");
    }

    #[test]
    fn test_direct_save_appends_index_records() {
        let root = tempfile::tempdir().unwrap();
        let mut store = PicturesStore::new(root.path(), SaveMode::Direct);

        store.save_image("a.jpg", b"first").unwrap();
        store.save_image("b.jpg", b"second").unwrap();

        let dir = root.path().join(PICTURES_SUBDIR);
        assert_eq!(fs::read(dir.join("a.jpg")).unwrap(), b"first");
        assert_eq!(fs::read(dir.join("b.jpg")).unwrap(), b"second");

        let index = fs::read_to_string(dir.join(MEDIA_INDEX_FILE)).unwrap();
        let records: Vec<MediaRecord> = index
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "a.jpg");
        assert_eq!(records[1].title, "b.jpg");
        assert_eq!(records[0].mime_type, IMAGE_MIME);
        assert!(records[0].date_added_ms > 0);
        assert!(records[0].data.ends_with("a.jpg"));
    }

    #[test]
    fn test_staged_mode_writes_no_index() {
        let root = tempfile::tempdir().unwrap();
        let mut store = PicturesStore::new(root.path(), SaveMode::Staged);
        store.save_image("a.jpg", b"bytes").unwrap();

        let index_path = root.path().join(PICTURES_SUBDIR).join(MEDIA_INDEX_FILE);
        assert!(!index_path.exists());
    }

    #[test]
    fn test_save_into_unwritable_root_fails() {
        // A root that is a file, not a directory
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let mut store = PicturesStore::new(&blocker, SaveMode::Staged);
        let result = store.save_image("a.jpg", b"bytes");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_memory_store_collects_in_order() {
        let mut store = MemoryStore::new();

        let first = store.save_image("a.jpg", b"one").unwrap();
        let second = store.save_image("b.jpg", b"two").unwrap();

        assert_eq!(first, "memory:a.jpg");
        assert_eq!(second, "memory:b.jpg");
        assert_eq!(store.saved().len(), 2);
        assert_eq!(store.saved()[0].file_name, "a.jpg");
        assert_eq!(store.saved()[1].bytes, b"two");

        let drained = store.take_saved();
        assert_eq!(drained.len(), 2);
        assert!(store.saved().is_empty());
    }
}
