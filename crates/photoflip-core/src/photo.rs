//! The photo entity held by the session grid.

use serde::{Deserialize, Serialize};

/// An in-memory record pairing a display identifier with a source locator.
///
/// Photos are immutable once created; the session owns them in an ordered,
/// append-only list where insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Display identifier, unique within one session's list.
    pub id: String,
    /// Source locator (URI/URL string) the decode collaborator resolves.
    pub url: String,
}

impl Photo {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    /// Build a photo from a picked source locator.
    ///
    /// The id is the locator with a `.png` suffix, which is unique as long
    /// as the picker returns distinct locators.
    pub fn from_locator(locator: &str) -> Self {
        Self {
            id: format!("{locator}.png"),
            url: locator.to_string(),
        }
    }
}

/// Generate a batch of remote placeholder photos for an empty grid.
///
/// Dimensions cycle deterministically through multiples of 100 in 100..=500
/// so the grid layout is stable across runs.
pub fn placeholders(count: usize) -> Vec<Photo> {
    (0..count)
        .map(|i| {
            let width = (i * 3 % 5 + 1) * 100;
            let height = (i * 7 % 5 + 1) * 100;
            Photo::new(
                format!("placeholder-{i}"),
                format!("https://picsum.photos/{width}/{height}"),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locator() {
        let photo = Photo::from_locator("content://media/42");
        assert_eq!(photo.id, "content://media/42.png");
        assert_eq!(photo.url, "content://media/42");
    }

    #[test]
    fn test_placeholders_count_and_ids() {
        let photos = placeholders(21);
        assert_eq!(photos.len(), 21);
        assert_eq!(photos[0].id, "placeholder-0");
        assert_eq!(photos[20].id, "placeholder-20");
    }

    #[test]
    fn test_placeholder_urls_in_range() {
        for photo in placeholders(25) {
            let dims: Vec<u32> = photo
                .url
                .strip_prefix("https://picsum.photos/")
                .unwrap()
                .split('/')
                .map(|p| p.parse().unwrap())
                .collect();
            assert_eq!(dims.len(), 2);
            for dim in dims {
                assert!((100..=500).contains(&dim));
                assert_eq!(dim % 100, 0);
            }
        }
    }

    #[test]
    fn test_placeholders_deterministic() {
        assert_eq!(placeholders(10), placeholders(10));
    }
}
