//! Mock tag writer for testing.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::tagger::{TagError, Tagger};

/// A recorded tag write for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedTag {
    pub path: PathBuf,
    pub artist: String,
    pub album: String,
}

/// Mock implementation of the Tagger trait.
#[derive(Debug, Default)]
pub struct MockTagger {
    tags: RwLock<Vec<RecordedTag>>,
    fail_next: AtomicBool,
}

impl MockTagger {
    /// Create a new mock tagger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the next tag write to fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// All recorded tag writes.
    pub fn recorded_tags(&self) -> Vec<RecordedTag> {
        self.tags.read().expect("tags lock poisoned").clone()
    }

    /// Number of successful tag writes.
    pub fn tag_count(&self) -> usize {
        self.tags.read().expect("tags lock poisoned").len()
    }
}

impl Tagger for MockTagger {
    fn name(&self) -> &str {
        "mock"
    }

    fn write_tags(&self, path: &Path, artist: &str, album: &str) -> Result<(), TagError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(TagError::WriteFailed(
                "simulated tag failure".to_string(),
            ));
        }

        if !path.exists() {
            return Err(TagError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        self.tags
            .write()
            .expect("tags lock poisoned")
            .push(RecordedTag {
                path: path.to_path_buf(),
                artist: artist.to_string(),
                album: album.to_string(),
            });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_tag_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1 - a.mp3");
        std::fs::write(&path, b"mp3").unwrap();

        let tagger = MockTagger::new();
        tagger.write_tags(&path, "Artist", "Album").unwrap();

        let tags = tagger.recorded_tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].artist, "Artist");
        assert_eq!(tags[0].album, "Album");
    }

    #[test]
    fn test_fail_next_is_one_shot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1 - a.mp3");
        std::fs::write(&path, b"mp3").unwrap();

        let tagger = MockTagger::new();
        tagger.fail_next();
        assert!(tagger.write_tags(&path, "A", "B").is_err());
        assert!(tagger.write_tags(&path, "A", "B").is_ok());
        assert_eq!(tagger.tag_count(), 1);
    }

    #[test]
    fn test_missing_file_rejected() {
        let tagger = MockTagger::new();
        let err = tagger
            .write_tags(Path::new("/nonexistent.mp3"), "A", "B")
            .unwrap_err();
        assert!(matches!(err, TagError::FileNotFound { .. }));
    }
}
