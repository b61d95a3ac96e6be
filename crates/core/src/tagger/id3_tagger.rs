//! ID3v2 tagger implementation.

use std::path::Path;

use id3::{Tag, TagLike, Version};
use tracing::debug;

use super::{TagError, Tagger};

/// ID3v2 tagger backed by the `id3` crate.
#[derive(Debug, Default)]
pub struct Id3Tagger;

impl Id3Tagger {
    /// Creates a new tagger.
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for Id3Tagger {
    fn name(&self) -> &str {
        "id3"
    }

    fn write_tags(&self, path: &Path, artist: &str, album: &str) -> Result<(), TagError> {
        if !path.exists() {
            return Err(TagError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        // A freshly transcoded file usually has no tag frame yet.
        let mut tag = match Tag::read_from_path(path) {
            Ok(tag) => tag,
            Err(err) if matches!(err.kind, id3::ErrorKind::NoTag) => Tag::new(),
            Err(err) => return Err(TagError::Id3(err)),
        };

        tag.set_artist(artist);
        tag.set_album(album);
        tag.write_to_path(path, Version::Id3v24)?;

        debug!("tagged {} with artist={}, album={}", path.display(), artist, album);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_rejected() {
        let tagger = Id3Tagger::new();
        let err = tagger
            .write_tags(Path::new("/nonexistent/track.mp3"), "Artist", "Album")
            .unwrap_err();
        assert!(matches!(err, TagError::FileNotFound { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = TagError::FileNotFound {
            path: PathBuf::from("/out/1 - x.mp3"),
        };
        assert_eq!(err.to_string(), "file not found: /out/1 - x.mp3");
    }
}
