//! Audio tag writing.
//!
//! Tag failures are reported per-item but never undo the transcode that
//! produced the file.

mod id3_tagger;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub use id3_tagger::Id3Tagger;

/// Errors that can occur while writing tags.
#[derive(Debug, Error)]
pub enum TagError {
    /// Target file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying tag library failure.
    #[error("tag write failed: {0}")]
    Id3(#[from] id3::Error),

    /// Generic write failure.
    #[error("tag write failed: {0}")]
    WriteFailed(String),
}

/// Writes artist/album metadata onto a finished audio file.
pub trait Tagger: Send + Sync {
    /// Returns the name of this tagger implementation.
    fn name(&self) -> &str;

    /// Set artist and album tags on the file at `path`, creating the tag
    /// frame if the file has none. The file handle is released on every exit
    /// path.
    fn write_tags(&self, path: &Path, artist: &str, album: &str) -> Result<(), TagError>;
}
