//! Error types for the downloader module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a download attempt.
///
/// These are per-item failures: they are retried up to the item's budget and
/// never abort the run.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Download tool binary not found.
    #[error("download tool not found at path: {path}")]
    ToolNotFound { path: PathBuf },

    /// The tool exited with a failure status.
    #[error("download failed for {video_id}: {reason}")]
    ToolFailed {
        video_id: String,
        reason: String,
        stderr: Option<String>,
    },

    /// I/O error while invoking the tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// Creates a new tool failed error with stderr output.
    pub fn tool_failed(
        video_id: impl Into<String>,
        reason: impl Into<String>,
        stderr: Option<String>,
    ) -> Self {
        Self::ToolFailed {
            video_id: video_id.into(),
            reason: reason.into(),
            stderr,
        }
    }
}
