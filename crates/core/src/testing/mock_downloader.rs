//! Mock downloader for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::CatalogEntry;
use crate::downloader::{DownloadError, Downloader};

/// A recorded download attempt for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedDownload {
    /// Remote identifier that was requested.
    pub video_id: String,
    /// Output path the attempt targeted.
    pub output_path: PathBuf,
    /// Whether the attempt succeeded.
    pub success: bool,
}

/// Mock implementation of the Downloader trait.
///
/// Records every attempt, can be told to fail the first N attempts (or all
/// attempts) for a given item, and writes a placeholder file on success so
/// filesystem assertions work.
pub struct MockDownloader {
    recorded: Arc<RwLock<Vec<RecordedDownload>>>,
    /// Remaining failures per video id; `u32::MAX` means fail forever.
    failures: Arc<RwLock<HashMap<String, u32>>>,
}

impl Default for MockDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDownloader {
    /// Create a new mock downloader where every attempt succeeds.
    pub fn new() -> Self {
        Self {
            recorded: Arc::new(RwLock::new(Vec::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Fail the next `count` attempts for `video_id`, then succeed.
    pub async fn fail_times(&self, video_id: &str, count: u32) {
        self.failures
            .write()
            .await
            .insert(video_id.to_string(), count);
    }

    /// Fail every attempt for `video_id`.
    pub async fn fail_always(&self, video_id: &str) {
        self.failures
            .write()
            .await
            .insert(video_id.to_string(), u32::MAX);
    }

    /// All recorded attempts, in order.
    pub async fn recorded_downloads(&self) -> Vec<RecordedDownload> {
        self.recorded.read().await.clone()
    }

    /// Number of attempts made for `video_id`.
    pub async fn attempt_count(&self, video_id: &str) -> usize {
        self.recorded
            .read()
            .await
            .iter()
            .filter(|r| r.video_id == video_id)
            .count()
    }

    async fn should_fail(&self, video_id: &str) -> bool {
        let mut failures = self.failures.write().await;
        match failures.get_mut(video_id) {
            Some(0) | None => false,
            Some(n) if *n == u32::MAX => true,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

#[async_trait]
impl Downloader for MockDownloader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn download(
        &self,
        entry: &CatalogEntry,
        output_path: &Path,
    ) -> Result<(), DownloadError> {
        let fail = self.should_fail(&entry.video_id).await;

        self.recorded.write().await.push(RecordedDownload {
            video_id: entry.video_id.clone(),
            output_path: output_path.to_path_buf(),
            success: !fail,
        });

        if fail {
            return Err(DownloadError::tool_failed(
                &entry.video_id,
                "simulated download failure",
                None,
            ));
        }

        tokio::fs::write(output_path, b"raw audio").await?;
        Ok(())
    }

    async fn validate(&self) -> Result<(), DownloadError> {
        Ok(())
    }
}
