//! Trait definitions for the downloader module.

use async_trait::async_trait;
use std::path::Path;

use crate::catalog::CatalogEntry;

use super::error::DownloadError;

/// A downloader that fetches a catalog entry to a local file.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Returns the name of this downloader implementation.
    fn name(&self) -> &str;

    /// Download one entry to `output_path`.
    ///
    /// One call is one attempt; retry policy lives in the item task, not
    /// here.
    async fn download(
        &self,
        entry: &CatalogEntry,
        output_path: &Path,
    ) -> Result<(), DownloadError>;

    /// Validates that the downloader is properly configured and ready.
    async fn validate(&self) -> Result<(), DownloadError>;
}
