//! Per-item download/convert/tag/cleanup task.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::ConvertConfig;
use crate::converter::Converter;
use crate::downloader::{DownloadError, Downloader};
use crate::tagger::Tagger;

use super::types::{ItemState, OrderedItem};

/// The unit of work for one catalog entry.
///
/// Owns its [`OrderedItem`] exclusively for the rest of the item's life:
/// state and the retry counter are only ever mutated here. Failures are
/// logged per item and never escalate to the run.
pub struct ItemTask {
    item: OrderedItem,
    output_dir: PathBuf,
    convert: ConvertConfig,
    downloader: Arc<dyn Downloader>,
    converter: Arc<dyn Converter>,
    tagger: Arc<dyn Tagger>,
}

impl ItemTask {
    pub fn new(
        item: OrderedItem,
        output_dir: PathBuf,
        convert: ConvertConfig,
        downloader: Arc<dyn Downloader>,
        converter: Arc<dyn Converter>,
        tagger: Arc<dyn Tagger>,
    ) -> Self {
        Self {
            item,
            output_dir,
            convert,
            downloader,
            converter,
            tagger,
        }
    }

    /// Drive the item to a terminal state and return it.
    pub async fn run(mut self) -> OrderedItem {
        let raw_path = self.item.raw_path(&self.output_dir);

        self.item.state = ItemState::Downloading;
        if let Err(err) = self.download_with_retry(&raw_path).await {
            error!(
                "item {} ({}): retries exhausted: {}",
                self.item.position, self.item.entry.video_id, err
            );
            self.item.state = ItemState::Failed;
            return self.item;
        }

        if !self.convert.enabled {
            // The raw download is the final artifact.
            info!(
                "item {} ({}) done: {}",
                self.item.position,
                self.item.entry.video_id,
                raw_path.display()
            );
            self.item.state = ItemState::Done;
            return self.item;
        }

        let final_path = self.item.final_path(&self.output_dir);

        self.item.state = ItemState::Converting;
        if let Err(err) = self.converter.convert(&raw_path, &final_path).await {
            error!(
                "item {} ({}): conversion failed, raw file kept at {}: {}",
                self.item.position,
                self.item.entry.video_id,
                raw_path.display(),
                err
            );
            self.item.state = ItemState::Failed;
            return self.item;
        }

        self.item.state = ItemState::Tagging;
        let tagged = match self.tagger.write_tags(
            &final_path,
            &self.convert.artist,
            &self.convert.album,
        ) {
            Ok(()) => true,
            Err(err) => {
                // Reported but does not undo the transcode.
                warn!(
                    "item {} ({}): tagging failed: {}",
                    self.item.position, self.item.entry.video_id, err
                );
                false
            }
        };

        // The intermediate is released only once the final artifact is fully
        // produced, tags included; otherwise it is kept for inspection.
        if tagged {
            if let Err(err) = tokio::fs::remove_file(&raw_path).await {
                warn!(
                    "item {}: could not remove intermediate {}: {}",
                    self.item.position,
                    raw_path.display(),
                    err
                );
            }
        }

        info!(
            "item {} ({}) done: {}",
            self.item.position,
            self.item.entry.video_id,
            final_path.display()
        );
        self.item.state = ItemState::Done;
        self.item
    }

    /// Bounded retry loop around the external download tool.
    ///
    /// One failed attempt costs one unit of the budget; the counter is
    /// checked before it is decremented so it never goes below zero. The
    /// result is the outcome of the last attempt.
    async fn download_with_retry(&mut self, raw_path: &Path) -> Result<(), DownloadError> {
        loop {
            match self.downloader.download(&self.item.entry, raw_path).await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    if self.item.retries_remaining == 0 {
                        return Err(err);
                    }
                    self.item.retries_remaining -= 1;
                    warn!(
                        "item {} ({}): download attempt failed, {} retries left: {}",
                        self.item.position,
                        self.item.entry.video_id,
                        self.item.retries_remaining,
                        err
                    );
                }
            }
        }
    }
}
