//! Run orchestration: fetch, order, fan out, join.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::catalog::{spawn_paginator, CatalogClient, CatalogError};
use crate::config::Config;
use crate::converter::Converter;
use crate::downloader::Downloader;
use crate::tagger::Tagger;

use super::order::collect_ordered;
use super::task::ItemTask;
use super::types::ItemState;

/// Run-level errors.
///
/// Per-item failures never surface here; they are logged and the run keeps
/// going. Only a catalog listing failure aborts the whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Catalog pagination failed; nothing was dispatched.
    #[error("catalog listing failed: {0}")]
    Fetch(#[from] CatalogError),
}

/// Drives one batch run end to end.
pub struct Orchestrator {
    config: Arc<Config>,
    catalog: Arc<dyn CatalogClient>,
    downloader: Arc<dyn Downloader>,
    converter: Arc<dyn Converter>,
    tagger: Arc<dyn Tagger>,
}

impl Orchestrator {
    pub fn new(
        config: Arc<Config>,
        catalog: Arc<dyn CatalogClient>,
        downloader: Arc<dyn Downloader>,
        converter: Arc<dyn Converter>,
        tagger: Arc<dyn Tagger>,
    ) -> Self {
        Self {
            config,
            catalog,
            downloader,
            converter,
            tagger,
        }
    }

    /// Fetch the whole catalog, then run one task per item and wait for all
    /// of them.
    ///
    /// The fetch phase completes before the first download starts. Fan-out
    /// is bounded by `pipeline.max_parallel_items`; the join loop is the
    /// completion barrier. Returns `Ok` once every task reached a terminal
    /// state, regardless of how many failed.
    pub async fn run(&self) -> Result<(), PipelineError> {
        let mut rx = spawn_paginator(
            Arc::clone(&self.catalog),
            self.config.catalog.playlist_id.clone(),
            self.config.catalog.page_size,
        );

        let items = collect_ordered(&mut rx, self.config.pipeline.retry_budget).await?;
        info!(
            "fetched {} items from playlist {}",
            items.len(),
            self.config.catalog.playlist_id
        );

        let semaphore = Arc::new(Semaphore::new(self.config.pipeline.max_parallel_items));
        let mut tasks = JoinSet::new();

        for item in items {
            let semaphore = Arc::clone(&semaphore);
            let task = ItemTask::new(
                item,
                self.config.output.dir.clone(),
                self.config.convert.clone(),
                Arc::clone(&self.downloader),
                Arc::clone(&self.converter),
                Arc::clone(&self.tagger),
            );
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("semaphore is never closed");
                task.run().await
            });
        }

        // Completion barrier: every item reaches Done or Failed before we
        // return. One task's failure never cancels its siblings.
        let mut done = 0usize;
        let mut failed = 0usize;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(item) => {
                    debug!(
                        "item {} ({}) finished in state {:?}",
                        item.position, item.entry.video_id, item.state
                    );
                    match item.state {
                        ItemState::Failed => failed += 1,
                        _ => done += 1,
                    }
                }
                Err(join_err) => {
                    error!("item task panicked: {}", join_err);
                    failed += 1;
                }
            }
        }

        info!("run complete: {} done, {} failed", done, failed);
        Ok(())
    }
}
