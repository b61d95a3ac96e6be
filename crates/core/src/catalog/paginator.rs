//! Paginated catalog traversal.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::types::CatalogEntry;
use super::{CatalogClient, CatalogError};

/// Bounded handoff between the fetch phase and the order-assignment loop.
const CHANNEL_CAPACITY: usize = 64;

/// Walk the playlist listing page by page, emitting entries in catalog order.
///
/// Single pass, not restartable. The producer task follows continuation
/// tokens until a page comes back without one, then closes the channel. A
/// listing error is sent as the final message; the consumer treats it as
/// fatal to the run.
pub fn spawn_paginator(
    client: Arc<dyn CatalogClient>,
    playlist_id: String,
    page_size: u32,
) -> mpsc::Receiver<Result<CatalogEntry, CatalogError>> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let mut page_token: Option<String> = None;

        loop {
            let page = match client
                .list_page(&playlist_id, page_size, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(err) => {
                    let _ = tx.send(Err(err)).await;
                    return;
                }
            };

            debug!(
                "fetched page with {} entries, next_token={:?}",
                page.entries.len(),
                page.next_page_token
            );

            for entry in page.entries {
                if tx.send(Ok(entry)).await.is_err() {
                    // Consumer went away, stop fetching.
                    return;
                }
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        // Dropping tx closes the stream after the last page.
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockCatalogClient;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            video_id: id.to_string(),
            title: format!("title {}", id),
        }
    }

    #[tokio::test]
    async fn test_entries_cross_page_boundaries_in_order() {
        let client = Arc::new(MockCatalogClient::with_pages(vec![
            vec![entry("a"), entry("b")],
            vec![entry("c")],
        ]));

        let mut rx = spawn_paginator(client, "PL1".to_string(), 2);

        let mut ids = Vec::new();
        while let Some(result) = rx.recv().await {
            ids.push(result.unwrap().video_id);
        }
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_catalog_closes_immediately() {
        let client = Arc::new(MockCatalogClient::with_pages(vec![vec![]]));
        let mut rx = spawn_paginator(client, "PL1".to_string(), 50);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_listing_error_is_forwarded_and_terminal() {
        let client = Arc::new(
            MockCatalogClient::with_pages(vec![vec![entry("a")], vec![entry("b")]])
                .fail_on_page(1),
        );

        let mut rx = spawn_paginator(client, "PL1".to_string(), 1);

        let first = rx.recv().await.unwrap();
        assert_eq!(first.unwrap().video_id, "a");

        let second = rx.recv().await.unwrap();
        assert!(second.is_err());

        // Stream ends after the error.
        assert!(rx.recv().await.is_none());
    }
}
