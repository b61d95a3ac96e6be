//! Mock catalog client for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogClient, CatalogEntry, CatalogError, CatalogPage};

/// Mock implementation of the CatalogClient trait.
///
/// Serves a fixed sequence of pages joined by synthetic continuation tokens
/// and records every page request. A specific page can be configured to fail,
/// which the pipeline must treat as fatal.
pub struct MockCatalogClient {
    pages: Vec<Vec<CatalogEntry>>,
    fail_on_page: Option<usize>,
    requests: Arc<RwLock<Vec<Option<String>>>>,
}

impl MockCatalogClient {
    /// Create a client serving the given pages in order.
    pub fn with_pages(pages: Vec<Vec<CatalogEntry>>) -> Self {
        Self {
            pages,
            fail_on_page: None,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Make the request for page `index` (0-based) fail.
    pub fn fail_on_page(mut self, index: usize) -> Self {
        self.fail_on_page = Some(index);
        self
    }

    /// Page tokens observed so far, in request order.
    pub async fn recorded_requests(&self) -> Vec<Option<String>> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn list_page(
        &self,
        _playlist_id: &str,
        _page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CatalogPage, CatalogError> {
        self.requests
            .write()
            .await
            .push(page_token.map(|t| t.to_string()));

        let index = match page_token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| {
                    CatalogError::ParseError(format!("unknown mock page token: {}", token))
                })?,
        };

        if self.fail_on_page == Some(index) {
            return Err(CatalogError::Api {
                status: 500,
                message: "mock listing failure".to_string(),
            });
        }

        let entries = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = if index + 1 < self.pages.len() {
            Some(format!("page-{}", index + 1))
        } else {
            None
        };

        Ok(CatalogPage {
            entries,
            next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry {
            video_id: id.to_string(),
            title: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_pages_are_chained_by_tokens() {
        let client = MockCatalogClient::with_pages(vec![vec![entry("a")], vec![entry("b")]]);

        let first = client.list_page("PL1", 1, None).await.unwrap();
        assert_eq!(first.entries[0].video_id, "a");
        let token = first.next_page_token.unwrap();

        let second = client.list_page("PL1", 1, Some(&token)).await.unwrap();
        assert_eq!(second.entries[0].video_id, "b");
        assert!(second.next_page_token.is_none());

        let requests = client.recorded_requests().await;
        assert_eq!(requests, vec![None, Some("page-1".to_string())]);
    }

    #[tokio::test]
    async fn test_configured_page_fails() {
        let client =
            MockCatalogClient::with_pages(vec![vec![entry("a")], vec![entry("b")]]).fail_on_page(1);

        assert!(client.list_page("PL1", 1, None).await.is_ok());
        let err = client.list_page("PL1", 1, Some("page-1")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 500, .. }));
    }
}
