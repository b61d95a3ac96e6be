//! Types for the catalog module.

use serde::{Deserialize, Serialize};

/// One raw playlist item as returned by the remote listing.
///
/// Immutable once fetched; ordering and retry metadata are attached later by
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Remote identifier of the media item.
    pub video_id: String,
    /// Display title.
    pub title: String,
}

impl CatalogEntry {
    /// URL handed to the external downloader.
    pub fn watch_url(&self) -> String {
        format!("https://youtube.com/watch?v={}", self.video_id)
    }
}

/// One page of a playlist listing.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    /// Entries in catalog order.
    pub entries: Vec<CatalogEntry>,
    /// Continuation token for the next page, absent on the last page.
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        let entry = CatalogEntry {
            video_id: "mbJ0aXxpTfM".to_string(),
            title: "Some Track".to_string(),
        };
        assert_eq!(entry.watch_url(), "https://youtube.com/watch?v=mbJ0aXxpTfM");
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page = CatalogPage::default();
        assert!(page.entries.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
