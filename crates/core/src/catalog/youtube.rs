//! YouTube Data API v3 playlist client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::types::{CatalogEntry, CatalogPage};
use super::{CatalogClient, CatalogError};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API v3 client for playlist listings.
pub struct YouTubeCatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeCatalogClient {
    /// Create a new client using the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Override the API base URL (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CatalogClient for YouTubeCatalogClient {
    async fn list_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CatalogPage, CatalogError> {
        let url = format!("{}/playlistItems", self.base_url);

        debug!(
            "listing playlist {}: page_size={}, token={:?}",
            playlist_id, page_size, page_token
        );

        let mut query = vec![
            ("part".to_string(), "snippet,contentDetails".to_string()),
            ("playlistId".to_string(), playlist_id.to_string()),
            ("maxResults".to_string(), page_size.to_string()),
            ("key".to_string(), self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken".to_string(), token.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let listing: YtPlaylistItemsResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("failed to parse playlistItems response: {}", e))
        })?;

        Ok(listing.into())
    }
}

// ============================================================================
// YouTube API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YtPlaylistItemsResponse {
    #[serde(default)]
    items: Vec<YtPlaylistItem>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YtPlaylistItem {
    snippet: YtSnippet,
    content_details: YtContentDetails,
}

#[derive(Debug, Deserialize)]
struct YtSnippet {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YtContentDetails {
    video_id: String,
}

impl From<YtPlaylistItemsResponse> for CatalogPage {
    fn from(response: YtPlaylistItemsResponse) -> Self {
        let entries = response
            .items
            .into_iter()
            .map(|item| CatalogEntry {
                video_id: item.content_details.video_id,
                title: item.snippet.title,
            })
            .collect();

        CatalogPage {
            entries,
            next_page_token: response.next_page_token,
        }
    }
}
