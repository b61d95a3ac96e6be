//! Remote catalog access.
//!
//! A [`CatalogClient`] fetches one page of a playlist listing at a time; the
//! [`paginator`](crate::catalog::spawn_paginator) walks the continuation
//! tokens and emits entries as a single ordered stream. Any listing error is
//! fatal to the whole run, unlike per-item download failures.

mod paginator;
mod types;
mod youtube;

use async_trait::async_trait;
use thiserror::Error;

pub use paginator::spawn_paginator;
pub use types::{CatalogEntry, CatalogPage};
pub use youtube::YouTubeCatalogClient;

/// Errors raised while listing the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failure.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error("catalog API error: status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse catalog response: {0}")]
    ParseError(String),
}

/// A paged view over a remote media catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of the playlist listing.
    ///
    /// `page_token` is `None` for the first page; subsequent calls pass the
    /// continuation token from the previous page. A page with
    /// `next_page_token == None` is the last one.
    async fn list_page(
        &self,
        playlist_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CatalogPage, CatalogError>;
}
