//! Mock implementations for testing.
//!
//! Controllable stand-ins for the external collaborators: catalog listing,
//! download tool, transcoder, and tag writer.

mod mock_catalog;
mod mock_converter;
mod mock_downloader;
mod mock_tagger;

pub use mock_catalog::MockCatalogClient;
pub use mock_converter::{MockConverter, RecordedConversion};
pub use mock_downloader::{MockDownloader, RecordedDownload};
pub use mock_tagger::{MockTagger, RecordedTag};
