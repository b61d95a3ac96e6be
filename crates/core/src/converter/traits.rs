//! Trait definitions for the converter module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ConvertError;

/// A converter that can transcode media files.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Transcode `input_path` to a compressed-audio file at `output_path`.
    ///
    /// Returns only after the output file is confirmed written.
    async fn convert(&self, input_path: &Path, output_path: &Path) -> Result<(), ConvertError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConvertError>;
}
