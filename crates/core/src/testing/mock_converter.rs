//! Mock converter for testing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::converter::{ConvertError, Converter};

/// A recorded conversion for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedConversion {
    /// Input path of the conversion.
    pub input_path: PathBuf,
    /// Output path of the conversion.
    pub output_path: PathBuf,
    /// Whether the conversion succeeded.
    pub success: bool,
}

/// Mock implementation of the Converter trait.
///
/// Enforces the input-must-exist precondition, writes a placeholder output
/// file on success, and supports one-shot error injection.
pub struct MockConverter {
    conversions: Arc<RwLock<Vec<RecordedConversion>>>,
    next_error: Arc<RwLock<Option<String>>>,
}

impl Default for MockConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self {
            conversions: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the next conversion to fail with the given reason.
    pub async fn fail_next(&self, reason: &str) {
        *self.next_error.write().await = Some(reason.to_string());
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.conversions.read().await.clone()
    }

    /// Number of conversions attempted.
    pub async fn conversion_count(&self) -> usize {
        self.conversions.read().await.len()
    }
}

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, input_path: &Path, output_path: &Path) -> Result<(), ConvertError> {
        if !input_path.exists() {
            return Err(ConvertError::InputNotFound {
                path: input_path.to_path_buf(),
            });
        }

        if let Some(reason) = self.next_error.write().await.take() {
            self.conversions.write().await.push(RecordedConversion {
                input_path: input_path.to_path_buf(),
                output_path: output_path.to_path_buf(),
                success: false,
            });
            return Err(ConvertError::conversion_failed(reason, None));
        }

        tokio::fs::write(output_path, b"mp3 audio").await?;

        self.conversions.write().await.push(RecordedConversion {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            success: true,
        });

        Ok(())
    }

    async fn validate(&self) -> Result<(), ConvertError> {
        Ok(())
    }
}
