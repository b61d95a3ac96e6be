//! Run configuration.
//!
//! One immutable [`Config`] value is loaded at startup and passed down into
//! the orchestrator and every item task. Nothing in the pipeline mutates it.

mod loader;
mod types;
mod validate;

use thiserror::Error;

pub use loader::{load_config, load_config_from_str};
pub use types::{CatalogConfig, Config, ConvertConfig, OutputConfig, PipelineConfig};
pub use validate::validate_config;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// Config file could not be parsed.
    #[error("failed to parse config: {0}")]
    ParseError(String),

    /// Config parsed but failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}
