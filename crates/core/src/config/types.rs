use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::ConverterConfig;
use crate::downloader::DownloaderConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub downloader: DownloaderConfig,
    #[serde(default)]
    pub converter: ConverterConfig,
}

/// Remote catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// YouTube Data API key.
    pub api_key: String,
    /// Playlist to fetch.
    pub playlist_id: String,
    /// Entries requested per page (YouTube max is 50).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    50
}

/// Output directory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outfiles")
}

/// Conversion and tagging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Whether downloaded items are transcoded to mp3.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Artist tag applied to every converted file.
    #[serde(default)]
    pub artist: String,
    /// Album tag applied to every converted file.
    #[serde(default)]
    pub album: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            artist: String::new(),
            album: String::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// Pipeline dispatch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Extra download attempts per item beyond the first.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Maximum item tasks running at once.
    #[serde(default = "default_max_parallel")]
    pub max_parallel_items: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            retry_budget: default_retry_budget(),
            max_parallel_items: default_max_parallel(),
        }
    }
}

fn default_retry_budget() -> u32 {
    1
}

fn default_max_parallel() -> usize {
    8
}
