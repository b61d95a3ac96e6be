pub mod catalog;
pub mod config;
pub mod converter;
pub mod downloader;
pub mod pipeline;
pub mod tagger;
pub mod testing;

pub use catalog::{
    spawn_paginator, CatalogClient, CatalogEntry, CatalogError, CatalogPage, YouTubeCatalogClient,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    ConvertConfig, OutputConfig, PipelineConfig,
};
pub use converter::{ConvertError, Converter, ConverterConfig, FfmpegConverter};
pub use downloader::{DownloadError, Downloader, DownloaderConfig, YtDlpDownloader};
pub use pipeline::{collect_ordered, ItemState, ItemTask, OrderedItem, Orchestrator, PipelineError};
pub use tagger::{Id3Tagger, TagError, Tagger};
