use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mixtape_core::{
    load_config, validate_config, Converter, Downloader, FfmpegConverter, Id3Tagger, Orchestrator,
    YouTubeCatalogClient, YtDlpDownloader,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MIXTAPE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Playlist: {}", config.catalog.playlist_id);
    info!("Output directory: {:?}", config.output.dir);
    info!("Convert to mp3: {}", config.convert.enabled);

    // Startup checks: fail fast before any pipeline work begins.
    tokio::fs::create_dir_all(&config.output.dir)
        .await
        .with_context(|| format!("Failed to create output directory {:?}", config.output.dir))?;

    let downloader = YtDlpDownloader::new(config.downloader.clone());
    downloader
        .validate()
        .await
        .context("Download tool check failed")?;
    info!("Download tool ready: {}", downloader.name());

    let converter = FfmpegConverter::new(config.converter.clone());
    if config.convert.enabled {
        converter
            .validate()
            .await
            .context("Transcoder check failed")?;
        info!("Transcoder ready: {}", converter.name());
    }

    let catalog = YouTubeCatalogClient::new(config.catalog.api_key.clone())
        .context("Failed to create catalog client")?;

    let orchestrator = Orchestrator::new(
        Arc::new(config),
        Arc::new(catalog),
        Arc::new(downloader),
        Arc::new(converter),
        Arc::new(Id3Tagger::new()),
    );

    orchestrator.run().await.context("Run aborted")?;

    Ok(())
}
