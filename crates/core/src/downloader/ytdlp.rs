//! yt-dlp based downloader implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::catalog::CatalogEntry;

use super::config::DownloaderConfig;
use super::error::DownloadError;
use super::traits::Downloader;

/// yt-dlp based downloader implementation.
pub struct YtDlpDownloader {
    config: DownloaderConfig,
}

impl YtDlpDownloader {
    /// Creates a new downloader with the given configuration.
    pub fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Creates a downloader with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(DownloaderConfig::default())
    }

    /// Builds tool arguments for one download attempt.
    fn build_args(&self, entry: &CatalogEntry, output_path: &Path) -> Vec<String> {
        vec![
            "-o".to_string(),
            output_path.to_string_lossy().to_string(),
            entry.watch_url(),
            "-f".to_string(),
            self.config.format_selector.clone(),
        ]
    }
}

#[async_trait]
impl Downloader for YtDlpDownloader {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn download(
        &self,
        entry: &CatalogEntry,
        output_path: &Path,
    ) -> Result<(), DownloadError> {
        let args = self.build_args(entry, output_path);

        let output = Command::new(&self.config.ytdlp_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    DownloadError::ToolNotFound {
                        path: self.config.ytdlp_path.clone(),
                    }
                } else {
                    DownloadError::Io(e)
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("{} output for {}: {}", self.name(), entry.video_id, stdout);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(DownloadError::tool_failed(
                &entry.video_id,
                format!("tool exited with code: {:?}", output.status.code()),
                if stderr.is_empty() {
                    None
                } else {
                    Some(stderr)
                },
            ));
        }

        Ok(())
    }

    async fn validate(&self) -> Result<(), DownloadError> {
        let result = Command::new(&self.config.ytdlp_path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await;

        if let Err(e) = result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(DownloadError::ToolNotFound {
                    path: self.config.ytdlp_path.clone(),
                });
            }
            return Err(DownloadError::Io(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_entry() -> CatalogEntry {
        CatalogEntry {
            video_id: "abc123".to_string(),
            title: "Test Track".to_string(),
        }
    }

    #[test]
    fn test_build_args() {
        let downloader = YtDlpDownloader::with_defaults();
        let args = downloader.build_args(&test_entry(), Path::new("/out/1 - Test Track.m4a"));

        assert_eq!(args[0], "-o");
        assert_eq!(args[1], "/out/1 - Test Track.m4a");
        assert_eq!(args[2], "https://youtube.com/watch?v=abc123");
        assert_eq!(args[3], "-f");
        assert_eq!(args[4], "141/140");
    }

    #[test]
    fn test_build_args_custom_format() {
        let config = DownloaderConfig {
            format_selector: "bestaudio".to_string(),
            ..Default::default()
        };
        let downloader = YtDlpDownloader::new(config);
        let args = downloader.build_args(&test_entry(), Path::new("/out/x.m4a"));
        assert_eq!(args[4], "bestaudio");
    }

    #[tokio::test]
    async fn test_validate_missing_tool() {
        let config = DownloaderConfig {
            ytdlp_path: PathBuf::from("/nonexistent/yt-dlp"),
            ..Default::default()
        };
        let downloader = YtDlpDownloader::new(config);
        let err = downloader.validate().await.unwrap_err();
        assert!(matches!(err, DownloadError::ToolNotFound { .. }));
    }

    #[tokio::test]
    async fn test_download_missing_tool() {
        let config = DownloaderConfig {
            ytdlp_path: PathBuf::from("/nonexistent/yt-dlp"),
            ..Default::default()
        };
        let downloader = YtDlpDownloader::new(config);
        let err = downloader
            .download(&test_entry(), Path::new("/tmp/out.m4a"))
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::ToolNotFound { .. }));
    }
}
