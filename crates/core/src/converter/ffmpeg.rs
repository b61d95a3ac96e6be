//! FFmpeg-based converter implementation.

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::config::ConverterConfig;
use super::error::ConvertError;
use super::traits::Converter;

/// FFmpeg-based converter implementation.
pub struct FfmpegConverter {
    config: ConverterConfig,
}

impl FfmpegConverter {
    /// Creates a new FFmpeg converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Builds ffmpeg arguments for an mp3 conversion.
    fn build_args(&self, input_path: &Path, output_path: &Path) -> Vec<String> {
        vec![
            "-y".to_string(), // Overwrite output
            "-i".to_string(),
            input_path.to_string_lossy().to_string(),
            "-codec:a".to_string(),
            "libmp3lame".to_string(),
            "-b:a".to_string(),
            format!("{}k", self.config.bitrate_kbps),
            "-loglevel".to_string(),
            self.config.ffmpeg_log_level.clone(),
            output_path.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl Converter for FfmpegConverter {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn convert(&self, input_path: &Path, output_path: &Path) -> Result<(), ConvertError> {
        if !input_path.exists() {
            return Err(ConvertError::InputNotFound {
                path: input_path.to_path_buf(),
            });
        }

        let args = self.build_args(input_path, output_path);

        let output = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ConvertError::FfmpegNotFound {
                        path: self.config.ffmpeg_path.clone(),
                    }
                } else {
                    ConvertError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ConvertError::conversion_failed(
                format!("FFmpeg exited with code: {:?}", output.status.code()),
                if stderr.is_empty() {
                    None
                } else {
                    Some(stderr)
                },
            ));
        }

        // The raw intermediate is only deleted once this file exists.
        if !output_path.exists() {
            return Err(ConvertError::conversion_failed(
                "output file not created",
                None,
            ));
        }

        Ok(())
    }

    async fn validate(&self) -> Result<(), ConvertError> {
        let result = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .await;

        if let Err(e) = result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(ConvertError::FfmpegNotFound {
                    path: self.config.ffmpeg_path.clone(),
                });
            }
            return Err(ConvertError::Io(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_build_args() {
        let converter = FfmpegConverter::with_defaults();
        let args = converter.build_args(Path::new("/in/1 - x.m4a"), Path::new("/in/1 - x.mp3"));

        assert_eq!(args[0], "-y");
        assert!(args.contains(&"-codec:a".to_string()));
        assert!(args.contains(&"libmp3lame".to_string()));
        assert!(args.contains(&"-b:a".to_string()));
        assert!(args.contains(&"128k".to_string()));
        assert_eq!(args.last().unwrap(), "/in/1 - x.mp3");
    }

    #[test]
    fn test_build_args_custom_bitrate() {
        let config = ConverterConfig {
            bitrate_kbps: 320,
            ..Default::default()
        };
        let converter = FfmpegConverter::new(config);
        let args = converter.build_args(Path::new("/a.m4a"), Path::new("/a.mp3"));
        assert!(args.contains(&"320k".to_string()));
    }

    #[tokio::test]
    async fn test_convert_missing_input() {
        let converter = FfmpegConverter::with_defaults();
        let err = converter
            .convert(Path::new("/nonexistent/in.m4a"), Path::new("/tmp/out.mp3"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
    }

    #[tokio::test]
    async fn test_validate_missing_tool() {
        let config = ConverterConfig {
            ffmpeg_path: PathBuf::from("/nonexistent/ffmpeg"),
            ..Default::default()
        };
        let converter = FfmpegConverter::new(config);
        let err = converter.validate().await.unwrap_err();
        assert!(matches!(err, ConvertError::FfmpegNotFound { .. }));
    }
}
