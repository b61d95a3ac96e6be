//! External download tool invocation.

mod config;
mod error;
mod traits;
mod ytdlp;

pub use config::DownloaderConfig;
pub use error::DownloadError;
pub use traits::Downloader;
pub use ytdlp::YtDlpDownloader;
