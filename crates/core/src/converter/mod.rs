//! External transcoder invocation.

mod config;
mod error;
mod ffmpeg;
mod traits;

pub use config::ConverterConfig;
pub use error::ConvertError;
pub use ffmpeg::FfmpegConverter;
pub use traits::Converter;
