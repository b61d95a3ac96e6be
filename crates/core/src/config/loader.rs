use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("MIXTAPE_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[catalog]
api_key = "secret"
playlist_id = "PL1531805E486A97FF"

[convert]
artist = "Italo"
album = "Italo Disco Heaven"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.catalog.playlist_id, "PL1531805E486A97FF");
        assert_eq!(config.catalog.page_size, 50);
        assert_eq!(config.convert.artist, "Italo");
        assert!(config.convert.enabled);
    }

    #[test]
    fn test_load_config_from_str_missing_catalog() {
        let toml = r#"
[output]
dir = "out"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[catalog]
api_key = "secret"
playlist_id = "PL123"
page_size = 10

[pipeline]
retry_budget = 2
max_parallel_items = 4
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.pipeline.retry_budget, 2);
        assert_eq!(config.pipeline.max_parallel_items, 4);
    }
}
