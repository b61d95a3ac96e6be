use super::{types::Config, ConfigError};

/// YouTube caps `maxResults` for playlist listings.
const MAX_PAGE_SIZE: u32 = 50;

/// Validate a loaded configuration before any pipeline work starts.
///
/// Startup fails fast on the first violation; there is no partial startup.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.catalog.api_key.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "catalog.api_key must not be empty".to_string(),
        ));
    }

    if config.catalog.playlist_id.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "catalog.playlist_id must not be empty".to_string(),
        ));
    }

    if config.catalog.page_size == 0 || config.catalog.page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::Invalid(format!(
            "catalog.page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, config.catalog.page_size
        )));
    }

    if config.pipeline.max_parallel_items == 0 {
        return Err(ConfigError::Invalid(
            "pipeline.max_parallel_items must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    fn valid_config() -> Config {
        load_config_from_str(
            r#"
[catalog]
api_key = "secret"
playlist_id = "PL123"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = valid_config();
        config.catalog.api_key = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("api_key"));
    }

    #[test]
    fn test_empty_playlist_id_rejected() {
        let mut config = valid_config();
        config.catalog.playlist_id = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        let mut config = valid_config();
        config.catalog.page_size = 0;
        assert!(validate_config(&config).is_err());

        config.catalog.page_size = 51;
        assert!(validate_config(&config).is_err());

        config.catalog.page_size = 50;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let mut config = valid_config();
        config.pipeline.max_parallel_items = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("max_parallel_items"));
    }
}
