use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub feed: FeedConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// WebSocket endpoint of the document store.
    pub url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Snapshot size; the service caps this at 50.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_collection() -> String {
    "deals".to_string()
}

fn default_page_size() -> u32 {
    50
}

impl ViewerConfig {
    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: ViewerConfig = serde_yaml::from_str(&yaml_content)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.feed.url.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.url must not be empty".to_string(),
            ));
        }
        if self.feed.collection.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.collection must not be empty".to_string(),
            ));
        }
        if !(1..=50).contains(&self.feed.page_size) {
            return Err(ConfigError::ValidationError(format!(
                "feed.page_size must be between 1 and 50, got {}",
                self.feed.page_size
            )));
        }
        Ok(())
    }

    /// Log the effective configuration at startup.
    pub fn log(&self) {
        tracing::info!("Feed URL: {}", self.feed.url);
        tracing::info!(
            "Collection: {} (page size {})",
            self.feed.collection,
            self.feed.page_size
        );
        tracing::info!("Log level: {}", self.log_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_minimal_config_gets_defaults() {
        let file = write_config("feed:\n  url: wss://feed.example/ws\n");
        let config = ViewerConfig::load(file.path()).unwrap();

        assert_eq!(config.feed.url, "wss://feed.example/ws");
        assert_eq!(config.feed.collection, "deals");
        assert_eq!(config.feed.page_size, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_explicit_values_win() {
        let file = write_config(
            "feed:\n  url: wss://feed.example/ws\n  collection: offers\n  page_size: 10\nlog_level: debug\n",
        );
        let config = ViewerConfig::load(file.path()).unwrap();

        assert_eq!(config.feed.collection, "offers");
        assert_eq!(config.feed.page_size, 10);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let file = write_config("feed:\n  url: wss://feed.example/ws\n  page_size: 0\n");
        assert!(matches!(
            ViewerConfig::load(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let file = write_config("feed:\n  url: \"\"\n");
        assert!(matches!(
            ViewerConfig::load(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_file_error() {
        assert!(matches!(
            ViewerConfig::load("/nonexistent/config.yaml"),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_bad_yaml_is_a_parse_error() {
        let file = write_config("feed: [not, a, mapping");
        assert!(matches!(
            ViewerConfig::load(file.path()),
            Err(ConfigError::YamlError(_))
        ));
    }
}
