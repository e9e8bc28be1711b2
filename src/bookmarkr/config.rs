use crate::error::{BookmarkrError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MAX_RESULTS: u32 = 20;
/// Google Books refuses larger pages.
const MAX_RESULTS_LIMIT: u32 = 40;

/// Configuration for bookmarkr, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkrConfig {
    /// Google Books API key used for catalog searches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Number of catalog results requested per search
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl Default for BookmarkrConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl BookmarkrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookmarkrError::Io)?;
        let config: BookmarkrConfig =
            serde_json::from_str(&content).map_err(BookmarkrError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookmarkrError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookmarkrError::Serialization)?;
        fs::write(config_path, content).map_err(BookmarkrError::Io)?;
        Ok(())
    }

    /// Known keys, as typed on the command line.
    pub fn keys() -> &'static [&'static str] {
        &["api-key", "max-results"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-key" => Some(self.api_key.clone().unwrap_or_default()),
            "max-results" => Some(self.max_results.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api-key" => {
                let value = value.trim();
                self.api_key = (!value.is_empty()).then(|| value.to_string());
            }
            "max-results" => {
                let n: u32 = value.trim().parse().map_err(|_| {
                    BookmarkrError::InvalidInput(format!("max-results must be a number: {}", value))
                })?;
                if n == 0 || n > MAX_RESULTS_LIMIT {
                    return Err(BookmarkrError::InvalidInput(format!(
                        "max-results must be between 1 and {}",
                        MAX_RESULTS_LIMIT
                    )));
                }
                self.max_results = n;
            }
            other => {
                return Err(BookmarkrError::InvalidInput(format!(
                    "unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::keys()
            .iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BookmarkrConfig::default();
        assert_eq!(config.max_results, 20);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BookmarkrConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, BookmarkrConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = BookmarkrConfig::default();
        config.set("max-results", "5").unwrap();
        config.set("api-key", "secret").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BookmarkrConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.max_results, 5);
        assert_eq!(loaded.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_set_validates() {
        let mut config = BookmarkrConfig::default();
        assert!(config.set("max-results", "0").is_err());
        assert!(config.set("max-results", "many").is_err());
        assert!(config.set("colour", "blue").is_err());

        config.set("api-key", "k").unwrap();
        config.set("api-key", "  ").unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: BookmarkrConfig = serde_json::from_str(r#"{"api_key": "abc"}"#).unwrap();
        assert_eq!(parsed.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(parsed.list_all().len(), 2);
    }
}
