use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Display and runtime preferences, read from `~/.periodic-tui/config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    pub log_level: String,
    pub show_legend: bool,
    pub show_splash: bool,
    /// Dim elements that fail the filters; when off they are not drawn at all
    pub dim_filtered: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            log_level: "info".to_string(),
            show_legend: true,
            show_splash: true,
            dim_filtered: true,
        }
    }
}

/// Outcome of reading the config file
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Missing,
    /// The file exists but could not be used; defaults apply
    Invalid(String),
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".periodic-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("periodic-tui.log"))
    }

    /// Load the user config. Never fails: problems fall back to defaults
    /// and are reported through the returned source.
    pub fn load() -> (Config, ConfigSource) {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => (Config::default(), ConfigSource::Missing),
        }
    }

    pub fn load_from(path: &Path) -> (Config, ConfigSource) {
        if !path.exists() {
            return (Config::default(), ConfigSource::Missing);
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                return (
                    Config::default(),
                    ConfigSource::Invalid(format!("Failed to read {}: {}", path.display(), e)),
                )
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(e) => (
                Config::default(),
                ConfigSource::Invalid(format!("Failed to parse {}: {}", path.display(), e)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("periodic-tui-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (config, source) = Config::load_from(&temp_path("does-not-exist"));
        assert_eq!(config, Config::default());
        assert!(matches!(source, ConfigSource::Missing));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{"show_legend": false, "tick_rate_ms": 250}"#).unwrap();

        let (config, source) = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(source, ConfigSource::File(_)));
        assert!(!config.show_legend);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_level, "info");
        assert!(config.dim_filtered);
    }

    #[test]
    fn test_malformed_file_gives_defaults_and_reason() {
        let path = temp_path("malformed");
        fs::write(&path, "{ show_legend: nope").unwrap();

        let (config, source) = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config, Config::default());
        match source {
            ConfigSource::Invalid(reason) => assert!(reason.contains("Failed to parse")),
            other => panic!("expected invalid source, got {:?}", other),
        }
    }
}
