//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\book-scout\config.toml
//! - macOS: ~/Library/Application Support/book-scout/config.toml
//! - Linux: ~/.config/book-scout/config.toml
//!
//! The config file is human-readable and editable. Every field has a
//! default, so a missing or partial file always yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Service endpoints (override to point at a local test server)
    pub endpoints: EndpointsConfig,

    /// Local storage settings
    pub storage: StorageConfig,
}

/// Service endpoint base URLs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Primary metadata service (volumes API)
    pub volumes_base_url: String,

    /// Secondary metadata service
    pub open_library_base_url: String,

    /// Cover image host of the secondary service
    pub covers_base_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            volumes_base_url: crate::gateway::client::DEFAULT_BASE_URL.to_string(),
            open_library_base_url: crate::enrichment::client::DEFAULT_BASE_URL.to_string(),
            covers_base_url: crate::enrichment::client::DEFAULT_COVERS_URL.to_string(),
        }
    }
}

/// Local storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory override (default: OS data dir + "book-scout")
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The effective data directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::store::default_data_dir)
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("book-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[endpoints]"));
        assert!(toml.contains("[storage]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.endpoints.volumes_base_url = "http://localhost:9000/volumes".to_string();
        config.storage.data_dir = Some(PathBuf::from("/tmp/books"));

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(
            parsed.endpoints.volumes_base_url,
            "http://localhost:9000/volumes"
        );
        assert_eq!(parsed.storage.data_dir, Some(PathBuf::from("/tmp/books")));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        // Config with only some fields
        let toml = r#"
[endpoints]
volumes_base_url = "http://localhost:9000/volumes"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(
            config.endpoints.volumes_base_url,
            "http://localhost:9000/volumes"
        );

        // Other fields use defaults
        assert_eq!(
            config.endpoints.open_library_base_url,
            "https://openlibrary.org"
        );
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_resolved_data_dir_prefers_override() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/override")),
        };
        assert_eq!(storage.resolved_data_dir(), PathBuf::from("/tmp/override"));
    }
}
