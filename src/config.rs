/// Configuration management
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Render responses as JSON instead of plain text
    #[serde(default)]
    pub json_output: bool,
}

/// Where the session engine gets its playlists from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Path to a TOML playlist library
    pub path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_output: false,
        }
    }
}

impl Config {
    /// Default configuration file location
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    ///
    /// The flag is `true` when the defaults were written.
    pub fn load_or_create(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            Ok((Self::load_from(path)?, false))
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok((config, true))
        }
    }

    /// Load configuration from an existing file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Get configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Unable to determine config directory")?
            .join("spop");
        Ok(dir)
    }

    /// Library file path, if one is configured
    pub fn library_path(&self) -> Option<PathBuf> {
        self.library.path.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.log_level, "info");
        assert!(!config.general.json_output);
        assert!(config.library_path().is_none());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let (config, created) = Config::load_or_create(&path).unwrap();
        assert!(created);
        assert!(path.exists());
        assert_eq!(config.general.log_level, "info");

        let (_, created) = Config::load_or_create(&path).unwrap();
        assert!(!created);

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "info");
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[library]\npath = \"/music/library.toml\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.library_path(),
            Some(PathBuf::from("/music/library.toml"))
        );
        assert_eq!(config.general.log_level, "info");
    }
}
