// ScanScope - platform/config.rs
//
// Platform-appropriate config paths and config.toml loading.
//
// The config covers UI preferences only; scan input always comes from the
// CLI argument or the file dialog. A missing config file is not an error.

use crate::util::constants::{
    CONFIG_FILE_NAME, DEFAULT_FONT_SIZE, MAX_CONFIG_FILE_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
use crate::util::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Resolved platform paths.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Directory containing config.toml.
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve the platform config directory.
    ///
    /// Uses the OS convention via `directories` (e.g. ~/.config/ScanScope
    /// on Linux); falls back to the current directory when the home
    /// directory cannot be determined (containers, stripped environments).
    pub fn resolve() -> Self {
        let config_dir = directories::ProjectDirs::from("", "", crate::util::constants::APP_ID)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                tracing::warn!("No home directory; using current directory for config");
                PathBuf::from(".")
            });
        Self { config_dir }
    }

    /// Full path to config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

/// User-adjustable viewer settings from config.toml.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// UI body font size in points.
    pub font_size: f32,

    /// Dark colour scheme.
    pub dark_mode: bool,

    /// Log level override (lowest priority after RUST_LOG and --debug).
    pub log_level: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            dark_mode: true,
            log_level: None,
        }
    }
}

impl ViewerConfig {
    /// Load the config from `path`.
    ///
    /// A missing file yields the defaults; a present-but-invalid file is an
    /// error so typos do not silently revert preferences.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(file = %path.display(), "No config file; using defaults");
            return Ok(Self::default());
        }

        let size = std::fs::metadata(path)
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();
        if size > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_CONFIG_FILE_SIZE,
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = toml::from_str(&text).map_err(|e| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;

        tracing::debug!(file = %path.display(), ?config, "Config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font_size) {
            return Err(ConfigError::ValueOutOfRange {
                field: "font_size".to_string(),
                value: self.font_size.to_string(),
                expected: format!("{MIN_FONT_SIZE} to {MAX_FONT_SIZE}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ViewerConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "font_size = 16.0\ndark_mode = false\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.font_size, 16.0);
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "dark_mode = false\n").unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "font_size = [not toml").unwrap();

        let result = ViewerConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "fnt_size = 16.0\n").unwrap();

        let result = ViewerConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
    }

    #[test]
    fn test_font_size_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "font_size = 64.0\n").unwrap();

        let result = ViewerConfig::load(&path);
        assert!(matches!(
            result,
            Err(ConfigError::ValueOutOfRange { ref field, .. }) if field == "font_size"
        ));
    }
}
