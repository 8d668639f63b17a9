//! Editor configuration file support.
//!
//! Settings are read from a TOML file. Every key has a default, so a missing
//! file, section or key falls back to built-in values.
//!
//! ```toml
//! [dataset]
//! path = "dataset.txt"
//! max_line_length = 256
//!
//! [display]
//! page_rows = 20
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::loaders::LoadOptions;
use crate::preprocessing::validator::DEFAULT_MAX_LINE_LENGTH;

/// Dataset file opened when nothing else is configured.
pub const DEFAULT_DATASET_PATH: &str = "dataset.txt";

/// File name searched for by [`EditorConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "flight_editor.toml";

/// Errors raised while reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Dataset location and ingestion limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

/// Table rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_page_rows")]
    pub page_rows: usize,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_page_rows() -> usize {
    20
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            max_line_length: default_max_line_length(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_rows: default_page_rows(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the first `flight_editor.toml` found in:
    /// 1. Current directory
    /// 2. `flight_editor/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the defaults when none exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("flight_editor").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("Using configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(Self::default())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reject settings the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dataset.max_line_length == 0 {
            return Err(ConfigError::Invalid(
                "dataset.max_line_length must be greater than zero".to_string(),
            ));
        }
        if self.display.page_rows == 0 {
            return Err(ConfigError::Invalid(
                "display.page_rows must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_line_length: self.dataset.max_line_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.dataset.path, PathBuf::from("dataset.txt"));
        assert_eq!(config.dataset.max_line_length, 256);
        assert_eq!(config.display.page_rows, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config = EditorConfig::from_toml_str("[display]\npage_rows = 5\n").unwrap();
        assert_eq!(config.display.page_rows, 5);
        assert_eq!(config.dataset, DatasetSettings::default());

        let empty = EditorConfig::from_toml_str("").unwrap();
        assert_eq!(empty, EditorConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[dataset]\npath = \"flights/schedule.txt\"\nmax_line_length = 128\n"
        )
        .unwrap();

        let config = EditorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("flights/schedule.txt"));
        assert_eq!(config.load_options().max_line_length, 128);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = EditorConfig::from_file("/nonexistent/flight_editor.toml");
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let mut bad = NamedTempFile::new().unwrap();
        write!(bad, "[display]\npage_rows = \"many\"\n").unwrap();
        assert!(matches!(
            EditorConfig::from_file(bad.path()),
            Err(ConfigError::Parse { .. })
        ));

        let mut zero = NamedTempFile::new().unwrap();
        write!(zero, "[display]\npage_rows = 0\n").unwrap();
        assert!(matches!(
            EditorConfig::from_file(zero.path()),
            Err(ConfigError::Invalid(_))
        ));
    }
}
