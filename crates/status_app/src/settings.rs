use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use document_engine::{write_atomically, ReportError};
use serde::{Deserialize, Serialize};
use status_core::DEFAULT_CHARACTER_LIMIT;
use status_logging::LogDestination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum LogTarget {
    #[default]
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(value: LogTarget) -> Self {
        match value {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

/// Settings read from the RON config file; every field is optional in the file,
/// but unknown fields are rejected so a misspelt key is not silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub character_limit: Option<usize>,
    pub report_dir: Option<PathBuf>,
    pub encoding: Option<String>,
    pub log: LogTarget,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            character_limit: Some(DEFAULT_CHARACTER_LIMIT),
            report_dir: None,
            encoding: None,
            log: LogTarget::Terminal,
            log_file: PathBuf::from("./docstatus.log"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write settings: {0}")]
    Write(#[from] ReportError),
}

impl Settings {
    /// Loads settings from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<PathBuf, SettingsError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(self, pretty)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "status.ron".to_string());
        Ok(write_atomically(dir, &filename, content.as_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("status.ron");
        fs::write(&path, "(character_limit: None, log: Both)").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.character_limit, None);
        assert_eq!(settings.log, LogTarget::Both);
        assert_eq!(settings.log_file, Settings::default().log_file);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("status.ron");
        fs::write(&path, "(character_limit: \"lots\")").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn misspelt_field_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("status.ron");
        fs::write(&path, "(lgo: Both)").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("lgo"));
    }

    #[test]
    fn saved_settings_load_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("status.ron");
        let settings = Settings {
            character_limit: Some(500),
            report_dir: Some(PathBuf::from("reports")),
            encoding: Some("windows-1252".to_string()),
            log: LogTarget::File,
            log_file: PathBuf::from("custom.log"),
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
