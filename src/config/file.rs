use super::{ConfigError, LogFormat, LogLevel};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings loaded from a TOML file via `--config`.
///
/// Every key is optional; values only apply where the command line and
/// environment left the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub output: Option<PathBuf>,
    pub max_iterations: Option<usize>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
}

impl FileSettings {
    /// # Errors
    /// [`ConfigError::File`] when the file cannot be read, [`ConfigError::Parse`]
    /// when it is not valid TOML for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// # Errors
    /// [`ConfigError::Parse`] on malformed TOML or unknown keys.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}
