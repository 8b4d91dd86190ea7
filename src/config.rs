mod cli;
mod file;
mod validation;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

pub use cli::{Config, DEFAULT_OUTPUT, usage};
pub use file::FileSettings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("failed to read settings file {}", path.display())]
    File {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// `--help` and `--version` surface as clap errors but are not failures.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            Self::Cli(error) if matches!(
                error.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            )
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Layout of diagnostic log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}
