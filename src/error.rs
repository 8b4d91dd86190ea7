//! Error classification for the command-line driver.

use anyhow::Error;

use crate::clustering::ClusterError;
use crate::config::{self, ConfigError};
use crate::points::LoadError;

/// Broad category of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or a k that does not fit the data
    InvalidArgument,
    /// A file could not be opened or read
    IoFailure,
    /// The input or settings file has content that cannot be parsed
    MalformedInput,
    /// Anything not raised by this crate
    Other,
}

/// Walks the error chain and returns the first recognised category.
#[must_use]
pub fn classify_error(error: &Error) -> ErrorKind {
    for cause in error.chain() {
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return match config_err {
                ConfigError::Cli(_) | ConfigError::InvalidArgument(_) => ErrorKind::InvalidArgument,
                ConfigError::File { .. } => ErrorKind::IoFailure,
                ConfigError::Parse(_) => ErrorKind::MalformedInput,
            };
        }

        if let Some(load_err) = cause.downcast_ref::<LoadError>() {
            return match load_err {
                LoadError::Io { .. } => ErrorKind::IoFailure,
                LoadError::Malformed { .. } => ErrorKind::MalformedInput,
            };
        }

        if cause.downcast_ref::<ClusterError>().is_some() {
            return ErrorKind::InvalidArgument;
        }

        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorKind::IoFailure;
        }
    }

    ErrorKind::Other
}

/// Whether the usage line should accompany the error message.
#[must_use]
pub fn wants_usage(error: &Error) -> bool {
    !matches!(classify_error(error), ErrorKind::Other)
}

/// Text printed to stderr for a failed run: the error chain, then the usage
/// line when the failure came from the arguments or the input file.
#[must_use]
pub fn failure_report(error: &Error) -> String {
    if wants_usage(error) {
        format!("{error:#}\n{}", config::usage())
    } else {
        format!("{error:#}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn too_many_clusters_is_invalid_argument() {
        let error = Error::new(ClusterError::TooManyClusters { k: 5, points: 3 })
            .context("cannot cluster input");
        assert_eq!(classify_error(&error), ErrorKind::InvalidArgument);
        assert!(wants_usage(&error));
    }

    #[test]
    fn unreadable_input_is_io_failure() {
        let error = Error::new(LoadError::Io {
            path: PathBuf::from("points.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(classify_error(&error), ErrorKind::IoFailure);
        assert!(failure_report(&error).contains("Usage: kmeans2d"));
    }

    #[test]
    fn malformed_line_is_malformed_input() {
        let result: Result<(), LoadError> = Err(LoadError::Malformed {
            line: 3,
            reason: "expected two integers, found 1 token(s)".to_string(),
        });
        let error = result.context("failed to load points").expect_err("error");
        assert_eq!(classify_error(&error), ErrorKind::MalformedInput);
        let report = failure_report(&error);
        assert!(report.starts_with("failed to load points: malformed point on line 3"));
        assert!(report.contains("Usage: kmeans2d"));
    }

    #[test]
    fn write_failure_is_io_failure() {
        let error = Error::new(std::io::Error::other("disk full")).context("failed to write");
        assert_eq!(classify_error(&error), ErrorKind::IoFailure);
    }

    #[test]
    fn foreign_error_is_other_without_usage() {
        let error = anyhow::anyhow!("something unrelated");
        assert_eq!(classify_error(&error), ErrorKind::Other);
        assert!(!wants_usage(&error));
        assert_eq!(failure_report(&error), "something unrelated");
    }
}
