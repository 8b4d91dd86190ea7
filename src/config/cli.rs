use super::file::FileSettings;
use super::{ConfigError, LogFormat, LogLevel};
use crate::clustering::DEFAULT_MAX_ITERATIONS;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "kmeans2d", author, version, about, long_about = None)]
pub struct Config {
    /// Number of clusters; must be less than the number of points
    #[arg(value_name = "K", allow_negative_numbers = true)]
    k: i64,

    /// Input file with one "x y" integer pair per line
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the labelled points
    #[arg(long, env = "KMEANS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Upper bound on assign/update iterations
    #[arg(long, env = "KMEANS_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Optional TOML settings file
    #[arg(long = "config", env = "KMEANS_CONFIG")]
    config_file: Option<PathBuf>,

    /// Validated cluster count (derived from `k`)
    #[arg(skip)]
    clusters: usize,
}

impl Config {
    /// Parses the command line (argv[0] included), merges the optional settings
    /// file under anything given explicitly, and validates the result.
    ///
    /// # Errors
    /// [`ConfigError::Cli`] for arity/parse problems (including `--help`),
    /// [`ConfigError::InvalidArgument`] for out-of-range values, and
    /// [`ConfigError::File`]/[`ConfigError::Parse`] for an unusable settings file.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut config = Self::from_arg_matches(&matches)?;

        if let Some(path) = config.config_file.clone() {
            let settings = FileSettings::load(&path)?;
            config.merge_file_settings(settings, &matches);
        }

        config.post_process()?;
        config.validate()?;
        Ok(config)
    }

    fn merge_file_settings(&mut self, settings: FileSettings, matches: &ArgMatches) {
        if let Some(output) = settings.output
            && left_at_default(matches, "output")
        {
            self.output = output;
        }
        if let Some(max_iterations) = settings.max_iterations
            && left_at_default(matches, "max_iterations")
        {
            self.max_iterations = max_iterations;
        }
        if let Some(log_level) = settings.log_level
            && left_at_default(matches, "log_level")
        {
            self.log_level = log_level;
        }
        if let Some(log_format) = settings.log_format
            && left_at_default(matches, "log_format")
        {
            self.log_format = log_format;
        }
    }

    fn post_process(&mut self) -> Result<(), ConfigError> {
        self.clusters = usize::try_from(self.k)
            .ok()
            .filter(|&k| k > 0)
            .ok_or_else(|| {
                ConfigError::InvalidArgument("k must be an integer greater than 0".to_string())
            })?;
        Ok(())
    }

    /// Cluster count, guaranteed positive after construction.
    #[must_use]
    pub fn k(&self) -> usize {
        self.clusters
    }

    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

fn left_at_default(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.value_source(id), None | Some(ValueSource::DefaultValue))
}

/// One-line usage string, e.g. `Usage: kmeans2d [OPTIONS] <K> <INPUT>`.
#[must_use]
pub fn usage() -> String {
    Config::command().render_usage().to_string()
}
