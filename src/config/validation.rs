use super::{Config, ConfigError};

impl Config {
    /// # Errors
    /// [`ConfigError::InvalidArgument`] when a value is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations() == 0 {
            return Err(ConfigError::InvalidArgument(
                "Maximum iterations must be greater than 0".to_string(),
            ));
        }

        if self.output().as_os_str().is_empty() {
            return Err(ConfigError::InvalidArgument(
                "Output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
