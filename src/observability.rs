use anyhow::{Error, Result};
use once_cell::sync::OnceCell;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LogLevel};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global tracing subscriber once.
///
/// Diagnostics go to stderr so that stdout only carries program output. A
/// `RUST_LOG` filter, when set, takes precedence over `level`.
///
/// # Errors
/// Returns an error if a global subscriber could not be installed.
pub fn init(level: LogLevel, format: LogFormat) -> Result<()> {
    TRACING_INIT.get_or_try_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = match format {
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .compact(),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .json(),
                )
                .try_init(),
        };
        installed.map_err(|e: tracing_subscriber::util::TryInitError| Error::msg(e.to_string()))?;

        debug!(level = level.as_str(), ?format, "tracing initialized");
        Ok::<(), Error>(())
    })?;
    Ok(())
}

/// Logs panics through tracing before the default hook runs.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let message = panic_info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(String::as_str)
            })
            .unwrap_or("unknown panic payload");

        if let Some(location) = panic_info.location() {
            tracing::error!(
                file = location.file(),
                line = location.line(),
                column = location.column(),
                message,
                "panic occurred"
            );
        } else {
            tracing::error!(message, "panic occurred without location information");
        }
        default_hook(panic_info);
    }));
}
