use std::process::ExitCode;

use kmeans2d::{
    app,
    config::{self, Config},
    error::failure_report,
    observability,
};

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => {
            // clap renders its own usage block; help/version exit cleanly.
            if let config::ConfigError::Cli(clap_err) = &err {
                // A failed write to stdout/stderr leaves nothing to report to.
                if clap_err.print().is_err() {
                    return ExitCode::FAILURE;
                }
                return if err.is_informational() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                };
            }
            eprintln!("{err}");
            eprintln!("{}", config::usage());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = observability::init(config.log_level(), config.log_format()) {
        eprintln!("failed to initialize logging: {err}");
    }
    observability::install_panic_hook();

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_report(&err));
            ExitCode::FAILURE
        }
    }
}
