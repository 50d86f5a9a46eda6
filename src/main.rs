//! Tagplay Widget
//!
//! Entry point for the tagplay-widget command-line host.

use std::process::ExitCode;

use tagplay_widget::config::{Cli, ValidatedConfig};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // `init` writes the config file, so it must not require one to exist
    let loaded = if cli.is_init() {
        ValidatedConfig::from_raw(&cli, None)
    } else {
        ValidatedConfig::load(&cli)
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    match run::execute(&config, cli.command) {
        Ok(output) => {
            println!("{output}");
            exit_code::SUCCESS
        }
        Err(run::RunError::Config(e)) => {
            eprintln!("Configuration error: {e}");
            exit_code::CONFIG_ERROR
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
