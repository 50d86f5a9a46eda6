//! Process-level plumbing for the host binary: exit codes, logging and
//! hints for configuration mistakes.

use tagplay_widget::config::{ConfigError, defaults, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Command completed.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Bad configuration file, bad form id base or a malformed `--set` (exit code 1).
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Unreadable store or input, or a render failure (exit code 2).
    ///
    /// `ExitCode::from` is not `const`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Returns a follow-up hint for `error`, if there is a useful one.
pub fn config_hint(error: &ConfigError) -> Option<String> {
    match error {
        ConfigError::FileRead { .. } | ConfigError::TomlParse(_) => Some(format!(
            "Run 'tagplay-widget init' to write a fresh {} template.",
            defaults::CONFIG_FILE
        )),
        ConfigError::Empty { field: f, .. } if *f == field::STORE_PATH => Some(format!(
            "Omit store.path to keep placements in {}.",
            defaults::STORE_PATH
        )),
        ConfigError::Empty { .. } | ConfigError::InvalidIdBase { .. } => Some(format!(
            "Form fields are named after form.id_base; the default is '{}'.",
            defaults::ID_BASE
        )),
        ConfigError::InvalidAssignment { .. } => {
            Some("Pass settings as --set rows=6 or --set \"title: Latest posts\".".to_string())
        }
        ConfigError::FileWrite { .. } => None,
    }
}

/// Prints the hint for `error` to stderr.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Installs the stderr log subscriber.
///
/// Stdout carries rendered markup, so logs never go there. `RUST_LOG`
/// overrides the default level (WARN, or DEBUG with `--verbose`).
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
