//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::render::WidgetArgs;
use crate::settings::Instance;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

static ID_BASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("id base pattern is valid"));

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Path to the instance store file
    pub store_path: PathBuf,

    /// Wrapper markup for rendered widgets
    pub args: WidgetArgs,

    /// Widget type base for form field ids and names
    pub id_base: String,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ store: {}, id_base: {}, wrapped: {} }}",
            self.store_path.display(),
            self.id_base,
            !self.args.before_widget.is_empty() || !self.args.after_widget.is_empty(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store path is empty
    /// - The form id base is empty or contains invalid characters
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let store_path = Self::resolve_store_path(cli, toml)?;
        let id_base = Self::resolve_id_base(toml)?;
        let args = toml.map(|t| t.markup.clone()).unwrap_or_default();

        Ok(Self {
            store_path,
            args,
            id_base,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_store_path(cli: &Cli, toml: Option<&TomlConfig>) -> Result<PathBuf, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let path = cli
            .store
            .clone()
            .or_else(|| toml.and_then(|t| t.store.path.as_ref().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from(defaults::STORE_PATH));

        if path.as_os_str().is_empty() {
            return Err(ConfigError::empty(
                field::STORE_PATH,
                "Use --store or set store.path in config file",
            ));
        }

        Ok(path)
    }

    fn resolve_id_base(toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let id_base = toml
            .and_then(|t| t.form.id_base.as_deref())
            .unwrap_or(defaults::ID_BASE);

        if id_base.is_empty() {
            return Err(ConfigError::empty(
                field::ID_BASE,
                "Remove form.id_base to use the default",
            ));
        }

        if !ID_BASE.is_match(id_base) {
            return Err(ConfigError::InvalidIdBase {
                value: id_base.to_string(),
            });
        }

        Ok(id_base.to_string())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parses `key=value` / `key: value` assignments into an instance of text values.
///
/// Later assignments of the same key win.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidAssignment`] for strings without a separator
/// or with an empty key.
pub fn parse_assignments(assignments: &[String]) -> Result<Instance, ConfigError> {
    let mut instance = Instance::new();
    for assignment in assignments {
        let (key, value) = parse_assignment(assignment)?;
        instance.insert(key, value);
    }
    Ok(instance)
}

fn parse_assignment(s: &str) -> Result<(String, String), ConfigError> {
    // Try "key=value" format first, then "key: value"
    let (key, value) = s
        .split_once('=')
        .or_else(|| s.split_once(':'))
        .ok_or_else(|| ConfigError::InvalidAssignment {
            value: s.to_string(),
        })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::InvalidAssignment {
            value: s.to_string(),
        });
    }

    Ok((key.to_string(), value.trim().to_string()))
}
