//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A field was present but empty.
    #[error("Empty value for {field}. {hint}")]
    Empty {
        /// Name of the field
        field: &'static str,
        /// Hint for how to fix it
        hint: &'static str,
    },

    /// Invalid form id base.
    #[error("Invalid form id base '{value}': use lowercase letters, digits, '_' or '-'")]
    InvalidIdBase {
        /// The invalid value provided
        value: String,
    },

    /// Invalid setting assignment.
    #[error("Invalid setting '{value}': expected 'key=value' or 'key: value'")]
    InvalidAssignment {
        /// The invalid assignment string
        value: String,
    },
}

/// Well-known field names for `Empty` errors.
pub mod field {
    /// The instance store path.
    pub const STORE_PATH: &str = "store.path";
    /// The form id base.
    pub const ID_BASE: &str = "form.id_base";
}

impl ConfigError {
    /// Creates an `Empty` error for a field.
    #[must_use]
    pub const fn empty(field: &'static str, hint: &'static str) -> Self {
        Self::Empty { field, hint }
    }
}
