//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use crate::render::WidgetArgs;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Instance store section
    #[serde(default)]
    pub store: StoreSection,

    /// Wrapper markup placed around rendered widgets
    #[serde(default)]
    pub markup: WidgetArgs,

    /// Admin form section
    #[serde(default)]
    pub form: FormSection,
}

/// Instance store configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// Path to the instance store file
    pub path: Option<String>,
}

/// Admin form configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSection {
    /// Widget type base used in field ids and names
    pub id_base: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Tagplay Widget Configuration File
# Documentation: https://tagplay.github.io/tagplay-wordpress-plugin

[store]
# Path to the file holding each placement's settings
# (default: tagplay-instances.json, can be overridden by --store CLI flag)
# path = "tagplay-instances.json"

[markup]
# Markup placed around each rendered widget and its title.
# Shortcodes are always rendered without these wrappers.
# before_widget = '<section class="widget tagplay">'
# after_widget = '</section>'
# before_title = '<h2 class="widget-title">'
# after_title = '</h2>'

[form]
# Widget type base used in admin form field ids and names (default: tagplay_widget)
# id_base = "tagplay_widget"
"#
    .to_string()
}
