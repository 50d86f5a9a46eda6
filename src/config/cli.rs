//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;
use crate::settings::defaults::WIDGET_DESCRIPTION;

/// Tagplay Widget
///
/// Renders Tagplay social media feed widgets, their admin forms and
/// `[tagplay-widget]` shortcodes.
#[derive(Debug, Parser)]
#[command(name = "tagplay-widget")]
#[command(version, about = WIDGET_DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the instance store file
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for tagplay-widget
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a widget and the scripts it needs
    Render {
        /// Stored placement to render
        #[arg(long, short)]
        number: Option<u32>,

        /// Setting overrides in 'key=value' or 'key: value' format (can be specified multiple times)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        settings: Vec<String>,
    },

    /// Print the admin form for a placement
    Form {
        /// Placement number
        #[arg(long, short)]
        number: Option<u32>,
    },

    /// Validate submitted settings and store them for a placement
    Update {
        /// Placement number
        #[arg(long, short)]
        number: Option<u32>,

        /// Submitted settings in 'key=value' or 'key: value' format (can be specified multiple times)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        settings: Vec<String>,
    },

    /// Expand [tagplay-widget] shortcodes in text (from the argument, a file, or stdin)
    Shortcode {
        /// Text containing shortcodes
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
