//! Command execution.
//!
//! This module acts as the host for the widget: it loads and saves
//! placements through the instance store, feeds submissions through
//! validation, and assembles rendered markup with the scripts it requests.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use tagplay_widget::config::{
    Command, ConfigError, ValidatedConfig, defaults, parse_assignments, write_default_config,
};
use tagplay_widget::escape::esc_html;
use tagplay_widget::form::WidgetFieldNaming;
use tagplay_widget::render::{RenderError, ScriptQueue, TitleFilter};
use tagplay_widget::settings::Instance;
use tagplay_widget::shortcode::expand;
use tagplay_widget::store::{FileInstanceStore, InstanceStore, StoreError};
use tagplay_widget::{TagplayWidget, Widget};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid command input (e.g. a malformed `--set`).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Instance store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Markup rendering failure.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Failed to read shortcode input.
    #[error("Failed to read input '{}': {source}", path.display())]
    Input {
        /// Input path (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to print an instance.
    #[error("Failed to format instance: {0}")]
    Format(#[source] serde_json::Error),
}

/// Executes `command`, returning what should be printed to stdout.
///
/// # Errors
///
/// Returns an error if input cannot be parsed or read, the store fails, or
/// rendering fails.
pub fn execute(config: &ValidatedConfig, command: Command) -> Result<String, RunError> {
    let store = FileInstanceStore::new(&config.store_path);
    let widget = TagplayWidget::new()?;
    dispatch(config, &store, &widget, command)
}

fn dispatch<S, F>(
    config: &ValidatedConfig,
    store: &S,
    widget: &TagplayWidget<F>,
    command: Command,
) -> Result<String, RunError>
where
    S: InstanceStore,
    F: TitleFilter,
{
    match command {
        Command::Render { number, settings } => {
            render_placement(config, store, widget, number, &settings)
        }
        Command::Form { number } => {
            let number = number.unwrap_or(defaults::PLACEMENT);
            let instance = store.load(number)?.unwrap_or_default();
            let naming = WidgetFieldNaming::new(config.id_base.clone(), number);
            Ok(format!(
                "<h3>{}</h3>\n<p class=\"description\">{}</p>\n{}",
                esc_html(widget.name()),
                esc_html(widget.description()),
                widget.form_html(&naming, &instance)?
            ))
        }
        Command::Update { number, settings } => {
            update_placement(store, widget, number.unwrap_or(defaults::PLACEMENT), &settings)
        }
        Command::Shortcode { text, file } => {
            let content = read_content(text, file.as_deref())?;
            let expanded = expand(&content, widget)?;
            Ok(with_scripts(expanded.html, &expanded.scripts))
        }
        Command::Init { output } => {
            write_default_config(&output)?;
            Ok(format!(
                "Configuration template written to: {}",
                output.display()
            ))
        }
    }
}

fn render_placement<S: InstanceStore, F: TitleFilter>(
    config: &ValidatedConfig,
    store: &S,
    widget: &TagplayWidget<F>,
    number: Option<u32>,
    settings: &[String],
) -> Result<String, RunError> {
    let stored = match number {
        Some(number) => store.load(number)?.unwrap_or_else(|| {
            tracing::warn!(number, "No stored settings for placement, using defaults");
            Instance::new()
        }),
        None => Instance::new(),
    };
    let instance = parse_assignments(settings)?.union(stored);

    let rendered = widget.render(&config.args, &instance)?;

    let mut scripts = ScriptQueue::new();
    if let Some(script) = rendered.script() {
        scripts.enqueue(script.clone());
    }
    Ok(with_scripts(rendered.html, &scripts))
}

fn update_placement<S: InstanceStore, F: TitleFilter>(
    store: &S,
    widget: &TagplayWidget<F>,
    number: u32,
    settings: &[String],
) -> Result<String, RunError> {
    let submitted = parse_assignments(settings)?;
    let previous = store.load(number)?;

    let instance = widget.update(submitted, previous.as_ref());
    store.save(number, &instance)?;
    tracing::info!(number, "Stored widget settings");

    serde_json::to_string_pretty(&instance).map_err(RunError::Format)
}

fn read_content(text: Option<String>, file: Option<&Path>) -> Result<String, RunError> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(|e| RunError::Input {
            path: path.to_path_buf(),
            source: e,
        });
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| RunError::Input {
            path: PathBuf::from("-"),
            source: e,
        })?;
    Ok(content)
}

/// Appends the queued script tags after `html`, as a host prints them in the page footer.
fn with_scripts(html: String, scripts: &ScriptQueue) -> String {
    if scripts.is_empty() {
        return html;
    }
    format!("{html}\n{}", scripts.to_html())
}
