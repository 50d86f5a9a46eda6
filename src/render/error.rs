//! Error types for markup rendering.

use thiserror::Error;

/// Error type for markup rendering.
///
/// Misconfigured widgets are not errors; they render a notice. These
/// variants cover failures of the rendering machinery itself.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A built-in template failed to compile.
    #[error("Invalid template '{name}': {source}")]
    Template {
        /// Template name
        name: &'static str,
        /// Underlying template error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template failed to render.
    #[error("Failed to render template '{name}': {source}")]
    Render {
        /// Template name
        name: &'static str,
        /// Underlying render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The widget script URL could not be built.
    #[error("Invalid widget script URL: {0}")]
    ScriptUrl(String),
}
