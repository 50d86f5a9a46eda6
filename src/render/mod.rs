//! Output rendering for placed widgets.
//!
//! This module provides:
//! - Host wrapper markup ([`WidgetArgs`])
//! - The title hook ([`TitleFilter`], [`PassthroughTitle`])
//! - Render results ([`Rendered`], [`RenderOutcome`])
//! - External script handling ([`ScriptAsset`], [`ScriptQueue`])
//!
//! A render ends in exactly one of two states: the widget is misconfigured
//! (a plain-text notice, no element, no script) or it is rendered (element,
//! inline loader script, and a script asset to enqueue).

mod error;
mod output;
mod scripts;

#[cfg(test)]
mod output_tests;

use serde::Deserialize;

pub use error::RenderError;
pub use output::render_widget;
pub use scripts::{ScriptAsset, ScriptQueue};

/// Wrapper markup supplied by the host around a widget and its title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetArgs {
    /// Emitted before the widget.
    pub before_widget: String,
    /// Emitted after the widget.
    pub after_widget: String,
    /// Emitted before the title.
    pub before_title: String,
    /// Emitted after the title.
    pub after_title: String,
}

/// Hook applied to the escaped widget title before output.
pub trait TitleFilter {
    /// Returns the title to display.
    fn filter_title(&self, title: String) -> String;
}

/// Title filter that leaves the title unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTitle;

impl TitleFilter for PassthroughTitle {
    fn filter_title(&self, title: String) -> String {
        title
    }
}

/// Terminal state of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Project, feed or token missing; only a notice was rendered.
    Misconfigured,
    /// The widget element was rendered and needs `script` on the page.
    Rendered {
        /// The hosted widget script to enqueue.
        script: ScriptAsset,
    },
}

/// Markup produced for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Complete markup, including the host wrappers.
    pub html: String,
    /// Which terminal state the render reached.
    pub outcome: RenderOutcome,
}

impl Rendered {
    /// Returns the script to enqueue, if the widget rendered.
    #[must_use]
    pub const fn script(&self) -> Option<&ScriptAsset> {
        match &self.outcome {
            RenderOutcome::Rendered { script } => Some(script),
            RenderOutcome::Misconfigured => None,
        }
    }

    /// Returns `true` if the widget rendered only the misconfiguration notice.
    #[must_use]
    pub const fn is_misconfigured(&self) -> bool {
        matches!(self.outcome, RenderOutcome::Misconfigured)
    }
}
