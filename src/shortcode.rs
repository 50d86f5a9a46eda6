//! The `[tagplay-widget ...]` shortcode.
//!
//! Shortcode attributes name inverted display attributes in their negated
//! form (`no_images="on"`), so they are translated into the internal
//! positive sense (`images = false`) before merging with defaults.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::merge::complete;
use crate::render::{Rendered, RenderError, ScriptQueue, WidgetArgs};
use crate::settings::defaults::SHORTCODE_TAG;
use crate::settings::{INVERTED_ATTRIBUTES, Instance, Value};
use crate::widget::Widget;

static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\[(\[?){}((?:\s[^\]]*?)?)\s*/?\](\]?)",
        regex::escape(SHORTCODE_TAG)
    ))
    .expect("shortcode pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)|([\w-]+)\s*=\s*'([^']*)'(?:\s|$)|([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)|"([^"]*)"(?:\s|$)|'([^']*)'(?:\s|$)|(\S+)(?:\s|$)"#,
    )
    .expect("attribute pattern is valid")
});

/// Parses shortcode attribute text into `(key, value)` pairs.
///
/// Values may be double-quoted, single-quoted or bare. Keys are lowercased.
/// Positional (key-less) tokens are ignored.
#[must_use]
pub fn parse_attributes(text: &str) -> Vec<(String, String)> {
    let normalized = text.replace(['\u{a0}', '\u{200b}'], " ");
    ATTRIBUTE
        .captures_iter(&normalized)
        .filter_map(|caps| {
            [(1, 2), (3, 4), (5, 6)].into_iter().find_map(|(k, v)| {
                let key = caps.get(k)?;
                let value = caps.get(v).map_or("", |m| m.as_str());
                Some((key.as_str().to_lowercase(), value.to_string()))
            })
        })
        .collect()
}

/// Builds a complete instance from shortcode attributes.
///
/// `no_<attr>` keys of inverted attributes become the negated `<attr>`.
/// Unknown keys are dropped by the merge.
#[must_use]
pub fn shortcode_instance<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Instance
where
    K: Into<String>,
    V: Into<Value>,
{
    let mut atts: Instance = attributes.into_iter().collect();

    for attribute in INVERTED_ATTRIBUTES {
        if let Some(negated) = atts.remove(&format!("no_{attribute}")) {
            atts.insert(attribute, !negated.is_truthy());
        }
    }

    complete(&atts)
}

/// Renders a single shortcode from its attribute text.
///
/// Shortcodes render without wrapper markup.
///
/// # Errors
///
/// Returns [`RenderError`] if the markup machinery fails.
pub fn render_shortcode<W: Widget + ?Sized>(widget: &W, text: &str) -> Result<Rendered, RenderError> {
    let instance = shortcode_instance(parse_attributes(text));
    widget.render(&WidgetArgs::default(), &instance)
}

/// Content with every shortcode expanded.
#[derive(Debug, Clone, Default)]
pub struct Expanded {
    /// The content with shortcodes replaced by widget markup.
    pub html: String,
    /// Scripts requested by the rendered widgets.
    pub scripts: ScriptQueue,
}

/// Replaces every `[tagplay-widget ...]` shortcode in `content` with widget markup.
///
/// A doubled form such as `[[tagplay-widget]]` is an escape and is emitted
/// as the literal `[tagplay-widget]`.
///
/// # Errors
///
/// Returns [`RenderError`] if a widget fails to render.
pub fn expand<W: Widget + ?Sized>(content: &str, widget: &W) -> Result<Expanded, RenderError> {
    let mut expanded = Expanded::default();
    let mut last = 0;

    for caps in SHORTCODE.captures_iter(content) {
        let Some(whole) = caps.get(0) else { continue };
        expanded.html.push_str(&content[last..whole.start()]);
        last = whole.end();

        let open = caps.get(1).map_or("", |m| m.as_str());
        let close = caps.get(3).map_or("", |m| m.as_str());
        if !open.is_empty() && !close.is_empty() {
            expanded.html.push_str(&whole.as_str()[1..whole.as_str().len() - 1]);
            continue;
        }

        let text = caps.get(2).map_or("", |m| m.as_str());
        debug!(attributes = text.trim(), "Expanding tagplay-widget shortcode");
        let rendered = render_shortcode(widget, text)?;

        expanded.html.push_str(open);
        expanded.html.push_str(&rendered.html);
        expanded.html.push_str(close);
        if let Some(script) = rendered.script() {
            expanded.scripts.enqueue(script.clone());
        }
    }

    expanded.html.push_str(&content[last..]);
    Ok(expanded)
}

#[cfg(test)]
#[path = "shortcode_tests.rs"]
mod tests;
