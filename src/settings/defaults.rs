//! Default tables and fixed constants.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

use super::value::{Choice, DefaultValue, FieldDefault};

/// Widget script version used when none (or an invalid one) is configured.
pub const DEFAULT_WIDGET_VERSION: &str = "1.8.2";

/// Prefix of the element id derived from the feed id.
pub const HTML_ID_PREFIX: &str = "tagplay-widget-";

/// Number of feed id characters used in a derived element id.
pub const HTML_ID_FEED_CHARS: usize = 6;

/// Base URL of the hosted widget script.
pub const SCRIPT_BASE_URL: &str = "https://api.tagplay.co/";

/// File name of the hosted widget script under its version directory.
pub const SCRIPT_FILE: &str = "tagplay-widget.min.js";

/// Script queue handle shared by every widget on a page.
pub const SCRIPT_HANDLE: &str = "tagplay_widget";

/// Shortcode tag.
pub const SHORTCODE_TAG: &str = "tagplay-widget";

/// Display name of the widget in host widget lists.
pub const WIDGET_NAME: &str = "Tagplay Widget";

/// One-line description shown with [`WIDGET_NAME`].
pub const WIDGET_DESCRIPTION: &str = "Displays your latest social media posts.";

/// Notice rendered in place of a widget missing its identifiers.
pub const MISCONFIGURED_NOTICE: &str = "Misconfigured widget: project, feed or token missing";

/// Display attributes whose serialized form is negated (`data-no-*`).
///
/// Shared by the serializer and the shortcode `no_<attr>` translation.
pub const INVERTED_ATTRIBUTES: [&str; 4] = ["videos", "images", "link_image", "link_description"];

/// Returns `true` if `key` is serialized with inverted sense.
#[must_use]
pub fn is_inverted(key: &str) -> bool {
    INVERTED_ATTRIBUTES.contains(&key)
}

const TYPE_CHOICES: &[Choice] = &[Choice::new("grid", "Grid"), Choice::new("waterfall", "Waterfall")];

const STYLE_CHOICES: &[Choice] = &[
    Choice::new("minimal", "No style"),
    Choice::new("style-1", "Default"),
];

const TEXT_CHOICES: &[Choice] = &[
    Choice::new("original", "Show hashtags"),
    Choice::new("normalized", "Strip #"),
    Choice::new("stripped", "Remove trigger hashtags"),
    Choice::new("tagless", "Remove all trailing tags"),
];

/// Connection settings, in declaration order.
pub const CONNECTION_SETTINGS: &[FieldDefault] = &[
    FieldDefault::new("title", DefaultValue::Text("")),
    FieldDefault::new("project_id", DefaultValue::Text("")),
    FieldDefault::new("feed_id", DefaultValue::Text("")),
    FieldDefault::new("token", DefaultValue::Text("")),
    FieldDefault::new("html_id", DefaultValue::Text("")),
    FieldDefault::new("widget_version", DefaultValue::Text(DEFAULT_WIDGET_VERSION)),
];

/// Display attributes, in declaration order (which is also serialization order).
pub const DISPLAY_ATTRIBUTES: &[FieldDefault] = &[
    FieldDefault::new(
        "type",
        DefaultValue::Choice {
            value: "grid",
            options: TYPE_CHOICES,
        },
    ),
    FieldDefault::new(
        "style",
        DefaultValue::Choice {
            value: "style-1",
            options: STYLE_CHOICES,
        },
    ),
    FieldDefault::new(
        "text",
        DefaultValue::Choice {
            value: "tagless",
            options: TEXT_CHOICES,
        },
    ),
    FieldDefault::new("include_usernames", DefaultValue::Bool(true)),
    FieldDefault::new("include_captions", DefaultValue::Bool(true)),
    FieldDefault::new("videos", DefaultValue::Bool(true)),
    FieldDefault::new("images", DefaultValue::Bool(true)),
    FieldDefault::new("include_link_metadata", DefaultValue::Bool(true)),
    FieldDefault::new("link_image", DefaultValue::Bool(true)),
    FieldDefault::new("link_description", DefaultValue::Bool(true)),
    FieldDefault::new("include_dates", DefaultValue::Bool(false)),
    FieldDefault::new("include_times", DefaultValue::Bool(false)),
    FieldDefault::new("include_like", DefaultValue::Bool(false)),
    FieldDefault::new("include_flag", DefaultValue::Bool(false)),
    FieldDefault::new("text_color", DefaultValue::Text("")),
    FieldDefault::new("background_color", DefaultValue::Text("")),
    FieldDefault::new("rows", DefaultValue::Int(4)),
    FieldDefault::new("cols", DefaultValue::Int(1)),
    FieldDefault::new("spacing", DefaultValue::Int(10)),
    FieldDefault::new("responsive", DefaultValue::Bool(false)),
];

/// Looks up the default for `key` in either table.
#[must_use]
pub fn field_default(key: &str) -> Option<&'static FieldDefault> {
    CONNECTION_SETTINGS
        .iter()
        .chain(DISPLAY_ATTRIBUTES)
        .find(|field| field.key == key)
}
