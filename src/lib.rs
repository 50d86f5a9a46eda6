//! Tagplay Widget
//!
//! A library for rendering Tagplay social media feed widgets: merging
//! per-placement settings with defaults, validating submitted settings,
//! building admin forms, expanding `[tagplay-widget]` shortcodes, and
//! emitting the `data-*` container plus loader script consumed by the
//! hosted Tagplay script.

pub mod attributes;
pub mod config;
pub mod escape;
pub mod form;
pub mod merge;
pub mod render;
pub mod settings;
pub mod shortcode;
pub mod store;
pub mod templates;
pub mod validate;
pub mod widget;

pub use render::{Rendered, WidgetArgs};
pub use settings::{Instance, Value};
pub use widget::{TagplayWidget, Widget};
