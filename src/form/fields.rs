//! Form field descriptors.

use crate::merge::{base_settings, display_attributes};
use crate::settings::defaults::{DEFAULT_WIDGET_VERSION, field_default};
use crate::settings::{Choice, DISPLAY_ATTRIBUTES, FieldKind, Instance, Value};

/// Width hint for a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// A few characters wide (numeric values).
    Narrow,
    /// Full width.
    Wide,
}

/// One option of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: &'static str,
    /// Displayed label.
    pub label: &'static str,
    /// Whether this option is the current value.
    pub selected: bool,
}

/// The input control of a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Single-choice selector.
    Select {
        /// Options in display order.
        options: Vec<SelectOption>,
    },
    /// Checkbox.
    Checkbox {
        /// Whether the box is checked.
        checked: bool,
    },
    /// Free text input.
    Text {
        /// Current value (unescaped).
        value: String,
        /// Width hint.
        width: Width,
    },
}

/// A single editable field of the admin form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Setting key.
    pub key: &'static str,
    /// Label text.
    pub label: String,
    /// Input control.
    pub control: Control,
}

const CONNECTION_FIELDS: [(&str, &str); 6] = [
    (
        "title",
        "Title (displayed above the widget if set; leave blank for no title):",
    ),
    (
        "widget_version",
        "Widget version (leave this alone unless you know what you're doing):",
    ),
    (
        "html_id",
        "HTML ID (leave blank for default derived from feed ID; if you have multiple widgets of \
         the same feed, you must customize this to make sure your widgets have unique IDs):",
    ),
    ("project_id", "Project ID:"),
    ("feed_id", "Feed ID:"),
    ("token", "Token:"),
];

/// Builds a label from a key: underscores become spaces, first letter capitalized.
#[must_use]
pub fn label(key: &str, colon: bool) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    let mut label: String = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();
    if colon {
        label.push(':');
    }
    label
}

/// Returns the form fields for `instance`: connection settings, then display attributes.
#[must_use]
pub fn render_fields(instance: &Instance) -> Vec<FormField> {
    let settings = base_settings(instance);
    let attributes = display_attributes(instance);

    let connection = CONNECTION_FIELDS.iter().map(|&(key, text)| {
        let mut value = settings.string(key);
        if key == "widget_version" && value.is_empty() {
            value = DEFAULT_WIDGET_VERSION.to_string();
        }
        FormField {
            key,
            label: text.to_string(),
            control: Control::Text {
                value,
                width: Width::Wide,
            },
        }
    });

    let display = DISPLAY_ATTRIBUTES
        .iter()
        .map(|field| attribute_field(field.key, &attributes));

    connection.chain(display).collect()
}

fn attribute_field(key: &'static str, attributes: &Instance) -> FormField {
    let kind = field_default(key).map(|field| (field.kind(), field.value.choices()));
    let current = attributes.get(key);

    match kind {
        Some((_, Some(choices))) => FormField {
            key,
            label: label(key, true),
            control: Control::Select {
                options: select_options(choices, &attributes.string(key)),
            },
        },
        Some((FieldKind::Boolean, None)) => FormField {
            key,
            label: label(key, false),
            control: Control::Checkbox {
                checked: current.is_some_and(Value::is_truthy),
            },
        },
        other => FormField {
            key,
            label: label(key, true),
            control: Control::Text {
                value: attributes.string(key),
                width: if matches!(other, Some((FieldKind::Integer, _))) {
                    Width::Narrow
                } else {
                    Width::Wide
                },
            },
        },
    }
}

fn select_options(choices: &'static [Choice], current: &str) -> Vec<SelectOption> {
    choices
        .iter()
        .map(|choice| SelectOption {
            value: choice.value,
            label: choice.label,
            selected: choice.value == current,
        })
        .collect()
}
