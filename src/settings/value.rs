//! Setting values and their default descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single setting value as stored in an instance.
///
/// Values arrive from several sources (stored instances, form submissions,
/// shortcode attributes), so text is always accepted even for fields whose
/// default is boolean or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Free text.
    Text(String),
}

impl Value {
    /// Returns `true` unless the value is `false`, `0`, `""` or `"0"`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Returns `true` for the presence-flag values: `true` and the checkbox literal `"on"`.
    #[must_use]
    pub fn is_flag_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s == "on",
            Self::Int(_) => false,
        }
    }

    /// Returns `true` for values that serialize to nothing: `false` and `""`.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Text(s) => s.is_empty(),
            Self::Int(_) => false,
        }
    }

    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) => Ok(()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The kind of a field, derived from its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Checkbox-style flag.
    Boolean,
    /// Numeric value.
    Integer,
    /// Free text.
    Text,
    /// One of a fixed list of choices.
    Choice,
}

/// One entry of an enumerated-choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Stored value.
    pub value: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

impl Choice {
    /// Creates a choice.
    #[must_use]
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Compile-time default for a field, tagged by field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// Text default.
    Text(&'static str),
    /// Enumerated default with its allowed options.
    Choice {
        /// Default choice value.
        value: &'static str,
        /// All allowed options, in display order.
        options: &'static [Choice],
    },
}

impl DefaultValue {
    /// Returns the field kind this default describes.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Boolean,
            Self::Int(_) => FieldKind::Integer,
            Self::Text(_) => FieldKind::Text,
            Self::Choice { .. } => FieldKind::Choice,
        }
    }

    /// Returns the choice list for enumerated fields.
    #[must_use]
    pub const fn choices(&self) -> Option<&'static [Choice]> {
        match self {
            Self::Choice { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Converts the default into an instance value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match *self {
            Self::Bool(b) => Value::Bool(b),
            Self::Int(n) => Value::Int(n),
            Self::Text(s) | Self::Choice { value: s, .. } => Value::Text(s.to_string()),
        }
    }
}

/// A named field together with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    /// Internal key, e.g. `include_captions`.
    pub key: &'static str,
    /// Default value and kind.
    pub value: DefaultValue,
}

impl FieldDefault {
    /// Creates a field default.
    #[must_use]
    pub const fn new(key: &'static str, value: DefaultValue) -> Self {
        Self { key, value }
    }

    /// Returns the field kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}
