//! Validation and sanitization of submitted widget settings.
//!
//! Validation never fails: every input is normalized into a complete,
//! safe-to-persist instance.

use tracing::debug;

use crate::escape::{esc_attr, is_semver, strip_tags};
use crate::merge::complete;
use crate::settings::defaults::{DEFAULT_WIDGET_VERSION, field_default};
use crate::settings::{DISPLAY_ATTRIBUTES, FieldKind, Instance, Value};

/// Validates a submitted instance.
///
/// `previous` is the stored instance being updated, if any. When it exists
/// and is non-empty, boolean attributes missing from `raw` are set to
/// `false`: unchecked checkboxes are simply absent from a form submission.
#[must_use]
pub fn validate(mut raw: Instance, previous: Option<&Instance>) -> Instance {
    if previous.is_some_and(|p| !p.is_empty()) {
        backfill_unchecked(&mut raw);
    }

    complete(&raw)
        .into_iter()
        .map(|(key, value)| {
            let value = normalize(&key, value);
            (key, value)
        })
        .collect()
}

fn backfill_unchecked(raw: &mut Instance) {
    for field in DISPLAY_ATTRIBUTES {
        if field.kind() == FieldKind::Boolean && !raw.contains_key(field.key) {
            raw.insert(field.key, false);
        }
    }
}

fn normalize(key: &str, value: Value) -> Value {
    match key {
        "title" => Value::Text(strip_tags(&value.to_string())),
        "widget_version" => {
            let version = value.to_string();
            if is_semver(&version) {
                Value::Text(version)
            } else {
                debug!(version = %version, "Invalid widget version, using {DEFAULT_WIDGET_VERSION}");
                Value::from(DEFAULT_WIDGET_VERSION)
            }
        }
        _ => coerce(key, value),
    }
}

/// Coerces a value to its field's kind, escaping whatever stays text.
fn coerce(key: &str, value: Value) -> Value {
    let kind = field_default(key).map(|field| field.kind());
    match (kind, value) {
        (Some(FieldKind::Boolean), value) => Value::Bool(value.is_truthy()),
        (Some(FieldKind::Integer), Value::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map_or_else(|_| Value::Text(esc_attr(&text)), Value::Int),
        (_, Value::Text(text)) => Value::Text(esc_attr(&text)),
        (_, other) => other,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
