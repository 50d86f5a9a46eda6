//! Display attribute serialization into HTML `data-*` attributes.
//!
//! Rules, per key in iteration order:
//! - the attribute name is `data-` plus the key with `_` replaced by `-`
//! - inverted keys get a `no-` prefix and their value negated
//! - `true` or `"on"` emits a bare presence flag
//! - `false` or `""` emits nothing
//! - anything else emits `name="escaped value"`

use crate::escape::esc_attr;
use crate::settings::defaults::is_inverted;
use crate::settings::{Instance, Value};

/// Serializes attributes into `data-*` tokens.
#[must_use]
pub fn serialize(attributes: &Instance) -> Vec<String> {
    attributes
        .iter()
        .filter_map(|(key, value)| attribute_token(key, value))
        .collect()
}

/// Serializes attributes into a single space-separated string.
#[must_use]
pub fn stringify(attributes: &Instance) -> String {
    serialize(attributes).join(" ")
}

fn attribute_token(key: &str, value: &Value) -> Option<String> {
    let mut name = key.replace('_', "-");
    let negated;
    let value = if is_inverted(key) {
        name.insert_str(0, "no-");
        negated = Value::Bool(!value.is_truthy());
        &negated
    } else {
        value
    };

    if value.is_flag_set() {
        Some(format!("data-{name}"))
    } else if value.is_omitted() {
        None
    } else {
        Some(format!("data-{name}=\"{}\"", esc_attr(&value.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::display_attributes;

    fn attrs<const N: usize>(pairs: [(&str, Value); N]) -> Instance {
        pairs.into_iter().collect()
    }

    #[test]
    fn empty_string_dropped_and_numbers_quoted() {
        let tokens = serialize(&attrs([
            ("text_color", Value::from("")),
            ("rows", Value::Int(4)),
        ]));
        assert_eq!(tokens, vec![r#"data-rows="4""#]);
    }

    #[test]
    fn inverted_true_emits_nothing() {
        assert!(serialize(&attrs([("images", Value::Bool(true))])).is_empty());
    }

    #[test]
    fn inverted_false_emits_negated_flag() {
        assert_eq!(
            serialize(&attrs([("images", Value::Bool(false))])),
            vec!["data-no-images"]
        );
    }

    #[test]
    fn inverted_keys_use_hyphenated_names() {
        assert_eq!(
            serialize(&attrs([("link_description", Value::from(""))])),
            vec!["data-no-link-description"]
        );
        assert!(serialize(&attrs([("link_image", Value::from("on"))])).is_empty());
    }

    #[test]
    fn on_literal_is_a_presence_flag() {
        assert_eq!(
            serialize(&attrs([("include_dates", Value::from("on"))])),
            vec!["data-include-dates"]
        );
    }

    #[test]
    fn false_is_omitted() {
        assert!(serialize(&attrs([("responsive", Value::Bool(false))])).is_empty());
    }

    #[test]
    fn text_values_are_escaped() {
        assert_eq!(
            serialize(&attrs([("background_color", Value::from(r#"red" onload="x"#))])),
            vec![r#"data-background-color="red&quot; onload=&quot;x""#]
        );
    }

    #[test]
    fn output_follows_iteration_order() {
        let tokens = serialize(&attrs([
            ("spacing", Value::Int(10)),
            ("type", Value::from("grid")),
            ("responsive", Value::Bool(true)),
        ]));
        assert_eq!(
            tokens,
            vec![r#"data-spacing="10""#, r#"data-type="grid""#, "data-responsive"]
        );
    }

    #[test]
    fn defaults_serialize_to_expected_string() {
        let rendered = stringify(&display_attributes(&Instance::new()));
        assert_eq!(
            rendered,
            r#"data-type="grid" data-style="style-1" data-text="tagless" data-include-usernames data-include-captions data-include-link-metadata data-rows="4" data-cols="1" data-spacing="10""#
        );
    }
}
