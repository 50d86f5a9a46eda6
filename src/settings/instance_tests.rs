//! Tests for settings values and instances.

use super::defaults::{field_default, is_inverted};
use super::{DISPLAY_ATTRIBUTES, FieldKind, Instance, Value};

mod value {
    use super::*;

    #[test]
    fn truthiness_matches_loose_semantics() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::from("0").is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(4).is_truthy());
        assert!(Value::from("on").is_truthy());
        assert!(Value::from("false").is_truthy());
    }

    #[test]
    fn display_renders_booleans_like_the_host() {
        assert_eq!(Value::Bool(true).to_string(), "1");
        assert_eq!(Value::Bool(false).to_string(), "");
        assert_eq!(Value::Int(10).to_string(), "10");
        assert_eq!(Value::from("grid").to_string(), "grid");
    }

    #[test]
    fn deserializes_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"[true, 3, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![Value::Bool(true), Value::Int(3), Value::from("x")]
        );
    }
}

mod instance {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut instance: Instance = [("a", Value::Int(1)), ("b", Value::Int(2))]
            .into_iter()
            .collect();

        let previous = instance.insert("a", 5_i64);

        assert_eq!(previous, Some(Value::Int(1)));
        assert_eq!(instance.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(instance.get("a"), Some(&Value::Int(5)));
    }

    #[test]
    fn remove_drops_key() {
        let mut instance: Instance = [("a", "x")].into_iter().collect();
        assert_eq!(instance.remove("a"), Some(Value::from("x")));
        assert!(instance.is_empty());
        assert_eq!(instance.remove("a"), None);
    }

    #[test]
    fn union_is_left_biased() {
        let left: Instance = [("a", "left")].into_iter().collect();
        let right: Instance = [("a", "right"), ("b", "new")].into_iter().collect();

        let merged = left.union(right);

        assert_eq!(merged.string("a"), "left");
        assert_eq!(merged.string("b"), "new");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn json_round_trip_keeps_key_order() {
        let json = r#"{"zeta":"z","alpha":true,"mid":7}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();

        assert_eq!(instance.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&instance).unwrap(), json);
    }

    #[test]
    fn string_of_missing_key_is_empty() {
        assert_eq!(Instance::new().string("title"), "");
        assert!(!Instance::new().is_truthy("title"));
    }
}

mod tables {
    use super::*;

    #[test]
    fn inverted_attributes_are_boolean_display_attributes() {
        for key in super::super::INVERTED_ATTRIBUTES {
            let field = DISPLAY_ATTRIBUTES.iter().find(|f| f.key == key).unwrap();
            assert_eq!(field.kind(), FieldKind::Boolean, "{key}");
            assert!(is_inverted(key));
        }
        assert!(!is_inverted("include_dates"));
    }

    #[test]
    fn enumerated_fields_carry_their_choices() {
        let style = field_default("style").unwrap();
        let values: Vec<_> = style.value.choices().unwrap().iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["minimal", "style-1"]);

        assert_eq!(field_default("text").unwrap().value.choices().unwrap().len(), 4);
        assert!(field_default("rows").unwrap().value.choices().is_none());
    }

    #[test]
    fn lookup_covers_both_tables() {
        assert_eq!(field_default("token").unwrap().kind(), FieldKind::Text);
        assert_eq!(field_default("spacing").unwrap().kind(), FieldKind::Integer);
        assert!(field_default("unknown").is_none());
    }
}
