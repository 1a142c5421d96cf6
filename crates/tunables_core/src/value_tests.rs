//! Tests for the dynamic value representations.

use super::*;

#[test]
fn type_names_are_stable() {
    assert_eq!(ConfigValue::Bool(true).type_name(), "boolean");
    assert_eq!(ConfigValue::Int(1).type_name(), "integer");
    assert_eq!(ConfigValue::Float(0.5).type_name(), "float");
    assert_eq!(ConfigValue::Text("x".into()).type_name(), "text");
    assert_eq!(ConfigValue::List(vec![]).type_name(), "list");
    assert_eq!(ConfigValue::Table(vec![]).type_name(), "table");
}

#[test]
fn as_float_widens_integers() {
    assert_eq!(ConfigValue::Int(3).as_float(), Some(3.0));
    assert_eq!(ConfigValue::Float(0.25).as_float(), Some(0.25));
    assert_eq!(ConfigValue::Text("3".into()).as_float(), None);
}

#[test]
fn as_int_does_not_truncate_floats() {
    assert_eq!(ConfigValue::Float(3.5).as_int(), None);
}

#[test]
fn table_lookup_finds_keys_in_order() {
    let table = ConfigValue::Table(vec![
        ("a".to_string(), ConfigValue::Int(1)),
        ("b".to_string(), ConfigValue::Int(2)),
    ]);
    assert_eq!(table.get("b"), Some(&ConfigValue::Int(2)));
    assert_eq!(table.get("missing"), None);
    assert_eq!(ConfigValue::Int(1).get("a"), None);
}

#[test]
fn serialize_scalars_to_json() {
    let json = serde_json::to_string(&ConfigValue::Int(42)).expect("Failed to serialize");
    assert_eq!(json, "42");
    let json = serde_json::to_string(&ConfigValue::Text("#ff0000".into()))
        .expect("Failed to serialize");
    assert_eq!(json, "\"#ff0000\"");
}

#[test]
fn serialize_table_preserves_order() {
    let table = ConfigValue::Table(vec![
        ("z".to_string(), ConfigValue::Bool(true)),
        ("a".to_string(), ConfigValue::Int(1)),
    ]);
    let json = serde_json::to_string(&table).expect("Failed to serialize");
    assert_eq!(json, "{\"z\":true,\"a\":1}");
}

#[test]
fn deserialize_round_trips_nested_values() {
    let original = ConfigValue::Table(vec![
        ("enabled".to_string(), ConfigValue::Bool(false)),
        (
            "weights".to_string(),
            ConfigValue::List(vec![ConfigValue::Float(0.5), ConfigValue::Int(2)]),
        ),
    ]);
    let json = serde_json::to_string(&original).expect("Failed to serialize");
    let back: ConfigValue = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(back, original);
}

#[test]
fn deserialize_rejects_huge_unsigned() {
    let result: Result<ConfigValue, _> = serde_json::from_str("18446744073709551615");
    assert!(result.is_err());
}

#[test]
fn gui_value_shape_names() {
    assert_eq!(GuiValue::Toggle(true).shape_name(), "toggle");
    assert_eq!(GuiValue::Color(0xFF00FF00).shape_name(), "color");
    assert_eq!(
        GuiValue::Pair(Box::new((GuiValue::Int(1), GuiValue::Int(2)))).shape_name(),
        "pair"
    );
}
