//! Tests for the record codec.

use super::*;
use crate::color::{ColorCodec, Rgba};
use crate::primitives::{BoolCodec, RangedCodec};

#[derive(Debug, Clone, PartialEq)]
struct StatusBar {
    enabled: bool,
    height: i64,
    color: Rgba,
}

fn default_bar() -> StatusBar {
    StatusBar {
        enabled: true,
        height: 20,
        color: Rgba(0x336699),
    }
}

fn bar_codec() -> RecordCodec<StatusBar> {
    RecordCodec::new(default_bar())
        .field("enabled", BoolCodec, |b: &StatusBar| b.enabled, |b, v| {
            b.enabled = v
        })
        .field(
            "height",
            RangedCodec::<i64>::bounded(4, 64),
            |b: &StatusBar| b.height,
            |b, v| b.height = v,
        )
        .field(
            "color",
            ColorCodec::new(false),
            |b: &StatusBar| b.color,
            |b, v| b.color = v,
        )
        .caption("enabled")
}

#[test]
fn stored_form_is_a_table_in_declaration_order() {
    let codec = bar_codec();
    let stored = codec.to_config(&default_bar());
    let table = stored.as_table().expect("expected a table");
    let keys: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["enabled", "height", "color"]);
    assert_eq!(stored.get("height"), Some(&ConfigValue::Int(20)));
    assert_eq!(
        stored.get("color"),
        Some(&ConfigValue::Text("#336699".into()))
    );
}

#[test]
fn round_trips_through_the_stored_form() {
    let codec = bar_codec();
    let value = StatusBar {
        enabled: false,
        height: 32,
        color: Rgba(0xFF0000),
    };
    assert_eq!(codec.from_config(&codec.to_config(&value)), Some(value));
}

#[test]
fn absent_fields_keep_template_values() {
    let codec = bar_codec();
    let raw = ConfigValue::Table(vec![("height".to_string(), ConfigValue::Int(12))]);
    let record = codec.from_config(&raw).expect("expected a record");
    assert_eq!(record.height, 12);
    assert_eq!(record.enabled, default_bar().enabled);
    assert_eq!(record.color, default_bar().color);
}

#[test]
fn uninterpretable_fields_reject_the_whole_record() {
    let codec = bar_codec();
    let raw = ConfigValue::Table(vec![(
        "height".to_string(),
        ConfigValue::Text("tall".into()),
    )]);
    assert_eq!(codec.from_config(&raw), None);
}

#[test]
fn non_table_stored_values_are_rejected() {
    let codec = bar_codec();
    assert_eq!(codec.from_config(&ConfigValue::Int(1)), None);
}

#[test]
fn field_errors_name_the_field_in_declaration_order() {
    let codec = bar_codec();
    let value = StatusBar {
        enabled: true,
        height: 1000,
        color: Rgba(0xFF00_0000),
    };
    let issue = codec.validate(&value).expect("expected an error");
    assert_eq!(issue.message, "Must be at most 64, in field 'height'");
}

#[test]
fn gui_form_round_trips() {
    let codec = bar_codec();
    let value = StatusBar {
        enabled: false,
        height: 8,
        color: Rgba(0x00FF00),
    };
    assert_eq!(codec.from_gui(&codec.to_gui(&value)), Some(value));
}

#[test]
fn widget_kind_exposes_fields_and_caption() {
    match bar_codec().widget_kind() {
        WidgetKind::RecordView { fields, caption } => {
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[0].0, "enabled");
            assert_eq!(caption, Some("enabled".to_string()));
        }
        other => panic!("Expected RecordView, got {:?}", other),
    }
}

#[test]
fn declaration_check_rejects_empty_records() {
    let codec: RecordCodec<StatusBar> = RecordCodec::new(default_bar());
    match codec.check_declaration("bar") {
        Err(DeclarationError::NoFields { path }) => assert_eq!(path, "bar"),
        other => panic!("Expected NoFields, got {:?}", other),
    }
}

#[test]
fn declaration_check_rejects_duplicate_fields() {
    let codec = RecordCodec::new(default_bar())
        .field("height", RangedCodec::<i64>::new(), |b: &StatusBar| b.height, |b, v| {
            b.height = v
        })
        .field("height", RangedCodec::<i64>::new(), |b: &StatusBar| b.height, |b, v| {
            b.height = v
        });
    match codec.check_declaration("bar") {
        Err(DeclarationError::DuplicateField { field, .. }) => assert_eq!(field, "height"),
        other => panic!("Expected DuplicateField, got {:?}", other),
    }
}

#[test]
fn declaration_check_rejects_unknown_captions() {
    let codec = RecordCodec::new(default_bar())
        .field("enabled", BoolCodec, |b: &StatusBar| b.enabled, |b, v| {
            b.enabled = v
        })
        .caption("label");
    match codec.check_declaration("bar") {
        Err(DeclarationError::UnknownCaption { caption, .. }) => assert_eq!(caption, "label"),
        other => panic!("Expected UnknownCaption, got {:?}", other),
    }
}

#[test]
fn field_user_validators_run_after_field_bounds() {
    let codec = RecordCodec::new(default_bar()).field_with_error(
        "height",
        RangedCodec::<i64>::bounded(4, 64),
        |b: &StatusBar| b.height,
        |b, v| b.height = v,
        Box::new(|h| {
            if h % 2 == 0 {
                None
            } else {
                Some("Must be even".to_string())
            }
        }),
    );

    let mut bar = default_bar();
    bar.height = 1000;
    let issue = codec.validate(&bar).expect("expected an error");
    assert_eq!(issue.message, "Must be at most 64, in field 'height'");

    bar.height = 21;
    let issue = codec.validate(&bar).expect("expected an error");
    assert_eq!(issue.message, "Must be even, in field 'height'");
}
