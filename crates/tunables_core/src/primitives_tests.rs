//! Tests for boolean and numeric codecs.

use super::*;

#[cfg(test)]
mod bool_codec_tests {
    use super::*;

    #[test]
    fn round_trips_both_values() {
        for v in [true, false] {
            assert_eq!(BoolCodec.from_config(&BoolCodec.to_config(&v)), Some(v));
            assert_eq!(BoolCodec.from_gui(&BoolCodec.to_gui(&v)), Some(v));
        }
    }

    #[test]
    fn rejects_non_boolean_stored_values() {
        assert_eq!(BoolCodec.from_config(&ConfigValue::Int(1)), None);
        assert_eq!(BoolCodec.from_config(&ConfigValue::Text("true".into())), None);
    }

    #[test]
    fn uses_a_toggle_widget() {
        assert_eq!(BoolCodec.widget_kind(), WidgetKind::Toggle);
    }
}

#[cfg(test)]
mod ranged_codec_tests {
    use super::*;

    #[test]
    fn inclusive_bounds_accept_the_bounds_themselves() {
        let codec = RangedCodec::<i64>::bounded(0, 10);
        assert!(codec.validate(&0).is_none());
        assert!(codec.validate(&10).is_none());
    }

    #[test]
    fn below_minimum_names_the_minimum() {
        let codec = RangedCodec::<i64>::bounded(0, 10);
        let issue = codec.validate(&-1).expect("expected an error");
        assert_eq!(issue.message, "Must be at least 0");
    }

    #[test]
    fn above_maximum_names_the_maximum() {
        let codec = RangedCodec::<i64>::bounded(0, 10);
        let issue = codec.validate(&11).expect("expected an error");
        assert_eq!(issue.message, "Must be at most 10");
    }

    #[test]
    fn min_check_runs_before_max_check() {
        // With an inverted range both checks would fire; min wins. The
        // declaration check rejects such a range before it is ever used.
        let codec = RangedCodec::<i64>::new().with_min(5).with_max(3);
        let issue = codec.validate(&4).expect("expected an error");
        assert_eq!(issue.message, "Must be at least 5");
        assert!(codec.check_declaration("a.b").is_err());
    }

    #[test]
    fn out_of_range_stored_values_convert_then_fail_validation() {
        let codec = RangedCodec::<i64>::bounded(0, 10);
        let converted = codec.from_config(&ConfigValue::Int(99));
        assert_eq!(converted, Some(99));
        assert!(codec.validate(&99).is_some());
    }

    #[test]
    fn i32_rejects_stored_values_that_do_not_fit() {
        let codec = RangedCodec::<i32>::new();
        assert_eq!(codec.from_config(&ConfigValue::Int(i64::MAX)), None);
        assert_eq!(codec.from_config(&ConfigValue::Int(7)), Some(7));
    }

    #[test]
    fn floats_accept_integer_stored_values() {
        let codec = RangedCodec::<f64>::new();
        assert_eq!(codec.from_config(&ConfigValue::Int(2)), Some(2.0));
    }

    #[test]
    fn integers_reject_float_stored_values() {
        let codec = RangedCodec::<i64>::new();
        assert_eq!(codec.from_config(&ConfigValue::Float(2.5)), None);
    }

    #[test]
    fn describe_renders_the_range() {
        assert_eq!(
            RangedCodec::<i64>::bounded(0, 10).describe(),
            Some("Range: 0 ~ 10".to_string())
        );
        assert_eq!(
            RangedCodec::<i64>::new().with_min(1).describe(),
            Some("Range: >= 1".to_string())
        );
        assert_eq!(RangedCodec::<i64>::new().describe(), None);
    }

    #[test]
    fn slider_widget_requires_both_bounds() {
        let codec = RangedCodec::<i64>::bounded(0, 10).as_slider(true);
        assert_eq!(
            codec.widget_kind(),
            WidgetKind::Slider {
                min: 0.0,
                max: 10.0,
                integer: true,
            }
        );

        let unbounded = RangedCodec::<i64>::new().as_slider(true);
        match unbounded.widget_kind() {
            WidgetKind::NumberField { integer: true, .. } => {}
            other => panic!("Expected NumberField, got {:?}", other),
        }
    }

    #[test]
    fn float_round_trip_through_config() {
        let codec = RangedCodec::<f32>::new();
        let v = 0.25_f32;
        assert_eq!(codec.from_config(&codec.to_config(&v)), Some(v));
    }
}
