//! Tests for the color value type and codec.

use super::*;

#[cfg(test)]
mod rgba_tests {
    use super::*;

    #[test]
    fn component_accessors() {
        let c = Rgba::rgba(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.alpha(), 0x44);
        assert_eq!(c.red(), 0x11);
        assert_eq!(c.green(), 0x22);
        assert_eq!(c.blue(), 0x33);
        assert_eq!(c.0, 0x4411_2233);
    }

    #[test]
    fn rgb_leaves_alpha_zero() {
        assert_eq!(Rgba::rgb(0xAB, 0xCD, 0xEF), Rgba(0x00AB_CDEF));
    }

    #[test]
    fn parse_accepts_both_prefixes() {
        assert_eq!(Rgba::parse("#ff0000"), Some(Rgba(0xFF0000)));
        assert_eq!(Rgba::parse("0xff0000"), Some(Rgba(0xFF0000)));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Rgba::parse("  #FfAa00  "), Some(Rgba(0xFFAA00)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Rgba::parse("red"), None);
        assert_eq!(Rgba::parse("#12345"), None);
        assert_eq!(Rgba::parse("#1234567"), None);
        assert_eq!(Rgba::parse("ff0000"), None);
    }
}

#[cfg(test)]
mod color_codec_tests {
    use super::*;

    #[test]
    fn three_digit_form_doubles_each_digit() {
        let codec = ColorCodec::new(false);
        assert_eq!(
            codec.from_config(&ConfigValue::Text("#abc".into())),
            codec.from_config(&ConfigValue::Text("#aabbcc".into()))
        );
    }

    #[test]
    fn four_digit_form_doubles_each_digit() {
        let codec = ColorCodec::new(true);
        assert_eq!(
            codec.from_config(&ConfigValue::Text("#abcd".into())),
            codec.from_config(&ConfigValue::Text("#aabbccdd".into()))
        );
    }

    #[test]
    fn without_alpha_the_alpha_byte_is_masked_off() {
        let codec = ColorCodec::new(false);
        assert_eq!(
            codec.from_config(&ConfigValue::Text("#ff112233".into())),
            Some(Rgba(0x112233))
        );
    }

    #[test]
    fn with_alpha_all_bits_survive() {
        let codec = ColorCodec::new(true);
        assert_eq!(
            codec.from_config(&ConfigValue::Text("#ff112233".into())),
            Some(Rgba(0xFF11_2233))
        );
    }

    #[test]
    fn stored_form_matches_the_declared_format() {
        let codec = ColorCodec::new(false);
        assert_eq!(
            codec.to_config(&Rgba(0x00AB_CDEF)),
            ConfigValue::Text("#ABCDEF".into())
        );

        let alpha_codec = ColorCodec::new(true);
        assert_eq!(
            alpha_codec.to_config(&Rgba(0x80AB_CDEF)),
            ConfigValue::Text("#80ABCDEF".into())
        );
    }

    #[test]
    fn round_trip_through_the_stored_form() {
        for (alpha, value) in [(false, Rgba(0x123456)), (true, Rgba(0xFE12_3456))] {
            let codec = ColorCodec::new(alpha);
            assert_eq!(codec.from_config(&codec.to_config(&value)), Some(value));
        }
    }

    #[test]
    fn gui_form_is_the_packed_integer() {
        let codec = ColorCodec::new(true);
        assert_eq!(codec.to_gui(&Rgba(0xFE12_3456)), GuiValue::Color(0xFE12_3456));
        assert_eq!(
            codec.from_gui(&GuiValue::Color(0xFE12_3456)),
            Some(Rgba(0xFE12_3456))
        );
    }

    #[test]
    fn gui_form_masks_alpha_when_not_allowed() {
        let codec = ColorCodec::new(false);
        assert_eq!(
            codec.from_gui(&GuiValue::Color(0xFE12_3456)),
            Some(Rgba(0x123456))
        );
    }

    #[test]
    fn validate_flags_stray_alpha_bits() {
        let codec = ColorCodec::new(false);
        assert!(codec.validate(&Rgba(0xFF00_0000)).is_some());
        assert!(codec.validate(&Rgba(0x00FF_0000)).is_none());
    }

    #[test]
    fn describe_names_the_format() {
        assert_eq!(
            ColorCodec::new(false).describe(),
            Some("Color: #RRGGBB".to_string())
        );
        assert_eq!(
            ColorCodec::new(true).describe(),
            Some("Color: #AARRGGBB".to_string())
        );
    }

    #[test]
    fn rejects_non_text_stored_values() {
        let codec = ColorCodec::new(false);
        assert_eq!(codec.from_config(&ConfigValue::Int(0xFF0000)), None);
    }
}
