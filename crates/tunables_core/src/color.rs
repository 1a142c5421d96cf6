//! Packed-ARGB color values and their codec.
//!
//! The persisted grammar accepts `#` or `0x` prefixed hex in 3, 4, 6, or
//! 8-digit forms, case-insensitive, with surrounding whitespace
//! tolerated. Short forms expand by doubling each digit before parsing,
//! so `#abc` means `#aabbcc` and `#abcd` means `#aabbccdd`. This exact
//! expansion must not change: hand-edited settings files depend on it.

use regex::Regex;

use crate::codec::EntryCodec;
use crate::gui::WidgetKind;
use crate::validation::Issue;
use crate::value::{ConfigValue, GuiValue};

const COLOR_PATTERN: &str = r"^\s*(?:0x|#)([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})\s*$";
const RGB_MASK: u32 = 0x00FF_FFFF;

/// A color as packed `0xAARRGGBB`.
///
/// Colors without an alpha channel keep their alpha byte at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u32);

impl Rgba {
    /// A color without an alpha component.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// A color with an explicit alpha component.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Parse the hex grammar, keeping any alpha component.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tunables_core::Rgba;
    ///
    /// assert_eq!(Rgba::parse("#abc"), Rgba::parse("#aabbcc"));
    /// assert_eq!(Rgba::parse("0xFF0000"), Some(Rgba(0xFF0000)));
    /// assert_eq!(Rgba::parse("red"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let pattern = Regex::new(COLOR_PATTERN).expect("color pattern is valid");
        let captures = pattern.captures(text)?;
        let mut digits = captures[1].to_string();
        if digits.len() < 6 {
            digits = double_digits(&digits);
        }
        u32::from_str_radix(&digits, 16).ok().map(Self)
    }
}

/// Expand a 3- or 4-digit short form by doubling each digit.
fn double_digits(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        out.push(ch);
        out.push(ch);
    }
    out
}

/// Codec for color entries.
///
/// Without `alpha`, parsed and edited values are masked to 24 bits and
/// the stored form is `#RRGGBB`; with `alpha`, all 32 bits are kept and
/// the stored form is `#AARRGGBB`.
#[derive(Debug, Clone)]
pub struct ColorCodec {
    alpha: bool,
    pattern: Regex,
}

impl ColorCodec {
    pub fn new(alpha: bool) -> Self {
        Self {
            alpha,
            // The pattern is a compile-time constant; compilation cannot fail.
            pattern: Regex::new(COLOR_PATTERN).expect("color pattern is valid"),
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.alpha
    }

    fn mask(&self, packed: u32) -> u32 {
        if self.alpha {
            packed
        } else {
            packed & RGB_MASK
        }
    }

    fn format_hint(&self) -> &'static str {
        if self.alpha {
            "#AARRGGBB"
        } else {
            "#RRGGBB"
        }
    }
}

impl EntryCodec for ColorCodec {
    type Value = Rgba;

    fn to_config(&self, value: &Rgba) -> ConfigValue {
        let text = if self.alpha {
            format!("#{:08X}", value.0)
        } else {
            format!("#{:06X}", value.0 & RGB_MASK)
        };
        ConfigValue::Text(text)
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<Rgba> {
        let text = raw.as_text()?;
        let captures = self.pattern.captures(text)?;
        let mut digits = captures[1].to_string();
        if digits.len() < 6 {
            digits = double_digits(&digits);
        }
        let packed = u32::from_str_radix(&digits, 16).ok()?;
        Some(Rgba(self.mask(packed)))
    }

    fn to_gui(&self, value: &Rgba) -> GuiValue {
        GuiValue::Color(self.mask(value.0))
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<Rgba> {
        match raw {
            GuiValue::Color(packed) => Some(Rgba(self.mask(*packed))),
            _ => None,
        }
    }

    fn validate(&self, value: &Rgba) -> Option<Issue> {
        if !self.alpha && value.0 > RGB_MASK {
            return Some(Issue::invalid("Must not carry an alpha component"));
        }
        None
    }

    fn describe(&self) -> Option<String> {
        Some(format!("Color: {}", self.format_hint()))
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::ColorPicker { alpha: self.alpha }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
