//! Codecs for boolean and numeric entries.
//!
//! Numeric entries share one generic [`RangedCodec`] parameterized over
//! the [`ConfigNumber`] trait, which covers the persisted and widget
//! conversions per primitive type. Bounds are inclusive; an out-of-range
//! stored value still converts and is rejected by validation, so the
//! load circuit falls back to the default while the GUI can name the
//! violated bound.

use std::fmt;

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetKind;
use crate::validation::Issue;
use crate::value::{ConfigValue, GuiValue};

/// Codec for boolean entries.
#[derive(Debug, Clone, Default)]
pub struct BoolCodec;

impl EntryCodec for BoolCodec {
    type Value = bool;

    fn to_config(&self, value: &bool) -> ConfigValue {
        ConfigValue::Bool(*value)
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<bool> {
        raw.as_bool()
    }

    fn to_gui(&self, value: &bool) -> GuiValue {
        GuiValue::Toggle(*value)
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<bool> {
        match raw {
            GuiValue::Toggle(b) => Some(*b),
            _ => None,
        }
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::Toggle
    }
}

/// Per-primitive conversion hooks for [`RangedCodec`].
pub trait ConfigNumber:
    Copy + PartialOrd + PartialEq + fmt::Debug + fmt::Display + 'static
{
    /// Whether this type is an integer type; selects the widget flavor.
    const INTEGER: bool;

    fn number_to_config(self) -> ConfigValue;
    fn number_from_config(raw: &ConfigValue) -> Option<Self>;
    fn number_to_gui(self) -> GuiValue;
    fn number_from_gui(raw: &GuiValue) -> Option<Self>;
    fn widen(self) -> f64;
}

impl ConfigNumber for i32 {
    const INTEGER: bool = true;

    fn number_to_config(self) -> ConfigValue {
        ConfigValue::Int(self as i64)
    }

    fn number_from_config(raw: &ConfigValue) -> Option<Self> {
        raw.as_int().and_then(|i| i32::try_from(i).ok())
    }

    fn number_to_gui(self) -> GuiValue {
        GuiValue::Int(self as i64)
    }

    fn number_from_gui(raw: &GuiValue) -> Option<Self> {
        match raw {
            GuiValue::Int(i) => i32::try_from(*i).ok(),
            _ => None,
        }
    }

    fn widen(self) -> f64 {
        self as f64
    }
}

impl ConfigNumber for i64 {
    const INTEGER: bool = true;

    fn number_to_config(self) -> ConfigValue {
        ConfigValue::Int(self)
    }

    fn number_from_config(raw: &ConfigValue) -> Option<Self> {
        raw.as_int()
    }

    fn number_to_gui(self) -> GuiValue {
        GuiValue::Int(self)
    }

    fn number_from_gui(raw: &GuiValue) -> Option<Self> {
        match raw {
            GuiValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn widen(self) -> f64 {
        self as f64
    }
}

impl ConfigNumber for f32 {
    const INTEGER: bool = false;

    fn number_to_config(self) -> ConfigValue {
        ConfigValue::Float(self as f64)
    }

    fn number_from_config(raw: &ConfigValue) -> Option<Self> {
        raw.as_float().map(|f| f as f32)
    }

    fn number_to_gui(self) -> GuiValue {
        GuiValue::Float(self as f64)
    }

    fn number_from_gui(raw: &GuiValue) -> Option<Self> {
        match raw {
            GuiValue::Float(f) => Some(*f as f32),
            GuiValue::Int(i) => Some(*i as f32),
            _ => None,
        }
    }

    fn widen(self) -> f64 {
        self as f64
    }
}

impl ConfigNumber for f64 {
    const INTEGER: bool = false;

    fn number_to_config(self) -> ConfigValue {
        ConfigValue::Float(self)
    }

    fn number_from_config(raw: &ConfigValue) -> Option<Self> {
        raw.as_float()
    }

    fn number_to_gui(self) -> GuiValue {
        GuiValue::Float(self)
    }

    fn number_from_gui(raw: &GuiValue) -> Option<Self> {
        match raw {
            GuiValue::Float(f) => Some(*f),
            GuiValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    fn widen(self) -> f64 {
        self
    }
}

/// Codec for numeric entries with optional inclusive bounds.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{EntryCodec, RangedCodec};
///
/// let codec = RangedCodec::<i64>::bounded(0, 10);
/// assert!(codec.validate(&10).is_none());
/// assert!(codec.validate(&11).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct RangedCodec<T: ConfigNumber> {
    min: Option<T>,
    max: Option<T>,
    slider: bool,
}

impl<T: ConfigNumber> RangedCodec<T> {
    /// An unbounded numeric codec.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            slider: false,
        }
    }

    /// A codec bounded on both sides (inclusive).
    pub fn bounded(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            slider: false,
        }
    }

    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Prefer a slider widget. Only honored when both bounds are set.
    pub fn as_slider(mut self, slider: bool) -> Self {
        self.slider = slider;
        self
    }

    pub fn min(&self) -> Option<T> {
        self.min
    }

    pub fn max(&self) -> Option<T> {
        self.max
    }

    fn range_hint(&self) -> Option<String> {
        match (self.min, self.max) {
            (None, None) => None,
            (Some(min), None) => Some(format!(">= {}", min)),
            (None, Some(max)) => Some(format!("<= {}", max)),
            (Some(min), Some(max)) => Some(format!("{} ~ {}", min, max)),
        }
    }
}

impl<T: ConfigNumber> Default for RangedCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ConfigNumber> EntryCodec for RangedCodec<T> {
    type Value = T;

    fn to_config(&self, value: &T) -> ConfigValue {
        value.number_to_config()
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<T> {
        T::number_from_config(raw)
    }

    fn to_gui(&self, value: &T) -> GuiValue {
        value.number_to_gui()
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<T> {
        T::number_from_gui(raw)
    }

    fn validate(&self, value: &T) -> Option<Issue> {
        if let Some(min) = self.min {
            if *value < min {
                return Some(Issue::out_of_range(format!("Must be at least {}", min)));
            }
        }
        if let Some(max) = self.max {
            if *value > max {
                return Some(Issue::out_of_range(format!("Must be at most {}", max)));
            }
        }
        None
    }

    fn describe(&self) -> Option<String> {
        self.range_hint().map(|hint| format!("Range: {}", hint))
    }

    fn widget_kind(&self) -> WidgetKind {
        match (self.slider, self.min, self.max) {
            (true, Some(min), Some(max)) => WidgetKind::Slider {
                min: min.widen(),
                max: max.widen(),
                integer: T::INTEGER,
            },
            _ => WidgetKind::NumberField {
                min: self.min.map(ConfigNumber::widen),
                max: self.max.map(ConfigNumber::widen),
                integer: T::INTEGER,
            },
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(DeclarationError::EmptyRange {
                    path: path.to_string(),
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
