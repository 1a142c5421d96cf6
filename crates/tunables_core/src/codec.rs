//! The codec trait: three-representation conversion for one value type.
//!
//! Every entry kind is defined by a codec, which owns the conversions
//! between the typed domain value and its two dynamic forms: the
//! persisted [`ConfigValue`] and the widget-facing [`GuiValue`]. Codecs
//! are stateless conversion rules; they hold constraints (bounds,
//! patterns, option lists) but never values, which is what lets a
//! composite codec reuse a child codec as a per-element template.

use std::fmt;

use crate::errors::DeclarationResult;
use crate::gui::WidgetKind;
use crate::validation::Issue;
use crate::value::{ConfigValue, GuiValue};

/// Conversion and validation rules for one domain value type.
///
/// # Contract
///
/// - `to_config` and `to_gui` are total, pure, and deterministic.
/// - `from_config` and `from_gui` are partial: they return `None` for
///   input they cannot interpret, and must never panic on well-formed
///   [`ConfigValue`]/[`GuiValue`] input of the wrong shape. The load
///   circuit relies on `None` (not panics) to fall back to defaults.
/// - Round trip: `from_config(&to_config(v)) == Some(v)` for every `v`
///   that passes `validate`. `from_gui` may be stricter than `to_gui`'s
///   image for out-of-domain widget input.
/// - `validate` reports *semantic* failures on successfully converted
///   values (bounds, patterns). Out-of-range input therefore converts,
///   then fails validation; the distinction keeps error messages
///   precise in the GUI while the store predicate rejects both alike.
pub trait EntryCodec {
    /// The typed domain value this codec adapts.
    type Value: Clone + PartialEq + fmt::Debug + 'static;

    /// Serialize a domain value to its persisted form.
    fn to_config(&self, value: &Self::Value) -> ConfigValue;

    /// Parse a persisted value. `None` means "reject, keep default".
    fn from_config(&self, raw: &ConfigValue) -> Option<Self::Value>;

    /// Project a domain value into its widget-facing form.
    fn to_gui(&self, value: &Self::Value) -> GuiValue;

    /// Interpret a widget-facing value. `None` means the widget handed
    /// over something this codec cannot accept.
    fn from_gui(&self, raw: &GuiValue) -> Option<Self::Value>;

    /// Codec-intrinsic validation: bounds, patterns, structural rules.
    /// Runs before any user-supplied validator.
    fn validate(&self, value: &Self::Value) -> Option<Issue> {
        let _ = value;
        None
    }

    /// A short hint describing the accepted values, emitted as a
    /// comment above the entry in commented store renderings
    /// (e.g. `Range: 0 ~ 10`, `Color: #RRGGBB`).
    fn describe(&self) -> Option<String> {
        None
    }

    /// The control used to edit values of this codec.
    fn widget_kind(&self) -> WidgetKind;

    /// Declaration-time sanity checks (empty option lists, inverted
    /// ranges, bad patterns). Called once when the schema is built;
    /// `path` locates the offending entry in the error.
    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        let _ = path;
        Ok(())
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
