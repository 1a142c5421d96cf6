//! Widget descriptors: the plain-data seam toward a GUI toolkit.
//!
//! This library never renders anything. Each entry can describe the
//! widget that would edit it — what kind of control, its constraints,
//! its current and default widget-side values — and an external toolkit
//! turns descriptors into real controls, feeding edited values back
//! through the session as [`GuiValue`](crate::GuiValue)s.

use serde::{Deserialize, Serialize};

use crate::value::GuiValue;

/// The kind of control an entry is edited with, including the static
/// constraints the control needs (bounds, option labels, nested kinds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WidgetKind {
    Toggle,
    /// Free-form numeric input. Bounds are advisory here; committing is
    /// still gated by validation.
    NumberField {
        min: Option<f64>,
        max: Option<f64>,
        integer: bool,
    },
    /// Bounded numeric input rendered as a slider. Requires both bounds.
    Slider { min: f64, max: f64, integer: bool },
    TextField { max_len: Option<usize> },
    ColorPicker { alpha: bool },
    /// One-of-N selector. The chosen option travels as
    /// [`GuiValue::Choice`] carrying an index into `options`.
    Select { options: Vec<String> },
    ListView {
        element: Box<WidgetKind>,
        expanded: bool,
    },
    MapView {
        key: Box<WidgetKind>,
        value: Box<WidgetKind>,
    },
    PairView {
        first: Box<WidgetKind>,
        second: Box<WidgetKind>,
    },
    /// Record editor: one nested control per field, in declaration
    /// order. When `caption` names a field, that field's control is
    /// rendered inline in the record's own row.
    RecordView {
        fields: Vec<(String, WidgetKind)>,
        caption: Option<String>,
    },
}

/// Everything a toolkit needs to build one entry's widget.
///
/// Descriptors are produced in declaration order by
/// [`Schema::widgets`](crate::Schema::widgets) and by
/// [`Session::widgets`](crate::Session::widgets); the latter reflects
/// in-progress candidate values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Dot-separated entry path, the handle used to push edits back.
    pub path: String,
    /// Display label.
    pub label: String,
    /// Optional tooltip text.
    pub tooltip: Option<String>,
    /// The control to render.
    pub kind: WidgetKind,
    /// The value the control should currently show.
    pub current: GuiValue,
    /// The value the control's "reset to default" affordance restores.
    pub default: GuiValue,
    /// Whether committed changes only take effect after a restart.
    pub requires_restart: bool,
    /// Whether this entry exists only in the GUI, with no stored form.
    pub non_persistent: bool,
    /// Free-form marker tags for the toolkit (badges, filters).
    pub tags: Vec<String>,
}

#[cfg(test)]
#[path = "gui_tests.rs"]
mod tests;
