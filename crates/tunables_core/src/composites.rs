//! Composite codecs: lists, maps, and pairs of other entries' values.
//!
//! A composite codec lifts a child codec over a container value. The
//! child acts as a stateless per-element template: element values live
//! plainly in the container, and the child's conversions and checks are
//! applied to each one. Conversion of the whole container fails when its
//! structure is wrong or any element cannot be interpreted at all;
//! semantic failures (bounds, element validators) are reported per
//! element by validation, first failure wins, before any check on the
//! container itself.

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetKind;
use crate::validation::{Issue, ValueValidator};
use crate::value::{ConfigValue, GuiValue};

/// A codec whose stored form can double as a table key.
///
/// Map entries require their key codec to be atomic: the key must
/// render to a single string and parse back from one. Scalar codecs
/// qualify; lists, maps, pairs and records do not.
pub trait AtomicCodec: EntryCodec {
    /// Render a value as a table key.
    fn to_key(&self, value: &Self::Value) -> String;

    /// Parse a table key. `None` means "reject".
    fn from_key(&self, key: &str) -> Option<Self::Value>;
}

impl AtomicCodec for crate::text::TextCodec {
    fn to_key(&self, value: &String) -> String {
        value.clone()
    }

    fn from_key(&self, key: &str) -> Option<String> {
        Some(key.to_string())
    }
}

impl AtomicCodec for crate::text::PatternCodec {
    fn to_key(&self, value: &String) -> String {
        value.clone()
    }

    fn from_key(&self, key: &str) -> Option<String> {
        Some(key.to_string())
    }
}

impl AtomicCodec for crate::primitives::BoolCodec {
    fn to_key(&self, value: &bool) -> String {
        value.to_string()
    }

    fn from_key(&self, key: &str) -> Option<bool> {
        match key.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl<T> AtomicCodec for crate::primitives::RangedCodec<T>
where
    T: crate::primitives::ConfigNumber + std::str::FromStr,
{
    fn to_key(&self, value: &T) -> String {
        value.to_string()
    }

    fn from_key(&self, key: &str) -> Option<T> {
        key.trim().parse().ok()
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug + 'static> AtomicCodec for crate::select::SelectCodec<T> {
    fn to_key(&self, value: &T) -> String {
        match self.to_config(value) {
            ConfigValue::Text(label) => label,
            _ => String::new(),
        }
    }

    fn from_key(&self, key: &str) -> Option<T> {
        self.from_config(&ConfigValue::Text(key.to_string()))
    }
}

impl AtomicCodec for crate::color::ColorCodec {
    fn to_key(&self, value: &crate::color::Rgba) -> String {
        match self.to_config(value) {
            ConfigValue::Text(text) => text,
            _ => String::new(),
        }
    }

    fn from_key(&self, key: &str) -> Option<crate::color::Rgba> {
        self.from_config(&ConfigValue::Text(key.to_string()))
    }
}

/// Codec for lists of a child codec's values.
pub struct ListCodec<C: EntryCodec> {
    elem: C,
    elem_error: Option<ValueValidator<C::Value>>,
    min_size: Option<usize>,
    max_size: Option<usize>,
    expand: bool,
}

impl<C: EntryCodec> ListCodec<C> {
    pub fn new(elem: C) -> Self {
        Self {
            elem,
            elem_error: None,
            min_size: None,
            max_size: None,
            expand: false,
        }
    }

    /// Set a per-element validator. Failures are reported with the
    /// zero-based index of the first failing element.
    pub fn with_elem_error(mut self, validator: ValueValidator<C::Value>) -> Self {
        self.elem_error = Some(validator);
        self
    }

    /// Bound the number of elements (inclusive on both sides).
    pub fn with_size_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Expand the list widget by default.
    pub fn expanded(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn elem(&self) -> &C {
        &self.elem
    }

    fn element_issue(&self, value: &C::Value) -> Option<Issue> {
        if let Some(issue) = self.elem.validate(value) {
            return Some(issue);
        }
        if let Some(validator) = &self.elem_error {
            if let Some(message) = validator(value) {
                return Some(Issue::invalid(message));
            }
        }
        None
    }
}

impl<C: EntryCodec> EntryCodec for ListCodec<C> {
    type Value = Vec<C::Value>;

    fn to_config(&self, value: &Vec<C::Value>) -> ConfigValue {
        ConfigValue::List(value.iter().map(|v| self.elem.to_config(v)).collect())
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<Vec<C::Value>> {
        raw.as_list()?
            .iter()
            .map(|item| self.elem.from_config(item))
            .collect()
    }

    fn to_gui(&self, value: &Vec<C::Value>) -> GuiValue {
        GuiValue::List(value.iter().map(|v| self.elem.to_gui(v)).collect())
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<Vec<C::Value>> {
        match raw {
            GuiValue::List(items) => items.iter().map(|item| self.elem.from_gui(item)).collect(),
            _ => None,
        }
    }

    fn validate(&self, value: &Vec<C::Value>) -> Option<Issue> {
        for (index, item) in value.iter().enumerate() {
            if let Some(issue) = self.element_issue(item) {
                return Some(issue.at_index(index));
            }
        }
        if let Some(min) = self.min_size {
            if value.len() < min {
                return Some(Issue::container(format!(
                    "Must have at least {} elements",
                    min
                )));
            }
        }
        if let Some(max) = self.max_size {
            if value.len() > max {
                return Some(Issue::container(format!(
                    "Must have at most {} elements",
                    max
                )));
            }
        }
        None
    }

    fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(elem_hint) = self.elem.describe() {
            parts.push(elem_hint);
        }
        match (self.min_size, self.max_size) {
            (None, None) => {}
            (Some(min), None) => parts.push(format!("Size: >= {}", min)),
            (None, Some(max)) => parts.push(format!("Size: <= {}", max)),
            (Some(min), Some(max)) => parts.push(format!("Size: {} ~ {}", min, max)),
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::ListView {
            element: Box::new(self.elem.widget_kind()),
            expanded: self.expand,
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        if let (Some(min), Some(max)) = (self.min_size, self.max_size) {
            if min > max {
                return Err(DeclarationError::EmptySizeBounds {
                    path: path.to_string(),
                    min,
                    max,
                });
            }
        }
        self.elem.check_declaration(path)
    }
}

/// Codec for ordered maps from an atomic key codec's values to a child
/// codec's values.
///
/// The domain value is a `Vec` of pairs so that file order survives a
/// round trip; key uniqueness is a container-level validation.
pub struct MapCodec<K: AtomicCodec, C: EntryCodec> {
    key: K,
    value: C,
    value_error: Option<ValueValidator<C::Value>>,
}

impl<K: AtomicCodec, C: EntryCodec> MapCodec<K, C> {
    pub fn new(key: K, value: C) -> Self {
        Self {
            key,
            value,
            value_error: None,
        }
    }

    /// Set a per-value validator. Failures are reported with the key of
    /// the first failing entry.
    pub fn with_value_error(mut self, validator: ValueValidator<C::Value>) -> Self {
        self.value_error = Some(validator);
        self
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &C {
        &self.value
    }
}

impl<K: AtomicCodec, C: EntryCodec> EntryCodec for MapCodec<K, C> {
    type Value = Vec<(K::Value, C::Value)>;

    fn to_config(&self, value: &Self::Value) -> ConfigValue {
        ConfigValue::Table(
            value
                .iter()
                .map(|(k, v)| (self.key.to_key(k), self.value.to_config(v)))
                .collect(),
        )
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<Self::Value> {
        raw.as_table()?
            .iter()
            .map(|(k, v)| Some((self.key.from_key(k)?, self.value.from_config(v)?)))
            .collect()
    }

    fn to_gui(&self, value: &Self::Value) -> GuiValue {
        GuiValue::Entries(
            value
                .iter()
                .map(|(k, v)| (self.key.to_gui(k), self.value.to_gui(v)))
                .collect(),
        )
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<Self::Value> {
        match raw {
            GuiValue::Entries(rows) => rows
                .iter()
                .map(|(k, v)| Some((self.key.from_gui(k)?, self.value.from_gui(v)?)))
                .collect(),
            _ => None,
        }
    }

    fn validate(&self, value: &Self::Value) -> Option<Issue> {
        for (k, v) in value.iter() {
            let key_text = self.key.to_key(k);
            if let Some(issue) = self.key.validate(k) {
                return Some(issue.at_key(&key_text));
            }
            if let Some(issue) = self.value.validate(v) {
                return Some(issue.at_key(&key_text));
            }
            if let Some(validator) = &self.value_error {
                if let Some(message) = validator(v) {
                    return Some(Issue::invalid(message).at_key(&key_text));
                }
            }
        }
        for (index, (k, _)) in value.iter().enumerate() {
            let key_text = self.key.to_key(k);
            let duplicated = value[..index]
                .iter()
                .any(|(earlier, _)| self.key.to_key(earlier) == key_text);
            if duplicated {
                return Some(Issue::container(format!("Duplicate key '{}'", key_text)));
            }
        }
        None
    }

    fn describe(&self) -> Option<String> {
        self.value.describe()
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::MapView {
            key: Box::new(self.key.widget_kind()),
            value: Box::new(self.value.widget_kind()),
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        self.key.check_declaration(path)?;
        self.value.check_declaration(path)
    }
}

/// Codec for a pair of two child codecs' values.
///
/// The stored form is a two-element list.
pub struct PairCodec<A: EntryCodec, B: EntryCodec> {
    first: A,
    second: B,
}

impl<A: EntryCodec, B: EntryCodec> PairCodec<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: EntryCodec, B: EntryCodec> EntryCodec for PairCodec<A, B> {
    type Value = (A::Value, B::Value);

    fn to_config(&self, value: &Self::Value) -> ConfigValue {
        ConfigValue::List(vec![
            self.first.to_config(&value.0),
            self.second.to_config(&value.1),
        ])
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<Self::Value> {
        match raw.as_list() {
            Some([a, b]) => Some((self.first.from_config(a)?, self.second.from_config(b)?)),
            _ => None,
        }
    }

    fn to_gui(&self, value: &Self::Value) -> GuiValue {
        GuiValue::Pair(Box::new((
            self.first.to_gui(&value.0),
            self.second.to_gui(&value.1),
        )))
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<Self::Value> {
        match raw {
            GuiValue::Pair(parts) => Some((
                self.first.from_gui(&parts.0)?,
                self.second.from_gui(&parts.1)?,
            )),
            _ => None,
        }
    }

    fn validate(&self, value: &Self::Value) -> Option<Issue> {
        if let Some(issue) = self.first.validate(&value.0) {
            return Some(issue.in_field("first"));
        }
        if let Some(issue) = self.second.validate(&value.1) {
            return Some(issue.in_field("second"));
        }
        None
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::PairView {
            first: Box::new(self.first.widget_kind()),
            second: Box::new(self.second.widget_kind()),
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        self.first.check_declaration(path)?;
        self.second.check_declaration(path)
    }
}

#[cfg(test)]
#[path = "composites_tests.rs"]
mod tests;
