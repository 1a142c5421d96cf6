//! Codec for record entries: structs whose named fields are each
//! adapted by a child codec.
//!
//! The original reflective property scan is replaced by explicit field
//! declarations: each field names a getter and setter closure into the
//! record type plus the codec that adapts the field's value. A record
//! may nominate one field as its caption; the GUI renders that field's
//! control inline in the record's own row.

use std::fmt;

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetKind;
use crate::validation::{Issue, ValueValidator};
use crate::value::{ConfigValue, GuiValue};

/// Type-erased access to one record field through its codec.
trait FieldAdapter<B> {
    fn config_of(&self, record: &B) -> ConfigValue;
    fn apply_config(&self, record: &mut B, raw: &ConfigValue) -> bool;
    fn gui_of(&self, record: &B) -> GuiValue;
    fn apply_gui(&self, record: &mut B, raw: &GuiValue) -> bool;
    fn validate(&self, record: &B) -> Option<Issue>;
    fn widget_kind(&self) -> WidgetKind;
    fn check_declaration(&self, path: &str) -> DeclarationResult<()>;
}

struct CodecFieldAdapter<B, C: EntryCodec> {
    codec: C,
    get: Box<dyn Fn(&B) -> C::Value>,
    set: Box<dyn Fn(&mut B, C::Value)>,
    error: Option<ValueValidator<C::Value>>,
}

impl<B, C: EntryCodec> FieldAdapter<B> for CodecFieldAdapter<B, C> {
    fn config_of(&self, record: &B) -> ConfigValue {
        self.codec.to_config(&(self.get)(record))
    }

    fn apply_config(&self, record: &mut B, raw: &ConfigValue) -> bool {
        match self.codec.from_config(raw) {
            Some(value) => {
                (self.set)(record, value);
                true
            }
            None => false,
        }
    }

    fn gui_of(&self, record: &B) -> GuiValue {
        self.codec.to_gui(&(self.get)(record))
    }

    fn apply_gui(&self, record: &mut B, raw: &GuiValue) -> bool {
        match self.codec.from_gui(raw) {
            Some(value) => {
                (self.set)(record, value);
                true
            }
            None => false,
        }
    }

    fn validate(&self, record: &B) -> Option<Issue> {
        let value = (self.get)(record);
        if let Some(issue) = self.codec.validate(&value) {
            return Some(issue);
        }
        if let Some(validator) = &self.error {
            if let Some(message) = validator(&value) {
                return Some(Issue::invalid(message));
            }
        }
        None
    }

    fn widget_kind(&self) -> WidgetKind {
        self.codec.widget_kind()
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        self.codec.check_declaration(path)
    }
}

/// Codec for a record type `B` with explicitly declared fields.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{EntryCodec, RecordCodec, RangedCodec, BoolCodec};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Overlay {
///     enabled: bool,
///     opacity: f64,
/// }
///
/// let template = Overlay { enabled: true, opacity: 0.8 };
/// let codec = RecordCodec::new(template)
///     .field("enabled", BoolCodec, |o: &Overlay| o.enabled, |o, v| o.enabled = v)
///     .field(
///         "opacity",
///         RangedCodec::<f64>::bounded(0.0, 1.0),
///         |o: &Overlay| o.opacity,
///         |o, v| o.opacity = v,
///     )
///     .caption("enabled");
/// assert!(codec.check_declaration("overlay").is_ok());
/// ```
pub struct RecordCodec<B> {
    template: B,
    fields: Vec<(String, Box<dyn FieldAdapter<B>>)>,
    caption: Option<String>,
}

impl<B: Clone + PartialEq + fmt::Debug + 'static> RecordCodec<B> {
    /// Start a record codec. The template supplies values for fields a
    /// stored table does not mention.
    pub fn new(template: B) -> Self {
        Self {
            template,
            fields: Vec::new(),
            caption: None,
        }
    }

    /// Declare a field adapted by `codec`, read and written through the
    /// given closures. Declaration order is display order.
    pub fn field<C, G, S>(mut self, name: &str, codec: C, get: G, set: S) -> Self
    where
        C: EntryCodec + 'static,
        G: Fn(&B) -> C::Value + 'static,
        S: Fn(&mut B, C::Value) + 'static,
    {
        self.fields.push((
            name.to_string(),
            Box::new(CodecFieldAdapter {
                codec,
                get: Box::new(get),
                set: Box::new(set),
                error: None,
            }),
        ));
        self
    }

    /// Declare a field with an additional user validator.
    pub fn field_with_error<C, G, S>(
        mut self,
        name: &str,
        codec: C,
        get: G,
        set: S,
        error: ValueValidator<C::Value>,
    ) -> Self
    where
        C: EntryCodec + 'static,
        G: Fn(&B) -> C::Value + 'static,
        S: Fn(&mut B, C::Value) + 'static,
    {
        self.fields.push((
            name.to_string(),
            Box::new(CodecFieldAdapter {
                codec,
                get: Box::new(get),
                set: Box::new(set),
                error: Some(error),
            }),
        ));
        self
    }

    /// Nominate the field rendered inline in the record's own row.
    pub fn caption(mut self, name: &str) -> Self {
        self.caption = Some(name.to_string());
        self
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub(crate) fn template_value(&self) -> B {
        self.template.clone()
    }
}

impl<B: Clone + PartialEq + fmt::Debug + 'static> EntryCodec for RecordCodec<B> {
    type Value = B;

    fn to_config(&self, value: &B) -> ConfigValue {
        ConfigValue::Table(
            self.fields
                .iter()
                .map(|(name, adapter)| (name.clone(), adapter.config_of(value)))
                .collect(),
        )
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<B> {
        let table = raw.as_table()?;
        let mut record = self.template.clone();
        for (name, adapter) in &self.fields {
            match table.iter().find(|(key, _)| key == name) {
                Some((_, field_raw)) => {
                    if !adapter.apply_config(&mut record, field_raw) {
                        return None;
                    }
                }
                // Absent fields keep the template's value.
                None => {}
            }
        }
        Some(record)
    }

    fn to_gui(&self, value: &B) -> GuiValue {
        GuiValue::Fields(
            self.fields
                .iter()
                .map(|(name, adapter)| (name.clone(), adapter.gui_of(value)))
                .collect(),
        )
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<B> {
        let rows = match raw {
            GuiValue::Fields(rows) => rows,
            _ => return None,
        };
        let mut record = self.template.clone();
        for (name, adapter) in &self.fields {
            if let Some((_, field_raw)) = rows.iter().find(|(key, _)| key == name) {
                if !adapter.apply_gui(&mut record, field_raw) {
                    return None;
                }
            }
        }
        Some(record)
    }

    fn validate(&self, value: &B) -> Option<Issue> {
        for (name, adapter) in &self.fields {
            if let Some(issue) = adapter.validate(value) {
                return Some(issue.in_field(name));
            }
        }
        None
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::RecordView {
            fields: self
                .fields
                .iter()
                .map(|(name, adapter)| (name.clone(), adapter.widget_kind()))
                .collect(),
            caption: self.caption.clone(),
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        if self.fields.is_empty() {
            return Err(DeclarationError::NoFields {
                path: path.to_string(),
            });
        }
        for (i, (name, _)) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(DeclarationError::DuplicateField {
                    path: path.to_string(),
                    field: name.clone(),
                });
            }
        }
        if let Some(caption) = &self.caption {
            if !self.fields.iter().any(|(name, _)| name == caption) {
                return Err(DeclarationError::UnknownCaption {
                    path: path.to_string(),
                    caption: caption.clone(),
                });
            }
        }
        for (_, adapter) in &self.fields {
            adapter.check_declaration(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
