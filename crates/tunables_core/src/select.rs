//! Codec for one-of-N selection entries.
//!
//! A selection entry carries a closed list of labeled options declared
//! up front; the committed value is always one of the declared option
//! values. The stored form is the option's label, which keeps settings
//! files readable and hand-editable.

use std::fmt;

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetKind;
use crate::validation::Issue;
use crate::value::{ConfigValue, GuiValue};

/// Codec for selection entries over an arbitrary option value type.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{EntryCodec, SelectCodec, ConfigValue};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Theme { Light, Dark }
///
/// let codec = SelectCodec::new(vec![
///     ("light".to_string(), Theme::Light),
///     ("dark".to_string(), Theme::Dark),
/// ]);
/// assert_eq!(
///     codec.from_config(&ConfigValue::Text("dark".into())),
///     Some(Theme::Dark)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SelectCodec<T> {
    options: Vec<(String, T)>,
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> SelectCodec<T> {
    pub fn new(options: Vec<(String, T)>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[(String, T)] {
        &self.options
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.options.iter().position(|(_, v)| v == value)
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> EntryCodec for SelectCodec<T> {
    type Value = T;

    fn to_config(&self, value: &T) -> ConfigValue {
        // Membership is enforced by validate; a stray value serializes
        // to an empty label, which no option can match on the way back.
        let label = self
            .index_of(value)
            .map(|i| self.options[i].0.clone())
            .unwrap_or_default();
        ConfigValue::Text(label)
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<T> {
        let text = raw.as_text()?;
        if let Some((_, value)) = self.options.iter().find(|(label, _)| label == text) {
            return Some(value.clone());
        }
        // Tolerate hand-edited case differences.
        self.options
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(text))
            .map(|(_, value)| value.clone())
    }

    fn to_gui(&self, value: &T) -> GuiValue {
        GuiValue::Choice(self.index_of(value).unwrap_or(0))
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<T> {
        match raw {
            GuiValue::Choice(index) => self.options.get(*index).map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    fn validate(&self, value: &T) -> Option<Issue> {
        if self.index_of(value).is_none() {
            return Some(Issue::invalid("Must be one of the declared options"));
        }
        None
    }

    fn describe(&self) -> Option<String> {
        let labels: Vec<&str> = self.options.iter().map(|(label, _)| label.as_str()).collect();
        Some(format!("Options: {}", labels.join(", ")))
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::Select {
            options: self.options.iter().map(|(label, _)| label.clone()).collect(),
        }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        if self.options.is_empty() {
            return Err(DeclarationError::NoOptions {
                path: path.to_string(),
            });
        }
        for (i, (label, _)) in self.options.iter().enumerate() {
            let clash = self.options[..i]
                .iter()
                .any(|(earlier, _)| earlier.eq_ignore_ascii_case(label));
            if clash {
                return Err(DeclarationError::DuplicateOption {
                    path: path.to_string(),
                    label: label.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
