//! Codecs for free-form and pattern-restricted text entries.

use regex::Regex;

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetKind;
use crate::validation::Issue;
use crate::value::{ConfigValue, GuiValue};

/// Codec for plain string entries, with an optional length cap.
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    max_len: Option<usize>,
}

impl TextCodec {
    pub fn new() -> Self {
        Self { max_len: None }
    }

    /// Cap the committed value's length, counted in characters.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }
}

impl EntryCodec for TextCodec {
    type Value = String;

    fn to_config(&self, value: &String) -> ConfigValue {
        ConfigValue::Text(value.clone())
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<String> {
        raw.as_text().map(str::to_string)
    }

    fn to_gui(&self, value: &String) -> GuiValue {
        GuiValue::Text(value.clone())
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<String> {
        match raw {
            GuiValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn validate(&self, value: &String) -> Option<Issue> {
        if let Some(max_len) = self.max_len {
            let len = value.chars().count();
            if len > max_len {
                return Some(Issue::invalid(format!(
                    "Must be at most {} characters long",
                    max_len
                )));
            }
        }
        None
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::TextField {
            max_len: self.max_len,
        }
    }
}

/// Codec for string entries that must match a regular expression.
///
/// The pattern is compiled when the codec is constructed; compilation
/// failures are deferred to the schema's declaration check so that the
/// builder API stays chainable.
#[derive(Debug, Clone)]
pub struct PatternCodec {
    pattern: String,
    compiled: Result<Regex, String>,
}

impl PatternCodec {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            compiled: Regex::new(pattern).map_err(|e| e.to_string()),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl EntryCodec for PatternCodec {
    type Value = String;

    fn to_config(&self, value: &String) -> ConfigValue {
        ConfigValue::Text(value.clone())
    }

    fn from_config(&self, raw: &ConfigValue) -> Option<String> {
        raw.as_text().map(str::to_string)
    }

    fn to_gui(&self, value: &String) -> GuiValue {
        GuiValue::Text(value.clone())
    }

    fn from_gui(&self, raw: &GuiValue) -> Option<String> {
        match raw {
            GuiValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn validate(&self, value: &String) -> Option<Issue> {
        match &self.compiled {
            Ok(regex) if regex.is_match(value) => None,
            Ok(_) => Some(Issue::invalid(format!(
                "Must match pattern '{}'",
                self.pattern
            ))),
            // Unreachable after a successful declaration check.
            Err(_) => Some(Issue::invalid("Entry pattern failed to compile")),
        }
    }

    fn describe(&self) -> Option<String> {
        Some(format!("Pattern: {}", self.pattern))
    }

    fn widget_kind(&self) -> WidgetKind {
        WidgetKind::TextField { max_len: None }
    }

    fn check_declaration(&self, path: &str) -> DeclarationResult<()> {
        match &self.compiled {
            Ok(_) => Ok(()),
            Err(reason) => Err(DeclarationError::InvalidPattern {
                path: path.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
