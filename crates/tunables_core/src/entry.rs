//! Entry nodes: value, default, and edit state for one setting.
//!
//! An [`Entry`] pairs a codec with the state the pipeline threads
//! through it: the immutable default, the committed baseline (the last
//! value loaded from or saved to the store), and the widget-side
//! candidate being edited. The schema tree stores entries behind the
//! object-safe [`EntryNode`] trait so heterogeneously-typed entries can
//! share one tree.
//!
//! Lifecycle: a candidate edit marks the entry edited when its decoded
//! value differs from the baseline; committing an error-free candidate
//! makes it the new baseline; resetting reverts the candidate. Loading
//! a stored value that cannot be interpreted, or that fails validation,
//! keeps the default and logs — no error escapes to the caller, since
//! no editing session exists at load time.

use tracing::{debug, warn};

use crate::codec::EntryCodec;
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetDescriptor;
use crate::validation::{Issue, ValidationError, ValueValidator};
use crate::value::{ConfigValue, GuiValue};

/// Identity and presentation attributes of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    /// Path segment, unique among siblings.
    pub name: String,
    /// Full dot-separated path from the schema root.
    pub path: String,
    /// Display label; defaults to the name.
    pub label: String,
    /// Optional tooltip text.
    pub tooltip: Option<String>,
    /// Committed changes only take effect after a restart.
    pub requires_restart: bool,
    /// The entry exists only in the GUI and has no stored form.
    pub non_persistent: bool,
    /// Free-form marker tags surfaced to the GUI.
    pub tags: Vec<String>,
}

impl EntryMeta {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            path: path.into(),
            tooltip: None,
            requires_restart: false,
            non_persistent: false,
            tags: Vec::new(),
        }
    }
}

/// What happened when a stored value was loaded into an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored value was accepted and became the baseline.
    Loaded,
    /// The stored value was malformed or rejected; the default stands.
    Fallback,
}

/// What happened when a candidate was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// The candidate became the new baseline.
    Committed,
    /// The candidate equaled the baseline; nothing changed.
    Unchanged,
    /// The candidate is invalid and was not committed.
    Invalid,
}

/// One configurable value: codec plus default/baseline/candidate state.
pub struct Entry<C: EntryCodec> {
    codec: C,
    meta: EntryMeta,
    default: C::Value,
    baseline: C::Value,
    candidate: GuiValue,
    error_fn: Option<ValueValidator<C::Value>>,
    dirty: bool,
}

impl<C: EntryCodec> Entry<C> {
    pub(crate) fn new(
        codec: C,
        meta: EntryMeta,
        default: C::Value,
        error_fn: Option<ValueValidator<C::Value>>,
    ) -> Self {
        let candidate = codec.to_gui(&default);
        Self {
            codec,
            meta,
            baseline: default.clone(),
            default,
            candidate,
            error_fn,
            dirty: false,
        }
    }

    /// The committed value.
    pub fn value(&self) -> &C::Value {
        &self.baseline
    }

    /// The declared default.
    pub fn default_value(&self) -> &C::Value {
        &self.default
    }

    /// Programmatic assignment: validates and commits directly,
    /// bypassing any in-progress candidate.
    pub fn set(&mut self, value: C::Value) -> Result<(), ValidationError> {
        if let Some(issue) = self.issue_for(&value) {
            return Err(ValidationError::at(&self.meta.path, issue));
        }
        if value != self.baseline {
            self.baseline = value;
            self.dirty = true;
            debug!(path = %self.meta.path, "entry value set programmatically");
        }
        self.candidate = self.codec.to_gui(&self.baseline);
        Ok(())
    }

    /// Full validation pipeline for one value: codec-intrinsic checks
    /// first, then the user-supplied validator.
    fn issue_for(&self, value: &C::Value) -> Option<Issue> {
        if let Some(issue) = self.codec.validate(value) {
            return Some(issue);
        }
        if let Some(validator) = &self.error_fn {
            if let Some(message) = validator(value) {
                return Some(Issue::invalid(message));
            }
        }
        None
    }

    fn decoded_candidate(&self) -> Option<C::Value> {
        self.codec.from_gui(&self.candidate)
    }
}

/// Object-safe entry API the schema tree works with.
pub trait EntryNode {
    fn meta(&self) -> &EntryMeta;

    /// The candidate in widget form.
    fn gui_value(&self) -> GuiValue;

    /// Replace the candidate with a widget-side value. Always accepted;
    /// invalid values surface through [`EntryNode::supply_error`] and
    /// block committing, never other entries.
    fn set_gui_value(&mut self, value: GuiValue);

    /// The first failing condition for the current candidate, if any.
    fn supply_error(&self) -> Option<ValidationError>;

    /// Whether the candidate differs from the committed baseline.
    fn is_edited(&self) -> bool;

    /// Commit the candidate as the new baseline if it is valid.
    fn save_candidate(&mut self) -> SaveResult;

    /// Revert the candidate to the committed baseline.
    fn reset_candidate(&mut self);

    /// Point the candidate at the declared default (not committed
    /// until saved).
    fn restore_default(&mut self);

    /// The committed value in stored form; `None` for non-persistent
    /// entries.
    fn committed_config(&self) -> Option<ConfigValue>;

    /// The default in stored form; `None` for non-persistent entries.
    fn default_config(&self) -> Option<ConfigValue>;

    /// Accept-or-fallback circuit for one stored value. A rejected
    /// value leaves the default committed and marks the entry dirty so
    /// the next store sync repairs the file.
    fn load_config(&mut self, raw: &ConfigValue) -> LoadOutcome;

    /// The store-side accept predicate: whether a raw stored value
    /// would be interpreted and pass validation.
    fn accepts_config(&self, raw: &ConfigValue) -> bool;

    /// Whether the baseline changed since the last store sync.
    fn is_dirty(&self) -> bool;

    fn clear_dirty(&mut self);

    /// Codec hint for commented store renderings.
    fn describe(&self) -> Option<String>;

    /// Build the widget descriptor for this entry.
    fn widget(&self) -> WidgetDescriptor;

    /// Declaration-time checks: codec sanity plus default validity.
    fn check_declaration(&self) -> DeclarationResult<()>;
}

impl<C: EntryCodec> EntryNode for Entry<C> {
    fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    fn gui_value(&self) -> GuiValue {
        self.candidate.clone()
    }

    fn set_gui_value(&mut self, value: GuiValue) {
        self.candidate = value;
    }

    fn supply_error(&self) -> Option<ValidationError> {
        match self.decoded_candidate() {
            None => Some(ValidationError::at(
                &self.meta.path,
                Issue::missing(format!(
                    "Cannot accept a {} value here",
                    self.candidate.shape_name()
                )),
            )),
            Some(value) => self
                .issue_for(&value)
                .map(|issue| ValidationError::at(&self.meta.path, issue)),
        }
    }

    fn is_edited(&self) -> bool {
        match self.decoded_candidate() {
            Some(value) => value != self.baseline,
            None => true,
        }
    }

    fn save_candidate(&mut self) -> SaveResult {
        let value = match self.decoded_candidate() {
            Some(value) => value,
            None => return SaveResult::Invalid,
        };
        if self.issue_for(&value).is_some() {
            return SaveResult::Invalid;
        }
        if value == self.baseline {
            return SaveResult::Unchanged;
        }
        self.baseline = value;
        self.dirty = true;
        debug!(path = %self.meta.path, "entry candidate committed");
        SaveResult::Committed
    }

    fn reset_candidate(&mut self) {
        self.candidate = self.codec.to_gui(&self.baseline);
    }

    fn restore_default(&mut self) {
        self.candidate = self.codec.to_gui(&self.default);
    }

    fn committed_config(&self) -> Option<ConfigValue> {
        if self.meta.non_persistent {
            return None;
        }
        Some(self.codec.to_config(&self.baseline))
    }

    fn default_config(&self) -> Option<ConfigValue> {
        if self.meta.non_persistent {
            return None;
        }
        Some(self.codec.to_config(&self.default))
    }

    fn load_config(&mut self, raw: &ConfigValue) -> LoadOutcome {
        match self.codec.from_config(raw) {
            Some(value) if self.issue_for(&value).is_none() => {
                self.baseline = value;
                self.candidate = self.codec.to_gui(&self.baseline);
                self.dirty = false;
                LoadOutcome::Loaded
            }
            _ => {
                warn!(
                    path = %self.meta.path,
                    stored = raw.type_name(),
                    "stored value rejected, keeping default"
                );
                self.baseline = self.default.clone();
                self.candidate = self.codec.to_gui(&self.baseline);
                self.dirty = true;
                LoadOutcome::Fallback
            }
        }
    }

    fn accepts_config(&self, raw: &ConfigValue) -> bool {
        match self.codec.from_config(raw) {
            Some(value) => self.issue_for(&value).is_none(),
            None => false,
        }
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn describe(&self) -> Option<String> {
        self.codec.describe()
    }

    fn widget(&self) -> WidgetDescriptor {
        WidgetDescriptor {
            path: self.meta.path.clone(),
            label: self.meta.label.clone(),
            tooltip: self.meta.tooltip.clone(),
            kind: self.codec.widget_kind(),
            current: self.candidate.clone(),
            default: self.codec.to_gui(&self.default),
            requires_restart: self.meta.requires_restart,
            non_persistent: self.meta.non_persistent,
            tags: self.meta.tags.clone(),
        }
    }

    fn check_declaration(&self) -> DeclarationResult<()> {
        self.codec.check_declaration(&self.meta.path)?;
        if let Some(issue) = self.issue_for(&self.default) {
            return Err(DeclarationError::DefaultRejected {
                path: self.meta.path.clone(),
                reason: issue.message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
