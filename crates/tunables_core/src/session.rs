//! Edit sessions: candidate state, save gating, and ordered commit.
//!
//! A session wraps a schema for the duration of one editing screen.
//! Widgets push candidate values by path; the session answers error and
//! edited queries, and its save is globally gated: while any entry has
//! an outstanding validation error nothing commits, and once none does,
//! every edited entry commits in declaration order in one call. Each
//! entry's error only ever gates the global save, never another entry's
//! value. Abandoning the session discards candidates; values that were
//! never committed simply never existed outside the widgets.

use tracing::info;

use crate::entry::SaveResult;
use crate::errors::{SessionError, SessionResult};
use crate::gui::WidgetDescriptor;
use crate::schema::Schema;
use crate::store::{write_committed, SettingsStore};
use crate::validation::ValidationError;
use crate::value::GuiValue;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveReport {
    /// Paths whose committed value changed, in declaration order.
    pub committed: Vec<String>,
    /// Whether any committed change requires a restart to take effect.
    pub requires_restart: bool,
}

/// An editing session over a schema.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{
///     CategoryBuilder, GuiValue, MemoryStore, SchemaBuilder, SchemaKind, Session, int_entry,
/// };
///
/// let schema = SchemaBuilder::new("demo", SchemaKind::Client)
///     .category(CategoryBuilder::new("general").entry("volume", int_entry(50).range(0, 100)))
///     .build()
///     .expect("schema builds");
///
/// let mut session = Session::new(schema);
/// session.set_candidate("general.volume", GuiValue::Int(80)).unwrap();
/// assert!(session.can_save());
///
/// let mut store = MemoryStore::new();
/// let report = session.save(&mut store).expect("save succeeds");
/// assert_eq!(report.committed, vec!["general.volume".to_string()]);
/// ```
pub struct Session {
    schema: Schema,
}

impl Session {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Tear down the session, keeping the schema (and any committed
    /// values) for further use.
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Widget descriptors reflecting in-progress candidates.
    pub fn widgets(&self) -> Vec<WidgetDescriptor> {
        self.schema.widgets()
    }

    /// Push a widget-side candidate value for one entry.
    pub fn set_candidate(&mut self, path: &str, value: GuiValue) -> SessionResult<()> {
        let entry = self
            .schema
            .entry_mut(path)
            .ok_or_else(|| SessionError::UnknownPath {
                path: path.to_string(),
            })?;
        entry.set_gui_value(value);
        Ok(())
    }

    /// The current candidate for one entry.
    pub fn candidate(&self, path: &str) -> SessionResult<GuiValue> {
        let entry = self
            .schema
            .entry(path)
            .ok_or_else(|| SessionError::UnknownPath {
                path: path.to_string(),
            })?;
        Ok(entry.gui_value())
    }

    /// The first failing condition for one entry's candidate, if any.
    pub fn error_at(&self, path: &str) -> SessionResult<Option<ValidationError>> {
        let entry = self
            .schema
            .entry(path)
            .ok_or_else(|| SessionError::UnknownPath {
                path: path.to_string(),
            })?;
        Ok(entry.supply_error())
    }

    /// All outstanding validation errors, in declaration order.
    pub fn errors(&self) -> Vec<ValidationError> {
        self.schema
            .entries()
            .into_iter()
            .filter_map(|entry| entry.supply_error())
            .collect()
    }

    /// Whether the global save action is currently allowed.
    pub fn can_save(&self) -> bool {
        self.errors().is_empty()
    }

    /// Whether any entry's candidate differs from its baseline.
    pub fn is_edited(&self) -> bool {
        self.schema.entries().into_iter().any(|e| e.is_edited())
    }

    /// Revert one entry's candidate to its committed baseline.
    pub fn reset(&mut self, path: &str) -> SessionResult<()> {
        let entry = self
            .schema
            .entry_mut(path)
            .ok_or_else(|| SessionError::UnknownPath {
                path: path.to_string(),
            })?;
        entry.reset_candidate();
        Ok(())
    }

    /// Point one entry's candidate at its declared default.
    pub fn restore_default(&mut self, path: &str) -> SessionResult<()> {
        let entry = self
            .schema
            .entry_mut(path)
            .ok_or_else(|| SessionError::UnknownPath {
                path: path.to_string(),
            })?;
        entry.restore_default();
        Ok(())
    }

    /// Abandon all in-progress edits.
    pub fn discard(&mut self) {
        for entry in self.schema.entries_mut() {
            entry.reset_candidate();
        }
    }

    /// Commit every entry's candidate and sync the store.
    ///
    /// Entries commit independently but the action is globally gated:
    /// with any outstanding validation error, nothing commits and the
    /// offending entries are reported. On success, entries commit in
    /// declaration order and every dirty committed value (including
    /// earlier programmatic sets and load-time fallbacks) is written
    /// through to the store.
    ///
    /// # Errors
    ///
    /// [`SessionError::SaveBlocked`] when any entry has a validation
    /// error; [`SessionError::StoreFailure`] when the store rejects a
    /// write.
    pub fn save(&mut self, store: &mut dyn SettingsStore) -> SessionResult<SaveReport> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(SessionError::SaveBlocked {
                error_count: errors.len(),
                errors,
            });
        }

        let mut report = SaveReport::default();
        for entry in self.schema.entries_mut() {
            if entry.save_candidate() == SaveResult::Committed {
                report.committed.push(entry.meta().path.clone());
                if entry.meta().requires_restart {
                    report.requires_restart = true;
                }
            }
        }

        write_committed(&mut self.schema, store)?;

        info!(
            schema = %self.schema.name(),
            committed = report.committed.len(),
            "settings session saved"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
