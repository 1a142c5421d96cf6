//! The persisted-store seam and the load/seed/sync circuits over it.
//!
//! A [`SettingsStore`] is the backend an application persists settings
//! into: get/set/remove keyed by dot-separated entry paths. The file
//! format belongs entirely to the backend; this crate only traffics in
//! [`ConfigValue`]s. An in-memory implementation ships here for tests
//! and ephemeral setups; the TOML file backend lives in its own crate.
//!
//! Loading never fails per value: a stored value an entry rejects is
//! logged and replaced by the entry's default (the entry is marked
//! dirty so the next sync repairs the store).

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::entry::LoadOutcome;
use crate::errors::StoreResult;
use crate::schema::Schema;
use crate::value::ConfigValue;

/// A persisted key/value backend for committed entry values.
pub trait SettingsStore {
    /// Read the stored value at a path, if any.
    fn get(&self, path: &str) -> Option<ConfigValue>;

    /// Write a value at a path, replacing any previous value.
    fn set(&mut self, path: &str, value: ConfigValue) -> StoreResult<()>;

    /// Remove the value at a path. Removing a missing path is not an
    /// error.
    fn remove(&mut self, path: &str) -> StoreResult<()>;
}

/// A transient in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, ConfigValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, path: &str) -> Option<ConfigValue> {
        self.values.get(path).cloned()
    }

    fn set(&mut self, path: &str, value: ConfigValue) -> StoreResult<()> {
        self.values.insert(path.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, path: &str) -> StoreResult<()> {
        self.values.remove(path);
        Ok(())
    }
}

/// What happened to each entry during a load pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Entries whose stored value was accepted.
    pub loaded: Vec<String>,
    /// Entries whose stored value was rejected; defaults stand.
    pub fallbacks: Vec<String>,
    /// Entries with no stored value at all.
    pub missing: Vec<String>,
}

/// Load every persistent entry's value from the store, falling back to
/// defaults for missing or rejected values. Never fails; rejections are
/// logged by the entries themselves.
pub fn load_schema(schema: &mut Schema, store: &dyn SettingsStore) -> LoadReport {
    let mut report = LoadReport::default();
    for entry in schema.entries_mut() {
        if entry.meta().non_persistent {
            continue;
        }
        let path = entry.meta().path.clone();
        match store.get(&path) {
            Some(raw) => match entry.load_config(&raw) {
                LoadOutcome::Loaded => report.loaded.push(path),
                LoadOutcome::Fallback => report.fallbacks.push(path),
            },
            None => report.missing.push(path),
        }
    }
    info!(
        loaded = report.loaded.len(),
        fallbacks = report.fallbacks.len(),
        missing = report.missing.len(),
        "settings loaded from store"
    );
    report
}

/// Write defaults for every persistent entry the store has no value
/// for. Returns the number of paths seeded.
pub fn seed_defaults(schema: &Schema, store: &mut dyn SettingsStore) -> StoreResult<usize> {
    let mut seeded = 0;
    for entry in schema.entries() {
        let meta = entry.meta();
        if meta.non_persistent || store.get(&meta.path).is_some() {
            continue;
        }
        if let Some(default) = entry.default_config() {
            store.set(&meta.path, default)?;
            seeded += 1;
        }
    }
    if seeded > 0 {
        debug!(seeded, "seeded missing defaults into store");
    }
    Ok(seeded)
}

/// Check every persistent entry's stored value against its accept
/// predicate without mutating anything. Returns the paths whose stored
/// values a load would reject.
pub fn audit_store(schema: &Schema, store: &dyn SettingsStore) -> Vec<String> {
    let mut rejected = Vec::new();
    for entry in schema.entries() {
        let meta = entry.meta();
        if meta.non_persistent {
            continue;
        }
        if let Some(raw) = store.get(&meta.path) {
            if !entry.accepts_config(&raw) {
                rejected.push(meta.path.clone());
            }
        }
    }
    rejected
}

/// Write every dirty entry's committed value to the store and clear the
/// dirty marks. Returns the number of paths written.
pub fn write_committed(schema: &mut Schema, store: &mut dyn SettingsStore) -> StoreResult<usize> {
    let mut written = 0;
    for entry in schema.entries_mut() {
        if !entry.is_dirty() {
            continue;
        }
        if entry.meta().non_persistent {
            entry.clear_dirty();
            continue;
        }
        if let Some(value) = entry.committed_config() {
            let path = entry.meta().path.clone();
            store.set(&path, value)?;
            entry.clear_dirty();
            written += 1;
        }
    }
    if written > 0 {
        debug!(written, "synced committed values to store");
    }
    Ok(written)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
