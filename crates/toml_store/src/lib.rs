//! TOML file backend for the settings store seam.
//!
//! A [`TomlStore`] keeps a TOML document in memory and implements
//! [`SettingsStore`] over it: dot-separated entry paths map to nested
//! tables, so `general.colors.accent` lives at `[general.colors]`,
//! key `accent`. The document round-trips through files with
//! [`TomlStore::load`]/[`TomlStore::save`], and
//! [`TomlStore::render_commented`] produces a commented rendering with
//! each entry's tooltip and codec hints, the way generated settings
//! files usually ship.
//!
//! Per-value interpretation stays with the schema's entries; this crate
//! only converts between the document model and
//! [`ConfigValue`](tunables_core::ConfigValue).

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use tunables_core::{ConfigValue, Schema, SettingsStore, StoreError, StoreResult};

/// A TOML-document settings store.
///
/// # Examples
///
/// ```rust
/// use toml_store::TomlStore;
/// use tunables_core::{ConfigValue, SettingsStore};
///
/// let mut store = TomlStore::from_str("[general]\nvolume = 80\n").expect("parses");
/// assert_eq!(store.get("general.volume"), Some(ConfigValue::Int(80)));
///
/// store
///     .set("general.colors.accent", ConfigValue::Text("#336699".into()))
///     .expect("set succeeds");
/// assert!(store.render().expect("renders").contains("accent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlStore {
    root: toml::value::Table,
}

impl TomlStore {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] for invalid TOML syntax. Note that
    /// individual values of unexpected types are not errors here; the
    /// schema's load circuit handles those per entry.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> StoreResult<Self> {
        let root = toml::from_str::<toml::value::Table>(text).map_err(|e| StoreError::Parse {
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Serialize the document to TOML text.
    pub fn render(&self) -> StoreResult<String> {
        toml::to_string(&self.root).map_err(|e| StoreError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| StoreError::FileAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let store = Self::from_str(&text)?;
        info!(path = %path.display(), "settings file loaded");
        Ok(store)
    }

    /// Serialize and write the document to a settings file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let text = self.render()?;
        fs::write(path, text).map_err(|e| StoreError::FileAccess {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "settings file written");
        Ok(())
    }

    /// Render the schema's persistent entries as a commented TOML
    /// document with dotted keys: tooltip and codec hints above each
    /// key, the stored value (or the default, for paths the document
    /// does not hold) below.
    pub fn render_commented(&self, schema: &Schema) -> String {
        let mut out = String::new();
        for entry in schema.entries() {
            let meta = entry.meta();
            if meta.non_persistent {
                continue;
            }
            let value = match self.get(&meta.path).or_else(|| entry.default_config()) {
                Some(value) => value,
                None => continue,
            };
            if !out.is_empty() {
                out.push('\n');
            }
            if let Some(tooltip) = &meta.tooltip {
                for line in tooltip.lines() {
                    out.push_str("# ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            if let Some(hint) = entry.describe() {
                out.push_str("# ");
                out.push_str(&hint);
                out.push('\n');
            }
            if meta.requires_restart {
                out.push_str("# [Requires restart]\n");
            }
            out.push_str(&meta.path);
            out.push_str(" = ");
            out.push_str(&config_to_toml(&value).to_string());
            out.push('\n');
        }
        out
    }

    fn descend(&self, segments: &[&str]) -> Option<&toml::value::Table> {
        let mut table = &self.root;
        for segment in segments {
            table = table.get(*segment)?.as_table()?;
        }
        Some(table)
    }
}

impl SettingsStore for TomlStore {
    fn get(&self, path: &str) -> Option<ConfigValue> {
        let segments: Vec<&str> = path.split('.').collect();
        let (key, parents) = segments.split_last()?;
        let table = self.descend(parents)?;
        table.get(*key).map(toml_to_config)
    }

    fn set(&mut self, path: &str, value: ConfigValue) -> StoreResult<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let (key, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Ok(()),
        };
        let mut table = &mut self.root;
        let mut walked = Vec::new();
        for segment in parents {
            walked.push(*segment);
            table = table
                .entry(segment.to_string())
                .or_insert_with(|| toml::Value::Table(toml::value::Table::new()))
                .as_table_mut()
                .ok_or_else(|| StoreError::NotATable {
                    path: walked.join("."),
                })?;
        }
        table.insert(key.to_string(), config_to_toml(&value));
        Ok(())
    }

    fn remove(&mut self, path: &str) -> StoreResult<()> {
        let segments: Vec<&str> = path.split('.').collect();
        let (key, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Ok(()),
        };
        let mut table = &mut self.root;
        for segment in parents {
            table = match table.get_mut(*segment).and_then(|v| v.as_table_mut()) {
                Some(next) => next,
                // Nothing stored under this path.
                None => return Ok(()),
            };
        }
        table.remove(*key);
        Ok(())
    }
}

fn toml_to_config(value: &toml::Value) -> ConfigValue {
    match value {
        toml::Value::Boolean(b) => ConfigValue::Bool(*b),
        toml::Value::Integer(i) => ConfigValue::Int(*i),
        toml::Value::Float(f) => ConfigValue::Float(*f),
        toml::Value::String(s) => ConfigValue::Text(s.clone()),
        // Datetimes have no entry kind; carry them as text so the
        // schema's accept circuit decides.
        toml::Value::Datetime(d) => ConfigValue::Text(d.to_string()),
        toml::Value::Array(items) => ConfigValue::List(items.iter().map(toml_to_config).collect()),
        toml::Value::Table(table) => ConfigValue::Table(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_config(v)))
                .collect(),
        ),
    }
}

fn config_to_toml(value: &ConfigValue) -> toml::Value {
    match value {
        ConfigValue::Bool(b) => toml::Value::Boolean(*b),
        ConfigValue::Int(i) => toml::Value::Integer(*i),
        ConfigValue::Float(f) => toml::Value::Float(*f),
        ConfigValue::Text(s) => toml::Value::String(s.clone()),
        ConfigValue::List(items) => toml::Value::Array(items.iter().map(config_to_toml).collect()),
        ConfigValue::Table(pairs) => {
            let mut table = toml::value::Table::new();
            for (k, v) in pairs {
                table.insert(k.clone(), config_to_toml(v));
            }
            toml::Value::Table(table)
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
