//! Explicit host-struct binding: baking committed values into a plain
//! struct the rest of an application reads.
//!
//! Instead of scanning a backing type reflectively, callers register
//! one applier per entry path. Baking walks the registry, decodes each
//! entry's committed stored value through a typed extractor, and hands
//! it to the applier. Registries are plain values scoped to one schema
//! build; there is no global state to clear.

use crate::color::Rgba;
use crate::errors::{BindingError, BindingResult};
use crate::schema::Schema;
use crate::value::ConfigValue;

/// Extraction of a typed value from a stored [`ConfigValue`].
pub trait FromConfigValue: Sized {
    /// Type name used in mismatch errors.
    const EXPECTED: &'static str;

    fn from_config_value(raw: &ConfigValue) -> Option<Self>;
}

impl FromConfigValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_bool()
    }
}

impl FromConfigValue for i32 {
    const EXPECTED: &'static str = "integer";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_int().and_then(|i| i32::try_from(i).ok())
    }
}

impl FromConfigValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_int()
    }
}

impl FromConfigValue for f32 {
    const EXPECTED: &'static str = "float";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_float().map(|f| f as f32)
    }
}

impl FromConfigValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_float()
    }
}

impl FromConfigValue for String {
    const EXPECTED: &'static str = "text";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_text().map(str::to_string)
    }
}

impl FromConfigValue for Rgba {
    const EXPECTED: &'static str = "color";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        Rgba::parse(raw.as_text()?)
    }
}

/// Escape hatch: take the stored value as-is.
impl FromConfigValue for ConfigValue {
    const EXPECTED: &'static str = "value";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        Some(raw.clone())
    }
}

impl<T: FromConfigValue> FromConfigValue for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_config_value(raw: &ConfigValue) -> Option<Self> {
        raw.as_list()?
            .iter()
            .map(|item| T::from_config_value(item))
            .collect()
    }
}

type Applier<H> = Box<dyn Fn(&mut H, &ConfigValue) -> BindingResult<()>>;

/// A registry of per-path appliers into a host struct `H`.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{Bindings, CategoryBuilder, SchemaBuilder, SchemaKind, int_entry};
///
/// #[derive(Default)]
/// struct AppSettings {
///     volume: i64,
/// }
///
/// let schema = SchemaBuilder::new("demo", SchemaKind::Client)
///     .category(CategoryBuilder::new("general").entry("volume", int_entry(50).range(0, 100)))
///     .build()
///     .expect("schema builds");
///
/// let bindings = Bindings::new().bind("general.volume", |s: &mut AppSettings, v: i64| {
///     s.volume = v;
/// });
///
/// let mut settings = AppSettings::default();
/// bindings.bake(&schema, &mut settings).expect("bake succeeds");
/// assert_eq!(settings.volume, 50);
/// ```
pub struct Bindings<H> {
    appliers: Vec<(String, Applier<H>)>,
}

impl<H> Bindings<H> {
    pub fn new() -> Self {
        Self {
            appliers: Vec::new(),
        }
    }

    /// Register an applier for one entry path. The value type is
    /// checked against the entry's stored form at bake time.
    pub fn bind<T, F>(mut self, path: &str, apply: F) -> Self
    where
        T: FromConfigValue + 'static,
        F: Fn(&mut H, T) + 'static,
    {
        let error_path = path.to_string();
        self.appliers.push((
            path.to_string(),
            Box::new(move |host, raw| match T::from_config_value(raw) {
                Some(value) => {
                    apply(host, value);
                    Ok(())
                }
                None => Err(BindingError::TypeMismatch {
                    path: error_path.clone(),
                    expected: T::EXPECTED.to_string(),
                }),
            }),
        ));
        self
    }

    pub fn len(&self) -> usize {
        self.appliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliers.is_empty()
    }

    /// Apply every registered binding from the schema's committed
    /// values into the host.
    ///
    /// # Errors
    ///
    /// Unknown paths, bindings against non-persistent entries, and
    /// extraction mismatches are author mistakes and fail the whole
    /// bake.
    pub fn bake(&self, schema: &Schema, host: &mut H) -> BindingResult<()> {
        for (path, apply) in &self.appliers {
            let entry = schema
                .entry(path)
                .ok_or_else(|| BindingError::UnknownPath { path: path.clone() })?;
            let raw = entry
                .committed_config()
                .ok_or_else(|| BindingError::NonPersistent { path: path.clone() })?;
            apply(host, &raw)?;
        }
        Ok(())
    }
}

impl<H> Default for Bindings<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "binding_tests.rs"]
mod tests;
