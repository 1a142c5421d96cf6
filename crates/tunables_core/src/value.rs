//! Dynamic value representations used at the boundaries of the pipeline.
//!
//! Every entry converts between three representations of its value: the
//! typed domain value (the codec's associated type), the persisted form
//! written to the settings store ([`ConfigValue`]), and the widget-facing
//! form manipulated by a GUI toolkit ([`GuiValue`]). The two dynamic
//! forms defined here are what allow heterogeneously-typed entries to
//! coexist in one schema tree.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The persisted representation of an entry value.
///
/// This is the shape a settings store traffics in: scalars, lists, and
/// order-preserving tables. Backends map it to their own document model
/// (the TOML backend maps it to `toml::Value`).
///
/// Tables are kept as ordered key/value pairs rather than a map type so
/// that declaration order survives a round trip through the store.
///
/// # Examples
///
/// ```rust
/// use tunables_core::ConfigValue;
///
/// let value = ConfigValue::Table(vec![
///     ("enabled".to_string(), ConfigValue::Bool(true)),
///     ("speed".to_string(), ConfigValue::Int(3)),
/// ]);
/// assert_eq!(value.get("speed"), Some(&ConfigValue::Int(3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ConfigValue>),
    Table(Vec<(String, ConfigValue)>),
}

impl ConfigValue {
    /// A short name for the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Table(_) => "table",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric accessor. Integers widen to floats so a file author may
    /// write `scale = 2` for a float entry.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[(String, ConfigValue)]> {
        match self {
            Self::Table(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Look up a key in a table value. Returns `None` for non-tables.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_table()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Text(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Table(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (key, value) in pairs {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// Custom deserialization: the persisted form is self-describing, so the
// visitor accepts whichever shape the backend hands over.
impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigValueVisitor;

        impl<'de> Visitor<'de> for ConfigValueVisitor {
            type Value = ConfigValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, number, string, list, or table")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ConfigValue::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ConfigValue::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v)
                    .map(ConfigValue::Int)
                    .map_err(|_| E::custom(format!("integer {} out of range", v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ConfigValue::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ConfigValue::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(ConfigValue::Text(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(ConfigValue::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, ConfigValue>()? {
                    pairs.push((key, value));
                }
                Ok(ConfigValue::Table(pairs))
            }
        }

        deserializer.deserialize_any(ConfigValueVisitor)
    }
}

/// The widget-facing representation of an entry value.
///
/// Widgets traffic in these: a toggle holds a boolean, a color picker a
/// packed ARGB integer, a selector the index of the chosen option.
/// Composite widgets hold rows of nested values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GuiValue {
    Toggle(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Packed `0xAARRGGBB` color.
    Color(u32),
    /// Index into the widget's declared option list.
    Choice(usize),
    List(Vec<GuiValue>),
    /// Rows of a map widget, in display order.
    Entries(Vec<(GuiValue, GuiValue)>),
    Pair(Box<(GuiValue, GuiValue)>),
    /// Named rows of a record widget, in declaration order.
    Fields(Vec<(String, GuiValue)>),
}

impl GuiValue {
    /// A short name for the value's shape, for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Color(_) => "color",
            Self::Choice(_) => "choice",
            Self::List(_) => "list",
            Self::Entries(_) => "entries",
            Self::Pair(_) => "pair",
            Self::Fields(_) => "fields",
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
