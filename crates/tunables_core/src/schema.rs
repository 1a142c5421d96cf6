//! Schema declaration: entry builders, categories, groups, and the
//! built tree.
//!
//! Schemas are declared with a fluent builder DSL and validated once at
//! build time. A schema owns its tree of categories, nested groups, and
//! entries; every entry is reachable by its dot-separated path, and the
//! tree walks in declaration order everywhere (widgets, loading,
//! committing).

use std::fmt;

use tracing::info;

use crate::codec::EntryCodec;
use crate::color::{ColorCodec, Rgba};
use crate::composites::{AtomicCodec, ListCodec, MapCodec, PairCodec};
use crate::entry::{Entry, EntryMeta, EntryNode};
use crate::errors::{DeclarationError, DeclarationResult};
use crate::gui::WidgetDescriptor;
use crate::primitives::{BoolCodec, ConfigNumber, RangedCodec};
use crate::record::RecordCodec;
use crate::select::SelectCodec;
use crate::text::{PatternCodec, TextCodec};
use crate::validation::ValueValidator;

/// Which side of a client/server split a schema belongs to.
///
/// Server schemas are loaded in headless contexts where no GUI ever
/// exists, so declaring a non-persistent (GUI-only) entry in one is a
/// declaration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Client,
    Server,
    Common,
}

/// A declared configuration entry under construction.
///
/// Produced by the free builder functions ([`bool_entry`],
/// [`int_entry`], [`color_entry`], ...) and consumed by
/// [`CategoryBuilder::entry`] / [`GroupBuilder::entry`].
pub struct EntryBuilder<C: EntryCodec> {
    codec: C,
    default: C::Value,
    label: Option<String>,
    tooltip: Option<String>,
    requires_restart: bool,
    non_persistent: bool,
    tags: Vec<String>,
    error_fn: Option<ValueValidator<C::Value>>,
}

impl<C: EntryCodec + 'static> EntryBuilder<C> {
    fn from_codec(codec: C, default: C::Value) -> Self {
        Self {
            codec,
            default,
            label: None,
            tooltip: None,
            requires_restart: false,
            non_persistent: false,
            tags: Vec::new(),
            error_fn: None,
        }
    }

    /// Override the display label (defaults to the entry name).
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = Some(tooltip.to_string());
        self
    }

    /// Mark that committed changes only take effect after a restart.
    pub fn requires_restart(mut self) -> Self {
        self.requires_restart = true;
        self
    }

    /// Keep this entry out of the persisted store; it exists only for
    /// the GUI session.
    pub fn non_persistent(mut self) -> Self {
        self.non_persistent = true;
        self
    }

    /// Attach a free-form marker tag surfaced to the GUI.
    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Attach a user validator, run after the codec's own checks.
    /// A default excluded by this validator is a declaration error.
    pub fn error<F>(mut self, validator: F) -> Self
    where
        F: Fn(&C::Value) -> Option<String> + 'static,
    {
        self.error_fn = Some(Box::new(validator));
        self
    }

    fn into_pending(self, name: String) -> PendingEntry {
        let builder_name = name.clone();
        PendingEntry {
            name,
            build: Box::new(move |path: String| {
                let mut meta = EntryMeta::new(builder_name, path);
                if let Some(label) = self.label {
                    meta.label = label;
                }
                meta.tooltip = self.tooltip;
                meta.requires_restart = self.requires_restart;
                meta.non_persistent = self.non_persistent;
                meta.tags = self.tags;
                Box::new(Entry::new(self.codec, meta, self.default, self.error_fn))
            }),
        }
    }
}

impl<T: ConfigNumber> EntryBuilder<RangedCodec<T>> {
    /// Set both inclusive bounds.
    pub fn range(mut self, min: T, max: T) -> Self {
        self.codec = self.codec.with_min(min).with_max(max);
        self
    }

    pub fn min(mut self, min: T) -> Self {
        self.codec = self.codec.with_min(min);
        self
    }

    pub fn max(mut self, max: T) -> Self {
        self.codec = self.codec.with_max(max);
        self
    }

    /// Edit with a slider. Only honored when both bounds are set.
    pub fn slider(mut self) -> Self {
        self.codec = self.codec.as_slider(true);
        self
    }
}

impl EntryBuilder<ColorCodec> {
    /// Keep an alpha channel in stored and edited values.
    pub fn alpha(mut self) -> Self {
        self.codec = ColorCodec::new(true);
        self
    }
}

impl EntryBuilder<TextCodec> {
    /// Cap the committed value's length, counted in characters.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.codec = self.codec.with_max_len(max_len);
        self
    }
}

impl<C: EntryCodec + 'static> EntryBuilder<ListCodec<C>> {
    /// Bound the number of elements (inclusive on both sides).
    pub fn size_bounds(mut self, min: usize, max: usize) -> Self {
        self.codec = self.codec.with_size_bounds(Some(min), Some(max));
        self
    }

    /// Expand the list widget by default.
    pub fn expand(mut self) -> Self {
        self.codec = self.codec.expanded(true);
        self
    }
}

/// Declare a boolean entry.
pub fn bool_entry(default: bool) -> EntryBuilder<BoolCodec> {
    EntryBuilder::from_codec(BoolCodec, default)
}

/// Declare a 32-bit integer entry.
pub fn int_entry(default: i32) -> EntryBuilder<RangedCodec<i32>> {
    EntryBuilder::from_codec(RangedCodec::new(), default)
}

/// Declare a 64-bit integer entry.
pub fn long_entry(default: i64) -> EntryBuilder<RangedCodec<i64>> {
    EntryBuilder::from_codec(RangedCodec::new(), default)
}

/// Declare a 32-bit float entry.
pub fn float_entry(default: f32) -> EntryBuilder<RangedCodec<f32>> {
    EntryBuilder::from_codec(RangedCodec::new(), default)
}

/// Declare a 64-bit float entry.
pub fn double_entry(default: f64) -> EntryBuilder<RangedCodec<f64>> {
    EntryBuilder::from_codec(RangedCodec::new(), default)
}

/// Declare a string entry.
pub fn string_entry(default: &str) -> EntryBuilder<TextCodec> {
    EntryBuilder::from_codec(TextCodec::new(), default.to_string())
}

/// Declare a string entry whose committed values must match `pattern`.
pub fn pattern_entry(default: &str, pattern: &str) -> EntryBuilder<PatternCodec> {
    EntryBuilder::from_codec(PatternCodec::new(pattern), default.to_string())
}

/// Declare a one-of-N selection entry over labeled options.
pub fn select_entry<T>(default: T, options: Vec<(&str, T)>) -> EntryBuilder<SelectCodec<T>>
where
    T: Clone + PartialEq + fmt::Debug + 'static,
{
    let options = options
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    EntryBuilder::from_codec(SelectCodec::new(options), default)
}

/// Declare a color entry without an alpha channel; chain
/// [`EntryBuilder::alpha`] to keep one.
pub fn color_entry(default: Rgba) -> EntryBuilder<ColorCodec> {
    EntryBuilder::from_codec(ColorCodec::new(false), default)
}

/// Declare a list entry. The element builder acts as a stateless
/// per-element template: its codec and its `error` validator apply to
/// every element; its other options are ignored.
pub fn list_entry<C: EntryCodec + 'static>(
    elem: EntryBuilder<C>,
    default: Vec<C::Value>,
) -> EntryBuilder<ListCodec<C>> {
    let mut codec = ListCodec::new(elem.codec);
    if let Some(validator) = elem.error_fn {
        codec = codec.with_elem_error(validator);
    }
    EntryBuilder::from_codec(codec, default)
}

/// Declare an ordered map entry. The key builder must carry an atomic
/// codec (one whose stored form is a single key string); the value
/// builder's `error` validator applies to every value.
pub fn map_entry<K, C>(
    key: EntryBuilder<K>,
    value: EntryBuilder<C>,
    default: Vec<(K::Value, C::Value)>,
) -> EntryBuilder<MapCodec<K, C>>
where
    K: AtomicCodec + 'static,
    C: EntryCodec + 'static,
{
    let mut codec = MapCodec::new(key.codec, value.codec);
    if let Some(validator) = value.error_fn {
        codec = codec.with_value_error(validator);
    }
    EntryBuilder::from_codec(codec, default)
}

/// Declare a pair entry over two child builders.
pub fn pair_entry<A, B>(
    first: EntryBuilder<A>,
    second: EntryBuilder<B>,
    default: (A::Value, B::Value),
) -> EntryBuilder<PairCodec<A, B>>
where
    A: EntryCodec + 'static,
    B: EntryCodec + 'static,
{
    EntryBuilder::from_codec(PairCodec::new(first.codec, second.codec), default)
}

/// Declare a record entry. The record codec's template doubles as the
/// entry default.
pub fn record_entry<B>(codec: RecordCodec<B>) -> EntryBuilder<RecordCodec<B>>
where
    B: Clone + PartialEq + fmt::Debug + 'static,
{
    let default = codec.template_value();
    EntryBuilder::from_codec(codec, default)
}

struct PendingEntry {
    name: String,
    build: Box<dyn FnOnce(String) -> Box<dyn EntryNode>>,
}

enum ItemBuilder {
    Entry(PendingEntry),
    Group(GroupBuilder),
}

/// Builder for a group of entries nested inside a category (or another
/// group).
pub struct GroupBuilder {
    name: String,
    label: Option<String>,
    expanded: bool,
    children: Vec<ItemBuilder>,
}

impl GroupBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Expand this group by default in the GUI.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    pub fn entry<C: EntryCodec + 'static>(mut self, name: &str, builder: EntryBuilder<C>) -> Self {
        self.children
            .push(ItemBuilder::Entry(builder.into_pending(name.to_string())));
        self
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.children.push(ItemBuilder::Group(group));
        self
    }
}

/// Builder for a top-level category of entries.
pub struct CategoryBuilder {
    name: String,
    label: Option<String>,
    children: Vec<ItemBuilder>,
}

impl CategoryBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            children: Vec::new(),
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn entry<C: EntryCodec + 'static>(mut self, name: &str, builder: EntryBuilder<C>) -> Self {
        self.children
            .push(ItemBuilder::Entry(builder.into_pending(name.to_string())));
        self
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.children.push(ItemBuilder::Group(group));
        self
    }
}

/// Builder for a whole schema.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{SchemaBuilder, SchemaKind, CategoryBuilder, bool_entry, int_entry};
///
/// let schema = SchemaBuilder::new("demo", SchemaKind::Client)
///     .category(
///         CategoryBuilder::new("general")
///             .entry("enabled", bool_entry(true))
///             .entry("volume", int_entry(50).range(0, 100).slider()),
///     )
///     .build()
///     .expect("schema builds");
/// assert_eq!(schema.entries().len(), 2);
/// ```
pub struct SchemaBuilder {
    name: String,
    kind: SchemaKind,
    categories: Vec<CategoryBuilder>,
}

impl SchemaBuilder {
    pub fn new(name: &str, kind: SchemaKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            categories: Vec::new(),
        }
    }

    pub fn category(mut self, category: CategoryBuilder) -> Self {
        self.categories.push(category);
        self
    }

    /// Validate the declaration and assemble the schema tree.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] for invalid or duplicate names,
    /// codec-level declaration mistakes (inverted ranges, bad patterns,
    /// empty option lists), defaults that fail their own entry's
    /// validation, and non-persistent entries in a server schema.
    pub fn build(self) -> DeclarationResult<Schema> {
        let mut categories = Vec::new();
        let mut seen = Vec::new();
        for category in self.categories {
            validate_name(&category.name)?;
            if seen.contains(&category.name) {
                return Err(DeclarationError::DuplicateName {
                    path: category.name.clone(),
                });
            }
            seen.push(category.name.clone());
            let children = build_items(category.children, &category.name)?;
            categories.push(Category {
                label: category.label.unwrap_or_else(|| category.name.clone()),
                name: category.name,
                children,
            });
        }

        let schema = Schema {
            name: self.name,
            kind: self.kind,
            categories,
        };

        for entry in schema.entries() {
            entry.check_declaration()?;
            if schema.kind == SchemaKind::Server && entry.meta().non_persistent {
                return Err(DeclarationError::NonPersistentInServer {
                    path: entry.meta().path.clone(),
                });
            }
        }

        info!(
            schema = %schema.name,
            entries = schema.entries().len(),
            "configuration schema built"
        );
        Ok(schema)
    }
}

fn build_items(children: Vec<ItemBuilder>, parent_path: &str) -> DeclarationResult<Vec<SchemaItem>> {
    let mut items = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for child in children {
        match child {
            ItemBuilder::Entry(pending) => {
                validate_name(&pending.name)?;
                let path = format!("{}.{}", parent_path, pending.name);
                if seen.contains(&pending.name) {
                    return Err(DeclarationError::DuplicateName { path });
                }
                seen.push(pending.name.clone());
                items.push(SchemaItem::Entry((pending.build)(path)));
            }
            ItemBuilder::Group(group) => {
                validate_name(&group.name)?;
                let path = format!("{}.{}", parent_path, group.name);
                if seen.contains(&group.name) {
                    return Err(DeclarationError::DuplicateName { path });
                }
                seen.push(group.name.clone());
                let children = build_items(group.children, &path)?;
                items.push(SchemaItem::Group(Group {
                    label: group.label.unwrap_or_else(|| group.name.clone()),
                    name: group.name,
                    expanded: group.expanded,
                    children,
                }));
            }
        }
    }
    Ok(items)
}

fn validate_name(name: &str) -> DeclarationResult<()> {
    if name.is_empty() {
        return Err(DeclarationError::InvalidName {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(DeclarationError::InvalidName {
            name: name.to_string(),
            reason: "must contain only ASCII letters, digits, '_' or '-'".to_string(),
        });
    }
    Ok(())
}

/// One node of the built schema tree.
pub enum SchemaItem {
    Entry(Box<dyn EntryNode>),
    Group(Group),
}

impl std::fmt::Debug for SchemaItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaItem::Entry(entry) => f
                .debug_tuple("Entry")
                .field(&entry.meta().path)
                .finish(),
            SchemaItem::Group(group) => f.debug_tuple("Group").field(group).finish(),
        }
    }
}

/// A built group of entries.
#[derive(Debug)]
pub struct Group {
    name: String,
    label: String,
    expanded: bool,
    children: Vec<SchemaItem>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn items(&self) -> &[SchemaItem] {
        &self.children
    }
}

/// A built top-level category.
#[derive(Debug)]
pub struct Category {
    name: String,
    label: String,
    children: Vec<SchemaItem>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[SchemaItem] {
        &self.children
    }
}

/// A validated tree of categories, groups, and entries.
#[derive(Debug)]
pub struct Schema {
    name: String,
    kind: SchemaKind,
    categories: Vec<Category>,
}

impl Schema {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All entries in declaration order (category, then group, then
    /// entry order within each).
    pub fn entries(&self) -> Vec<&dyn EntryNode> {
        let mut out = Vec::new();
        for category in &self.categories {
            collect_entries(&category.children, &mut out);
        }
        out
    }

    pub fn entries_mut(&mut self) -> Vec<&mut dyn EntryNode> {
        let mut out = Vec::new();
        for category in &mut self.categories {
            collect_entries_mut(&mut category.children, &mut out);
        }
        out
    }

    /// Look up an entry by its full dot-separated path.
    pub fn entry(&self, path: &str) -> Option<&dyn EntryNode> {
        self.entries().into_iter().find(|e| e.meta().path == path)
    }

    pub fn entry_mut(&mut self, path: &str) -> Option<&mut dyn EntryNode> {
        self.entries_mut()
            .into_iter()
            .find(|e| e.meta().path == path)
    }

    /// Widget descriptors for every entry, in declaration order.
    ///
    /// Server schemas live in headless contexts; they produce no
    /// widgets at all.
    pub fn widgets(&self) -> Vec<WidgetDescriptor> {
        if self.kind == SchemaKind::Server {
            return Vec::new();
        }
        self.entries().into_iter().map(|e| e.widget()).collect()
    }
}

fn collect_entries<'a>(items: &'a [SchemaItem], out: &mut Vec<&'a dyn EntryNode>) {
    for item in items {
        match item {
            SchemaItem::Entry(node) => out.push(node.as_ref()),
            SchemaItem::Group(group) => collect_entries(&group.children, out),
        }
    }
}

fn collect_entries_mut<'a>(items: &'a mut [SchemaItem], out: &mut Vec<&'a mut dyn EntryNode>) {
    for item in items {
        match item {
            SchemaItem::Entry(node) => out.push(node.as_mut()),
            SchemaItem::Group(group) => collect_entries_mut(&mut group.children, out),
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
