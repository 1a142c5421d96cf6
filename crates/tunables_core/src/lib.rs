//! Typed configuration entries with persisted and widget-facing forms.
//!
//! Applications declare their settings once, through a builder DSL, and
//! get three things from the same declaration: a validated in-memory
//! tree of typed entries, a persisted backing keyed by dotted paths
//! (behind the [`SettingsStore`] trait), and widget descriptors an
//! external GUI toolkit can render and feed edits back through.
//!
//! Every entry converts between a typed domain value, a stored
//! [`ConfigValue`], and a widget-side [`GuiValue`]; validation and
//! dirty tracking run through the same pipeline for scalars and for
//! composites (lists, maps, pairs, records) alike.

// Value representations and the codec contract
pub mod codec;
pub mod value;

// Concrete codecs
pub mod color;
pub mod composites;
pub mod primitives;
pub mod record;
pub mod select;
pub mod text;

// Entry nodes, validation, and the schema tree
pub mod entry;
pub mod errors;
pub mod schema;
pub mod validation;

// Editing sessions and collaborator seams
pub mod binding;
pub mod gui;
pub mod session;
pub mod store;

// Re-export for convenient access
pub use binding::{Bindings, FromConfigValue};
pub use codec::EntryCodec;
pub use color::{ColorCodec, Rgba};
pub use composites::{AtomicCodec, ListCodec, MapCodec, PairCodec};
pub use entry::{Entry, EntryMeta, EntryNode, LoadOutcome, SaveResult};
pub use errors::{
    BindingError, BindingResult, DeclarationError, DeclarationResult, SessionError, SessionResult,
    StoreError, StoreResult,
};
pub use gui::{WidgetDescriptor, WidgetKind};
pub use primitives::{BoolCodec, ConfigNumber, RangedCodec};
pub use record::RecordCodec;
pub use schema::{
    bool_entry, color_entry, double_entry, float_entry, int_entry, list_entry, long_entry,
    map_entry, pair_entry, pattern_entry, record_entry, select_entry, string_entry, Category,
    CategoryBuilder, EntryBuilder, Group, GroupBuilder, Schema, SchemaBuilder, SchemaItem,
    SchemaKind,
};
pub use select::SelectCodec;
pub use session::{SaveReport, Session};
pub use value::{ConfigValue, GuiValue};
pub use store::{
    audit_store, load_schema, seed_defaults, write_committed, LoadReport, MemoryStore,
    SettingsStore,
};
pub use text::{PatternCodec, TextCodec};
pub use validation::{Issue, ValidationError, ValidationErrorKind, ValueValidator};
