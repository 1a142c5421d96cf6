//! Error types for schema declaration, edit sessions, persisted
//! stores, and host-struct binding.
//!
//! Validation failures shown to end users are not errors in this
//! sense: they are [`ValidationError`](crate::validation::ValidationError)
//! values produced by the validation pipeline and attached to widgets.
//! The types here cover author mistakes (caught once, at build time)
//! and store/session failures.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while building a schema from entry declarations.
///
/// These indicate mistakes in the declaration itself: invalid names,
/// impossible ranges, defaults that fail their own entry's checks.
/// They are raised once when the schema is built and are never shown
/// to end users.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeclarationError {
    #[error("Invalid entry name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Duplicate name at '{path}'")]
    DuplicateName { path: String },

    #[error("Invalid range for '{path}': minimum {min} exceeds maximum {max}")]
    EmptyRange {
        path: String,
        min: String,
        max: String,
    },

    #[error("Invalid size bounds for '{path}': minimum {min} exceeds maximum {max}")]
    EmptySizeBounds {
        path: String,
        min: usize,
        max: usize,
    },

    #[error("Default value for '{path}' fails validation: {reason}")]
    DefaultRejected { path: String, reason: String },

    #[error("Selection entry '{path}' declares no options")]
    NoOptions { path: String },

    #[error("Selection entry '{path}' declares duplicate option label '{label}'")]
    DuplicateOption { path: String, label: String },

    #[error("Invalid pattern for '{path}': {reason}")]
    InvalidPattern { path: String, reason: String },

    #[error("Record entry '{path}' declares no fields")]
    NoFields { path: String },

    #[error("Record entry '{path}' declares duplicate field '{field}'")]
    DuplicateField { path: String, field: String },

    #[error("Record entry '{path}' names caption field '{caption}' which does not exist")]
    UnknownCaption { path: String, caption: String },

    #[error("Non-persistent entry '{path}' is not allowed in a server schema")]
    NonPersistentInServer { path: String },
}

/// Errors raised by edit-session operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("Unknown entry path '{path}'")]
    UnknownPath { path: String },

    #[error("Save blocked by {error_count} validation error(s)")]
    SaveBlocked {
        error_count: usize,
        errors: Vec<ValidationError>,
    },

    #[error("Save failed writing to the store: {source}")]
    StoreFailure {
        #[from]
        source: StoreError,
    },
}

/// Errors raised by persisted-store backends.
///
/// Malformed individual values are not store errors: the load circuit
/// silently falls back to entry defaults for those. These variants
/// cover file access and whole-document syntax problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Failed to access settings file: {path} - {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Failed to parse settings: {reason}")]
    Parse { reason: String },

    #[error("Failed to serialize settings: {reason}")]
    Serialize { reason: String },

    #[error("Cannot descend into '{path}': not a table")]
    NotATable { path: String },
}

/// Errors raised while baking committed values into a host struct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindingError {
    #[error("Binding references unknown entry path '{path}'")]
    UnknownPath { path: String },

    #[error("Binding for '{path}' expected a value of type {expected}")]
    TypeMismatch { path: String, expected: String },

    #[error("Binding for '{path}' targets a non-persistent entry with no stored form")]
    NonPersistent { path: String },
}

/// Result type alias for schema declaration.
pub type DeclarationResult<T> = Result<T, DeclarationError>;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for binding operations.
pub type BindingResult<T> = Result<T, BindingError>;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
