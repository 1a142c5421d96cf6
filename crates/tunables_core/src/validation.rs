//! Validation types for the entry pipeline.
//!
//! A validator is a function from a value to an optional failure; `None`
//! means "valid". Codecs report intrinsic failures (bounds, malformed
//! input) as [`Issue`] values; entries attach their path to produce the
//! [`ValidationError`] values shown next to widgets.
//!
//! Composition order is fixed and uniform across the library: within a
//! single value, codec-intrinsic checks run before user-supplied
//! validators; within a composite, element and field checks run before
//! the container's own checks, in iteration order, and the first failure
//! wins.

use std::fmt;

/// A user-supplied validator over a domain value. `None` means "valid";
/// `Some` carries the message shown next to the widget.
pub type ValueValidator<V> = Box<dyn Fn(&V) -> Option<String>>;

/// Validation error categories.
///
/// Used to classify failures for reporting; the GUI layer may pick
/// icons or colors per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A value violates its declared minimum or maximum bound.
    OutOfRange,
    /// A value is well-typed but semantically invalid.
    InvalidValue,
    /// An element or field inside a composite value failed.
    InvalidElement,
    /// The widget-side value could not be converted to a domain value.
    MissingValue,
    /// The container itself violates a structural rule (size bounds,
    /// duplicate keys).
    ContainerViolation,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "OutOfRange"),
            Self::InvalidValue => write!(f, "InvalidValue"),
            Self::InvalidElement => write!(f, "InvalidElement"),
            Self::MissingValue => write!(f, "MissingValue"),
            Self::ContainerViolation => write!(f, "ContainerViolation"),
        }
    }
}

/// A single validation failure, without location information.
///
/// Codecs produce issues; the owning entry knows its own path and
/// upgrades them to [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// The category of failure.
    pub kind: ValidationErrorKind,
    /// Human-readable message, suitable for display next to a widget.
    pub message: String,
}

impl Issue {
    /// A bound violation. The message should name the violated bound.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::OutOfRange,
            message: message.into(),
        }
    }

    /// A well-typed but semantically invalid value.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidValue,
            message: message.into(),
        }
    }

    /// A widget value that could not be converted back to a domain value.
    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::MissingValue,
            message: message.into(),
        }
    }

    /// A structural rule violation on a container value.
    pub fn container(message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::ContainerViolation,
            message: message.into(),
        }
    }

    /// Decorate this issue as coming from a list element.
    ///
    /// The index is zero-based and appended to the message, so the first
    /// failing element of `[2, 4, 5, 8]` under an even-only check reports
    /// `..., at index 2`.
    pub fn at_index(self, index: usize) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidElement,
            message: format!("{}, at index {}", self.message, index),
        }
    }

    /// Decorate this issue as coming from a map entry with the given key.
    pub fn at_key(self, key: &str) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidElement,
            message: format!("{}, at key '{}'", self.message, key),
        }
    }

    /// Decorate this issue as coming from a named record field.
    pub fn in_field(self, field: &str) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidElement,
            message: format!("{}, in field '{}'", self.message, field),
        }
    }
}

/// A validation failure attached to a concrete entry.
///
/// # Examples
///
/// ```rust
/// use tunables_core::{ValidationError, ValidationErrorKind};
///
/// let error = ValidationError {
///     kind: ValidationErrorKind::OutOfRange,
///     path: "general.volume".to_string(),
///     message: "Must be at most 100".to_string(),
/// };
/// assert!(error.to_string().contains("general.volume"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The category of failure.
    pub kind: ValidationErrorKind,
    /// Dot-separated path of the entry that failed.
    pub path: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Attach a path to an [`Issue`].
    pub fn at(path: impl Into<String>, issue: Issue) -> Self {
        Self {
            kind: issue.kind,
            path: path.into(),
            message: issue.message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
