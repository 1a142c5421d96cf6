//! Tests for validation issue and error types.

use super::*;

#[test]
fn issue_constructors_set_kind() {
    assert_eq!(
        Issue::out_of_range("too big").kind,
        ValidationErrorKind::OutOfRange
    );
    assert_eq!(Issue::invalid("bad").kind, ValidationErrorKind::InvalidValue);
    assert_eq!(Issue::missing("gone").kind, ValidationErrorKind::MissingValue);
    assert_eq!(
        Issue::container("too many").kind,
        ValidationErrorKind::ContainerViolation
    );
}

#[test]
fn at_index_appends_zero_based_marker() {
    let issue = Issue::invalid("Must be even").at_index(2);
    assert_eq!(issue.message, "Must be even, at index 2");
    assert_eq!(issue.kind, ValidationErrorKind::InvalidElement);
}

#[test]
fn at_key_names_the_key() {
    let issue = Issue::out_of_range("Must be at least 0").at_key("gravity");
    assert_eq!(issue.message, "Must be at least 0, at key 'gravity'");
    assert_eq!(issue.kind, ValidationErrorKind::InvalidElement);
}

#[test]
fn in_field_names_the_field() {
    let issue = Issue::invalid("Must not be empty").in_field("label");
    assert_eq!(issue.message, "Must not be empty, in field 'label'");
}

#[test]
fn validation_error_display_includes_path() {
    let error = ValidationError::at("general.volume", Issue::out_of_range("Must be at most 100"));
    assert_eq!(error.to_string(), "general.volume: Must be at most 100");
}

#[test]
fn kind_display_is_stable() {
    assert_eq!(ValidationErrorKind::OutOfRange.to_string(), "OutOfRange");
    assert_eq!(
        ValidationErrorKind::ContainerViolation.to_string(),
        "ContainerViolation"
    );
}
