//! Integration tests for the prelude module.
//!
//! Verifies that `use intake_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use intake_validator::compose;
use intake_validator::prelude::*;
use pretty_assertions::assert_eq;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    // Verify Validate and ValidateExt are available through the prelude.
    let v = min_length(3).and(max_length(20));
    assert!(v.validate("hello").is_ok());
    assert!(v.validate("hi").is_err());
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn password_style_composition() {
    let v = compose![
        contains_uppercase(),
        contains_lowercase(),
        contains_digit(),
        contains_any_of("!@#$%^&*()"),
        min_length(6),
        max_length(20),
    ];
    assert!(v.validate("Abcdef1!").is_ok());
    assert!(v.validate("abcdef1!").is_err());
}

#[test]
fn with_message_unifies_composed_failures() {
    let v = compose![contains_uppercase(), contains_digit()]
        .with_message("must contain an uppercase letter and a digit");

    let err = v.validate("lowercase").unwrap_err();
    assert_eq!(err.message, "must contain an uppercase letter and a digit");
}

#[test]
fn when_skips_empty_values() {
    let v = equals("expected").when(|s: &str| !s.is_empty());
    assert!(v.validate("").is_ok());
    assert!(v.validate("expected").is_ok());
    assert!(v.validate("unexpected").is_err());
}

#[test]
fn or_and_not_compose() {
    let v = exact_length(5).or(exact_length(10));
    assert!(v.validate("hello").is_ok());
    assert!(v.validate("helloworld").is_ok());
    assert!(v.validate("hi").is_err());

    let v = not(contains_digit());
    assert!(v.validate("letters").is_ok());
    assert!(v.validate("d1gits").is_err());
}

// ============================================================================
// ERROR SURFACE
// ============================================================================

#[test]
fn errors_serialize_for_presentation_layers() {
    let err = min_length(5)
        .validate("hi")
        .unwrap_err()
        .with_field("username");

    let json = serde_json::to_value(&err).expect("serializable");
    assert_eq!(json["code"], "min_length");
    assert_eq!(json["field"], "username");
}

#[test]
fn validation_result_alias_reads_naturally() {
    fn check(value: &str) -> ValidationResult<()> {
        not_empty().validate(value)?;
        min_length(3).validate(value)
    }

    assert!(check("hello").is_ok());
    assert_eq!(check("").unwrap_err().code, "required");
    assert_eq!(check("hi").unwrap_err().code, "min_length");
}

#[test]
fn regex_construction_errors_propagate() {
    assert!(matches_regex(r"(unclosed").is_err());
    assert!(matches_regex(r"^\w+@\w+(\.\w+)*$").is_ok());
}
