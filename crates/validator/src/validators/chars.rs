//! Character-class presence validators
//!
//! Each validator checks that at least one character of a class appears
//! anywhere in the string. Classes are ASCII, matching the `[A-Z]`-style
//! ranges these rules conventionally encode.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Validates that a string contains at least one ASCII uppercase letter.
    pub ContainsUppercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_uppercase()) }
    error(input) {
        ValidationError::new("uppercase", "String must contain an uppercase letter")
    }
    fn contains_uppercase();
}

crate::validator! {
    /// Validates that a string contains at least one ASCII lowercase letter.
    pub ContainsLowercase for str;
    rule(input) { input.chars().any(|c| c.is_ascii_lowercase()) }
    error(input) {
        ValidationError::new("lowercase", "String must contain a lowercase letter")
    }
    fn contains_lowercase();
}

crate::validator! {
    /// Validates that a string contains at least one ASCII digit.
    pub ContainsDigit for str;
    rule(input) { input.chars().any(|c| c.is_ascii_digit()) }
    error(input) { ValidationError::new("digit", "String must contain a digit") }
    fn contains_digit();
}

// ============================================================================
// CONTAINS ANY OF
// ============================================================================

/// Validates that a string contains at least one character from a set.
///
/// # Examples
///
/// ```rust
/// use intake_validator::validators::ContainsAnyOf;
/// use intake_validator::foundation::Validate;
///
/// let validator = ContainsAnyOf::new("!@#$%^&*()");
/// assert!(validator.validate("pa$$word").is_ok());
/// assert!(validator.validate("password").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainsAnyOf {
    /// The character set, as a string of accepted characters.
    pub set: Cow<'static, str>,
}

impl ContainsAnyOf {
    /// Creates a new set-membership validator.
    pub fn new(set: impl Into<Cow<'static, str>>) -> Self {
        Self { set: set.into() }
    }
}

impl Validate for ContainsAnyOf {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.chars().any(|c| self.set.contains(c)) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "any_of",
                format!("String must contain one of '{}'", self.set),
            )
            .with_param("set", self.set.clone()))
        }
    }
}

/// Creates a set-membership validator.
pub fn contains_any_of(set: impl Into<Cow<'static, str>>) -> ContainsAnyOf {
    ContainsAnyOf::new(set)
}

// ============================================================================
// TESTS
// ============================================================================
