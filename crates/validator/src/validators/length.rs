//! String length validators
//!
//! This module provides validators for checking string length constraints.
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructor for byte-length counting when performance
//! is critical and the input is known to be ASCII.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// This is equivalent to `MinLength::new(1)` but more semantic.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("required", "String must not be empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) {
        ValidationError::new(
            "min_length",
            format!("String must be at least {} characters", self.min),
        )
        .with_param("min", self.min.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) {
        ValidationError::new(
            "max_length",
            format!("String must be at most {} characters", self.max),
        )
        .with_param("max", self.max.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) == self.length }
    error(self, input) {
        ValidationError::new(
            "exact_length",
            format!("String must be exactly {} characters", self.length),
        )
        .with_param("expected", self.length.to_string())
        .with_param("actual", self.mode.measure(input).to_string())
    }
    new(length: usize) { Self { length, mode: LengthMode::Chars } }
    fn exact_length(length: usize);
}

impl ExactLength {
    /// Creates an exact length validator that counts bytes.
    #[must_use]
    pub fn bytes(length: usize) -> Self {
        Self {
            length,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::Validate;

    #[rstest]
    #[case("hello", true)]
    #[case("hello world", true)]
    #[case("hi", false)]
    #[case("", false)]
    fn min_length_accepts_iff_long_enough(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(min_length(5).validate(input).is_ok(), valid);
    }

    #[rstest]
    #[case("hello", true)]
    #[case("helloworld", true)]
    #[case("verylongstring", false)]
    fn max_length_accepts_iff_short_enough(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(max_length(10).validate(input).is_ok(), valid);
    }

    #[rstest]
    #[case("hello", true)]
    #[case("hi", false)]
    #[case("toolong", false)]
    fn exact_length_accepts_iff_exact(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(exact_length(5).validate(input).is_ok(), valid);
    }

    #[test]
    fn not_empty_rejects_only_the_empty_string() {
        assert!(not_empty().validate("hello").is_ok());
        assert!(not_empty().validate(" ").is_ok()); // whitespace is not empty
        assert!(not_empty().validate("").is_err());
    }

    #[test]
    fn error_carries_bounds_as_params() {
        let err = min_length(5).validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("min"), Some("5"));
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn unicode_length_counts_chars_by_default() {
        // Default mode counts Unicode chars, not bytes
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok()); // 5 chars
        assert!(validator.validate("\u{1f44b}\u{1f30d}").is_err()); // 2 chars < 5

        // Bytes mode counts raw bytes
        let byte_validator = MinLength::bytes(5);
        assert!(byte_validator.validate("\u{1f44b}\u{1f30d}").is_ok()); // 8 bytes >= 5
    }

    #[test]
    fn composition() {
        use crate::foundation::ValidateExt;

        let validator = min_length(5).and(max_length(10));
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("verylongstring").is_err());
    }
}
