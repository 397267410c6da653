//! Equality validators

use crate::foundation::{Validate, ValidationError};

/// Validates that a string equals an expected value.
///
/// The expected value is captured at construction, so cross-field checks
/// build a fresh validator from the other field's current value on every
/// evaluation pass.
///
/// # Examples
///
/// ```rust
/// use intake_validator::validators::Equals;
/// use intake_validator::foundation::Validate;
///
/// let validator = Equals::new("hunter2");
/// assert!(validator.validate("hunter2").is_ok());
/// assert!(validator.validate("hunter3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equals {
    /// The value the input must equal.
    pub expected: String,
}

impl Equals {
    /// Creates a new equality validator.
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl Validate for Equals {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input == self.expected {
            Ok(())
        } else {
            Err(ValidationError::new(
                "mismatch",
                "Value does not match the expected value",
            ))
        }
    }
}

/// Creates an equality validator.
pub fn equals(expected: impl Into<String>) -> Equals {
    Equals::new(expected)
}
