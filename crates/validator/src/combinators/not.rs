//! NOT combinator - logical inversion of a validator

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator.
///
/// Succeeds when the inner validator fails, and fails when it succeeds.
///
/// # Examples
///
/// ```rust
/// use intake_validator::combinators::Not;
/// use intake_validator::foundation::Validate;
/// use intake_validator::validators::contains_digit;
///
/// let validator = Not::new(contains_digit());
/// assert!(validator.validate("letters only").is_ok());
/// assert!(validator.validate("d1gits").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inverted validator.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not",
                "Value must not satisfy the inverted rule",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
