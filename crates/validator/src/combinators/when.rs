//! WHEN combinator - conditional validation
//!
//! This module provides the [`When`] combinator which conditionally applies
//! a validator based on a predicate function. The validator only runs if the
//! condition returns `true`.
//!
//! # Use Cases
//!
//! - Skip validation for empty strings (validate only if non-empty)
//! - Apply different validation rules based on context

use crate::foundation::{Validate, ValidationError};

/// Conditionally applies a validator based on a predicate.
///
/// The `When` combinator only runs the inner validator if the condition
/// function returns `true`. If the condition returns `false`, validation
/// succeeds immediately without running the inner validator.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
/// * `C` - The condition function type (must implement `Fn(&Input) -> bool`)
///
/// # Examples
///
/// ```rust
/// use intake_validator::combinators::When;
/// use intake_validator::foundation::Validate;
/// use intake_validator::validators::min_length;
///
/// // Only validate non-empty strings
/// let validator = When::new(min_length(5), |s: &str| !s.is_empty());
///
/// // Empty string - skipped, passes
/// assert!(validator.validate("").is_ok());
///
/// // Short non-empty string - validated, fails
/// assert!(validator.validate("hi").is_err());
///
/// // Long string - validated, passes
/// assert!(validator.validate("hello world").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    /// The inner validator to apply conditionally.
    pub(crate) validator: V,
    /// The condition function that determines whether to validate.
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    ///
    /// # Arguments
    ///
    /// * `validator` - The validator to apply conditionally
    /// * `condition` - A function that returns `true` if validation should run
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Extracts the validator and condition function.
    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}
