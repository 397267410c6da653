//! OR combinator - logical disjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass for the combined validator to succeed.
/// Short-circuits on the first success; when both fail, the second
/// validator's error is reported.
///
/// # Examples
///
/// ```rust
/// use intake_validator::combinators::Or;
/// use intake_validator::foundation::Validate;
/// use intake_validator::validators::exact_length;
///
/// let validator = Or::new(exact_length(5), exact_length(10));
/// assert!(validator.validate("hello").is_ok());
/// assert!(validator.validate("helloworld").is_ok());
/// assert!(validator.validate("hi").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.left.validate(input).is_ok() {
            return Ok(());
        }
        self.right.validate(input)
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{exact_length, min_length};

    #[test]
    fn test_or_left_passes() {
        let validator = Or::new(exact_length(5), exact_length(10));
        assert!(validator.validate("hello").is_ok());
    }

    #[test]
    fn test_or_right_passes() {
        let validator = Or::new(exact_length(5), exact_length(10));
        assert!(validator.validate("helloworld").is_ok());
    }

    #[test]
    fn test_or_both_fail_reports_right() {
        let validator = Or::new(exact_length(5), min_length(10));
        let err = validator.validate("hi").unwrap_err();
        assert_eq!(err.code, "min_length");
    }
}
