//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Replaces the error message of a validator.
///
/// Useful for reporting one user-facing message for a composed rule,
/// whichever part of it failed. The original error's field path and params
/// are preserved; the code is replaced only when [`with_code`](Self::with_code)
/// is used.
///
/// # Examples
///
/// ```rust
/// use intake_validator::combinators::WithMessage;
/// use intake_validator::foundation::Validate;
/// use intake_validator::validators::min_length;
///
/// let validator = WithMessage::new(min_length(8), "Password must be at least 8 characters");
///
/// let err = validator.validate("short").unwrap_err();
/// assert_eq!(err.message, "Password must be at least 8 characters");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut original| {
            original.message = self.message.clone();
            if let Some(code) = &self.code {
                original.code = code.clone();
            }
            original
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V>
where
    V: Validate,
{
    WithMessage::new(validator, message)
}
