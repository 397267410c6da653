//! Error types for validation failures
//!
//! A validation failure is a value, not an exception: validators return a
//! structured [`ValidationError`] that callers attach to whatever state they
//! manage. All string fields use `Cow<'static, str>` for zero-allocation in
//! the common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// Ordered key-value parameters attached to an error (typically 0-2 entries).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured validation error.
///
/// # Examples
///
/// ```rust
/// use intake_validator::foundation::ValidationError;
///
/// // Static strings — zero allocation:
/// let error = ValidationError::new("min_length", "String is too short");
///
/// // Dynamic strings — allocates only when needed:
/// let error = ValidationError::new("min_length", format!("Must be at least {} chars", 5))
///     .with_param("min", "5");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "pattern", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional field path, set by the layer that knows which field the
    /// value came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Example: `[("min", "5"), ("actual", "3")]`
    #[serde(skip_serializing_if = "ErrorParams::is_empty")]
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: ErrorParams::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_without_field() {
        let error = ValidationError::new("required", "Value is required");
        assert_eq!(error.to_string(), "Value is required");
    }

    #[test]
    fn display_with_field() {
        let error = ValidationError::new("required", "Value is required").with_field("email");
        assert_eq!(error.to_string(), "email: Value is required");
    }

    #[test]
    fn param_lookup() {
        let error = ValidationError::new("min_length", "too short")
            .with_param("min", "5")
            .with_param("actual", "3");
        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn serializes_without_empty_fields() {
        let error = ValidationError::new("required", "Value is required");
        let json = serde_json::to_value(&error).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({"code": "required", "message": "Value is required"})
        );
    }

    #[test]
    fn serializes_params() {
        let error = ValidationError::new("min_length", "too short").with_param("min", "5");
        let json = serde_json::to_value(&error).expect("serializable");
        assert_eq!(json["params"][0][0], "min");
        assert_eq!(json["params"][0][1], "5");
    }
}
