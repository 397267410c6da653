//! Construction and wiring errors for the form layer.
//!
//! These cover mistakes made while *building* a form. User-input invalidity
//! is never an error at the form API: it is a [`Validity`](crate::Validity)
//! value attached to the field.

use thiserror::Error;

use crate::field::FieldId;

/// Errors raised while constructing or wiring a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field identifier was empty. Identifiers drive both lookup and
    /// label generation and must be non-empty.
    #[error("field identifier must not be empty")]
    EmptyFieldId,

    /// Two fields were registered under the same identifier.
    #[error("field '{0}' is already registered")]
    DuplicateField(FieldId),

    /// An identifier did not resolve to a registered field.
    #[error("unknown field '{0}'")]
    UnknownField(FieldId),

    /// A pattern constraint failed to compile.
    #[error("invalid constraint pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let id = FieldId::new("zip-code").expect("non-empty");
        assert_eq!(
            FormError::UnknownField(id).to_string(),
            "unknown field 'zip-code'"
        );
    }

    #[test]
    fn pattern_errors_convert() {
        let err = regex::Regex::new("(unclosed").expect_err("invalid regex");
        let form_err = FormError::from(err);
        assert!(matches!(form_err, FormError::InvalidPattern(_)));
    }
}
