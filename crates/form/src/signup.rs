//! The stock signup form: email, country, zip code, password, and password
//! confirmation.

use crate::constraint::{Constraint, LengthBound};
use crate::error::FormError;
use crate::field::{ErrorDisplay, Field, FieldId};
use crate::form::FormController;
use crate::registry::FieldRegistry;

/// Field identifiers of the signup form.
pub mod ids {
    /// Email address.
    pub const EMAIL: &str = "email";
    /// Country name.
    pub const COUNTRY: &str = "country";
    /// Postal zip code.
    pub const ZIP_CODE: &str = "zip-code";
    /// Password.
    pub const PASSWORD: &str = "password";
    /// Password confirmation.
    pub const PASSWORD_CONFIRM: &str = "password-confirm";
}

/// Accepts `name@host`, with optional dot-separated domain labels; a
/// single-label domain like `a@b` passes.
pub const EMAIL_PATTERN: &str = r"^\w+@\w+(\.\w+)*$";

/// Clause reported when the email pattern finds no match.
pub const EMAIL_CLAUSE: &str = "must have the format of an email address";

/// Unanchored: only requires a five-digit run somewhere in the value. The
/// exact-length rule that follows bounds the field.
pub const ZIP_PATTERN: &str = r"\d{5}";

/// Symbols the password character-mix rule accepts.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()";

/// Clause reported when the password misses a character class.
pub const PASSWORD_CLAUSE: &str =
    "must contain at least 1 of each: uppercase letter, lowercase letter, number, and symbol";

/// Message reported when the confirmation differs from the password.
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Builds the signup form's registry, drawing an error display for each
/// field from `display_for` (keyed by the [`ids`] constants).
///
/// Constraint order matters: the trailing `Required` rules take over the
/// reported message for blank values.
pub fn signup_registry(
    mut display_for: impl FnMut(&str) -> Box<dyn ErrorDisplay>,
) -> Result<FieldRegistry, FormError> {
    let mut registry = FieldRegistry::new();

    registry.register(Field::new(
        FieldId::new(ids::EMAIL)?,
        vec![
            Constraint::pattern(EMAIL_PATTERN, Some(EMAIL_CLAUSE))?,
            Constraint::Required,
        ],
        display_for(ids::EMAIL),
    ))?;

    registry.register(Field::new(
        FieldId::new(ids::COUNTRY)?,
        vec![
            Constraint::Length {
                bound: 4,
                mode: LengthBound::Min,
            },
            Constraint::Required,
        ],
        display_for(ids::COUNTRY),
    ))?;

    registry.register(Field::new(
        FieldId::new(ids::ZIP_CODE)?,
        vec![
            Constraint::pattern(ZIP_PATTERN, None)?,
            Constraint::Length {
                bound: 5,
                mode: LengthBound::Exact,
            },
            Constraint::Required,
        ],
        display_for(ids::ZIP_CODE),
    ))?;

    registry.register(Field::new(
        FieldId::new(ids::PASSWORD)?,
        vec![
            Constraint::CharMix {
                symbols: PASSWORD_SYMBOLS.into(),
                clause: PASSWORD_CLAUSE.into(),
            },
            Constraint::Length {
                bound: 6,
                mode: LengthBound::Min,
            },
            Constraint::Length {
                bound: 20,
                mode: LengthBound::Max,
            },
            Constraint::Required,
        ],
        display_for(ids::PASSWORD),
    ))?;

    registry.register(Field::new(
        FieldId::new(ids::PASSWORD_CONFIRM)?,
        vec![Constraint::Matches {
            other: FieldId::new(ids::PASSWORD)?,
            message: PASSWORD_MISMATCH.into(),
        }],
        display_for(ids::PASSWORD_CONFIRM),
    ))?;

    Ok(registry)
}

/// Builds the signup form's controller. See [`signup_registry`].
pub fn signup_form(
    display_for: impl FnMut(&str) -> Box<dyn ErrorDisplay>,
) -> Result<FormController, FormError> {
    FormController::new(signup_registry(display_for)?)
}
