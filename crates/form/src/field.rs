//! Field identity, validity state, and the per-field controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::FormError;
use crate::label::human_readable;

// ============================================================================
// FIELD ID
// ============================================================================

/// Identifier of a form field.
///
/// Stable, non-empty, used both for lookup and label generation.
/// Construction rejects the empty string so the label formatter never has to
/// cope with one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldId(String);

impl FieldId {
    /// Creates an identifier, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, FormError> {
        let id = id.into();
        if id.is_empty() {
            return Err(FormError::EmptyFieldId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FieldId {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FieldId {
    type Error = FormError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

// ============================================================================
// VALIDITY
// ============================================================================

/// Derived pass/fail state of a field.
///
/// Recomputed from the current input values on every evaluation pass, never
/// persisted. A field that has not been evaluated yet reads as valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Validity {
    /// The field passed its constraints (or has not been evaluated yet).
    #[default]
    Valid,
    /// The field failed at least one constraint; `message` is the one
    /// retained from the last failing constraint.
    Invalid {
        /// Human-readable message for the error display.
        message: String,
    },
}

impl Validity {
    /// Whether the field currently passes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The retained message, when invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid { message } => Some(message),
        }
    }
}

// ============================================================================
// ERROR DISPLAY
// ============================================================================

/// Inline error element owned by a single field.
///
/// The embedding presentation layer implements this for whatever renders the
/// error text. `show` sets the text and reveals the element in one step.
pub trait ErrorDisplay {
    /// Sets the error text and reveals the element.
    fn show(&mut self, message: &str);

    /// Hides the element.
    fn hide(&mut self);
}

/// Display that renders nothing. Useful for headless validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl ErrorDisplay for NullDisplay {
    fn show(&mut self, _message: &str) {}

    fn hide(&mut self) {}
}

// ============================================================================
// FIELD
// ============================================================================

/// Per-field unit owning constraint evaluation and error-display visibility.
///
/// A field owns its error display exclusively: no field ever touches another
/// field's display. Cross-field rules re-trigger the *other* field's own
/// controller instead.
pub struct Field {
    id: FieldId,
    label: String,
    constraints: Vec<Constraint>,
    value: String,
    validity: Validity,
    display: Box<dyn ErrorDisplay>,
}

impl Field {
    /// Creates a field with an empty value and a label derived from `id`.
    pub fn new(id: FieldId, constraints: Vec<Constraint>, display: Box<dyn ErrorDisplay>) -> Self {
        let label = human_readable(id.as_str());
        Self {
            id,
            label,
            constraints,
            value: String::new(),
            validity: Validity::Valid,
            display,
        }
    }

    /// The field's identifier.
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    /// The human-readable label derived from the identifier.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The field's current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The field's constraint list, in declaration order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The field's current validity.
    #[must_use]
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// The current validity message, when invalid.
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.validity.message()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Runs one evaluation pass.
    ///
    /// `peer_values` is aligned with the constraint list: the entry for a
    /// cross-field constraint holds the other field's current value, every
    /// other entry is `None`.
    ///
    /// Prior validity is cleared and the display hidden first; then every
    /// constraint runs in declaration order, a later failure replacing the
    /// earlier message; finally the display is revealed with the retained
    /// message if the field ended up invalid.
    pub(crate) fn evaluate(&mut self, peer_values: &[Option<String>]) {
        self.validity = Validity::Valid;
        self.display.hide();

        let mut failure = None;
        for (constraint, peer) in self.constraints.iter().zip(peer_values) {
            if let Err(err) = constraint.evaluate(&self.value, &self.label, peer.as_deref()) {
                // Every rule runs; the last failure wins.
                failure = Some(err);
            }
        }

        if let Some(err) = failure {
            let message = err.message.into_owned();
            self.display.show(&message);
            self.validity = Validity::Invalid { message };
        }
    }

    /// Returns the field to its initial state: empty value, valid, display
    /// hidden.
    pub(crate) fn reset(&mut self) {
        self.value.clear();
        self.validity = Validity::Valid;
        self.display.hide();
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("constraints", &self.constraints)
            .field("value", &self.value)
            .field("validity", &self.validity)
            .field("display", &"<display>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
