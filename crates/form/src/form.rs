//! Form controller: event handling, submission gating, lifecycle.

use tracing::debug;

use crate::error::FormError;
use crate::field::{Field, FieldId};
use crate::registry::FieldRegistry;

// ============================================================================
// EVENTS
// ============================================================================

/// Interaction events the controller reacts to.
///
/// All evaluation triggered by an event runs synchronously to completion
/// before [`FormController::handle_event`] returns; nothing blocks, suspends,
/// or runs in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field's value changed.
    ValueChanged {
        /// The field whose value changed.
        field: FieldId,
        /// The new value.
        value: String,
    },
    /// The user attempted to submit the form.
    SubmitAttempted,
}

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// An accepted submission happened; the embedding layer renders its
    /// confirmation state and may offer [`FormController::restart`].
    Completed,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was valid; the form moved to [`FormPhase::Completed`].
    Accepted,
    /// At least one field was invalid; submission is blocked and each
    /// invalid field's error display was revealed by the forced pass.
    Rejected,
}

// ============================================================================
// FORM CONTROLLER
// ============================================================================

/// Runs every field controller and gates submission on aggregate validity.
#[derive(Debug)]
pub struct FormController {
    fields: FieldRegistry,
    phase: FormPhase,
}

impl FormController {
    /// Wraps a registry, checking that every cross-field rule targets a
    /// registered field.
    pub fn new(fields: FieldRegistry) -> Result<Self, FormError> {
        for field in fields.fields() {
            for constraint in field.constraints() {
                if let Some(other) = constraint.depends_on() {
                    if !fields.contains(other) {
                        return Err(FormError::UnknownField(other.clone()));
                    }
                }
            }
        }
        Ok(Self {
            fields,
            phase: FormPhase::default(),
        })
    }

    /// Dispatches one interaction event.
    ///
    /// Returns the submission outcome for [`FormEvent::SubmitAttempted`],
    /// `None` otherwise.
    pub fn handle_event(&mut self, event: FormEvent) -> Result<Option<SubmitOutcome>, FormError> {
        match event {
            FormEvent::ValueChanged { field, value } => {
                if self.phase == FormPhase::Completed {
                    debug!(field = %field, "value change ignored after completion");
                    return Ok(None);
                }
                self.set_value(&field, value)?;
                Ok(None)
            }
            FormEvent::SubmitAttempted => Ok(Some(self.submit())),
        }
    }

    /// Stores a new value, then re-evaluates the field and every field that
    /// declares a cross-field rule against it.
    pub fn set_value(&mut self, id: &FieldId, value: String) -> Result<(), FormError> {
        let Some(field) = self.fields.get_mut(id) else {
            return Err(FormError::UnknownField(id.clone()));
        };
        field.set_value(value);
        self.evaluate_field(id);

        let dependents = self.fields.dependents_of(id);
        for dependent in &dependents {
            self.evaluate_field(dependent);
        }
        Ok(())
    }

    /// Forces a re-evaluation pass over every field in registration order,
    /// then gates on aggregate validity.
    ///
    /// A field's invalidity never aborts evaluation of its peers; the
    /// aggregate is a pure read over per-field state after the pass.
    pub fn submit(&mut self) -> SubmitOutcome {
        let ids: Vec<FieldId> = self.fields.ids().cloned().collect();
        for id in &ids {
            self.evaluate_field(id);
        }

        if self.is_valid() {
            self.phase = FormPhase::Completed;
            debug!("submission accepted");
            SubmitOutcome::Accepted
        } else {
            let invalid = self
                .fields
                .fields()
                .filter(|field| !field.validity().is_valid())
                .count();
            debug!(invalid, "submission blocked");
            SubmitOutcome::Rejected
        }
    }

    /// Whether every field currently passes its constraints.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.fields().all(|field| field.validity().is_valid())
    }

    /// The form's lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Looks up a field by identifier.
    #[must_use]
    pub fn field(&self, id: &FieldId) -> Option<&Field> {
        self.fields.get(id)
    }

    /// Fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.fields()
    }

    /// Post-success reset: clears every value, validity, and display,
    /// returning the form to its initial [`FormPhase::Editing`] phase.
    pub fn restart(&mut self) {
        for field in self.fields.fields_mut() {
            field.reset();
        }
        self.phase = FormPhase::Editing;
        debug!("form restarted");
    }

    /// Runs one evaluation pass for `id`, snapshotting the peer values its
    /// cross-field rules read before taking the field mutably. No-op for an
    /// unregistered identifier; callers validate ids at the public surface.
    fn evaluate_field(&mut self, id: &FieldId) {
        let Some(field) = self.fields.get(id) else {
            return;
        };
        let peers: Vec<Option<String>> = field
            .constraints()
            .iter()
            .map(|constraint| {
                constraint.depends_on().map(|other| {
                    self.fields
                        .get(other)
                        .map(|peer| peer.value().to_owned())
                        .unwrap_or_default()
                })
            })
            .collect();

        let Some(field) = self.fields.get_mut(id) else {
            return;
        };
        field.evaluate(&peers);
        debug!(field = %id, valid = field.validity().is_valid(), "field evaluated");
    }
}

// ============================================================================
// TESTS
// ============================================================================
