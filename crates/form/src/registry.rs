//! Explicit field registry.
//!
//! The registry replaces ambient per-field lookups with one structure built
//! at initialization and handed to the form controller.

use indexmap::IndexMap;

use crate::error::FormError;
use crate::field::{Field, FieldId};

/// Ordered collection of fields, keyed by identifier.
///
/// Iteration order is registration order, which is also the evaluation order
/// on submission.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: IndexMap<FieldId, Field>,
}

impl FieldRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, rejecting duplicate identifiers.
    pub fn register(&mut self, field: Field) -> Result<(), FormError> {
        if self.fields.contains_key(field.id()) {
            return Err(FormError::DuplicateField(field.id().clone()));
        }
        self.fields.insert(field.id().clone(), field);
        Ok(())
    }

    /// Looks up a field by identifier.
    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.fields.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &FieldId) -> Option<&mut Field> {
        self.fields.get_mut(id)
    }

    /// Whether a field with this identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.fields.contains_key(id)
    }

    /// Identifiers in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.keys()
    }

    /// Fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields that declare a cross-field rule against `id`, in registration
    /// order.
    pub(crate) fn dependents_of(&self, id: &FieldId) -> Vec<FieldId> {
        self.fields
            .values()
            .filter(|field| {
                field
                    .constraints()
                    .iter()
                    .any(|constraint| constraint.depends_on() == Some(id))
            })
            .map(|field| field.id().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;
    use crate::field::NullDisplay;

    fn field(id: &str, constraints: Vec<Constraint>) -> Field {
        Field::new(
            FieldId::new(id).expect("non-empty"),
            constraints,
            Box::new(NullDisplay),
        )
    }

    #[test]
    fn registration_preserves_order() {
        let mut registry = FieldRegistry::new();
        for id in ["email", "country", "zip-code"] {
            registry.register(field(id, vec![])).expect("unique id");
        }
        let ids: Vec<&str> = registry.ids().map(FieldId::as_str).collect();
        assert_eq!(ids, ["email", "country", "zip-code"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = FieldRegistry::new();
        registry.register(field("email", vec![])).expect("unique id");
        assert!(matches!(
            registry.register(field("email", vec![])),
            Err(FormError::DuplicateField(_))
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn dependents_follow_matches_constraints() {
        let password = FieldId::new("password").expect("non-empty");
        let mut registry = FieldRegistry::new();
        registry
            .register(field("password", vec![Constraint::Required]))
            .expect("unique id");
        registry
            .register(field(
                "password-confirm",
                vec![Constraint::Matches {
                    other: password.clone(),
                    message: "Passwords do not match".into(),
                }],
            ))
            .expect("unique id");

        let dependents = registry.dependents_of(&password);
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].as_str(), "password-confirm");

        let confirm = FieldId::new("password-confirm").expect("non-empty");
        assert!(registry.dependents_of(&confirm).is_empty());
    }
}
