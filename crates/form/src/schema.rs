//! Declarative form definitions.
//!
//! A [`FormSchema`] is the serializable description of a form: field
//! identifiers with their constraint lists, in order. Building compiles
//! patterns and validates references, so a schema that builds is a form
//! that runs.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::constraint::{Constraint, DEFAULT_FORMAT_CLAUSE, LengthBound};
use crate::error::FormError;
use crate::field::{ErrorDisplay, Field, FieldId};
use crate::form::FormController;
use crate::registry::FieldRegistry;

/// Serializable description of a whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Field definitions, in registration order.
    pub fields: Vec<FieldSchema>,
}

/// Serializable description of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The field's identifier.
    pub id: FieldId,
    /// Constraints, in evaluation order.
    #[serde(default)]
    pub constraints: Vec<ConstraintSchema>,
}

/// Serializable counterpart of [`Constraint`], one variant per rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum ConstraintSchema {
    /// Invalid on the empty value.
    Required,
    /// Length bound, measured in characters.
    Length {
        /// The bound, in characters.
        bound: usize,
        /// Which side of the bound is enforced.
        mode: LengthBound,
    },
    /// Invalid when the regex finds no match.
    Pattern {
        /// The pattern source; compiled at build time.
        pattern: String,
        /// Clause appended after the label; defaults to
        /// [`DEFAULT_FORMAT_CLAUSE`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Invalid unless the value mixes uppercase, lowercase, digit, and one
    /// of `symbols`.
    CharMix {
        /// Accepted symbol characters.
        symbols: String,
        /// Clause appended after the label; defaults to
        /// [`DEFAULT_FORMAT_CLAUSE`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Invalid when non-empty and different from the other field's value.
    Matches {
        /// The field whose current value this one must equal.
        other: FieldId,
        /// Complete message reported on mismatch.
        message: String,
    },
}

impl ConstraintSchema {
    /// Compiles this schema entry into a runtime constraint.
    pub fn build(&self) -> Result<Constraint, FormError> {
        Ok(match self {
            Self::Required => Constraint::Required,
            Self::Length { bound, mode } => Constraint::Length {
                bound: *bound,
                mode: *mode,
            },
            Self::Pattern { pattern, message } => {
                Constraint::pattern(pattern, message.as_deref())?
            }
            Self::CharMix { symbols, message } => Constraint::CharMix {
                symbols: Cow::Owned(symbols.clone()),
                clause: message
                    .clone()
                    .map_or(Cow::Borrowed(DEFAULT_FORMAT_CLAUSE), Cow::Owned),
            },
            Self::Matches { other, message } => Constraint::Matches {
                other: other.clone(),
                message: Cow::Owned(message.clone()),
            },
        })
    }
}

impl FormSchema {
    /// Builds a registry, drawing an error display for each field from
    /// `display_for`.
    pub fn build_registry(
        &self,
        mut display_for: impl FnMut(&FieldId) -> Box<dyn ErrorDisplay>,
    ) -> Result<FieldRegistry, FormError> {
        let mut registry = FieldRegistry::new();
        for field in &self.fields {
            let constraints = field
                .constraints
                .iter()
                .map(ConstraintSchema::build)
                .collect::<Result<Vec<_>, _>>()?;
            let display = display_for(&field.id);
            registry.register(Field::new(field.id.clone(), constraints, display))?;
        }
        Ok(registry)
    }

    /// Builds the registry and wraps it in a controller in one step.
    pub fn build_controller(
        &self,
        display_for: impl FnMut(&FieldId) -> Box<dyn ErrorDisplay>,
    ) -> Result<FormController, FormError> {
        FormController::new(self.build_registry(display_for)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::field::NullDisplay;

    fn sample() -> FormSchema {
        FormSchema {
            fields: vec![
                FieldSchema {
                    id: FieldId::new("password").expect("non-empty"),
                    constraints: vec![
                        ConstraintSchema::Length {
                            bound: 6,
                            mode: LengthBound::Min,
                        },
                        ConstraintSchema::Required,
                    ],
                },
                FieldSchema {
                    id: FieldId::new("password-confirm").expect("non-empty"),
                    constraints: vec![ConstraintSchema::Matches {
                        other: FieldId::new("password").expect("non-empty"),
                        message: "Passwords do not match".to_owned(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn schema_builds_a_working_controller() {
        let mut form = sample()
            .build_controller(|_| Box::new(NullDisplay))
            .expect("well-formed schema");
        let password = FieldId::new("password").expect("non-empty");
        form.set_value(&password, "Secret1!".to_owned())
            .expect("registered");
        assert!(form.is_valid());
    }

    #[test]
    fn invalid_pattern_surfaces_at_build_time() {
        let schema = FormSchema {
            fields: vec![FieldSchema {
                id: FieldId::new("broken").expect("non-empty"),
                constraints: vec![ConstraintSchema::Pattern {
                    pattern: "(unclosed".to_owned(),
                    message: None,
                }],
            }],
        };
        assert!(matches!(
            schema.build_registry(|_| Box::new(NullDisplay)),
            Err(FormError::InvalidPattern(_))
        ));
    }

    #[test]
    fn unknown_matches_target_surfaces_when_wrapping() {
        let schema = FormSchema {
            fields: vec![FieldSchema {
                id: FieldId::new("password-confirm").expect("non-empty"),
                constraints: vec![ConstraintSchema::Matches {
                    other: FieldId::new("password").expect("non-empty"),
                    message: "Passwords do not match".to_owned(),
                }],
            }],
        };
        assert!(matches!(
            schema.build_controller(|_| Box::new(NullDisplay)),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn empty_id_is_rejected_in_deserialization() {
        let result: Result<FieldSchema, _> =
            serde_json::from_value(serde_json::json!({"id": "", "constraints": []}));
        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let schema = sample();
        let json = serde_json::to_string(&schema).expect("serializable");
        let back: FormSchema = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, schema);
    }

    #[test]
    fn wire_format_is_tagged_kebab_case() {
        let schema: ConstraintSchema = serde_json::from_value(serde_json::json!({
            "rule": "length", "bound": 5, "mode": "exact"
        }))
        .expect("deserializable");
        assert_eq!(
            schema,
            ConstraintSchema::Length {
                bound: 5,
                mode: LengthBound::Exact
            }
        );

        let schema: ConstraintSchema = serde_json::from_value(serde_json::json!({
            "rule": "char-mix", "symbols": "!@#"
        }))
        .expect("deserializable");
        assert_eq!(
            schema,
            ConstraintSchema::CharMix {
                symbols: "!@#".to_owned(),
                message: None
            }
        );
    }
}
