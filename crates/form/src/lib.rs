//! # intake-form
//!
//! Form controllers over the [`intake_validator`] rule engine: field
//! identities and labels, the constraint data model, per-field validity and
//! error-display orchestration, an ordered field registry, a submission
//! gate, and the stock signup form.
//!
//! ## Quick Start
//!
//! ```rust
//! use intake_form::{
//!     Constraint, Field, FieldId, FieldRegistry, FormController, FormEvent, NullDisplay,
//!     SubmitOutcome,
//! };
//!
//! let mut registry = FieldRegistry::new();
//! let name = FieldId::new("display-name")?;
//! registry.register(Field::new(
//!     name.clone(),
//!     vec![
//!         Constraint::Length { bound: 3, mode: intake_form::LengthBound::Min },
//!         Constraint::Required,
//!     ],
//!     Box::new(NullDisplay),
//! ))?;
//!
//! let mut form = FormController::new(registry)?;
//! form.set_value(&name, "Al".into())?;
//! assert_eq!(
//!     form.field(&name).unwrap().validation_message(),
//!     Some("Display name must be at least 3 characters long"),
//! );
//!
//! form.set_value(&name, "Alice".into())?;
//! let outcome = form.handle_event(FormEvent::SubmitAttempted)?;
//! assert_eq!(outcome, Some(SubmitOutcome::Accepted));
//! # Ok::<(), intake_form::FormError>(())
//! ```
//!
//! ## Evaluation contract
//!
//! A field's constraints run in declaration order on every pass, and every
//! constraint runs: when several fail, the message of the **last** failing
//! one is the one retained and shown. See [`Constraint`] for the rule
//! variants and [`FormController`] for the event contract.

pub mod constraint;
pub mod error;
pub mod field;
pub mod form;
pub mod label;
pub mod registry;
pub mod schema;
pub mod signup;

pub use constraint::{Constraint, DEFAULT_FORMAT_CLAUSE, LengthBound};
pub use error::FormError;
pub use field::{ErrorDisplay, Field, FieldId, NullDisplay, Validity};
pub use form::{FormController, FormEvent, FormPhase, SubmitOutcome};
pub use label::human_readable;
pub use registry::FieldRegistry;
pub use schema::{ConstraintSchema, FieldSchema, FormSchema};
pub use signup::{signup_form, signup_registry};
