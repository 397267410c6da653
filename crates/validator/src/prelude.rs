//! Prelude module for convenient imports.
//!
//! Provides a single `use intake_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, validators, and combinators.
//!
//! # Examples
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! let password = min_length(6).and(max_length(20)).and(contains_digit());
//! assert!(password.validate("s3cret!").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Not, Or, When, WithMessage, and, not, or, when, with_message,
};
