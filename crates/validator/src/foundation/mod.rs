//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation
//! system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! Validators are generic over their input type, compose through logical
//! combinators, and report failures as structured values:
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! let validator = min_length(5).and(max_length(20));
//! let error = validator.validate("hi").unwrap_err();
//! assert_eq!(error.code, "min_length");
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError};
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
