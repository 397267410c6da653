//! # intake-validator
//!
//! A composable, type-safe validation engine for the Intake form toolkit.
//!
//! ## Quick Start
//!
//! ```rust
//! use intake_validator::prelude::*;
//!
//! // Compose validators with .and() / .or() / .when()
//! let password = min_length(6).and(max_length(20)).and(contains_digit());
//! assert!(password.validate("s3cret!").is_ok());
//! assert!(password.validate("short").is_err());
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Length**: [`NotEmpty`](validators::NotEmpty), [`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`ExactLength`](validators::ExactLength)
//! - **Pattern**: [`MatchesRegex`](validators::MatchesRegex)
//! - **Content**: [`ContainsUppercase`](validators::ContainsUppercase),
//!   [`ContainsLowercase`](validators::ContainsLowercase),
//!   [`ContainsDigit`](validators::ContainsDigit),
//!   [`ContainsAnyOf`](validators::ContainsAnyOf)
//! - **Equality**: [`Equals`](validators::Equals)

// ValidationError is the fundamental error type for all validators — boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]
// Combinator nesting (And<And<...>, ...>) produces complex types that are
// inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
