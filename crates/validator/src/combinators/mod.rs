//! Logical combinators for composing validators
//!
//! Combinators wrap one or two validators and derive a new one:
//!
//! - [`And`] - both must pass (short-circuits on the first failure)
//! - [`Or`] - at least one must pass
//! - [`Not`] - inverts the inner validator
//! - [`When`] - runs the inner validator only when a predicate holds
//! - [`WithMessage`] - replaces the reported message (and optionally code)
//!
//! All of them are reachable fluently through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod message;
pub mod not;
pub mod or;
pub mod when;

pub use and::{And, and};
pub use message::{WithMessage, with_message};
pub use not::{Not, not};
pub use or::{Or, or};
pub use when::{When, when};
