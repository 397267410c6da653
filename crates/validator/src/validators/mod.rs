//! Built-in validators
//!
//! All built-ins operate on `str` and compose through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod chars;
pub mod equality;
pub mod length;
pub mod pattern;

pub use chars::{
    ContainsAnyOf, ContainsDigit, ContainsLowercase, ContainsUppercase, contains_any_of,
    contains_digit, contains_lowercase, contains_uppercase,
};
pub use equality::{Equals, equals};
pub use length::{
    ExactLength, LengthMode, MaxLength, MinLength, NotEmpty, exact_length, max_length, min_length,
    not_empty,
};
pub use pattern::{MatchesRegex, matches_regex};
