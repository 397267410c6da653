//! The constraint data model and its evaluation.

use std::borrow::Cow;

use regex::Regex;
use serde::{Deserialize, Serialize};

use intake_validator::compose;
use intake_validator::foundation::{Validate, ValidateExt, ValidationError};
use intake_validator::validators::{
    MatchesRegex, contains_any_of, contains_digit, contains_lowercase, contains_uppercase, equals,
    exact_length, max_length, min_length, not_empty,
};

use crate::error::FormError;
use crate::field::FieldId;

/// Which side of a length bound a rule enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthBound {
    /// Invalid when the value is shorter than the bound.
    Min,
    /// Invalid when the value's length differs from the bound.
    Exact,
    /// Invalid when the value is longer than the bound.
    Max,
}

impl LengthBound {
    /// Adverb used in the reported message.
    #[must_use]
    pub fn adverb(self) -> &'static str {
        match self {
            LengthBound::Min => "at least",
            LengthBound::Exact => "exactly",
            LengthBound::Max => "at most",
        }
    }
}

/// Default clause for pattern-style rules without a caller-supplied message.
pub const DEFAULT_FORMAT_CLAUSE: &str = "must have the correct format";

/// One named rule applied to a field's value.
///
/// A field's constraints evaluate in declaration order, and every constraint
/// runs on every pass: when several fail, the message of the last failing
/// one is the one retained.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Invalid on the empty value. Message: "`<Label>` cannot be blank".
    Required,

    /// Length bound, measured in characters. Message: "`<Label>` must be
    /// `<adverb>` `<bound>` characters long".
    Length {
        /// The bound, in characters.
        bound: usize,
        /// Which side of the bound is enforced.
        mode: LengthBound,
    },

    /// Invalid when the regex finds no match. Unanchored patterns keep
    /// find-anywhere semantics. Message: "`<Label>` `<clause>`".
    Pattern {
        /// The compiled pattern.
        regex: Regex,
        /// Clause appended after the label in the message.
        clause: Cow<'static, str>,
    },

    /// Invalid unless the value contains at least one uppercase letter, one
    /// lowercase letter, one digit, and one character from `symbols`, each
    /// anywhere in the value. Message: "`<Label>` `<clause>`".
    CharMix {
        /// Accepted symbol characters.
        symbols: Cow<'static, str>,
        /// Clause appended after the label in the message.
        clause: Cow<'static, str>,
    },

    /// Invalid when the value is non-empty and differs from the other
    /// field's current value. The empty value passes unconditionally.
    /// The message is reported as-is, without a label prefix.
    Matches {
        /// The field whose current value this one must equal.
        other: FieldId,
        /// Complete message reported on mismatch.
        message: Cow<'static, str>,
    },
}

impl Constraint {
    /// Builds a pattern constraint, compiling `pattern`. A missing `clause`
    /// falls back to [`DEFAULT_FORMAT_CLAUSE`].
    pub fn pattern(pattern: &str, clause: Option<&str>) -> Result<Self, FormError> {
        Ok(Self::Pattern {
            regex: Regex::new(pattern)?,
            clause: clause.map_or(Cow::Borrowed(DEFAULT_FORMAT_CLAUSE), |c| {
                Cow::Owned(c.to_owned())
            }),
        })
    }

    /// The field this constraint reads besides its own, if any.
    #[must_use]
    pub fn depends_on(&self) -> Option<&FieldId> {
        match self {
            Self::Matches { other, .. } => Some(other),
            _ => None,
        }
    }

    /// Evaluates this constraint against `value`.
    ///
    /// `label` prefixes every message except the cross-field mismatch one;
    /// `other_value` is the current value of the depended-on field for
    /// [`Constraint::Matches`], ignored otherwise. Pure: same inputs, same
    /// verdict.
    pub fn evaluate(
        &self,
        value: &str,
        label: &str,
        other_value: Option<&str>,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Required => not_empty()
                .validate(value)
                .map_err(|_| ValidationError::new("required", format!("{label} cannot be blank"))),

            Self::Length { bound, mode } => {
                let verdict = match mode {
                    LengthBound::Min => min_length(*bound).validate(value),
                    LengthBound::Exact => exact_length(*bound).validate(value),
                    LengthBound::Max => max_length(*bound).validate(value),
                };
                verdict.map_err(|_| {
                    ValidationError::new(
                        "length",
                        format!(
                            "{label} must be {} {bound} characters long",
                            mode.adverb()
                        ),
                    )
                })
            }

            Self::Pattern { regex, clause } => MatchesRegex::from_regex(regex.clone())
                .validate(value)
                .map_err(|_| ValidationError::new("pattern", format!("{label} {clause}"))),

            Self::CharMix { symbols, clause } => {
                let rule = compose![
                    contains_uppercase(),
                    contains_lowercase(),
                    contains_digit(),
                    contains_any_of(symbols.clone()),
                ]
                .with_message(clause.clone());
                rule.validate(value).map_err(|err| {
                    ValidationError::new("char_mix", format!("{label} {}", err.message))
                })
            }

            Self::Matches { other: _, message } => equals(other_value.unwrap_or_default())
                .when(|candidate: &str| !candidate.is_empty())
                .validate(value)
                .map_err(|_| ValidationError::new("mismatch", message.clone())),
        }
    }
}
