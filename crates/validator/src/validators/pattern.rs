//! Regex pattern validators

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// The match is unanchored unless the pattern anchors itself: any
    /// matching substring satisfies the rule.
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::new("pattern", "String must match the required format")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Wraps an already-compiled regex.
    #[must_use]
    pub fn from_regex(pattern: regex::Regex) -> Self {
        Self { pattern }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_match() {
        let validator = matches_regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(validator.validate("123-4567").is_ok());
        assert!(validator.validate("invalid").is_err());
    }

    #[test]
    fn test_unanchored_pattern_matches_anywhere() {
        let validator = matches_regex(r"\d{5}").unwrap();
        assert!(validator.validate("12345").is_ok());
        assert!(validator.validate("123456").is_ok()); // a 5-digit run exists
        assert!(validator.validate("abc12345xyz").is_ok());
        assert!(validator.validate("1234").is_err());
    }

    #[test]
    fn test_invalid_pattern_is_a_construction_error() {
        assert!(matches_regex(r"(unclosed").is_err());
    }

    #[test]
    fn test_from_regex() {
        let compiled = regex::Regex::new(r"^\w+$").unwrap();
        let validator = MatchesRegex::from_regex(compiled);
        assert!(validator.validate("word").is_ok());
        assert!(validator.validate("two words").is_err());
    }

    #[test]
    fn test_error_carries_pattern_param() {
        let validator = matches_regex(r"\d+").unwrap();
        let err = validator.validate("letters").unwrap_err();
        assert_eq!(err.code, "pattern");
        assert_eq!(err.param("pattern"), Some(r"\d+"));
    }
}
