//! Label formatting for field identifiers.

/// Turns a field identifier into a human-readable label.
///
/// Word-separator characters (`-`, `_`) become spaces; the first character
/// is uppercased and the rest lowercased. Pure, no side effects.
///
/// # Examples
///
/// ```rust
/// use intake_form::human_readable;
///
/// assert_eq!(human_readable("zip-code"), "Zip code");
/// assert_eq!(human_readable("EMAIL"), "Email");
/// ```
#[must_use]
pub fn human_readable(identifier: &str) -> String {
    let spaced = identifier.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
