//! Validated short code newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted length of a short code, in characters.
pub const MAX_CODE_LENGTH: usize = 64;

/// Reasons a string cannot be used as a short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortCodeError {
    #[error("Short code must not be empty")]
    Empty,

    #[error("Short code must be at most {MAX_CODE_LENGTH} characters")]
    TooLong,

    #[error("Short code must not contain whitespace, control characters or any of / \\ ? # %")]
    InvalidCharacter,
}

/// Characters that would split or alter the URL path a code is served from.
const FORBIDDEN_CHARS: [char; 5] = ['/', '\\', '?', '#', '%'];

/// A short code that is safe to use as a route segment and registry key.
///
/// Surrounding whitespace is trimmed on construction. Minimum length rules
/// for user-chosen aliases are a creation policy and live in
/// [`crate::utils::code_generator`], not here: lookups accept any code that
/// could have been stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses and validates a short code.
    ///
    /// # Errors
    ///
    /// Returns [`ShortCodeError`] if the trimmed input is empty, longer than
    /// [`MAX_CODE_LENGTH`] characters, or contains inner whitespace, control
    /// characters or one of `/ \ ? # %`.
    pub fn parse(input: &str) -> Result<Self, ShortCodeError> {
        let code = input.trim();

        if code.is_empty() {
            return Err(ShortCodeError::Empty);
        }

        if code.chars().count() > MAX_CODE_LENGTH {
            return Err(ShortCodeError::TooLong);
        }

        if code
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_CHARS.contains(&c))
        {
            return Err(ShortCodeError::InvalidCharacter);
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the public short URL for this code.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShortCode {
    type Error = ShortCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let code = ShortCode::parse("  abc123 ").unwrap();
        assert_eq!(code.as_str(), "abc123");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(ShortCode::parse("   "), Err(ShortCodeError::Empty));
    }

    #[test]
    fn test_parse_rejects_slash_and_inner_space() {
        assert_eq!(
            ShortCode::parse("a/b"),
            Err(ShortCodeError::InvalidCharacter)
        );
        assert_eq!(
            ShortCode::parse("my code"),
            Err(ShortCodeError::InvalidCharacter)
        );
    }

    #[test]
    fn test_parse_rejects_url_delimiters() {
        for input in ["ab?cd", "ab#cd", "ab%20", "a\\b", "ab\u{7}c"] {
            assert_eq!(
                ShortCode::parse(input),
                Err(ShortCodeError::InvalidCharacter),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let long = "x".repeat(MAX_CODE_LENGTH + 1);
        assert_eq!(ShortCode::parse(&long), Err(ShortCodeError::TooLong));

        let max = "x".repeat(MAX_CODE_LENGTH);
        assert!(ShortCode::parse(&max).is_ok());
    }

    #[test]
    fn test_short_codes_are_case_sensitive() {
        let lower = ShortCode::parse("abc").unwrap();
        let upper = ShortCode::parse("ABC").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_url_joins_base_without_double_slash() {
        let code = ShortCode::parse("promo").unwrap();
        assert_eq!(code.url("http://localhost:3000/"), "http://localhost:3000/promo");
        assert_eq!(code.url("https://s.example.com"), "https://s.example.com/promo");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<ShortCode, _> = serde_json::from_str("\"abc\"");
        assert!(ok.is_ok());

        let bad: Result<ShortCode, _> = serde_json::from_str("\"a/b\"");
        assert!(bad.is_err());
    }
}
