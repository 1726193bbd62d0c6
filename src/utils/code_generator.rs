//! Short code generation and validation utilities.
//!
//! Provides random code generation and the format rules for custom
//! user-provided codes. Uniqueness against the registry is checked by
//! [`crate::application::services::LinkService`].

use crate::domain::entities::ShortCode;
use crate::error::ShortenError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Minimum length of a custom code.
pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;

/// Path segments served by fixed routes. A link stored under one of these
/// could never be reached.
pub const RESERVED_CODES: [&str; 3] = ["health", "not-found", "api"];

/// Generates a random short code.
///
/// Draws [`GENERATED_CODE_LENGTH`] characters from the case-sensitive
/// alphanumeric alphabet (62 symbols), giving roughly 2.2 * 10^14 codes.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates the format of a user-provided custom short code.
///
/// # Rules
///
/// - At least [`MIN_CUSTOM_CODE_LENGTH`] characters
/// - Usable as a single path segment (see [`ShortCode::parse`])
/// - Not one of [`RESERVED_CODES`] (exact match, routing is case-sensitive)
///
/// The input is expected to be trimmed already.
///
/// # Errors
///
/// Returns [`ShortenError::ShortcodeTooShort`] or
/// [`ShortenError::InvalidShortcode`].
pub fn validate_custom_code(code: &str) -> Result<ShortCode, ShortenError> {
    if code.chars().count() < MIN_CUSTOM_CODE_LENGTH {
        return Err(ShortenError::ShortcodeTooShort);
    }

    let short_code = ShortCode::parse(code).map_err(|_| ShortenError::InvalidShortcode)?;
    if RESERVED_CODES.contains(&short_code.as_str()) {
        return Err(ShortenError::InvalidShortcode);
    }

    Ok(short_code)
}
