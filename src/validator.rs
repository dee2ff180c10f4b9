//! Structural validation of a cleaned part number body.
//!
//! The validator expects input that has already been case folded. Hyphens are
//! tolerated and ignored so the predicate can be reused on hyphenated text.

use crate::error::Reason;

/// Length of the category field.
pub const CATEGORY_LEN: usize = 5;

/// Length of the vehicle usage code field.
pub const USAGE_CODE_LEN: usize = 5;

/// Length of the supersession suffix when present.
pub const SUFFIX_LEN: usize = 2;

/// Body length without a suffix.
pub const SHORT_LEN: usize = CATEGORY_LEN + USAGE_CODE_LEN;

/// Body length with a suffix.
pub const LONG_LEN: usize = SHORT_LEN + SUFFIX_LEN;

/// Returns `true` if `body` is a structurally legal part number body.
///
/// # Examples
///
/// ```rust
/// use toyota_part_number::validator::validate;
///
/// assert!(validate("90915YZZJ3"));
/// assert!(validate("90915-YZZJ3-01"));
/// assert!(!validate("90915-yzzj3")); // must be uppercase already
/// assert!(!validate("12345-12345-1"));
/// ```
#[must_use]
pub fn validate(body: &str) -> bool {
    check(body).is_ok()
}

/// Like [`validate`], but reports which rule was broken.
///
/// # Errors
///
/// Returns [`Reason::InvalidLength`] if the hyphen-free length is not 10 or 12,
/// and [`Reason::InvalidCharacterInBody`] if any character is outside `[0-9A-Z]`.
pub fn check(body: &str) -> Result<(), Reason> {
    let mut cleaned = Vec::with_capacity(body.len());
    cleaned.extend(body.chars().filter(|&c| c != '-'));

    if cleaned.len() != SHORT_LEN && cleaned.len() != LONG_LEN {
        return Err(Reason::InvalidLength);
    }

    if !cleaned.iter().all(|&c| is_body_char(c)) {
        return Err(Reason::InvalidCharacterInBody);
    }

    Ok(())
}

#[inline]
fn is_body_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}
