//! Error types for part number parsing.
//!
//! Parsing distinguishes between two layers:
//!
//! - [`Reason`]: the precise rule an input broke (empty input, trailing hyphen,
//!   disallowed character, wrong length, ...). This is what [`try_parse`](crate::try_parse)
//!   swallows and what the diagnostic APIs expose.
//! - [`Error`]: what the throwing entry points surface. Every rejection collapses
//!   into [`Error::InvalidFormat`], whose message is fixed and never echoes the
//!   offending input.
//!
//! ## Examples
//!
//! ```rust
//! use toyota_part_number::{parse, Error, Reason};
//!
//! let err = parse("12345-12345-").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid Toyota Part Number (Parameter 'partNumber')");
//! assert_eq!(err.reason(), Some(Reason::TrailingSeparator));
//! ```

use thiserror::Error;

/// The rule a candidate part number broke.
///
/// Display strings describe the rule only; the input itself is never part of
/// the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Reason {
    /// Input was empty or contained only whitespace.
    #[error("input is empty or whitespace")]
    EmptyOrWhitespaceInput,

    /// The last kept character was a hyphen (truncated suffix).
    #[error("input ends with a hyphen")]
    TrailingSeparator,

    /// A character outside `[0-9A-Za-z-]` was found while noise stripping was off.
    #[error("input contains a character outside [0-9A-Za-z-]")]
    DisallowedCharacter,

    /// Nothing was left once hyphens and noise were removed.
    #[error("nothing remains after removing hyphens and noise")]
    EmptyAfterCleanup,

    /// Cleaned body is neither 10 nor 12 characters long.
    #[error("cleaned length must be 10 or 12 characters")]
    InvalidLength,

    /// Cleaned body holds a character outside `[0-9A-Z]`.
    #[error("cleaned body contains a character outside [0-9A-Z]")]
    InvalidCharacterInBody,
}

/// Errors surfaced by the fallible entry points of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input is not a structurally valid Toyota part number.
    #[error("Invalid Toyota Part Number (Parameter '{param}')")]
    InvalidFormat {
        param: &'static str,
        #[source]
        reason: Reason,
    },

    /// IO error while reading a batch source
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an invalid format error for the named parameter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toyota_part_number::{Error, Reason};
    ///
    /// let err = Error::invalid_format("partNumber", Reason::InvalidLength);
    /// assert!(err.to_string().starts_with("Invalid Toyota Part Number"));
    /// ```
    pub fn invalid_format(param: &'static str, reason: Reason) -> Self {
        Error::InvalidFormat { param, reason }
    }

    /// Creates an I/O error for batch reading failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the rejection reason behind an [`Error::InvalidFormat`].
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Error::InvalidFormat { reason, .. } => Some(*reason),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message_is_fixed() {
        let a = Error::invalid_format("partNumber", Reason::DisallowedCharacter);
        let b = Error::invalid_format("partNumber", Reason::InvalidLength);
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(
            a.to_string(),
            "Invalid Toyota Part Number (Parameter 'partNumber')"
        );
    }

    #[test]
    fn test_reason_accessor() {
        let err = Error::invalid_format("value", Reason::EmptyAfterCleanup);
        assert_eq!(err.reason(), Some(Reason::EmptyAfterCleanup));
        assert_eq!(Error::io("broken pipe").reason(), None);
    }

    #[test]
    fn test_reason_is_error_source() {
        use std::error::Error as _;

        let err = Error::invalid_format("partNumber", Reason::TrailingSeparator);
        let source = err.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("input ends with a hyphen"));
        assert!(Error::io("closed").source().is_none());
    }

    #[test]
    fn test_io_error_display() {
        let err = Error::io("unexpected end of file");
        assert_eq!(err.to_string(), "IO error: unexpected end of file");
    }
}
