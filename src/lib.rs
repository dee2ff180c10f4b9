//! # toyota_part_number
//!
//! Parse, validate, normalize and format Toyota part numbers.
//!
//! ## What is a Toyota part number?
//!
//! A ten or twelve character alphanumeric code split into a five-character
//! **category**, a five-character **usage code** and an optional two-character
//! **suffix** marking a supersession revision. It is usually written with
//! hyphens (`90915-YZZJ3-01`) but equally valid without (`90915YZZJ301`).
//!
//! ## Key Features
//!
//! - **Normalizing**: Case and hyphen placement do not matter; values compare by
//!   their canonical uppercase compact form
//! - **Noise Stripping**: Optionally drop stray characters (spaces, punctuation,
//!   non-ASCII letters) instead of rejecting the input
//! - **Non-leaking Errors**: Error messages never echo the rejected input
//! - **Serde Compatible**: [`PartNumber`] serializes as its hyphenated string
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use toyota_part_number::{parse, try_parse};
//!
//! let part = parse("90915-yzzj3").unwrap();
//! assert_eq!(part.category(), "90915");
//! assert_eq!(part.usage_code(), "YZZJ3");
//! assert_eq!(part.suffix(), "");
//! assert_eq!(part.to_string(), "90915-YZZJ3");
//!
//! // Hyphens and case are irrelevant for equality
//! assert_eq!(part, parse("90915YZZJ3").unwrap());
//!
//! // try_parse never fails loudly
//! assert!(try_parse("12345-12345-1").is_none());
//! ```
//!
//! ### Noise Stripping
//!
//! ```rust
//! use toyota_part_number::{try_parse_with_options, ParseOptions};
//!
//! assert!(try_parse_with_options("12345 12345", ParseOptions::new()).is_none());
//!
//! let part = try_parse_with_options("12345 12345", ParseOptions::permissive()).unwrap();
//! assert_eq!(part.render(false), "1234512345");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: O(n) single pass over the input, one allocation for the body
//! - **Thread Safety**: No global state; every call is independent
//!
//! ## Format Specification
//!
//! See the [`format`] module for field layout and normalization rules.

pub mod batch;
pub mod error;
pub mod format;
pub mod options;
pub mod part_number;
pub mod validator;

pub use batch::BatchReport;
pub use error::{Error, Reason, Result};
pub use options::ParseOptions;
pub use part_number::PartNumber;


/// Parse a part number strictly.
///
/// # Examples
///
/// ```rust
/// use toyota_part_number::parse;
///
/// let part = parse("90915-YZZJ3-01").unwrap();
/// assert_eq!(part.suffix(), "01");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `text` is not a valid part number.
pub fn parse(text: &str) -> Result<PartNumber> {
    PartNumber::parse(text)
}

/// Parse a part number with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `text` is not a valid part number under `options`.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<PartNumber> {
    PartNumber::parse_with_options(text, options)
}

/// Parse a part number strictly, returning `None` on failure.
///
/// # Examples
///
/// ```rust
/// use toyota_part_number::try_parse;
///
/// assert!(try_parse("90915YZZJ3").is_some());
/// assert!(try_parse("").is_none());
/// ```
#[must_use]
pub fn try_parse(text: &str) -> Option<PartNumber> {
    PartNumber::try_parse(text)
}

/// Parse a part number with custom options, returning `None` on failure.
#[must_use]
pub fn try_parse_with_options(text: &str, options: ParseOptions) -> Option<PartNumber> {
    PartNumber::try_parse_with_options(text, options)
}
