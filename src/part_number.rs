//! The [`PartNumber`] value type and the parsing pipeline that builds it.
//!
//! Parsing runs in four steps:
//!
//! 1. Reject empty/whitespace input and inputs whose last kept character is a hyphen.
//! 2. Scan characters: `[0-9A-Za-z-]` is kept, anything else either rejects the
//!    input or is dropped, depending on [`ParseOptions`].
//! 3. Strip hyphens, fold to uppercase and run the [validator](crate::validator).
//! 4. Segment the body into category, usage code and suffix.
//!
//! ## Examples
//!
//! ```rust
//! use toyota_part_number::PartNumber;
//!
//! let part: PartNumber = "90915-yzzj3-01".parse().unwrap();
//! assert_eq!(part.category(), "90915");
//! assert_eq!(part.usage_code(), "YZZJ3");
//! assert_eq!(part.suffix(), "01");
//! assert_eq!(part.to_string(), "90915-YZZJ3-01");
//! assert_eq!(part.render(false), "90915YZZJ301");
//! ```

use crate::error::{Error, Reason, Result};
use crate::options::ParseOptions;
use crate::validator::{self, CATEGORY_LEN, SHORT_LEN};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parameter name reported by [`Error::InvalidFormat`].
pub const PARAM_NAME: &str = "partNumber";

/// A validated Toyota part number.
///
/// Internally stores only the canonical compact form (uppercase, no hyphens).
/// Equality, ordering and hashing all use that form, so `"90915-yzzj3"` and
/// `"90915YZZJ3"` parse to equal values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartNumber {
    compact: String,
}

impl PartNumber {
    /// Parses strictly: any character outside `[0-9A-Za-z-]` rejects the input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the input is not a valid part number.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with_options(raw, ParseOptions::default())
    }

    /// Parses with custom sanitization options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the input is not a valid part number.
    /// The error carries the [`Reason`] but not the input.
    pub fn parse_with_options(raw: &str, options: ParseOptions) -> Result<Self> {
        Self::from_raw(raw, options).map_err(|reason| {
            tracing::trace!(%reason, "rejected part number");
            Error::invalid_format(PARAM_NAME, reason)
        })
    }

    /// Strict parse that reports failure as `None`.
    #[must_use]
    pub fn try_parse(raw: &str) -> Option<Self> {
        Self::try_parse_with_options(raw, ParseOptions::default())
    }

    /// Parse with options, reporting failure as `None`. Never panics.
    #[must_use]
    pub fn try_parse_with_options(raw: &str, options: ParseOptions) -> Option<Self> {
        Self::parse_with_options(raw, options).ok()
    }

    fn from_raw(raw: &str, options: ParseOptions) -> std::result::Result<Self, Reason> {
        if raw.trim().is_empty() {
            return Err(Reason::EmptyOrWhitespaceInput);
        }

        let strip = options.remove_non_alphanumeric_characters;
        let last_kept = if strip {
            raw.chars().rev().find(|&c| is_scan_char(c))
        } else {
            raw.chars().next_back()
        };
        if last_kept == Some('-') {
            return Err(Reason::TrailingSeparator);
        }

        let mut body = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if is_scan_char(ch) {
                if ch != '-' {
                    body.push(ch.to_ascii_uppercase());
                }
            } else if !strip {
                return Err(Reason::DisallowedCharacter);
            }
        }

        if body.is_empty() {
            return Err(Reason::EmptyAfterCleanup);
        }

        validator::check(&body)?;

        Ok(PartNumber { compact: body })
    }

    /// The five-character category code.
    #[must_use]
    pub fn category(&self) -> &str {
        self.compact.get(..CATEGORY_LEN).unwrap_or_default()
    }

    /// The five-character vehicle usage code.
    #[must_use]
    pub fn usage_code(&self) -> &str {
        self.compact.get(CATEGORY_LEN..SHORT_LEN).unwrap_or_default()
    }

    /// The two-character supersession suffix, or `""` if absent.
    #[must_use]
    pub fn suffix(&self) -> &str {
        self.compact.get(SHORT_LEN..).unwrap_or_default()
    }

    /// `true` when a supersession suffix is present.
    #[must_use]
    pub fn has_suffix(&self) -> bool {
        !self.suffix().is_empty()
    }

    /// Canonical form: uppercase, no hyphens.
    #[must_use]
    pub fn as_compact(&self) -> &str {
        &self.compact
    }

    /// Renders the part number, with or without hyphens between fields.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toyota_part_number::PartNumber;
    ///
    /// let part = PartNumber::parse("90915yzzj3").unwrap();
    /// assert_eq!(part.render(true), "90915-YZZJ3");
    /// assert_eq!(part.render(false), "90915YZZJ3");
    /// ```
    #[must_use]
    pub fn render(&self, include_hyphens: bool) -> String {
        if !include_hyphens {
            return self.compact.clone();
        }

        if self.has_suffix() {
            format!("{}-{}-{}", self.category(), self.usage_code(), self.suffix())
        } else {
            format!("{}-{}", self.category(), self.usage_code())
        }
    }
}

#[inline]
fn is_scan_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// `{}` renders with hyphens, `{:#}` renders the compact form.
impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.pad(&self.compact)
        } else {
            f.pad(&self.render(true))
        }
    }
}

impl FromStr for PartNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for PartNumber {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PartNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PartNumber> for String {
    fn from(part: PartNumber) -> Self {
        part.render(true)
    }
}

impl From<&PartNumber> for String {
    fn from(part: &PartNumber) -> Self {
        part.render(true)
    }
}

impl Serialize for PartNumber {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.render(true))
    }
}

impl<'de> Deserialize<'de> for PartNumber {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PartNumberVisitor;

        impl<'de> Visitor<'de> for PartNumberVisitor {
            type Value = PartNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a Toyota part number string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                PartNumber::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PartNumberVisitor)
    }
}
