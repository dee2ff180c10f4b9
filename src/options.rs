//! Configuration options for part number parsing.
//!
//! The only knob is noise stripping: whether characters outside
//! `[0-9A-Za-z-]` reject the input (the default) or are silently dropped.
//!
//! ## Examples
//!
//! ```rust
//! use toyota_part_number::{try_parse_with_options, ParseOptions};
//!
//! // Strict by default: the space rejects the input
//! assert!(try_parse_with_options("12345 12345", ParseOptions::new()).is_none());
//!
//! // Permissive: the space is dropped
//! let part = try_parse_with_options("12345 12345", ParseOptions::permissive()).unwrap();
//! assert_eq!(part.to_string(), "12345-12345");
//! ```

/// Options controlling input sanitization.
///
/// # Examples
///
/// ```rust
/// use toyota_part_number::ParseOptions;
///
/// let options = ParseOptions::new();
/// assert!(!options.remove_non_alphanumeric_characters);
///
/// let options = ParseOptions::new().with_remove_non_alphanumeric_characters(true);
/// assert!(options.remove_non_alphanumeric_characters);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop characters outside `[0-9A-Za-z-]` instead of rejecting the input.
    pub remove_non_alphanumeric_characters: bool,
}

impl ParseOptions {
    /// Creates strict options (noise stripping off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with noise stripping on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toyota_part_number::ParseOptions;
    ///
    /// assert!(ParseOptions::permissive().remove_non_alphanumeric_characters);
    /// ```
    #[must_use]
    pub fn permissive() -> Self {
        ParseOptions {
            remove_non_alphanumeric_characters: true,
        }
    }

    /// Sets whether noise characters are dropped.
    #[must_use]
    pub fn with_remove_non_alphanumeric_characters(mut self, remove: bool) -> Self {
        self.remove_non_alphanumeric_characters = remove;
        self
    }
}
