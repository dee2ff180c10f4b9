//! Bulk validation over line-delimited sources.
//!
//! Each non-blank line is trimmed and parsed on its own. Blank lines are
//! skipped and do not count towards [`BatchReport::total`].
//!
//! The functions here only consume text; opening files or unpacking archives is
//! left to the caller (wrap a decoder in a [`BufReader`](std::io::BufReader) and
//! hand it to [`validate_reader`]).
//!
//! ## Examples
//!
//! ```rust
//! use toyota_part_number::{batch, ParseOptions};
//!
//! let input = "90915-YZZJ3\n\n04152YZZA1\n12345-12345-1\n";
//! let report = batch::validate_reader(input.as_bytes(), ParseOptions::new()).unwrap();
//!
//! assert_eq!(report.total, 3);
//! assert_eq!(report.valid_count(), 2);
//! assert_eq!(report.invalid, vec!["12345-12345-1".to_string()]);
//! ```

use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::part_number::PartNumber;
use std::io::BufRead;

/// Outcome of validating a batch of candidate part numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of non-blank lines seen.
    pub total: usize,
    /// Parsed values, in input order.
    pub valid: Vec<PartNumber>,
    /// Trimmed lines that failed to parse, in input order.
    pub invalid: Vec<String>,
}

impl BatchReport {
    /// Number of lines that parsed.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    /// Number of lines that failed to parse.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }

    /// `true` when every non-blank line parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }

    fn push(&mut self, line: &str, options: ParseOptions) {
        let candidate = line.trim();
        if candidate.is_empty() {
            return;
        }

        self.total += 1;
        match PartNumber::try_parse_with_options(candidate, options) {
            Some(part) => self.valid.push(part),
            None => self.invalid.push(candidate.to_string()),
        }
    }

    fn log_summary(&self) {
        tracing::debug!(
            total = self.total,
            valid = self.valid_count(),
            invalid = self.invalid_count(),
            "validated part number batch"
        );
    }
}

/// Validates every line yielded by `lines`.
///
/// # Examples
///
/// ```rust
/// use toyota_part_number::{batch, ParseOptions};
///
/// let report = batch::validate_lines(["12345 12345", "90915-YZZJ3-01"], ParseOptions::permissive());
/// assert!(report.is_clean());
/// ```
#[must_use]
pub fn validate_lines<I, S>(lines: I, options: ParseOptions) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();
    for line in lines {
        report.push(line.as_ref(), options);
    }
    report.log_summary();
    report
}

/// Validates every line read from `reader`.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the input is not valid UTF-8.
pub fn validate_reader<R>(reader: R, options: ParseOptions) -> Result<BatchReport>
where
    R: BufRead,
{
    let mut report = BatchReport::default();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::io(&e.to_string()))?;
        report.push(&line, options);
    }
    report.log_summary();
    Ok(report)
}
