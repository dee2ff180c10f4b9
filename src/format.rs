//! Toyota Part Number Format
//!
//! This module documents the part number format as implemented by this library.
//!
//! # Overview
//!
//! A Toyota part number is a compact alphanumeric code made of two mandatory
//! five-character fields and an optional two-character suffix. Humans usually
//! write the fields separated by hyphens; catalogs and databases often drop them.
//!
//! ```text
//! 90915-YZZJ3-01
//! ^^^^^ ^^^^^ ^^
//!   |     |    +-- suffix (supersession revision, optional)
//!   |     +------- usage code (vehicle application)
//!   +------------- category
//! ```
//!
//! # Fields
//!
//! | Field | Length | Characters | Required |
//! |-------|--------|------------|----------|
//! | Category | 5 | `0-9`, `A-Z` | yes |
//! | Usage code | 5 | `0-9`, `A-Z` | yes |
//! | Suffix | 2 | `0-9`, `A-Z` | no |
//!
//! Fields are located by position, not by hyphens. `90915YZZJ3` and
//! `90-915Y-ZZJ3` both split into category `90915` and usage code `YZZJ3`.
//!
//! # Normalization
//!
//! - Letters are folded to uppercase: `90915-yzzj3` is `90915-YZZJ3`.
//! - Hyphens are removed before the length check.
//! - With noise stripping on, characters outside `[0-9A-Za-z-]` (spaces,
//!   punctuation, non-ASCII letters) are dropped. With it off they reject the input.
//!
//! # Rejections
//!
//! | Input | Why |
//! |-------|-----|
//! | `""`, `"   "` | empty or whitespace |
//! | `12345-12345-` | trailing hyphen implies a missing suffix |
//! | `12345-ABC*EE` | `*` is not allowed (strict mode) |
//! | `123` | body is 3 characters |
//! | `12345-12345-1` | body is 11 characters |
//! | `12345-12345-123` | body is 13 characters |
//!
//! A trailing hyphen is judged on the last character that survives noise
//! stripping, so `12345-12345-#` is rejected in both modes.
//!
//! # Canonical Forms
//!
//! | Form | Example | Used for |
//! |------|---------|----------|
//! | Hyphenated | `90915-YZZJ3-01` | `Display`, serde, `String::from` |
//! | Compact | `90915YZZJ301` | equality, hashing, ordering, `{:#}` |
//!
//! Without a suffix the hyphenated form has a single hyphen: `90915-YZZJ3`.
//!
//! # Limitations
//!
//! - Codes are checked structurally only; no catalog lookup is performed.
//! - Other manufacturers' schemes are not recognized.

// This module contains only documentation; no implementation code
