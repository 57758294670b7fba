//! Fixed-width field formatting and the field checks shared by every record.
//!
//! Each record validates through these helpers both when a field is assigned
//! and again when it is encoded, so a record can never render a value the
//! setters would have refused.

use crate::error::{AbaError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Width of every ABA record, in characters.
pub const RECORD_LENGTH: usize = 120;

/// Width of the account number fields.
pub const ACCOUNT_NUMBER_WIDTH: usize = 9;

static BSB_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{3})-?([0-9]{3})$").expect("BSB pattern is valid"));

static ACCOUNT_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\- ]+$").expect("account number pattern is valid"));

/// Builds one record line field by field.
pub(crate) struct FixedWidthLine {
    buf: String,
}

impl FixedWidthLine {
    /// Starts a line with its record type digit.
    pub(crate) fn new(record_type: char) -> Self {
        let mut buf = String::with_capacity(RECORD_LENGTH);
        buf.push(record_type);
        FixedWidthLine { buf }
    }

    /// Appends a literal that is already the right width.
    pub(crate) fn literal(mut self, value: &str) -> Self {
        self.buf.push_str(value);
        self
    }

    /// Left-justified, space-padded, truncated to `width`.
    pub(crate) fn left(mut self, value: &str, width: usize) -> Self {
        let len = push_truncated(&mut self.buf, value, width);
        push_spaces(&mut self.buf, width - len);
        self
    }

    /// Right-justified, space-padded, truncated to `width`.
    pub(crate) fn right(mut self, value: &str, width: usize) -> Self {
        let len = value.chars().take(width).count();
        push_spaces(&mut self.buf, width - len);
        push_truncated(&mut self.buf, value, width);
        self
    }

    pub(crate) fn blank(mut self, width: usize) -> Self {
        push_spaces(&mut self.buf, width);
        self
    }

    /// Zero-padded number. Fails if the value needs more than `width` digits.
    pub(crate) fn number(mut self, field: &'static str, value: u64, width: usize) -> Result<Self> {
        let digits = value.to_string();
        if digits.len() > width {
            return Err(AbaError::validation(
                field,
                format!("{} does not fit in {} digits", value, width),
            ));
        }
        push_zeros(&mut self.buf, width - digits.len());
        self.buf.push_str(&digits);
        Ok(self)
    }

    pub(crate) fn finish(self) -> String {
        debug_assert_eq!(self.buf.chars().count(), RECORD_LENGTH, "{:?}", self.buf);
        self.buf
    }
}

fn push_truncated(buf: &mut String, value: &str, width: usize) -> usize {
    let mut len = 0;
    for c in value.chars().take(width) {
        buf.push(c);
        len += 1;
    }
    len
}

fn push_spaces(buf: &mut String, count: usize) {
    buf.extend(std::iter::repeat(' ').take(count));
}

fn push_zeros(buf: &mut String, count: usize) {
    buf.extend(std::iter::repeat('0').take(count));
}

/// Checks a BSB against `xxxxxx` or `xxx-xxx`.
pub(crate) fn check_bsb(field: &'static str, value: &str) -> Result<()> {
    if BSB_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(AbaError::validation(
            field,
            format!("{:?} must be xxxxxx or xxx-xxx", value),
        ))
    }
}

/// Rewrites a valid BSB as `xxx-xxx`.
pub(crate) fn normalize_bsb(value: &str) -> String {
    BSB_PATTERN.replace(value, "$1-$2").into_owned()
}

/// Checks an account number: digits, hyphens and blanks only, and short
/// enough to fit the field once normalized.
pub(crate) fn check_account_number(field: &'static str, value: &str) -> Result<()> {
    if !ACCOUNT_NUMBER_PATTERN.is_match(value) || value.trim().is_empty() {
        return Err(AbaError::validation(
            field,
            format!("{:?} may only contain digits, hyphens and blanks", value),
        ));
    }

    let normalized = normalize_account_number(value);
    if normalized.chars().count() > ACCOUNT_NUMBER_WIDTH {
        return Err(AbaError::validation(
            field,
            format!(
                "{:?} is longer than {} characters",
                normalized, ACCOUNT_NUMBER_WIDTH
            ),
        ));
    }
    Ok(())
}

/// Trims an account number and drops its hyphens when it would not
/// otherwise fit the field.
pub(crate) fn normalize_account_number(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() > ACCOUNT_NUMBER_WIDTH {
        trimmed.replace('-', "")
    } else {
        trimmed.to_string()
    }
}

/// Rejects blank values and control characters.
pub(crate) fn check_not_blank(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AbaError::validation(field, "must be set to a non-blank value"));
    }
    check_printable(field, value)
}

/// Accepts printable ASCII only, so one character is always one output byte.
pub(crate) fn check_printable(field: &'static str, value: &str) -> Result<()> {
    if !value.bytes().all(|b| matches!(b, b' '..=b'~')) {
        return Err(AbaError::validation(
            field,
            "may only contain printable ASCII characters",
        ));
    }
    Ok(())
}

/// Upper bound for a zero-padded field of `width` digits.
pub(crate) const fn max_for_width(width: u32) -> u64 {
    10u64.pow(width) - 1
}
