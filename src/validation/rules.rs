//! Shared field checks used by the per-entity rule sets. Each helper
//! records its failures into the caller's report and never short-circuits,
//! so one pass collects every problem with the input.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::validation::ValidationErrors;

/// Grant titles allow word characters plus common punctuation.
pub static GRANT_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s\-:().,&]+$").expect("grant title pattern")
});

/// Master grant numbers: uppercase letters, digits, hyphens only.
pub static GRANT_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9\-]+$").expect("grant number pattern"));

/// Stored file names: printable name plus a mandatory extension.
pub static FILE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s\-_.()]+\.[a-zA-Z0-9]+$").expect("file name pattern")
});

/// MIME types: "type/subtype" with the RFC token character set.
pub static MIME_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9!#$&\-^_]*/[a-zA-Z0-9][a-zA-Z0-9!#$&\-^_.]*$")
        .expect("mime type pattern")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// Length bounds on a string field. `label` names the field in messages
/// ("Grant title must be at least 5 characters"). A min of 1 reads as a
/// required-field check.
pub fn check_str_len(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let len = value.chars().count();
    if len < min {
        if min == 1 {
            errors.push(field, format!("{label} is required"));
        } else {
            errors.push(field, format!("{label} must be at least {min} characters"));
        }
    }
    if len > max {
        errors.push(
            field,
            format!("{label} must be less than {max} characters"),
        );
    }
}

/// Character-class pattern on a string field, with a caller-supplied
/// message. Skipped for empty values so the length check reports first.
pub fn check_pattern(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    pattern: &Regex,
    message: &str,
) {
    if !value.is_empty() && !pattern.is_match(value) {
        errors.push(field, message);
    }
}

/// Opaque entity id: non-empty, bounded, no whitespace or separators.
/// The persistence layer owns the real format; this rejects obviously
/// malformed references with the caller's message.
pub fn check_id(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    let well_formed = !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !well_formed {
        errors.push(field, message);
    }
}

pub fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !EMAIL_RE.is_match(value) {
        errors.push(field, "Invalid email address");
    }
}

/// Currency amount: non-negative, at most `cap`, quantized to cents.
/// `cap_display` is the human rendering of the cap ("$50,000,000").
pub fn check_currency(
    errors: &mut ValidationErrors,
    field: &str,
    amount: Decimal,
    cap: Decimal,
    label: &str,
    cap_display: &str,
) {
    if amount.is_sign_negative() && !amount.is_zero() {
        errors.push(field, format!("{label} cannot be negative"));
    }
    if amount > cap {
        errors.push(field, format!("{label} cannot exceed {cap_display}"));
    }
    if !is_cent_quantized(amount) {
        errors.push(field, format!("{label} must be a valid currency amount"));
    }
}

/// True when the amount is a whole number of cents.
pub fn is_cent_quantized(amount: Decimal) -> bool {
    (amount * Decimal::ONE_HUNDRED).fract().is_zero()
}
