//! Field validators. Pure predicates over a single field value.
//!
//! Length checks treat an empty value as valid so they compose with [`required`],
//! which is the only check that rejects emptiness.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("valid email regex")
});

pub fn required(value: &str) -> bool {
    !value.is_empty()
}

pub fn min_length(len: usize) -> impl Fn(&str) -> bool {
    move |value| value.is_empty() || value.chars().count() >= len
}

pub fn max_length(len: usize) -> impl Fn(&str) -> bool {
    move |value| value.is_empty() || value.chars().count() <= len
}

/// Numeric coercion check. Blank input coerces to zero and counts as a number.
pub fn is_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    if let Some(radix_digits) = radix_literal(trimmed) {
        return radix_digits;
    }
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return trimmed.len() - unsigned.len() <= 1;
    }
    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not numbers here.
    if unsigned
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return false;
    }
    trimmed.parse::<f64>().is_ok_and(|v| !v.is_nan())
}

/// Unsigned `0x`/`0o`/`0b` literals. Returns `None` when `value` has no such prefix.
fn radix_literal(value: &str) -> Option<bool> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    Some(!digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)))
}

pub fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
#[path = "tests/validators_tests.rs"]
mod tests;
