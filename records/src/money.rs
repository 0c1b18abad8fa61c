//! Monetary-amount parsing and display formatting.
//!
//! DESIGN
//! ======
//! Form fields carry amounts as strings; they are validated against a strict
//! pattern (optional thousands grouping, at most two decimals, no sign) before
//! being converted to [`Decimal`] for the wire. Display formatting is the
//! inverse: two decimals, comma-grouped.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d{1,2})?$").expect("amount pattern compiles")
});

/// Why an amount string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount is empty")]
    Empty,
    #[error("not a valid monetary amount: {0:?}")]
    Malformed(String),
}

/// Parse a user-entered amount string into a [`Decimal`].
///
/// Accepts plain digits (`1234`), up to two decimals (`1234.56`) and
/// comma-grouped thousands (`1,234.56`). Signs, stray separators, and more
/// than two decimals are rejected.
///
/// # Errors
///
/// Returns [`MoneyError::Empty`] for blank input and [`MoneyError::Malformed`]
/// when the string does not match the amount pattern.
pub fn parse_amount(input: &str) -> Result<Decimal, MoneyError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MoneyError::Empty);
    }
    if !AMOUNT_RE.is_match(trimmed) {
        return Err(MoneyError::Malformed(trimmed.to_owned()));
    }
    let plain = trimmed.replace(',', "");
    Decimal::from_str(&plain).map_err(|_| MoneyError::Malformed(trimmed.to_owned()))
}

/// Whether an amount string would be accepted by [`parse_amount`].
#[must_use]
pub fn is_valid_amount(input: &str) -> bool {
    parse_amount(input).is_ok()
}

/// Render a [`Decimal`] as a display amount: two decimals, comma-grouped.
/// Midpoints round away from zero, the usual convention for money display.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = raw
        .split_once('.')
        .map_or((raw.as_str(), ""), |(int, frac)| (int, frac));

    let mut cents = frac_part.to_owned();
    while cents.len() < 2 {
        cents.push('0');
    }

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, byte) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(char::from(*byte));
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}

#[cfg(test)]
#[path = "money_test.rs"]
mod tests;
