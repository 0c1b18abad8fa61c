//! Display formatting for money, timestamps, and optional text.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};
use records::inventory::MovementType;
use rust_decimal::Decimal;

/// Format a monetary amount with two decimal places for table cells.
pub fn format_money(amount: Decimal) -> String {
    records::money::format_amount(amount)
}

/// Date portion of a timestamp, `YYYY-MM-DD`.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Date and minute of a timestamp, `YYYY-MM-DD HH:MM`.
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Optional text for table cells; blank and `None` render as a dash.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => "-".to_owned(),
    }
}

/// Signed quantity for ledger rows: receipts and positive adjustments show
/// `+`, issues show `-`, transfers show the bare count.
pub fn signed_quantity(movement_type: MovementType, quantity: i32) -> String {
    match movement_type {
        MovementType::Receipt => format!("+{quantity}"),
        MovementType::Issue => format!("-{quantity}"),
        MovementType::Adjustment if quantity >= 0 => format!("+{quantity}"),
        _ => quantity.to_string(),
    }
}
