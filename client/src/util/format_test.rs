use chrono::TimeZone;
use rust_decimal::Decimal;

use super::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn format_money_pads_and_groups() {
    assert_eq!(format_money(dec("12.5")), "12.50");
    assert_eq!(format_money(dec("0")), "0.00");
    assert_eq!(format_money(dec("1999.999")), "2,000.00");
}

#[test]
fn format_date_drops_time() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 30, 59).unwrap();
    assert_eq!(format_date(ts), "2025-03-07");
}

#[test]
fn format_datetime_keeps_minutes() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 30, 59).unwrap();
    assert_eq!(format_datetime(ts), "2025-03-07 14:30");
}

#[test]
fn display_or_dash_handles_blank_and_none() {
    assert_eq!(display_or_dash(Some("Main Store")), "Main Store");
    assert_eq!(display_or_dash(Some("  padded  ")), "padded");
    assert_eq!(display_or_dash(Some("   ")), "-");
    assert_eq!(display_or_dash(None), "-");
}

#[test]
fn signed_quantity_by_movement_type() {
    assert_eq!(signed_quantity(MovementType::Receipt, 10), "+10");
    assert_eq!(signed_quantity(MovementType::Issue, 4), "-4");
    assert_eq!(signed_quantity(MovementType::Transfer, 7), "7");
    assert_eq!(signed_quantity(MovementType::Adjustment, 3), "+3");
    assert_eq!(signed_quantity(MovementType::Adjustment, -3), "-3");
}
