use rust_decimal::Decimal;

use super::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn parse_accepts_plain_integers() {
    assert_eq!(parse_amount("1234").unwrap(), dec("1234"));
    assert_eq!(parse_amount("0").unwrap(), dec("0"));
}

#[test]
fn parse_accepts_one_or_two_decimals() {
    assert_eq!(parse_amount("1234.5").unwrap(), dec("1234.5"));
    assert_eq!(parse_amount("1234.56").unwrap(), dec("1234.56"));
    assert_eq!(parse_amount("0.99").unwrap(), dec("0.99"));
}

#[test]
fn parse_accepts_comma_grouped_thousands() {
    assert_eq!(parse_amount("1,234.56").unwrap(), dec("1234.56"));
    assert_eq!(parse_amount("12,345,678.90").unwrap(), dec("12345678.90"));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(parse_amount("  42.00 ").unwrap(), dec("42.00"));
}

#[test]
fn parse_rejects_empty_input() {
    assert_eq!(parse_amount(""), Err(MoneyError::Empty));
    assert_eq!(parse_amount("   "), Err(MoneyError::Empty));
}

#[test]
fn parse_rejects_malformed_input() {
    for bad in ["abc", "-5", "+5", "1.", ".5", "1.234", "1,23.45", "12,34", "1 234", "$5"] {
        assert!(
            matches!(parse_amount(bad), Err(MoneyError::Malformed(_))),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn is_valid_amount_mirrors_parse() {
    assert!(is_valid_amount("19.99"));
    assert!(!is_valid_amount("19.999"));
}

#[test]
fn format_pads_to_two_decimals() {
    assert_eq!(format_amount(dec("5")), "5.00");
    assert_eq!(format_amount(dec("5.5")), "5.50");
    assert_eq!(format_amount(dec("5.55")), "5.55");
}

#[test]
fn format_groups_thousands() {
    assert_eq!(format_amount(dec("1234.5")), "1,234.50");
    assert_eq!(format_amount(dec("12345678.9")), "12,345,678.90");
    assert_eq!(format_amount(dec("999")), "999.00");
}

#[test]
fn format_rounds_to_cents() {
    assert_eq!(format_amount(dec("2.005")), "2.01");
    assert_eq!(format_amount(dec("2.004")), "2.00");
}

#[test]
fn format_keeps_sign_for_negative_values() {
    assert_eq!(format_amount(dec("-1234.5")), "-1,234.50");
}

#[test]
fn parse_then_format_round_trip() {
    let parsed = parse_amount("1,234.56").unwrap();
    assert_eq!(format_amount(parsed), "1,234.56");
}
