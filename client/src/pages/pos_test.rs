use super::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn item(sku: &'static str, price: &str) -> PosItem {
    PosItem { sku, name: "Item", price: price.parse().unwrap() }
}

#[test]
fn adding_same_sku_twice_merges_lines() {
    let mut cart = Vec::new();
    let keyboard = item("KB-201", "79.00");
    cart_add(&mut cart, keyboard);
    cart_add(&mut cart, keyboard);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 2);
}

#[test]
fn removing_decrements_then_drops_line() {
    let mut cart = Vec::new();
    cart_add(&mut cart, item("KB-201", "79.00"));
    cart_add(&mut cart, item("KB-201", "79.00"));
    cart_remove(&mut cart, "KB-201");
    assert_eq!(cart[0].quantity, 1);
    cart_remove(&mut cart, "KB-201");
    assert!(cart.is_empty());
}

#[test]
fn removing_unknown_sku_is_noop() {
    let mut cart = Vec::new();
    cart_add(&mut cart, item("KB-201", "79.00"));
    cart_remove(&mut cart, "XX-999");
    assert_eq!(cart.len(), 1);
}

#[test]
fn subtotal_sums_price_times_quantity() {
    let mut cart = Vec::new();
    cart_add(&mut cart, item("A-1", "10.00"));
    cart_add(&mut cart, item("A-1", "10.00"));
    cart_add(&mut cart, item("B-2", "5.50"));
    assert_eq!(cart_subtotal(&cart), dec("25.50"));
}

#[test]
fn tax_is_ten_percent_rounded_to_cents() {
    assert_eq!(cart_tax(dec("25.50")), dec("2.55"));
    // 10% of 0.05 is a half-cent midpoint; money rounds away from zero.
    assert_eq!(cart_tax(dec("0.05")), dec("0.01"));
    assert_eq!(cart_tax(Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn demo_catalogue_has_unique_skus() {
    let catalogue = demo_catalogue();
    assert!(!catalogue.is_empty());
    let mut skus: Vec<&str> = catalogue.iter().map(|i| i.sku).collect();
    skus.sort_unstable();
    skus.dedup();
    assert_eq!(skus.len(), catalogue.len());
}
