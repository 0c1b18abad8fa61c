use rust_decimal::Decimal;

use super::*;

#[test]
fn summary_cards_keep_display_order() {
    let cards = summary_cards(&DashboardSummary::zero());
    let labels: Vec<&str> = cards.iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        vec!["Products", "Low Stock", "Pending GRNs", "Movements Today", "Inventory Value"]
    );
}

#[test]
fn summary_cards_format_inventory_value_as_money() {
    let summary = DashboardSummary {
        products: 42,
        low_stock: 3,
        pending_grns: 1,
        movements_today: 7,
        inventory_value: "1234567.8".parse::<Decimal>().unwrap(),
    };
    let cards = summary_cards(&summary);
    assert_eq!(cards[0].1, "42");
    assert_eq!(cards[4].1, "1,234,567.80");
}
