use super::*;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn outstanding_counts_sent_and_overdue_only() {
    let invoices = demo_invoices();
    // 1,299.50 + 760.25 + 2,153.00 from the sent/overdue rows.
    assert_eq!(outstanding_total(&invoices), dec("4212.75"));
}

#[test]
fn paid_total_counts_paid_only() {
    let invoices = demo_invoices();
    assert_eq!(paid_total(&invoices), dec("4820.00"));
}

#[test]
fn draft_invoices_count_toward_neither_total() {
    let invoices = demo_invoices();
    let all: Decimal = invoices.iter().map(|i| i.amount).sum();
    let draft: Decimal = invoices
        .iter()
        .filter(|i| i.status == InvoiceStatus::Draft)
        .map(|i| i.amount)
        .sum();
    assert_eq!(outstanding_total(&invoices) + paid_total(&invoices) + draft, all);
    assert!(draft > Decimal::ZERO, "demo data should include a draft");
}

#[test]
fn billing_cards_keep_display_order() {
    let invoices = demo_invoices();
    let cards = billing_cards(&invoices);
    let labels: Vec<&str> = cards.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["Outstanding", "Paid", "Invoices"]);
    assert_eq!(cards[0].1, "4,212.75");
    assert_eq!(cards[2].1, invoices.len().to_string());
}

#[test]
fn status_classes_are_distinct() {
    let classes = [
        invoice_status_class(InvoiceStatus::Draft),
        invoice_status_class(InvoiceStatus::Sent),
        invoice_status_class(InvoiceStatus::Paid),
        invoice_status_class(InvoiceStatus::Overdue),
    ];
    let mut deduped = classes.to_vec();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), classes.len());
}
