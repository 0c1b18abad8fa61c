use super::*;

fn id_str(n: u128) -> String {
    Uuid::from_u128(n).to_string()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn draft(product: &str, quantity: &str, unit_cost: &str) -> GrnLineDraft {
    GrnLineDraft {
        product_value: product.to_owned(),
        quantity: quantity.to_owned(),
        unit_cost: unit_cost.to_owned(),
    }
}

// =============================================================
// Draft line math
// =============================================================

#[test]
fn draft_line_total_multiplies_when_both_parse() {
    assert_eq!(draft_line_total("4", "12.50"), Some(dec("50.00")));
}

#[test]
fn draft_line_total_none_for_incomplete_fields() {
    assert_eq!(draft_line_total("", "12.50"), None);
    assert_eq!(draft_line_total("4", ""), None);
    assert_eq!(draft_line_total("0", "12.50"), None);
    assert_eq!(draft_line_total("-2", "12.50"), None);
    assert_eq!(draft_line_total("4", "12.345"), None);
}

#[test]
fn draft_total_skips_incomplete_lines() {
    let lines = vec![
        draft(&id_str(1), "2", "10.00"),
        draft(&id_str(2), "", ""),
        draft(&id_str(3), "1", "5.50"),
    ];
    assert_eq!(draft_total(&lines), dec("25.50"));
}

// =============================================================
// build_new_grn
// =============================================================

#[test]
fn build_new_grn_happy_path() {
    let lines = vec![draft(&id_str(10), "3", "7.25")];
    let built = build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "  dock 4  ", &lines).unwrap();
    assert_eq!(built.supplier_id, Uuid::from_u128(1));
    assert_eq!(built.warehouse_id, Uuid::from_u128(2));
    assert_eq!(built.received_date.to_string(), "2025-03-07");
    assert_eq!(built.note.as_deref(), Some("dock 4"));
    assert_eq!(built.lines.len(), 1);
    assert_eq!(built.lines[0].product_id, Uuid::from_u128(10));
    assert_eq!(built.lines[0].quantity, 3);
    assert_eq!(built.lines[0].unit_cost, dec("7.25"));
}

#[test]
fn build_new_grn_blank_note_becomes_none() {
    let lines = vec![draft(&id_str(10), "1", "1")];
    let built = build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "   ", &lines).unwrap();
    assert_eq!(built.note, None);
}

#[test]
fn build_new_grn_requires_selections_and_date() {
    let lines = vec![draft(&id_str(10), "1", "1")];
    assert_eq!(
        build_new_grn("", &id_str(2), "2025-03-07", "", &lines),
        Err("Choose a supplier.".to_owned())
    );
    assert_eq!(
        build_new_grn(&id_str(1), "", "2025-03-07", "", &lines),
        Err("Choose a warehouse.".to_owned())
    );
    assert_eq!(
        build_new_grn(&id_str(1), &id_str(2), "07/03/2025", "", &lines),
        Err("Pick a received date.".to_owned())
    );
}

#[test]
fn build_new_grn_requires_at_least_one_line() {
    assert_eq!(
        build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "", &[]),
        Err("Add at least one line.".to_owned())
    );
}

#[test]
fn build_new_grn_line_errors_are_one_based() {
    let lines = vec![draft(&id_str(10), "1", "1"), draft("", "1", "1")];
    assert_eq!(
        build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "", &lines),
        Err("Line 2: choose a product.".to_owned())
    );

    let lines = vec![draft(&id_str(10), "0", "1")];
    assert_eq!(
        build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "", &lines),
        Err("Line 1: quantity must be a positive whole number.".to_owned())
    );

    let lines = vec![draft(&id_str(10), "1", "1.239")];
    assert_eq!(
        build_new_grn(&id_str(1), &id_str(2), "2025-03-07", "", &lines),
        Err("Line 1: unit cost must be an amount like 12.50.".to_owned())
    );
}
