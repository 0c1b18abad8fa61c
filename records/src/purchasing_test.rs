use uuid::Uuid;

use super::*;

#[test]
fn grn_status_round_trips_wire_strings() {
    for status in [GrnStatus::Pending, GrnStatus::Approved] {
        assert_eq!(GrnStatus::from_str(status.as_str()), Some(status));
    }
    assert_eq!(GrnStatus::from_str("rejected"), None);
}

#[test]
fn only_pending_grns_can_be_approved() {
    assert!(GrnStatus::Pending.can_approve());
    assert!(!GrnStatus::Approved.can_approve());
}

#[test]
fn only_pending_grns_can_be_deleted() {
    assert!(GrnStatus::Pending.can_delete());
    assert!(!GrnStatus::Approved.can_delete());
}

#[test]
fn lines_total_sums_quantity_times_cost() {
    let lines = vec![
        NewGrnLine { product_id: Uuid::new_v4(), quantity: 3, unit_cost: "2.50".parse().unwrap() },
        NewGrnLine { product_id: Uuid::new_v4(), quantity: 10, unit_cost: "1.00".parse().unwrap() },
    ];
    assert_eq!(lines_total(&lines), "17.50".parse().unwrap());
}

#[test]
fn lines_total_of_empty_set_is_zero() {
    assert_eq!(lines_total(&[]), Decimal::ZERO);
}

#[test]
fn new_grn_deserializes_with_date_and_lines() {
    let json = r#"{
        "supplier_id": "00000000-0000-0000-0000-000000000001",
        "warehouse_id": "00000000-0000-0000-0000-000000000002",
        "received_date": "2026-08-20",
        "lines": [
            {"product_id": "00000000-0000-0000-0000-000000000003", "quantity": 4, "unit_cost": "9.99"}
        ]
    }"#;
    let body: NewGrn = serde_json::from_str(json).unwrap();
    assert_eq!(body.received_date.to_string(), "2026-08-20");
    assert_eq!(body.lines.len(), 1);
    assert_eq!(body.lines[0].quantity, 4);
    assert!(body.note.is_none());
}

#[test]
fn grn_status_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&GrnStatus::Pending).unwrap(), "\"pending\"");
    let back: GrnStatus = serde_json::from_str("\"approved\"").unwrap();
    assert_eq!(back, GrnStatus::Approved);
}
