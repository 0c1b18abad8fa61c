use chrono::Utc;
use uuid::Uuid;

use super::*;

#[test]
fn movement_type_round_trips_wire_strings() {
    for ty in MovementType::all() {
        assert_eq!(MovementType::from_str(ty.as_str()), Some(ty));
    }
}

#[test]
fn movement_type_rejects_unknown_strings() {
    assert_eq!(MovementType::from_str("shipment"), None);
    assert_eq!(MovementType::from_str(""), None);
    assert_eq!(MovementType::from_str("RECEIPT"), None);
}

#[test]
fn movement_type_serde_uses_lowercase() {
    let json = serde_json::to_string(&MovementType::Transfer).unwrap();
    assert_eq!(json, "\"transfer\"");
    let back: MovementType = serde_json::from_str("\"adjustment\"").unwrap();
    assert_eq!(back, MovementType::Adjustment);
}

#[test]
fn stock_movement_serde_round_trip() {
    let movement = StockMovement {
        id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        product_sku: "WID-001".into(),
        product_name: "Widget".into(),
        movement_type: MovementType::Transfer,
        quantity: 12,
        from_warehouse_id: Some(Uuid::new_v4()),
        from_warehouse: Some("Central".into()),
        to_warehouse_id: Some(Uuid::new_v4()),
        to_warehouse: Some("East".into()),
        reference: Some("GRN-2026-0007".into()),
        note: None,
        moved_by: Some("admin".into()),
        created_at: Utc::now(),
    };
    let text = serde_json::to_string(&movement).unwrap();
    let restored: StockMovement = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, movement);
}

#[test]
fn new_movement_optional_fields_default_to_none() {
    let json = r#"{"product_id":"00000000-0000-0000-0000-000000000001","movement_type":"receipt","quantity":5}"#;
    let body: NewStockMovement = serde_json::from_str(json).unwrap();
    assert_eq!(body.quantity, 5);
    assert_eq!(body.movement_type, MovementType::Receipt);
    assert!(body.from_warehouse_id.is_none());
    assert!(body.to_warehouse_id.is_none());
    assert!(body.reference.is_none());
}

#[test]
fn product_price_serializes_as_decimal_string() {
    let product = Product {
        id: Uuid::new_v4(),
        sku: "WID-001".into(),
        name: "Widget".into(),
        category: Some("Hardware".into()),
        unit: "pcs".into(),
        price: "19.99".parse().unwrap(),
        cost: "12.50".parse().unwrap(),
        reorder_level: 10,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["price"], "19.99");
    assert_eq!(json["cost"], "12.50");
}

#[test]
fn new_product_accepts_numeric_price_input() {
    let json = r#"{"sku":"A","name":"Thing","price":5,"cost":"2.40"}"#;
    let body: NewProduct = serde_json::from_str(json).unwrap();
    assert_eq!(body.price, "5".parse().unwrap());
    assert_eq!(body.cost, "2.40".parse().unwrap());
    assert!(body.unit.is_none());
    assert!(body.reorder_level.is_none());
}
