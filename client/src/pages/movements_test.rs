use super::*;

fn product() -> Option<Uuid> {
    Some(Uuid::from_u128(1))
}

fn wh(n: u128) -> Option<Uuid> {
    Some(Uuid::from_u128(n))
}

#[test]
fn selected_id_maps_placeholder_to_none() {
    assert_eq!(selected_id(""), None);
    assert_eq!(selected_id("  "), None);
    assert_eq!(selected_id("not-a-uuid"), None);
    assert_eq!(selected_id(&Uuid::from_u128(7).to_string()), Some(Uuid::from_u128(7)));
}

#[test]
fn receipt_needs_only_destination() {
    let built = build_new_movement(product(), "receipt", "10", None, wh(2), " GRN-1 ", "").unwrap();
    assert_eq!(built.movement_type, MovementType::Receipt);
    assert_eq!(built.quantity, 10);
    assert_eq!(built.from_warehouse_id, None);
    assert_eq!(built.to_warehouse_id, wh(2));
    assert_eq!(built.reference.as_deref(), Some("GRN-1"));
    assert_eq!(built.note, None);

    assert_eq!(
        build_new_movement(product(), "receipt", "10", None, None, "", ""),
        Err("Receipts need a destination warehouse.".to_owned())
    );
}

#[test]
fn issue_needs_only_source() {
    let built = build_new_movement(product(), "issue", "3", wh(2), None, "", "").unwrap();
    assert_eq!(built.from_warehouse_id, wh(2));
    assert_eq!(built.to_warehouse_id, None);

    assert_eq!(
        build_new_movement(product(), "issue", "3", None, None, "", ""),
        Err("Issues need a source warehouse.".to_owned())
    );
}

#[test]
fn transfer_needs_two_distinct_warehouses() {
    let built = build_new_movement(product(), "transfer", "5", wh(2), wh(3), "", "").unwrap();
    assert_eq!(built.from_warehouse_id, wh(2));
    assert_eq!(built.to_warehouse_id, wh(3));

    assert_eq!(
        build_new_movement(product(), "transfer", "5", wh(2), None, "", ""),
        Err("Transfers need both warehouses.".to_owned())
    );
    assert_eq!(
        build_new_movement(product(), "transfer", "5", wh(2), wh(2), "", ""),
        Err("Transfer warehouses must differ.".to_owned())
    );
}

#[test]
fn adjustment_allows_negative_quantity() {
    let built = build_new_movement(product(), "adjustment", "-4", None, wh(2), "", "damaged").unwrap();
    assert_eq!(built.quantity, -4);
    assert_eq!(built.note.as_deref(), Some("damaged"));
}

#[test]
fn negative_quantity_rejected_outside_adjustment() {
    assert_eq!(
        build_new_movement(product(), "receipt", "-4", None, wh(2), "", ""),
        Err("Quantity must be positive for this movement type.".to_owned())
    );
}

#[test]
fn zero_and_malformed_quantities_rejected() {
    assert_eq!(
        build_new_movement(product(), "receipt", "0", None, wh(2), "", ""),
        Err("Quantity cannot be zero.".to_owned())
    );
    assert_eq!(
        build_new_movement(product(), "receipt", "ten", None, wh(2), "", ""),
        Err("Quantity must be a whole number.".to_owned())
    );
}

#[test]
fn missing_product_and_type_rejected_first() {
    assert_eq!(
        build_new_movement(None, "receipt", "1", None, wh(2), "", ""),
        Err("Choose a product.".to_owned())
    );
    assert_eq!(
        build_new_movement(product(), "", "1", None, wh(2), "", ""),
        Err("Choose a movement type.".to_owned())
    );
}
