use super::*;
use uuid::Uuid;

// =============================================================================
// parse_movement_type
// =============================================================================

#[test]
fn parse_movement_type_absent_and_blank_are_none() {
    assert_eq!(parse_movement_type(None).ok(), Some(None));
    assert_eq!(parse_movement_type(Some("")).ok(), Some(None));
    assert_eq!(parse_movement_type(Some("   ")).ok(), Some(None));
}

#[test]
fn parse_movement_type_accepts_known_values() {
    assert_eq!(parse_movement_type(Some("receipt")).ok(), Some(Some(MovementType::Receipt)));
    assert_eq!(parse_movement_type(Some("transfer")).ok(), Some(Some(MovementType::Transfer)));
}

#[test]
fn parse_movement_type_rejects_unknown_value() {
    let failure = parse_movement_type(Some("restock")).expect_err("unknown type should be rejected");
    assert_eq!(failure.status, StatusCode::BAD_REQUEST);
    assert_eq!(failure.code, error_code::VALIDATION_FAILED);
    assert!(failure.message.contains("restock"), "message should name the bad value: {}", failure.message);
}

// =============================================================================
// stock_failure mapping
// =============================================================================

#[test]
fn validation_maps_to_400() {
    let failure = stock_failure(StockError::Validation("issue quantity must be positive".into()));
    assert_eq!(failure.status, StatusCode::BAD_REQUEST);
    assert_eq!(failure.code, error_code::VALIDATION_FAILED);
}

#[test]
fn missing_product_and_warehouse_map_to_404() {
    let id = Uuid::new_v4();
    let failure = stock_failure(StockError::ProductNotFound(id));
    assert_eq!(failure.status, StatusCode::NOT_FOUND);
    assert_eq!(failure.code, error_code::NOT_FOUND);
    assert!(failure.message.contains(&id.to_string()));

    let failure = stock_failure(StockError::WarehouseNotFound(id));
    assert_eq!(failure.status, StatusCode::NOT_FOUND);
}

#[test]
fn insufficient_stock_maps_to_409_with_counts() {
    let failure = stock_failure(StockError::InsufficientStock {
        product_id: Uuid::new_v4(),
        warehouse_id: Uuid::new_v4(),
        on_hand: 3,
        requested: 10,
    });
    assert_eq!(failure.status, StatusCode::CONFLICT);
    assert_eq!(failure.code, error_code::INSUFFICIENT_STOCK);
    assert!(failure.message.contains('3') && failure.message.contains("10"), "{}", failure.message);
}
