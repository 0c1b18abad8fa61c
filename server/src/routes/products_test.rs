use super::*;

#[test]
fn duplicate_sku_maps_to_409() {
    let failure = product_failure(product::ProductError::DuplicateSku("WID-001".into()));
    assert_eq!(failure.status, StatusCode::CONFLICT);
    assert_eq!(failure.code, error_code::DUPLICATE_SKU);
    assert!(failure.message.contains("WID-001"), "message should name the SKU: {}", failure.message);
}

#[test]
fn not_found_maps_to_404() {
    let failure = product_failure(product::ProductError::NotFound(Uuid::new_v4()));
    assert_eq!(failure.status, StatusCode::NOT_FOUND);
    assert_eq!(failure.code, error_code::NOT_FOUND);
}

#[test]
fn validation_maps_to_400() {
    let failure = product_failure(product::ProductError::Validation("sku is required".into()));
    assert_eq!(failure.status, StatusCode::BAD_REQUEST);
    assert_eq!(failure.code, error_code::VALIDATION_FAILED);
}
