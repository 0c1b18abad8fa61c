use super::*;
use records::error_code;

#[test]
fn product_detail_endpoint_formats_expected_path() {
    let id = Uuid::nil();
    assert_eq!(
        product_detail_endpoint(id),
        "/api/inventory/products/00000000-0000-0000-0000-000000000000"
    );
}

#[test]
fn grn_delete_endpoint_formats_expected_path() {
    let id = Uuid::nil();
    assert_eq!(grn_delete_endpoint(id), "/api/purchases/grn/00000000-0000-0000-0000-000000000000");
}

#[test]
fn products_query_skips_blank_filters() {
    let pairs = products_query(2, 50, "  ", "");
    assert_eq!(pairs, vec![("page", "2".to_owned()), ("limit", "50".to_owned())]);
}

#[test]
fn products_query_trims_filters() {
    let pairs = products_query(1, 20, " bolt ", " Hardware ");
    assert_eq!(
        pairs,
        vec![
            ("page", "1".to_owned()),
            ("limit", "20".to_owned()),
            ("search", "bolt".to_owned()),
            ("category", "Hardware".to_owned()),
        ]
    );
}

#[test]
fn movements_query_includes_type_when_present() {
    let pairs = movements_query(1, 20, "receipt", "");
    assert_eq!(
        pairs,
        vec![
            ("page", "1".to_owned()),
            ("limit", "20".to_owned()),
            ("movement_type", "receipt".to_owned()),
        ]
    );
}

#[test]
fn grns_query_includes_status_and_search() {
    let pairs = grns_query(3, 10, "pending", "GRN-2025");
    assert_eq!(
        pairs,
        vec![
            ("page", "3".to_owned()),
            ("limit", "10".to_owned()),
            ("status", "pending".to_owned()),
            ("search", "GRN-2025".to_owned()),
        ]
    );
}

#[test]
fn unwrap_data_returns_payload_on_success() {
    let envelope = Envelope::ok(7_u32);
    assert_eq!(unwrap_data(envelope), Ok(7));
}

#[test]
fn unwrap_data_surfaces_failure_message() {
    let envelope: Envelope<u32> = Envelope::failure(error_code::DUPLICATE_SKU, "SKU already exists");
    assert_eq!(unwrap_data(envelope), Err("SKU already exists".to_owned()));
}

#[test]
fn unwrap_data_rejects_success_without_payload() {
    let envelope = Envelope::<u32> { success: true, data: None, pagination: None, error: None };
    // Success with no data is a malformed response, not a silent default.
    assert_eq!(unwrap_data(envelope), Err("empty response".to_owned()));
}

#[test]
fn unwrap_page_keeps_pagination_block() {
    let envelope = Envelope::paginated(vec![1_u32, 2, 3], Pagination::new(1, 20, 3));
    let (items, pagination) = unwrap_page(envelope).unwrap();
    assert_eq!(items, vec![1, 2, 3]);
    let pagination = pagination.unwrap();
    assert_eq!(pagination.total, 3);
    assert_eq!(pagination.total_pages, 1);
}

#[test]
fn unwrap_page_surfaces_failure_message() {
    let envelope: Envelope<Vec<u32>> = Envelope::failure(error_code::STORAGE_ERROR, "storage error");
    assert_eq!(unwrap_page(envelope), Err("storage error".to_owned()));
}
