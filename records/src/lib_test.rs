use super::*;

#[test]
fn success_envelope_serializes_without_error_field() {
    let envelope = Envelope::ok(vec![1, 2, 3]);
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    assert!(json.get("error").is_none());
    assert!(json.get("pagination").is_none());
}

#[test]
fn paginated_envelope_carries_pagination_block() {
    let envelope = Envelope::paginated(vec!["a"], Pagination::new(2, 20, 41));
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["limit"], 20);
    assert_eq!(json["pagination"]["total"], 41);
    assert_eq!(json["pagination"]["total_pages"], 3);
}

#[test]
fn failure_envelope_serializes_code_and_message() {
    let envelope: Envelope<()> = Envelope::failure(error_code::NOT_FOUND, "product missing");
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "product missing");
    assert!(json.get("data").is_none());
}

#[test]
fn envelope_round_trips_through_json() {
    let envelope = Envelope::paginated(vec![7_i64, 8], Pagination::new(1, 2, 2));
    let text = serde_json::to_string(&envelope).unwrap();
    let restored: Envelope<Vec<i64>> = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, envelope);
}

#[test]
fn envelope_error_code_accessor() {
    let ok = Envelope::ok(1);
    assert_eq!(ok.error_code(), None);
    let failed: Envelope<i32> = Envelope::failure(error_code::VALIDATION_FAILED, "bad input");
    assert_eq!(failed.error_code(), Some("VALIDATION_FAILED"));
}

#[test]
fn pagination_total_pages_rounds_up() {
    assert_eq!(Pagination::new(1, 20, 0).total_pages, 0);
    assert_eq!(Pagination::new(1, 20, 1).total_pages, 1);
    assert_eq!(Pagination::new(1, 20, 20).total_pages, 1);
    assert_eq!(Pagination::new(1, 20, 21).total_pages, 2);
    assert_eq!(Pagination::new(1, 7, 50).total_pages, 8);
}

#[test]
fn pagination_normalize_defaults_and_clamps() {
    assert_eq!(Pagination::normalize(None, None), (1, DEFAULT_PAGE_LIMIT));
    assert_eq!(Pagination::normalize(Some(0), Some(0)), (1, DEFAULT_PAGE_LIMIT));
    assert_eq!(Pagination::normalize(Some(3), Some(50)), (3, 50));
    assert_eq!(Pagination::normalize(Some(3), Some(10_000)), (3, MAX_PAGE_LIMIT));
}

#[test]
fn pagination_offset_matches_page_window() {
    assert_eq!(Pagination::new(1, 20, 100).offset(), 0);
    assert_eq!(Pagination::new(2, 20, 100).offset(), 20);
    assert_eq!(Pagination::new(5, 7, 100).offset(), 28);
}

#[test]
fn pagination_guards_against_zero_limit() {
    let p = Pagination::new(1, 0, 10);
    assert_eq!(p.limit, 1);
    assert_eq!(p.total_pages, 10);
}
