use super::*;

// =============================================================================
// parse_grn_status
// =============================================================================

#[test]
fn parse_grn_status_absent_and_blank_are_none() {
    assert_eq!(parse_grn_status(None).ok(), Some(None));
    assert_eq!(parse_grn_status(Some("  ")).ok(), Some(None));
}

#[test]
fn parse_grn_status_accepts_known_values() {
    assert_eq!(parse_grn_status(Some("pending")).ok(), Some(Some(GrnStatus::Pending)));
    assert_eq!(parse_grn_status(Some("approved")).ok(), Some(Some(GrnStatus::Approved)));
}

#[test]
fn parse_grn_status_rejects_unknown_value() {
    let failure = parse_grn_status(Some("draft")).expect_err("unknown status should be rejected");
    assert_eq!(failure.status, StatusCode::BAD_REQUEST);
    assert_eq!(failure.code, error_code::VALIDATION_FAILED);
}

// =============================================================================
// grn_failure mapping
// =============================================================================

#[test]
fn not_found_maps_to_404() {
    let failure = grn_failure(GrnError::NotFound(Uuid::new_v4()));
    assert_eq!(failure.status, StatusCode::NOT_FOUND);
    assert_eq!(failure.code, error_code::NOT_FOUND);
}

#[test]
fn already_approved_maps_to_409_with_its_own_code() {
    let failure = grn_failure(GrnError::AlreadyApproved(Uuid::new_v4()));
    assert_eq!(failure.status, StatusCode::CONFLICT);
    assert_eq!(failure.code, error_code::ALREADY_APPROVED);
}

#[test]
fn approved_immutable_maps_to_409_with_its_own_code() {
    // Distinct from ALREADY_APPROVED: this is the delete path, not approval.
    let failure = grn_failure(GrnError::ApprovedImmutable(Uuid::new_v4()));
    assert_eq!(failure.status, StatusCode::CONFLICT);
    assert_eq!(failure.code, error_code::APPROVED_IMMUTABLE);
}

#[test]
fn dangling_references_map_to_404() {
    for err in [
        GrnError::SupplierNotFound(Uuid::new_v4()),
        GrnError::WarehouseNotFound(Uuid::new_v4()),
        GrnError::ProductNotFound(Uuid::new_v4()),
    ] {
        let failure = grn_failure(err);
        assert_eq!(failure.status, StatusCode::NOT_FOUND);
        assert_eq!(failure.code, error_code::NOT_FOUND);
    }
}

#[test]
fn validation_maps_to_400() {
    let failure = grn_failure(GrnError::Validation("grn requires at least one line".into()));
    assert_eq!(failure.status, StatusCode::BAD_REQUEST);
    assert_eq!(failure.code, error_code::VALIDATION_FAILED);
}
