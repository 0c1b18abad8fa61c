//! Goods-received-note routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::purchasing::{Grn, GrnApproveRequest, GrnStatus, NewGrn};
use records::{Envelope, Pagination, error_code};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::services::grn::{self, GrnError, GrnFilter};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GrnListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub search: Option<String>,
}

pub(crate) fn grn_failure(err: GrnError) -> ApiFailure {
    match err {
        GrnError::NotFound(_) => ApiFailure::new(StatusCode::NOT_FOUND, error_code::NOT_FOUND, err.to_string()),
        GrnError::Validation(_) => {
            ApiFailure::new(StatusCode::BAD_REQUEST, error_code::VALIDATION_FAILED, err.to_string())
        }
        GrnError::AlreadyApproved(_) => {
            ApiFailure::new(StatusCode::CONFLICT, error_code::ALREADY_APPROVED, err.to_string())
        }
        GrnError::ApprovedImmutable(_) => {
            ApiFailure::new(StatusCode::CONFLICT, error_code::APPROVED_IMMUTABLE, err.to_string())
        }
        GrnError::SupplierNotFound(_) | GrnError::WarehouseNotFound(_) | GrnError::ProductNotFound(_) => {
            ApiFailure::new(StatusCode::NOT_FOUND, error_code::NOT_FOUND, err.to_string())
        }
        GrnError::Database(db_err) => ApiFailure::storage(&db_err),
    }
}

/// Parse the optional `status` query value; unknown values are a validation failure.
pub(crate) fn parse_grn_status(raw: Option<&str>) -> Result<Option<GrnStatus>, ApiFailure> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => GrnStatus::from_str(value).map(Some).ok_or_else(|| {
            ApiFailure::new(
                StatusCode::BAD_REQUEST,
                error_code::VALIDATION_FAILED,
                format!("unknown status: {value}"),
            )
        }),
    }
}

/// `GET /api/purchases/grn-list` — paged GRNs with status and search filters.
pub async fn list_grns(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<GrnListQuery>,
) -> Result<Json<Envelope<Vec<Grn>>>, ApiFailure> {
    let status = parse_grn_status(query.status.as_deref())?;
    let (page, limit) = Pagination::normalize(query.page, query.limit);

    let filter = GrnFilter { page, limit, status, search: query.search };
    let (grns, total) = grn::list_grns(&state.pool, &filter)
        .await
        .map_err(grn_failure)?;

    Ok(Json(Envelope::paginated(grns, Pagination::new(page, limit, total))))
}

/// `POST /api/purchases/grn-list` — create a pending GRN.
pub async fn create_grn(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewGrn>,
) -> Result<(StatusCode, Json<Envelope<Grn>>), ApiFailure> {
    let created = grn::create_grn(&state.pool, &body, &auth.user)
        .await
        .map_err(grn_failure)?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(created))))
}

/// `POST /api/purchases/grn-approve` — approve a pending GRN, posting its
/// lines to the stock ledger exactly once.
pub async fn approve_grn(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<GrnApproveRequest>,
) -> Result<Json<Envelope<Grn>>, ApiFailure> {
    let approved = grn::approve_grn(&state, body.grn_id, &auth.user)
        .await
        .map_err(grn_failure)?;

    Ok(Json(Envelope::ok(approved)))
}

/// `DELETE /api/purchases/grn/{id}` — delete a pending GRN and its lines.
pub async fn delete_grn(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(grn_id): Path<Uuid>,
) -> Result<Json<Envelope<serde_json::Value>>, ApiFailure> {
    grn::delete_grn(&state.pool, grn_id)
        .await
        .map_err(grn_failure)?;

    Ok(Json(Envelope::ok(serde_json::json!({ "deleted": grn_id }))))
}

#[cfg(test)]
#[path = "grn_test.rs"]
mod tests;
