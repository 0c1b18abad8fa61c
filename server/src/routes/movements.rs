//! Stock movement routes — list and append ledger entries.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::inventory::{MovementType, NewStockMovement, StockMovement};
use records::{Envelope, Pagination, error_code};
use serde::Deserialize;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::services::stock::{self, MovementFilter, StockError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct MovementListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub movement_type: Option<String>,
    pub search: Option<String>,
}

pub(crate) fn stock_failure(err: StockError) -> ApiFailure {
    match err {
        StockError::Validation(_) => {
            ApiFailure::new(StatusCode::BAD_REQUEST, error_code::VALIDATION_FAILED, err.to_string())
        }
        StockError::ProductNotFound(_) | StockError::WarehouseNotFound(_) => {
            ApiFailure::new(StatusCode::NOT_FOUND, error_code::NOT_FOUND, err.to_string())
        }
        StockError::InsufficientStock { .. } => {
            ApiFailure::new(StatusCode::CONFLICT, error_code::INSUFFICIENT_STOCK, err.to_string())
        }
        StockError::Database(db_err) => ApiFailure::storage(&db_err),
    }
}

/// Parse the optional `movement_type` query value. Blank values count as absent;
/// unknown values are a validation failure rather than silently matching nothing.
pub(crate) fn parse_movement_type(raw: Option<&str>) -> Result<Option<MovementType>, ApiFailure> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => MovementType::from_str(value).map(Some).ok_or_else(|| {
            ApiFailure::new(
                StatusCode::BAD_REQUEST,
                error_code::VALIDATION_FAILED,
                format!("unknown movement_type: {value}"),
            )
        }),
    }
}

/// `GET /api/inventory/stock-movements/list` — paged ledger, newest first.
pub async fn list_movements(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<MovementListQuery>,
) -> Result<Json<Envelope<Vec<StockMovement>>>, ApiFailure> {
    let movement_type = parse_movement_type(query.movement_type.as_deref())?;
    let (page, limit) = Pagination::normalize(query.page, query.limit);

    let filter = MovementFilter { page, limit, movement_type, search: query.search };
    let (movements, total) = stock::list_movements(&state.pool, &filter)
        .await
        .map_err(stock_failure)?;

    Ok(Json(Envelope::paginated(movements, Pagination::new(page, limit, total))))
}

/// `POST /api/inventory/stock-movements` — append one ledger entry.
///
/// The ledger is append-only; there is no update or delete route.
pub async fn create_movement(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewStockMovement>,
) -> Result<(StatusCode, Json<Envelope<StockMovement>>), ApiFailure> {
    let movement = stock::append_movement(&state, &body, &auth.user)
        .await
        .map_err(stock_failure)?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(movement))))
}

#[cfg(test)]
#[path = "movements_test.rs"]
mod tests;
