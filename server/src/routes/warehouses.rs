//! Warehouse routes.

use axum::extract::State;
use axum::response::Json;
use records::Envelope;
use records::inventory::Warehouse;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::services::warehouse;
use crate::state::AppState;

/// `GET /api/inventory/warehouses` — active warehouses, for movement and GRN forms.
pub async fn list_warehouses(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Envelope<Vec<Warehouse>>>, ApiFailure> {
    let warehouses = warehouse::list_warehouses(&state.pool)
        .await
        .map_err(|err| ApiFailure::storage(&err))?;

    Ok(Json(Envelope::ok(warehouses)))
}
