//! Supplier routes.

use axum::extract::State;
use axum::response::Json;
use records::Envelope;
use records::purchasing::Supplier;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::services::supplier;
use crate::state::AppState;

/// `GET /api/suppliers` — active suppliers, for the GRN form.
pub async fn list_suppliers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Envelope<Vec<Supplier>>>, ApiFailure> {
    let suppliers = supplier::list_suppliers(&state.pool)
        .await
        .map_err(|err| ApiFailure::storage(&err))?;

    Ok(Json(Envelope::ok(suppliers)))
}
