//! Dashboard summary route.

use axum::extract::State;
use axum::response::Json;
use records::Envelope;
use records::dashboard::DashboardSummary;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::services::dashboard;
use crate::state::AppState;

/// `GET /api/dashboard/summary` — headline counts for the landing page.
///
/// Computed from SQL rather than the stock cache so the dashboard works
/// before the cache has hydrated.
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Envelope<DashboardSummary>>, ApiFailure> {
    let summary = dashboard::summary(&state.pool)
        .await
        .map_err(|err| ApiFailure::storage(&err))?;

    Ok(Json(Envelope::ok(summary)))
}
