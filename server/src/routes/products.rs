//! Product catalog routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::inventory::{NewProduct, Product, ProductDetail};
use records::{Envelope, Pagination, error_code};
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::failure::ApiFailure;
use crate::routes::movements::stock_failure;
use crate::services::{product, stock};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
}

pub(crate) fn product_failure(err: product::ProductError) -> ApiFailure {
    match err {
        product::ProductError::NotFound(_) => {
            ApiFailure::new(StatusCode::NOT_FOUND, error_code::NOT_FOUND, err.to_string())
        }
        product::ProductError::DuplicateSku(_) => {
            ApiFailure::new(StatusCode::CONFLICT, error_code::DUPLICATE_SKU, err.to_string())
        }
        product::ProductError::Validation(_) => {
            ApiFailure::new(StatusCode::BAD_REQUEST, error_code::VALIDATION_FAILED, err.to_string())
        }
        product::ProductError::Database(db_err) => ApiFailure::storage(&db_err),
    }
}

/// `GET /api/inventory/products` — paged product list with search and category filters.
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Envelope<Vec<Product>>>, ApiFailure> {
    let (page, limit) = Pagination::normalize(query.page, query.limit);
    let (products, total) =
        product::list_products(&state.pool, page, limit, query.search.as_deref(), query.category.as_deref())
            .await
            .map_err(product_failure)?;

    Ok(Json(Envelope::paginated(products, Pagination::new(page, limit, total))))
}

/// `POST /api/inventory/products` — create a product.
pub async fn create_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(body): Json<NewProduct>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiFailure> {
    let created = product::create_product(&state.pool, &body)
        .await
        .map_err(product_failure)?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(created))))
}

/// `GET /api/inventory/products/{id}` — one product with its per-warehouse stock levels.
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Envelope<ProductDetail>>, ApiFailure> {
    let found = product::get_product(&state.pool, product_id)
        .await
        .map_err(product_failure)?;
    let levels = stock::product_levels(&state, product_id)
        .await
        .map_err(stock_failure)?;
    let on_hand_total = stock::product_on_hand_total(&state, product_id)
        .await
        .map_err(stock_failure)?;

    Ok(Json(Envelope::ok(ProductDetail { product: found, levels, on_hand_total })))
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
