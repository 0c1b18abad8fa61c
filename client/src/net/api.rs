//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics so a
//! failed fetch degrades to an inline message without crashing hydration.
//! Failure envelopes surface their server message; transport errors surface
//! the `gloo-net` error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::auth::UserInfo;
use records::dashboard::DashboardSummary;
use records::inventory::{NewProduct, NewStockMovement, Product, ProductDetail, StockMovement, Warehouse};
use records::purchasing::{Grn, NewGrn, Supplier};
use records::Pagination;
#[cfg(any(test, feature = "hydrate"))]
use records::Envelope;
use uuid::Uuid;

#[cfg(any(test, feature = "hydrate"))]
fn product_detail_endpoint(product_id: Uuid) -> String {
    format!("/api/inventory/products/{product_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn grn_delete_endpoint(grn_id: Uuid) -> String {
    format!("/api/purchases/grn/{grn_id}")
}

/// Query pairs for the product list, skipping blank filters.
#[cfg(any(test, feature = "hydrate"))]
fn products_query(page: u32, limit: u32, search: &str, category: &str) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if !search.trim().is_empty() {
        pairs.push(("search", search.trim().to_owned()));
    }
    if !category.trim().is_empty() {
        pairs.push(("category", category.trim().to_owned()));
    }
    pairs
}

/// Query pairs for the movement list, skipping blank filters.
#[cfg(any(test, feature = "hydrate"))]
fn movements_query(page: u32, limit: u32, movement_type: &str, search: &str) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if !movement_type.trim().is_empty() {
        pairs.push(("movement_type", movement_type.trim().to_owned()));
    }
    if !search.trim().is_empty() {
        pairs.push(("search", search.trim().to_owned()));
    }
    pairs
}

/// Query pairs for the GRN list, skipping blank filters.
#[cfg(any(test, feature = "hydrate"))]
fn grns_query(page: u32, limit: u32, status: &str, search: &str) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
    if !status.trim().is_empty() {
        pairs.push(("status", status.trim().to_owned()));
    }
    if !search.trim().is_empty() {
        pairs.push(("search", search.trim().to_owned()));
    }
    pairs
}

/// Pull the data payload out of an envelope, or the failure message.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_data<T>(envelope: Envelope<T>) -> Result<T, String> {
    if envelope.success {
        envelope.data.ok_or_else(|| "empty response".to_owned())
    } else {
        Err(envelope
            .error
            .map(|e| e.message)
            .unwrap_or_else(|| "request failed".to_owned()))
    }
}

/// Pull a list payload and its pagination block out of an envelope.
#[cfg(any(test, feature = "hydrate"))]
fn unwrap_page<T>(envelope: Envelope<Vec<T>>) -> Result<(Vec<T>, Option<Pagination>), String> {
    let pagination = envelope.pagination;
    unwrap_data(envelope).map(|items| (items, pagination))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(&'static str, String)],
) -> Result<Envelope<T>, String> {
    let request = gloo_net::http::Request::get(url).query(query.iter().map(|(k, v)| (*k, v.as_str())));
    let resp = request.send().await.map_err(|e| e.to_string())?;
    resp.json::<Envelope<T>>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Result<Envelope<T>, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    resp.json::<Envelope<T>>().await.map_err(|e| e.to_string())
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = get_json::<UserInfo>("/api/auth/me", &[]).await.ok()?;
        unwrap_data(envelope).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in with username and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the server's failure message for bad credentials, or the
/// transport error text.
pub async fn login(username: &str, password: &str) -> Result<UserInfo, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let envelope = post_json::<_, UserInfo>("/api/auth/login", &payload).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Fetch the dashboard summary counts.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = get_json::<DashboardSummary>("/api/dashboard/summary", &[]).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// INVENTORY
// =============================================================================

/// Fetch one page of products.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_products(
    page: u32,
    limit: u32,
    search: &str,
    category: &str,
) -> Result<(Vec<Product>, Option<Pagination>), String> {
    #[cfg(feature = "hydrate")]
    {
        let query = products_query(page, limit, search, category);
        let envelope = get_json::<Vec<Product>>("/api/inventory/products", &query).await?;
        unwrap_page(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit, search, category);
        Err("not available on server".to_owned())
    }
}

/// Create a product.
///
/// # Errors
///
/// Returns the failure message (for example a duplicate SKU) or transport
/// error text.
pub async fn create_product(new: &NewProduct) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = post_json::<_, Product>("/api/inventory/products", new).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err("not available on server".to_owned())
    }
}

/// Fetch one product with its per-warehouse stock levels.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_product_detail(product_id: Uuid) -> Result<ProductDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_detail_endpoint(product_id);
        let envelope = get_json::<ProductDetail>(&url, &[]).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = product_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of stock movements.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_movements(
    page: u32,
    limit: u32,
    movement_type: &str,
    search: &str,
) -> Result<(Vec<StockMovement>, Option<Pagination>), String> {
    #[cfg(feature = "hydrate")]
    {
        let query = movements_query(page, limit, movement_type, search);
        let envelope = get_json::<Vec<StockMovement>>("/api/inventory/stock-movements/list", &query).await?;
        unwrap_page(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit, movement_type, search);
        Err("not available on server".to_owned())
    }
}

/// Append one stock movement to the ledger.
///
/// # Errors
///
/// Returns the failure message (validation, insufficient stock) or transport
/// error text.
pub async fn create_movement(new: &NewStockMovement) -> Result<StockMovement, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = post_json::<_, StockMovement>("/api/inventory/stock-movements", new).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err("not available on server".to_owned())
    }
}

/// Fetch the active warehouses.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_warehouses() -> Result<Vec<Warehouse>, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = get_json::<Vec<Warehouse>>("/api/inventory/warehouses", &[]).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// PURCHASING
// =============================================================================

/// Fetch the active suppliers.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = get_json::<Vec<Supplier>>("/api/suppliers", &[]).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of GRNs.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn fetch_grns(
    page: u32,
    limit: u32,
    status: &str,
    search: &str,
) -> Result<(Vec<Grn>, Option<Pagination>), String> {
    #[cfg(feature = "hydrate")]
    {
        let query = grns_query(page, limit, status, search);
        let envelope = get_json::<Vec<Grn>>("/api/purchases/grn-list", &query).await?;
        unwrap_page(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit, status, search);
        Err("not available on server".to_owned())
    }
}

/// Create a pending GRN.
///
/// # Errors
///
/// Returns the failure message or transport error text.
pub async fn create_grn(new: &NewGrn) -> Result<Grn, String> {
    #[cfg(feature = "hydrate")]
    {
        let envelope = post_json::<_, Grn>("/api/purchases/grn-list", new).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new;
        Err("not available on server".to_owned())
    }
}

/// Approve a pending GRN, posting its lines to the stock ledger.
///
/// # Errors
///
/// Returns the failure message (for example already approved) or transport
/// error text.
pub async fn approve_grn(grn_id: Uuid) -> Result<Grn, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "grn_id": grn_id });
        let envelope = post_json::<_, Grn>("/api/purchases/grn-approve", &payload).await?;
        unwrap_data(envelope)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = grn_id;
        Err("not available on server".to_owned())
    }
}

/// Delete a pending GRN.
///
/// # Errors
///
/// Returns the failure message (approved GRNs cannot be deleted) or
/// transport error text.
pub async fn delete_grn(grn_id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = grn_delete_endpoint(grn_id);
        let resp = gloo_net::http::Request::delete(&url).send().await.map_err(|e| e.to_string())?;
        let envelope = resp
            .json::<Envelope<serde_json::Value>>()
            .await
            .map_err(|e| e.to_string())?;
        unwrap_data(envelope).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = grn_id;
        Err("not available on server".to_owned())
    }
}
