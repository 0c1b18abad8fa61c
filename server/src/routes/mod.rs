//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API with Leptos SSR rendering under a single
//! Axum router. Every `/api` response is an envelope (`success`/`data`/
//! `pagination`/`error`); page routes are rendered by the client crate and
//! hydrated in the browser.

pub mod auth;
pub mod dashboard;
pub mod failure;
pub mod grn;
pub mod movements;
pub mod products;
pub mod suppliers;
pub mod warehouses;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// JSON API routes shared by the hydrated app and external clients.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard/summary", get(dashboard::summary))
        .route(
            "/api/inventory/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/inventory/products/{id}", get(products::get_product))
        .route("/api/inventory/stock-movements/list", get(movements::list_movements))
        .route("/api/inventory/stock-movements", post(movements::create_movement))
        .route("/api/inventory/warehouses", get(warehouses::list_warehouses))
        .route("/api/suppliers", get(suppliers::list_suppliers))
        .route("/api/purchases/grn-list", get(grn::list_grns).post(grn::create_grn))
        .route("/api/purchases/grn-approve", post(grn::approve_grn))
        .route("/api/purchases/grn/{id}", delete(grn::delete_grn))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application router: JSON API plus the Leptos-rendered pages.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
