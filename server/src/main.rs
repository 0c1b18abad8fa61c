mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Seed the admin login and default warehouse/supplier on an empty database.
    services::bootstrap::run(&pool).await.expect("bootstrap seed failed");

    let allow_negative_stock = routes::auth::env_bool("ALLOW_NEGATIVE_STOCK").unwrap_or(false);
    if allow_negative_stock {
        tracing::warn!("negative stock allowed by configuration");
    }
    let state = state::AppState::new(pool, allow_negative_stock);

    // Spawn background expired-session sweeper.
    let _sweeper = services::maintenance::spawn_session_sweeper(state.clone());

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "opsdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
