//! Axum router and server setup.
//! Used by: main.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", get(handlers::hello::hello))
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::metrics::metrics))
        .route(
            "/v1/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/v1/users/:id", get(handlers::users::get_by_id))
        .route("/v1/users/:id/dashboard", get(handlers::users::dashboard))
        .route(
            "/v1/orders",
            get(handlers::orders::list).post(handlers::orders::create),
        )
        .route("/v1/orders/:id", get(handlers::orders::get_by_id))
        .route("/v1/inventory", get(handlers::inventory::list))
        .route(
            "/v1/inventory/:id",
            get(handlers::inventory::get_by_id).put(handlers::inventory::update),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router).await
}
