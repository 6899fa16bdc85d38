//! Routing module for the ordering service

use crate::cart::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (the UI is served from another origin)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(crate::catalog::routes())
        .merge(crate::cart::routes())
        .merge(crate::checkout::routes())
        .merge(crate::orders::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
