//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::template_structs::RESUME_HREF;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::portfolio_page))
        .route(RESUME_HREF, get(handlers::download_resume))
        .route("/static/style.css", get(handlers::serve_css))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
