//! Portfolio page handler.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::template_structs::PortfolioTemplate;
use super::super::AppState;
use crate::assets::PageContext;

/// Load all assets for this request and render the page.
pub async fn portfolio_page(State(state): State<AppState>) -> Response {
    let ctx = PageContext::load(&state.settings, &state.fetcher).await;

    match PortfolioTemplate::from_context(&ctx).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render portfolio page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
