//! Web server for the portfolio page.
//!
//! Every request to `/` reloads the content directory and refetches the
//! animation, so edits to the profile or images show up on the next reload.
//! Shared state is limited to the settings and a reusable HTTP client.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;
pub use template_structs::{PortfolioTemplate, ProjectCard, ResumeLink, SocialCell};

use std::net::SocketAddr;
use std::sync::Arc;

use askama::Template;

use crate::animation::AnimationFetcher;
use crate::assets::PageContext;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub fetcher: AnimationFetcher,
}

impl AppState {
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let fetcher = AnimationFetcher::new(settings.animation_timeout)?;
        Ok(Self {
            settings: Arc::new(settings),
            fetcher,
        })
    }
}

/// Load everything and render the page once.
pub async fn render_page(settings: &Settings, fetcher: &AnimationFetcher) -> anyhow::Result<String> {
    let ctx = PageContext::load(settings, fetcher).await;
    Ok(PortfolioTemplate::from_context(&ctx).render()?)
}

/// Start the web server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
