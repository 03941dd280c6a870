//! HTTP request handlers for the web server.

mod page;
mod resume;
mod static_files;

// Re-export handlers for use by the router
pub use page::portfolio_page;
pub use resume::download_resume;
pub use static_files::{health, serve_css};
