//! folio - single-page portfolio site server.
//!
//! Loads a profile record, a resume and images from a content directory,
//! fetches a remote animation descriptor, and renders one HTML page per
//! request.

pub mod animation;
pub mod assets;
pub mod config;
pub mod content;
pub mod encoder;
pub mod server;
pub mod utils;

pub use assets::{Asset, AssetError, PageContext};
pub use config::Settings;
