//! Static asset constants.

/// Stylesheet for the portfolio page.
pub const CSS: &str = include_str!("styles.css");
