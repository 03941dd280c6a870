//! Shared utility functions.
//!
//! - `format`: Human-readable formatting (sizes)
//! - `html`: Escaping for inline scripts and markdown-style links

mod format;
mod html;

pub use format::format_size;
pub use html::{parse_markdown_link, safe_link, script_json, MarkdownLink};
