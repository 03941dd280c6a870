//! Resume download handler.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::AppState;
use crate::assets::load_resume;

/// Serve the resume PDF as an attachment.
pub async fn download_resume(State(state): State<AppState>) -> Response {
    let resume = match load_resume(&state.settings.resume_path).await {
        Ok(r) => r,
        Err(e) if e.is_not_found() => {
            return (StatusCode::NOT_FOUND, "Resume not found").into_response();
        }
        Err(e) => {
            tracing::warn!("Failed to read resume: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read resume").into_response();
        }
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        sanitize_filename(&state.settings.resume_download_name)
    );

    (
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        resume.bytes,
    )
        .into_response()
}

/// Keep the download name to characters that are safe inside a quoted
/// header parameter.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| !matches!(c, '"' | '\\' | '/'))
        .collect();

    if cleaned.trim().is_empty() {
        "resume.pdf".to_string()
    } else {
        cleaned
    }
}
