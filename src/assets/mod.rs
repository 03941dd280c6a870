//! Per-render asset loading.
//!
//! Every asset is loaded independently into an [`Asset`]. A failure never
//! aborts the render; it turns into [`Asset::Missing`] carrying a message the
//! page shows inline.

mod loader;

pub use loader::{
    load_photo, load_profile, load_project_image, load_projects, load_resume, PageContext,
    ProjectEntry, Resume,
};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading a single asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl AssetError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssetError::NotFound { path }
        } else {
            AssetError::Io { path, source }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound { .. })
    }

    /// Rewrite the path relative to `base` for display to viewers. Paths
    /// outside `base` are reduced to their file name.
    pub fn relative_to(mut self, base: &Path) -> Self {
        let path = match &mut self {
            AssetError::NotFound { path }
            | AssetError::Io { path, .. }
            | AssetError::Json { path, .. }
            | AssetError::Image { path, .. } => path,
        };

        let shown = match path.strip_prefix(base) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path.file_name().map(PathBuf::from).unwrap_or_default(),
        };
        *path = shown;
        self
    }
}

/// Outcome of loading one asset.
#[derive(Debug, Clone)]
pub enum Asset<T> {
    Loaded(T),
    /// The asset could not be loaded; the string is shown to the viewer.
    Missing(String),
}

impl<T> Asset<T> {
    /// Convert a load result. The full error is logged; the viewer-facing
    /// reason names the path relative to `content_dir`.
    pub fn from_result(kind: &str, result: Result<T, AssetError>, content_dir: &Path) -> Self {
        match result {
            Ok(value) => Asset::Loaded(value),
            Err(e) => {
                tracing::warn!("{} unavailable: {}", kind, e);
                Asset::Missing(e.relative_to(content_dir).to_string())
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Asset::Loaded(_))
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            Asset::Loaded(v) => Some(v),
            Asset::Missing(_) => None,
        }
    }
}
