//! Loading the profile, resume, photo and project images from disk.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use super::{Asset, AssetError};
use crate::animation::AnimationFetcher;
use crate::config::Settings;
use crate::content::{default_projects, parse_projects, Profile, Project};

/// Resume bytes as read from disk.
#[derive(Debug, Clone)]
pub struct Resume {
    pub bytes: Vec<u8>,
}

/// A project card together with its image load outcome.
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub project: Project,
    /// Resolved on-disk path of the image.
    pub image_path: PathBuf,
    pub image: Asset<Vec<u8>>,
}

/// Everything one render needs, loaded fresh for each request.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_title: String,
    pub profile: Asset<Profile>,
    pub resume: Asset<Resume>,
    pub photo: Asset<DynamicImage>,
    pub projects: Vec<ProjectEntry>,
    /// Lottie descriptor; `None` when the fetch did not succeed.
    pub animation: Option<serde_json::Value>,
}

impl PageContext {
    /// Load every asset and fetch the animation descriptor.
    pub async fn load(settings: &Settings, fetcher: &AnimationFetcher) -> Self {
        let (profile, resume, photo, projects, animation) = tokio::join!(
            load_profile(&settings.profile_path),
            load_resume(&settings.resume_path),
            load_photo(&settings.photo_path),
            load_project_entries(settings),
            fetcher.fetch(&settings.animation_url),
        );

        Self {
            site_title: settings.site_title.clone(),
            profile: Asset::from_result("profile", profile, &settings.content_dir),
            resume: Asset::from_result("resume", resume, &settings.content_dir),
            photo: Asset::from_result("photo", photo, &settings.content_dir),
            projects,
            animation,
        }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, AssetError> {
    tokio::fs::read(path)
        .await
        .map_err(|e| AssetError::from_io(path.to_path_buf(), e))
}

/// Read and parse the profile record.
pub async fn load_profile(path: &Path) -> Result<Profile, AssetError> {
    let bytes = read_file(path).await?;
    Profile::from_json(&String::from_utf8_lossy(&bytes)).map_err(|source| AssetError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the resume PDF.
pub async fn load_resume(path: &Path) -> Result<Resume, AssetError> {
    let bytes = read_file(path).await?;
    Ok(Resume { bytes })
}

/// Read and decode the profile photo.
pub async fn load_photo(path: &Path) -> Result<DynamicImage, AssetError> {
    let bytes = read_file(path).await?;
    image::load_from_memory(&bytes).map_err(|source| AssetError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a project image. The bytes are embedded as-is.
pub async fn load_project_image(path: &Path) -> Result<Vec<u8>, AssetError> {
    read_file(path).await
}

/// Project list from `projects_path`, or the built-in list when that file
/// does not exist. A file that exists but does not parse is an error.
pub async fn load_projects(path: &Path) -> Result<Vec<Project>, AssetError> {
    match read_file(path).await {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            parse_projects(&text).map_err(|source| AssetError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
        Err(e) if e.is_not_found() => Ok(default_projects()),
        Err(e) => Err(e),
    }
}

async fn load_project_entries(settings: &Settings) -> Vec<ProjectEntry> {
    let projects = match load_projects(&settings.projects_path).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::warn!("Falling back to built-in projects: {}", e);
            default_projects()
        }
    };

    let mut entries = Vec::with_capacity(projects.len());
    for project in projects {
        let image_path = settings.content_path(&project.image);
        let image = Asset::from_result(
            "project image",
            load_project_image(&image_path).await,
            &settings.content_dir,
        );
        entries.push(ProjectEntry {
            project,
            image_path,
            image,
        });
    }
    entries
}
