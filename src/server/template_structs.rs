//! Askama template structs for the portfolio page.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Conversion from a loaded [`PageContext`] happens here so the templates
//! only see display-ready values.

use askama::Template;

use crate::assets::{Asset, PageContext, ProjectEntry};
use crate::content::Profile;
use crate::encoder::{bytes_to_data_uri, image_to_data_uri};
use crate::utils::{format_size, parse_markdown_link, safe_link, script_json};

/// Route the resume download is served from.
pub const RESUME_HREF: &str = "/resume";

/// One cell in the "Connect with me" row.
pub struct SocialCell {
    pub text: String,
    pub url: Option<String>,
}

impl SocialCell {
    pub fn new(raw: &str) -> Self {
        match parse_markdown_link(raw) {
            Some(link) => Self {
                text: link.label,
                url: Some(link.url),
            },
            None => Self {
                text: raw.to_string(),
                url: None,
            },
        }
    }
}

/// Resume download action.
pub struct ResumeLink {
    pub href: &'static str,
    pub size_str: String,
}

/// One project card.
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
    pub highlights: Vec<String>,
    pub technologies: String,
    /// `None` when the configured link is not an http(s) or mailto URL.
    pub link: Option<String>,
    pub image_uri: Option<String>,
    pub image_error: Option<String>,
}

impl ProjectCard {
    pub fn from_entry(entry: &ProjectEntry) -> Self {
        let project = &entry.project;
        let (image_uri, image_error) = match &entry.image {
            Asset::Loaded(bytes) => (Some(bytes_to_data_uri(&entry.image_path, bytes)), None),
            Asset::Missing(_) => (
                None,
                Some(format!("Image file not found: {}", project.image)),
            ),
        };

        Self {
            title: project.title.clone(),
            summary: project.description.summary.clone(),
            highlights: project.description.highlights.clone(),
            technologies: project.description.technologies.clone(),
            link: safe_link(&project.link),
            image_uri,
            image_error,
        }
    }
}

/// The whole portfolio page.
#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub page_title: String,
    pub warnings: Vec<String>,
    pub photo_uri: Option<String>,
    pub display_name: String,
    pub header: String,
    pub title: String,
    pub about_me: String,
    pub resume: Option<ResumeLink>,
    pub social_links: Vec<SocialCell>,
    pub interests: Vec<String>,
    pub animation_json: Option<String>,
    pub projects: Vec<ProjectCard>,
}

impl PortfolioTemplate {
    pub fn from_context(ctx: &PageContext) -> Self {
        let mut warnings = Vec::new();

        let default_profile = Profile::default();
        let profile = match &ctx.profile {
            Asset::Loaded(profile) => profile,
            Asset::Missing(reason) => {
                warnings.push(format!("Profile data not available: {}", reason));
                &default_profile
            }
        };

        let photo_uri = match &ctx.photo {
            Asset::Loaded(img) => match image_to_data_uri(img) {
                Ok(uri) => Some(uri),
                Err(e) => {
                    tracing::warn!("Failed to encode profile photo: {}", e);
                    warnings.push(format!("Image could not be displayed: {}", e));
                    None
                }
            },
            Asset::Missing(reason) => {
                warnings.push(format!("Image file not available: {}", reason));
                None
            }
        };

        let resume = match &ctx.resume {
            Asset::Loaded(resume) => Some(ResumeLink {
                href: RESUME_HREF,
                size_str: format_size(resume.bytes.len() as u64),
            }),
            Asset::Missing(reason) => {
                warnings.push(format!("Resume not available: {}", reason));
                None
            }
        };

        let page_title = if profile.name.is_empty() {
            ctx.site_title.clone()
        } else {
            profile.name.clone()
        };

        Self {
            page_title,
            warnings,
            photo_uri,
            display_name: profile.display_name().to_string(),
            header: profile.header.clone(),
            title: profile.title.clone(),
            about_me: profile.about_me.clone(),
            resume,
            social_links: profile
                .social_links()
                .into_iter()
                .map(SocialCell::new)
                .collect(),
            interests: profile.interests(),
            animation_json: ctx.animation.as_ref().map(script_json),
            projects: ctx.projects.iter().map(ProjectCard::from_entry).collect(),
        }
    }
}
