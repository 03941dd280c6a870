//! Configuration for the portfolio server.
//!
//! Settings are resolved in layers: built-in defaults, an optional config file
//! (TOML, YAML or JSON by extension), `FOLIO_*` environment variables, and
//! finally CLI flags applied by the caller.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name `prefer` searches for (`folio.toml`, `folio.yaml`, ...) when no
/// config file is given.
pub const CONFIG_NAME: &str = "folio";

/// Lottie animation shown next to the interests list.
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets10.lottiefiles.com/packages/lf20_O2ci8jA9QF.json";

/// Default bind address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid animation URL {url:?}: {source}")]
    AnimationUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Resolved runtime settings. All paths are absolute or relative to the
/// process working directory.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory project image paths are resolved against.
    pub content_dir: PathBuf,
    /// Profile record (JSON).
    pub profile_path: PathBuf,
    /// Optional project list replacing the built-in one.
    pub projects_path: PathBuf,
    /// Resume PDF.
    pub resume_path: PathBuf,
    /// Filename offered to the browser when the resume is downloaded.
    pub resume_download_name: String,
    /// Profile photo.
    pub photo_path: PathBuf,
    /// Remote lottie animation descriptor.
    pub animation_url: String,
    /// Timeout for the animation fetch. `None` waits indefinitely.
    pub animation_timeout: Option<Duration>,
    /// Page title used when the profile has no name.
    pub site_title: String,
    /// Address `serve` binds to.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_content_dir(PathBuf::from("."))
    }
}

impl Settings {
    /// Default layout rooted at `content_dir`.
    pub fn with_content_dir(content_dir: PathBuf) -> Self {
        Self {
            profile_path: content_dir.join("assets/data.json"),
            projects_path: content_dir.join("assets/projects.json"),
            resume_path: content_dir.join("assets/resume.pdf"),
            resume_download_name: "resume.pdf".to_string(),
            photo_path: content_dir.join("images/self.jpeg"),
            animation_url: DEFAULT_ANIMATION_URL.to_string(),
            animation_timeout: None,
            site_title: "Portfolio".to_string(),
            bind: DEFAULT_BIND.to_string(),
            content_dir,
        }
    }

    /// Resolve a content-relative path (used for project images).
    pub fn content_path(&self, relative: &str) -> PathBuf {
        resolve_path(relative, &self.content_dir)
    }

    /// Check that values which cannot be checked by serde are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.animation_url).map_err(|source| ConfigError::AnimationUrl {
            url: self.animation_url.clone(),
            source,
        })?;
        Ok(())
    }
}

/// On-disk configuration. Every field is optional; unset fields keep the
/// defaults derived from `content_dir`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content_dir: Option<String>,
    pub profile: Option<String>,
    pub projects: Option<String>,
    pub resume: Option<String>,
    pub resume_download_name: Option<String>,
    pub photo: Option<String>,
    pub animation_url: Option<String>,
    pub animation_timeout_secs: Option<u64>,
    pub site_title: Option<String>,
    pub bind: Option<String>,

    /// Path the config was loaded from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let mut config: Config = match ext {
            "json" => serde_json::from_str(&contents).map_err(|e| parse_err(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).map_err(|e| parse_err(e.to_string()))?
            }
            _ => toml::from_str(&contents).map_err(|e| parse_err(e.to_string()))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Discover the config file: explicit path first, then the standard
    /// locations searched by prefer. Finding nothing is not an error.
    pub async fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => match pref_config.source_path() {
                Some(path) => Self::load_from_path(path),
                None => Ok(Self::default()),
            },
            // No config file found
            Err(_) => Ok(Self::default()),
        }
    }

    /// Overlay `FOLIO_*` environment variables.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = env_var("FOLIO_CONTENT_DIR") {
            self.content_dir = Some(dir);
        }
        if let Some(bind) = env_var("FOLIO_BIND") {
            self.bind = Some(bind);
        }
        if let Some(url) = env_var("FOLIO_ANIMATION_URL") {
            self.animation_url = Some(url);
        }
        self
    }

    /// Directory relative paths in this config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Build settings. Asset paths not set explicitly follow `content_dir`.
    pub fn into_settings(self) -> Settings {
        let base_dir = self.base_dir();
        let content_dir = self
            .content_dir
            .as_deref()
            .map(|dir| resolve_path(dir, &base_dir))
            .unwrap_or_else(|| base_dir.clone());

        let mut settings = Settings::with_content_dir(content_dir);

        if let Some(ref p) = self.profile {
            settings.profile_path = resolve_path(p, &settings.content_dir);
        }
        settings.projects_path = match self.projects {
            Some(ref p) => resolve_path(p, &settings.content_dir),
            None => settings
                .profile_path
                .parent()
                .map(|dir| dir.join("projects.json"))
                .unwrap_or_else(|| PathBuf::from("projects.json")),
        };
        if let Some(ref p) = self.resume {
            settings.resume_path = resolve_path(p, &settings.content_dir);
        }
        if let Some(ref p) = self.photo {
            settings.photo_path = resolve_path(p, &settings.content_dir);
        }
        if let Some(name) = self.resume_download_name {
            settings.resume_download_name = name;
        }
        if let Some(url) = self.animation_url {
            settings.animation_url = url;
        }
        settings.animation_timeout = self.animation_timeout_secs.map(Duration::from_secs);
        if let Some(title) = self.site_title {
            settings.site_title = title;
        }
        if let Some(bind) = self.bind {
            settings.bind = bind;
        }

        settings
    }
}

/// Load settings from the config file (if any), the environment, and an
/// optional content directory given on the command line.
pub async fn load_settings(
    config_path: Option<&Path>,
    content_dir: Option<&Path>,
) -> Result<Settings, ConfigError> {
    let mut config = Config::discover(config_path).await?.with_env_overrides();
    if let Some(dir) = content_dir {
        let cwd = std::env::current_dir().unwrap_or_default();
        let dir = resolve_path(&dir.to_string_lossy(), &cwd);
        config.content_dir = Some(dir.to_string_lossy().into_owned());
    }
    let settings = config.into_settings();
    settings.validate()?;
    Ok(settings)
}

/// Resolve a path that may be relative.
/// - Paths starting with ~ are expanded
/// - Absolute paths are returned as-is
/// - Relative paths are joined onto `base_dir`
pub fn resolve_path(path_str: &str, base_dir: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(path_str);
    let path = Path::new(expanded.as_ref());

    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_follow_content_dir() {
        let settings = Settings::with_content_dir(PathBuf::from("/srv/site"));
        assert_eq!(
            settings.profile_path,
            PathBuf::from("/srv/site/assets/data.json")
        );
        assert_eq!(
            settings.photo_path,
            PathBuf::from("/srv/site/images/self.jpeg")
        );
        assert_eq!(settings.animation_url, DEFAULT_ANIMATION_URL);
        assert!(settings.animation_timeout.is_none());
    }

    #[test]
    fn test_load_toml_resolves_relative_to_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            r#"
content_dir = "site"
resume = "cv/me.pdf"
resume_download_name = "jane_doe.pdf"
animation_timeout_secs = 5
"#,
        )
        .unwrap();

        let settings = Config::load_from_path(&path).unwrap().into_settings();
        assert_eq!(settings.content_dir, dir.path().join("site"));
        assert_eq!(settings.resume_path, dir.path().join("site/cv/me.pdf"));
        assert_eq!(settings.resume_download_name, "jane_doe.pdf");
        assert_eq!(settings.animation_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_load_yaml_and_json() {
        let dir = tempdir().unwrap();

        let yaml = dir.path().join("folio.yaml");
        std::fs::write(&yaml, "site_title: Jane\nbind: \"0.0.0.0:8080\"\n").unwrap();
        let settings = Config::load_from_path(&yaml).unwrap().into_settings();
        assert_eq!(settings.site_title, "Jane");
        assert_eq!(settings.bind, "0.0.0.0:8080");

        let json = dir.path().join("folio.json");
        std::fs::write(&json, r#"{"photo": "/abs/me.jpg"}"#).unwrap();
        let settings = Config::load_from_path(&json).unwrap().into_settings();
        assert_eq!(settings.photo_path, PathBuf::from("/abs/me.jpg"));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "content_dir = [").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_validate_rejects_bad_animation_url() {
        let mut settings = Settings::default();
        settings.animation_url = "not a url".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::AnimationUrl { .. })
        ));
    }

    #[test]
    fn test_projects_follow_profile_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "profile = \"/data/me/profile.json\"\n").unwrap();

        let settings = Config::load_from_path(&path).unwrap().into_settings();
        assert_eq!(settings.profile_path, PathBuf::from("/data/me/profile.json"));
        assert_eq!(settings.projects_path, PathBuf::from("/data/me/projects.json"));

        std::fs::write(
            &path,
            "profile = \"/data/me/profile.json\"\nprojects = \"work.json\"\n",
        )
        .unwrap();
        let settings = Config::load_from_path(&path).unwrap().into_settings();
        assert_eq!(settings.projects_path, dir.path().join("work.json"));
    }

    /// Serializes tests that mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 3] = ["FOLIO_CONTENT_DIR", "FOLIO_BIND", "FOLIO_ANIMATION_URL"];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("FOLIO_CONTENT_DIR", "/env/site");
        std::env::set_var("FOLIO_BIND", "0.0.0.0:9000");
        std::env::set_var("FOLIO_ANIMATION_URL", "https://example.com/anim.json");

        let config = Config::default().with_env_overrides();
        clear_env();

        assert_eq!(config.content_dir.as_deref(), Some("/env/site"));
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(
            config.animation_url.as_deref(),
            Some("https://example.com/anim.json")
        );

        let settings = config.into_settings();
        assert_eq!(settings.profile_path, PathBuf::from("/env/site/assets/data.json"));
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("FOLIO_BIND", "");

        let config = Config {
            bind: Some("127.0.0.1:4000".to_string()),
            ..Default::default()
        }
        .with_env_overrides();
        clear_env();

        assert_eq!(config.bind.as_deref(), Some("127.0.0.1:4000"));
    }

    #[tokio::test]
    async fn test_load_settings_layer_order() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "content_dir = \"from-file\"\nbind = \"127.0.0.1:4000\"\n").unwrap();

        // File only
        let settings = load_settings(Some(&path), None).await.unwrap();
        assert_eq!(settings.content_dir, dir.path().join("from-file"));
        assert_eq!(settings.bind, "127.0.0.1:4000");

        // Env beats file
        std::env::set_var("FOLIO_CONTENT_DIR", "/from-env");
        std::env::set_var("FOLIO_BIND", "0.0.0.0:5000");
        let settings = load_settings(Some(&path), None).await.unwrap();
        assert_eq!(settings.content_dir, PathBuf::from("/from-env"));
        assert_eq!(settings.bind, "0.0.0.0:5000");

        // Command line beats env
        let settings = load_settings(Some(&path), Some(Path::new("/from-cli")))
            .await
            .unwrap();
        clear_env();
        assert_eq!(settings.content_dir, PathBuf::from("/from-cli"));
        assert_eq!(settings.bind, "0.0.0.0:5000");
    }

    #[tokio::test]
    async fn test_load_settings_rejects_bad_env_animation_url() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "site_title = \"Jane\"\n").unwrap();

        std::env::set_var("FOLIO_ANIMATION_URL", "not a url");
        let result = load_settings(Some(&path), None).await;
        clear_env();

        assert!(matches!(result, Err(ConfigError::AnimationUrl { .. })));
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/base");
        assert_eq!(resolve_path("/abs", base), PathBuf::from("/abs"));
        assert_eq!(resolve_path("rel/x", base), PathBuf::from("/base/rel/x"));
    }
}
