//! Content model: the profile record, the project list and the interests.
//!
//! The profile comes from a JSON record on disk where every key is optional.
//! The project list ships as a built-in JSON document and can be replaced by a
//! `projects.json` file next to the profile record.

use serde::{Deserialize, Deserializer, Serialize};

/// Built-in project list.
const DEFAULT_PROJECTS: &str = include_str!("projects.json");

/// Built-in interests, used when the profile record does not list any.
const DEFAULT_INTERESTS: &[&str] = &[
    "Django web development and creating CRUD operations.",
    "Backend development using Django REST Framework.",
    "Designing and developing RESTful APIs.",
    "Working with databases like MySQL, Snowflake.",
    "Exploring machine learning projects and applications.",
    "Enjoying nature through solo hikes and photography.",
];

/// Profile record. Missing keys deserialize to empty strings, and so does a
/// key whose value is not text (`null`, an object, ...), so one bad key never
/// costs the rest of the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub header: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub about_me: String,
    #[serde(deserialize_with = "lenient_string")]
    pub github: String,
    #[serde(deserialize_with = "lenient_string")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient_string")]
    pub instagram: String,
    #[serde(deserialize_with = "lenient_string")]
    pub leetcode: String,
    /// Overrides the built-in interests when non-empty.
    #[serde(deserialize_with = "lenient_string_list")]
    pub interests: Vec<String>,
}

/// Strings pass through, numbers and booleans are written out, anything else
/// becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(serde_json::Value::deserialize(deserializer)?))
}

/// Keeps the text entries of an array; any other value yields an empty list.
fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .map(value_to_string)
            .filter(|s| !s.is_empty())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

impl Profile {
    /// Parse a profile record from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Name shown in the photo overlay.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Name"
        } else {
            &self.name
        }
    }

    /// Social link cells, in display order.
    pub fn social_links(&self) -> [&str; 4] {
        [
            self.github.as_str(),
            self.linkedin.as_str(),
            self.instagram.as_str(),
            self.leetcode.as_str(),
        ]
    }

    /// Interests to list, falling back to the built-in ones.
    pub fn interests(&self) -> Vec<String> {
        if self.interests.is_empty() {
            DEFAULT_INTERESTS.iter().map(|s| s.to_string()).collect()
        } else {
            self.interests.clone()
        }
    }
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Image path, relative to the content directory.
    pub image: String,
    pub title: String,
    pub description: ProjectDescription,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDescription {
    pub summary: String,
    pub highlights: Vec<String>,
    pub technologies: String,
}

/// Parse a project list from JSON text.
pub fn parse_projects(text: &str) -> serde_json::Result<Vec<Project>> {
    serde_json::from_str(text)
}

/// The project list compiled into the binary.
pub fn default_projects() -> Vec<Project> {
    parse_projects(DEFAULT_PROJECTS).unwrap_or_else(|e| {
        tracing::error!("Built-in project list is invalid: {}", e);
        Vec::new()
    })
}
