//! Project showcase model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entity::{ContentEntity, ContentStatus, ContentType};
use super::frontmatter::{opt_scalar_string, scalar_string, string_or_vec};

/// A showcased project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "opt_scalar_string")]
    pub id: Option<String>,
    pub slug: String,
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub excerpt: Option<String>,
    /// Raw markdown body
    pub content: String,
    pub status: Option<ContentStatus>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub author: Option<String>,

    /// Technologies used, in authored order
    #[serde(deserialize_with = "string_or_vec")]
    pub tech_stack: Vec<String>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub live_url: Option<String>,
    /// e.g. "web", "cli", "library"
    #[serde(deserialize_with = "opt_scalar_string")]
    pub project_type: Option<String>,
    /// Lifecycle of the project itself ("active", "archived"), unrelated to
    /// publication `status`
    #[serde(deserialize_with = "opt_scalar_string")]
    pub project_status: Option<String>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub thumbnail_image: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub content_image: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub featured_image: Option<String>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "opt_scalar_string")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl ContentEntity for Project {
    const KIND: ContentType = ContentType::Projects;

    fn slug(&self) -> &str {
        &self.slug
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn body(&self) -> &str {
        &self.content
    }

    fn status(&self) -> Option<&ContentStatus> {
        self.status.as_ref()
    }

    fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    fn image(&self) -> Option<&str> {
        self.featured_image
            .as_deref()
            .or(self.thumbnail_image.as_deref())
            .or(self.content_image.as_deref())
    }

    fn keywords(&self) -> &[String] {
        &self.tech_stack
    }
}
