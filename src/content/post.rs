//! Blog post model

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

use super::entity::{ContentEntity, ContentStatus, ContentType, ReadingTime};
use super::frontmatter::{opt_scalar_string, scalar_string, string_or_vec};
use super::reconcile::{default_id, reconcile_aliases, BLOG_ALIASES};

/// A blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    /// Stable identifier, defaults to the slug
    #[serde(deserialize_with = "opt_scalar_string")]
    pub id: Option<String>,

    /// Slug (URL-friendly name)
    pub slug: String,

    /// Post title
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,

    /// Short summary shown in listings
    #[serde(deserialize_with = "opt_scalar_string")]
    pub excerpt: Option<String>,

    /// Raw markdown body
    pub content: String,

    /// Publication status
    pub status: Option<ContentStatus>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub author: Option<String>,

    /// Post tags, in authored order
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,

    pub reading_time: Option<ReadingTime>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub featured_image: Option<String>,

    /// Legacy name of `featured_image`
    #[serde(deserialize_with = "opt_scalar_string")]
    pub image: Option<String>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub published_at: Option<String>,

    #[serde(deserialize_with = "opt_scalar_string")]
    pub updated_at: Option<String>,

    /// Legacy name of `published_at`
    #[serde(deserialize_with = "opt_scalar_string")]
    pub date_published: Option<String>,

    /// Legacy name of `updated_at`
    #[serde(deserialize_with = "opt_scalar_string")]
    pub date_modified: Option<String>,

    /// Oldest name of `published_at`
    #[serde(deserialize_with = "opt_scalar_string")]
    pub publish_date: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl ContentEntity for BlogPost {
    const KIND: ContentType = ContentType::Blog;

    fn reconcile(record: &mut Mapping) {
        reconcile_aliases(record, BLOG_ALIASES);
        default_id(record);
    }

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
        self.featured_image.as_deref()
    }

    fn keywords(&self) -> &[String] {
        &self.tags
    }

    fn reading_time(&self) -> Option<&ReadingTime> {
        self.reading_time.as_ref()
    }
}
