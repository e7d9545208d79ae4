//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::reader::entity_from_record;
use crate::content::BlogPost;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// Twitter/X handle used in card metadata, e.g. `@me`
    pub twitter: Option<String>,
    /// Social preview image for pages without one of their own
    pub default_image: Option<String>,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub blog_dir: String,
    pub projects_dir: String,

    // Listing
    pub per_page: usize,
    pub words_per_minute: usize,
    pub excerpt_length: usize,

    // Empty-state placeholders
    #[serde(default)]
    pub fallback: FallbackContent,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),
            twitter: None,
            default_image: None,

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            blog_dir: "blog".to_string(),
            projects_dir: "projects".to_string(),

            per_page: 10,
            words_per_minute: 200,
            excerpt_length: 160,

            fallback: FallbackContent::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig =
            serde_yaml::from_str(&content).with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }
}

/// Placeholder content for the presentation layer to show when the content
/// directory yields nothing. The reader never consults it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackContent {
    /// Blog post records, in either frontmatter schema
    pub posts: Vec<Mapping>,
    pub categories: Vec<String>,
}

impl FallbackContent {
    /// Fallback posts normalized like posts read from disk.
    ///
    /// Records without a slug get one from their title; records that do not
    /// fit the post shape are logged and dropped.
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        self.posts
            .iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let title = record.get("title").and_then(Value::as_str).unwrap_or("");
                let default_slug = if title.is_empty() {
                    format!("fallback-{}", i + 1)
                } else {
                    slug::slugify(title)
                };
                let body = record
                    .get("content")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();

                match entity_from_record::<BlogPost>(record.clone(), &default_slug, &body) {
                    Ok(post) => Some(post),
                    Err(e) => {
                        tracing::warn!("Ignoring fallback post #{}: {}", i + 1, e);
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.projects_dir, "projects");
        assert_eq!(config.per_page, 10);
        assert!(config.fallback.posts.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
author: Test User
url: https://me.dev
content_dir: site-content
per_page: 5
analytics_id: UA-1
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.url, "https://me.dev");
        assert_eq!(config.content_dir, "site-content");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.per_page, 5);
        assert!(config.extra.contains_key("analytics_id"));
    }

    #[test]
    fn test_fallback_posts_are_normalized() {
        let yaml = r#"
fallback:
  categories: [Engineering, Life]
  posts:
    - title: Coming Soon
      excerpt: Posts are on their way
      datePublished: "2024-01-01"
      status: published
    - slug: welcome
      title: Welcome
      publishedAt: "2024-02-01"
      content: Hello there
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fallback.categories, vec!["Engineering", "Life"]);

        let posts = config.fallback.blog_posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "coming-soon");
        assert_eq!(posts[0].published_at.as_deref(), Some("2024-01-01"));
        assert_eq!(posts[1].slug, "welcome");
        assert_eq!(posts[1].id.as_deref(), Some("welcome"));
        assert_eq!(posts[1].date_published.as_deref(), Some("2024-02-01"));
        assert_eq!(posts[1].content, "Hello there");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(SiteConfig::load(tmp.path().join("_config.yml")).is_err());
    }
}
