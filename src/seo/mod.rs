//! SEO metadata for pages, blog posts and projects
//!
//! [`SeoMetadata`] carries everything a page head needs: title, description,
//! canonical URL, Open Graph and Twitter card values and a JSON-LD document.
//! [`SeoMetadata::to_html`] renders it as escaped tags.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::config::SiteConfig;
use crate::content::{BlogPost, ContentEntity, ContentItem, Project};
use crate::helpers::{
    absolute_url, entity_path, full_url_for, html_escape, iso_date, link_rel, meta_name,
    meta_property, plain_text_excerpt,
};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Head metadata for one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub site_name: String,
    pub locale: String,
    /// Open Graph type: `article` or `website`
    pub og_type: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub keywords: Vec<String>,
    pub twitter_card: String,
    pub twitter_site: Option<String>,
    pub json_ld: Value,
}

impl SeoMetadata {
    /// Metadata for a static page such as `/about/`
    pub fn for_page(config: &SiteConfig, path: &str, title: &str, description: Option<&str>) -> Self {
        let mut meta = Self::base(config, path, title);
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            meta.description = description.to_string();
        }

        meta.json_ld = json!({
            "@context": SCHEMA_CONTEXT,
            "@type": "WebPage",
            "name": meta.title,
            "description": meta.description,
            "url": meta.canonical_url,
        });
        meta
    }

    /// Metadata for a blog post, as an article
    pub fn for_blog_post(config: &SiteConfig, post: &BlogPost) -> Self {
        let mut meta = Self::for_entity(config, post);
        meta.og_type = "article".to_string();

        let mut ld = Self::entity_ld(&meta, "BlogPosting");
        ld.insert("headline".to_string(), json!(post.title));
        ld.insert("mainEntityOfPage".to_string(), json!(meta.canonical_url));
        if let Some(published) = &meta.published_time {
            ld.insert("datePublished".to_string(), json!(published));
        }
        if let Some(modified) = &meta.modified_time {
            ld.insert("dateModified".to_string(), json!(modified));
        }
        if let Some(author) = &meta.author {
            ld.insert(
                "author".to_string(),
                json!({ "@type": "Person", "name": author }),
            );
        }
        ld.insert(
            "publisher".to_string(),
            json!({ "@type": "Person", "name": config.author }),
        );
        meta.json_ld = Value::Object(ld);
        meta
    }

    /// Metadata for a project write-up
    pub fn for_project(config: &SiteConfig, project: &Project) -> Self {
        let mut meta = Self::for_entity(config, project);

        let schema_type = if project.github_url.is_some() {
            "SoftwareSourceCode"
        } else {
            "CreativeWork"
        };
        let mut ld = Self::entity_ld(&meta, schema_type);
        if let Some(repo) = &project.github_url {
            ld.insert("codeRepository".to_string(), json!(repo));
            if !project.tech_stack.is_empty() {
                ld.insert("programmingLanguage".to_string(), json!(project.tech_stack));
            }
        }
        if let Some(live) = &project.live_url {
            ld.insert("sameAs".to_string(), json!(live));
        }
        if let Some(author) = &meta.author {
            ld.insert(
                "creator".to_string(),
                json!({ "@type": "Person", "name": author }),
            );
        }
        meta.json_ld = Value::Object(ld);
        meta
    }

    /// Metadata for either kind of entity
    pub fn for_item(config: &SiteConfig, item: &ContentItem) -> Self {
        match item {
            ContentItem::Blog(post) => Self::for_blog_post(config, post),
            ContentItem::Project(project) => Self::for_project(config, project),
        }
    }

    fn base(config: &SiteConfig, path: &str, title: &str) -> Self {
        let image = config
            .default_image
            .as_deref()
            .map(|image| absolute_url(config, image));

        Self {
            title: page_title(title, &config.title),
            description: config.description.clone(),
            canonical_url: full_url_for(config, path),
            site_name: config.title.clone(),
            locale: config.language.clone(),
            og_type: "website".to_string(),
            twitter_card: twitter_card(image.is_some()),
            image,
            author: Some(config.author.clone()).filter(|a| !a.is_empty()),
            published_time: None,
            modified_time: None,
            keywords: Vec::new(),
            twitter_site: config.twitter.clone(),
            json_ld: Value::Null,
        }
    }

    fn for_entity<T: ContentEntity>(config: &SiteConfig, entity: &T) -> Self {
        let path = entity_path(config, T::KIND, entity.slug());
        let mut meta = Self::base(config, &path, entity.title());

        let description = entity
            .excerpt()
            .filter(|e| !e.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| plain_text_excerpt(entity.body(), config.excerpt_length));
        if !description.is_empty() {
            meta.description = description;
        }

        if let Some(image) = entity.image() {
            meta.image = Some(absolute_url(config, image));
            meta.twitter_card = twitter_card(true);
        }
        if let Some(author) = entity.author().filter(|a| !a.is_empty()) {
            meta.author = Some(author.to_string());
        }
        meta.published_time = entity.published_at().map(iso_date);
        meta.modified_time = entity.updated_at().map(iso_date);
        meta.keywords = entity.keywords().to_vec();
        meta
    }

    fn entity_ld(meta: &SeoMetadata, schema_type: &str) -> Map<String, Value> {
        let mut ld = Map::new();
        ld.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
        ld.insert("@type".to_string(), json!(schema_type));
        ld.insert("name".to_string(), json!(meta.title));
        ld.insert("description".to_string(), json!(meta.description));
        ld.insert("url".to_string(), json!(meta.canonical_url));
        if let Some(image) = &meta.image {
            ld.insert("image".to_string(), json!(image));
        }
        if !meta.keywords.is_empty() {
            ld.insert("keywords".to_string(), json!(meta.keywords.join(", ")));
        }
        ld
    }

    /// Render as HTML head tags
    pub fn to_html(&self) -> String {
        let mut tags = vec![
            format!("<title>{}</title>", html_escape(&self.title)),
            meta_name("description", &self.description),
        ];
        if !self.keywords.is_empty() {
            tags.push(meta_name("keywords", &self.keywords.join(", ")));
        }
        if let Some(author) = &self.author {
            tags.push(meta_name("author", author));
        }
        tags.push(link_rel("canonical", &self.canonical_url));

        tags.push(meta_property("og:title", &self.title));
        tags.push(meta_property("og:description", &self.description));
        tags.push(meta_property("og:type", &self.og_type));
        tags.push(meta_property("og:url", &self.canonical_url));
        tags.push(meta_property("og:site_name", &self.site_name));
        if !self.locale.is_empty() {
            tags.push(meta_property("og:locale", &self.locale));
        }
        if let Some(image) = &self.image {
            tags.push(meta_property("og:image", image));
        }
        if self.og_type == "article" {
            if let Some(published) = &self.published_time {
                tags.push(meta_property("article:published_time", published));
            }
            if let Some(modified) = &self.modified_time {
                tags.push(meta_property("article:modified_time", modified));
            }
            for tag in &self.keywords {
                tags.push(meta_property("article:tag", tag));
            }
        }

        tags.push(meta_name("twitter:card", &self.twitter_card));
        if let Some(site) = &self.twitter_site {
            tags.push(meta_name("twitter:site", site));
        }
        tags.push(meta_name("twitter:title", &self.title));
        tags.push(meta_name("twitter:description", &self.description));
        if let Some(image) = &self.image {
            tags.push(meta_name("twitter:image", image));
        }

        if !self.json_ld.is_null() {
            // `</` would end the script element early
            let ld = self.json_ld.to_string().replace("</", "<\\/");
            tags.push(format!(
                r#"<script type="application/ld+json">{}</script>"#,
                ld
            ));
        }

        tags.join("\n")
    }
}

fn page_title(title: &str, site_title: &str) -> String {
    let title = title.trim();
    if title.is_empty() || title == site_title {
        site_title.to_string()
    } else {
        format!("{} | {}", title, site_title)
    }
}

fn twitter_card(has_image: bool) -> String {
    if has_image {
        "summary_large_image".to_string()
    } else {
        "summary".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStatus;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Jane Doe".to_string(),
            description: "Software engineer".to_string(),
            author: "Jane Doe".to_string(),
            url: "https://jane.dev".to_string(),
            twitter: Some("@jane".to_string()),
            ..SiteConfig::default()
        }
    }

    fn post() -> BlogPost {
        BlogPost {
            slug: "hello-world".to_string(),
            title: "Hello".to_string(),
            excerpt: Some("A first post".to_string()),
            content: "Body text".to_string(),
            status: Some(ContentStatus::Published),
            tags: vec!["rust".to_string(), "web".to_string()],
            featured_image: Some("/images/hello.jpg".to_string()),
            published_at: Some("2024-06-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_blog_post_metadata() {
        let meta = SeoMetadata::for_blog_post(&config(), &post());
        assert_eq!(meta.title, "Hello | Jane Doe");
        assert_eq!(meta.description, "A first post");
        assert_eq!(meta.canonical_url, "https://jane.dev/blog/hello-world/");
        assert_eq!(meta.og_type, "article");
        assert_eq!(
            meta.image.as_deref(),
            Some("https://jane.dev/images/hello.jpg")
        );
        assert_eq!(meta.twitter_card, "summary_large_image");
        assert_eq!(
            meta.published_time.as_deref(),
            Some("2024-06-01T00:00:00.000Z")
        );
        assert_eq!(meta.author.as_deref(), Some("Jane Doe"));
        assert_eq!(meta.json_ld["@type"], "BlogPosting");
        assert_eq!(meta.json_ld["headline"], "Hello");
        assert_eq!(meta.json_ld["keywords"], "rust, web");
        assert_eq!(meta.json_ld["datePublished"], "2024-06-01T00:00:00.000Z");
    }

    #[test]
    fn test_description_falls_back_to_body() {
        let mut post = post();
        post.excerpt = None;
        post.content = "# Heading\n\nThe **real** intro paragraph.".to_string();
        let meta = SeoMetadata::for_blog_post(&config(), &post);
        assert_eq!(meta.description, "Heading The real intro paragraph.");

        post.content = String::new();
        let meta = SeoMetadata::for_blog_post(&config(), &post);
        assert_eq!(meta.description, "Software engineer");
    }

    #[test]
    fn test_project_metadata() {
        let project = Project {
            slug: "folio".to_string(),
            title: "Folio".to_string(),
            excerpt: Some("Content backend".to_string()),
            tech_stack: vec!["Rust".to_string(), "Axum".to_string()],
            github_url: Some("https://github.com/jane/folio".to_string()),
            thumbnail_image: Some("https://cdn.jane.dev/folio.png".to_string()),
            ..Default::default()
        };
        let meta = SeoMetadata::for_project(&config(), &project);
        assert_eq!(meta.og_type, "website");
        assert_eq!(meta.canonical_url, "https://jane.dev/projects/folio/");
        assert_eq!(meta.image.as_deref(), Some("https://cdn.jane.dev/folio.png"));
        assert_eq!(meta.keywords, vec!["Rust", "Axum"]);
        assert_eq!(meta.json_ld["@type"], "SoftwareSourceCode");
        assert_eq!(meta.json_ld["codeRepository"], "https://github.com/jane/folio");
        assert_eq!(meta.json_ld["programmingLanguage"][1], "Axum");
    }

    #[test]
    fn test_page_metadata() {
        let meta = SeoMetadata::for_page(&config(), "/about/", "About", None);
        assert_eq!(meta.title, "About | Jane Doe");
        assert_eq!(meta.description, "Software engineer");
        assert_eq!(meta.canonical_url, "https://jane.dev/about/");
        assert_eq!(meta.twitter_card, "summary");
        assert_eq!(meta.json_ld["@type"], "WebPage");

        let home = SeoMetadata::for_page(&config(), "/", "", Some("Welcome"));
        assert_eq!(home.title, "Jane Doe");
        assert_eq!(home.description, "Welcome");
    }

    #[test]
    fn test_to_html_escapes_and_includes_article_tags() {
        let mut post = post();
        post.title = "Tom & Jerry </script>".to_string();
        let html = SeoMetadata::for_blog_post(&config(), &post).to_html();

        assert!(html.contains("<title>Tom &amp; Jerry &lt;/script&gt; | Jane Doe</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://jane.dev/blog/hello-world/">"#));
        assert!(html.contains(r#"<meta property="article:tag" content="rust">"#));
        assert!(html.contains(r#"<meta name="twitter:site" content="@jane">"#));
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(!html.contains("Jerry </script>"));
    }
}
