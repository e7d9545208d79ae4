//! folio: markdown content backend for a portfolio and blog site
//!
//! Blog posts and project write-ups live as markdown files with YAML
//! front-matter under a `content/` directory. This crate reads them into
//! typed entities, reconciles legacy front-matter field names, builds SEO
//! metadata, and serves everything as JSON for the site's development mode.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod seo;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentType;

/// Configuration file name at the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// A portfolio site on disk
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Directory holding blog posts
    pub fn blog_dir(&self) -> PathBuf {
        self.content_dir.join(&self.config.blog_dir)
    }

    /// Directory holding project write-ups
    pub fn projects_dir(&self) -> PathBuf {
        self.content_dir.join(&self.config.projects_dir)
    }

    /// Directory for a content type
    pub fn dir_for(&self, kind: ContentType) -> PathBuf {
        match kind {
            ContentType::Blog => self.blog_dir(),
            ContentType::Projects => self.projects_dir(),
        }
    }

    /// Reader over this site's content directories
    pub fn reader(&self) -> content::ContentReader {
        content::ContentReader::new(self)
    }
}
