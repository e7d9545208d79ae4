//! Content reader - loads blog posts and projects from the content directory

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::entity::{ContentEntity, ContentType};
use super::error::SkipReason;
use super::{BlogPost, FrontMatter, Project};
use crate::Folio;

/// Either kind of entity, for callers that pick the type at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Blog(BlogPost),
    Project(Project),
}

impl ContentItem {
    pub fn kind(&self) -> ContentType {
        match self {
            ContentItem::Blog(_) => ContentType::Blog,
            ContentItem::Project(_) => ContentType::Projects,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ContentItem::Blog(post) => post.slug(),
            ContentItem::Project(project) => project.slug(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Blog(post) => post.title(),
            ContentItem::Project(project) => project.title(),
        }
    }

    pub fn published_at(&self) -> Option<&str> {
        match self {
            ContentItem::Blog(post) => post.published_at(),
            ContentItem::Project(project) => project.published_at(),
        }
    }

    pub fn is_published(&self) -> bool {
        match self {
            ContentItem::Blog(post) => post.is_published(),
            ContentItem::Project(project) => project.is_published(),
        }
    }
}

impl From<BlogPost> for ContentItem {
    fn from(post: BlogPost) -> Self {
        ContentItem::Blog(post)
    }
}

impl From<Project> for ContentItem {
    fn from(project: Project) -> Self {
        ContentItem::Project(project)
    }
}

/// Outcome of loading one markdown file during a scan
#[derive(Debug)]
pub struct ScanEntry<T> {
    pub path: PathBuf,
    pub outcome: Result<T, SkipReason>,
}

/// Every `.md` file found in a content directory, in enumeration order,
/// with what became of it
#[derive(Debug)]
pub struct ScanReport<T> {
    pub dir: PathBuf,
    pub entries: Vec<ScanEntry<T>>,
}

impl<T: ContentEntity> ScanReport<T> {
    fn empty(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Entities that parsed, regardless of status
    pub fn loaded(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().ok())
    }

    /// Files that could not be turned into an entity
    pub fn skipped(&self) -> impl Iterator<Item = &SkipReason> {
        self.entries.iter().filter_map(|e| e.outcome.as_ref().err())
    }

    /// Keep only published entities, preserving order
    pub fn into_published(self) -> Vec<T> {
        self.entries
            .into_iter()
            .filter_map(|entry| entry.outcome.ok())
            .filter(|item| {
                if item.is_published() {
                    return true;
                }
                tracing::debug!(
                    "Excluding {} '{}' with status {:?}",
                    T::KIND,
                    item.slug(),
                    item.status().map(|s| s.as_str())
                );
                false
            })
            .collect()
    }
}

/// Reads markdown content for each [`ContentType`] from its directory.
///
/// The reader only holds paths: every call re-reads the filesystem and
/// returns freshly allocated entities.
#[derive(Debug, Clone)]
pub struct ContentReader {
    blog_dir: PathBuf,
    projects_dir: PathBuf,
}

impl ContentReader {
    /// Create a reader for a site's configured directories
    pub fn new(folio: &Folio) -> Self {
        Self {
            blog_dir: folio.blog_dir(),
            projects_dir: folio.projects_dir(),
        }
    }

    /// Create a reader for `<content_dir>/blog` and `<content_dir>/projects`
    pub fn from_content_dir<P: AsRef<Path>>(content_dir: P) -> Self {
        let content_dir = content_dir.as_ref();
        Self {
            blog_dir: content_dir.join(ContentType::Blog.as_str()),
            projects_dir: content_dir.join(ContentType::Projects.as_str()),
        }
    }

    /// Directory holding content of the given type
    pub fn dir_for(&self, kind: ContentType) -> &Path {
        match kind {
            ContentType::Blog => &self.blog_dir,
            ContentType::Projects => &self.projects_dir,
        }
    }

    /// Published entities of a type, in filesystem order
    pub fn list_content(&self, kind: ContentType) -> Vec<ContentItem> {
        match kind {
            ContentType::Blog => self.list::<BlogPost>().into_iter().map(Into::into).collect(),
            ContentType::Projects => self.list::<Project>().into_iter().map(Into::into).collect(),
        }
    }

    /// One entity by slug, whatever its status
    pub fn get_content_by_slug(&self, kind: ContentType, slug: &str) -> Option<ContentItem> {
        match kind {
            ContentType::Blog => self.get_by_slug::<BlogPost>(slug).map(Into::into),
            ContentType::Projects => self.get_by_slug::<Project>(slug).map(Into::into),
        }
    }

    /// Published entities of type `T`, in filesystem order
    pub fn list<T: ContentEntity>(&self) -> Vec<T> {
        self.scan::<T>().into_published()
    }

    /// Load `<dir>/<slug>.md` without any status filtering.
    ///
    /// Returns `None` when the file is missing or cannot be parsed.
    pub fn get_by_slug<T: ContentEntity>(&self, slug: &str) -> Option<T> {
        if !is_valid_slug(slug) {
            tracing::debug!("Rejecting {} slug {:?}", T::KIND, slug);
            return None;
        }

        let path = self.dir_for(T::KIND).join(format!("{}.md", slug));
        if !path.is_file() {
            tracing::debug!("No {} entry at {:?}", T::KIND, path);
            return None;
        }

        match load_file::<T>(&path) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Load every `.md` file of type `T`, keeping per-file outcomes
    pub fn scan<T: ContentEntity>(&self) -> ScanReport<T> {
        let dir = self.dir_for(T::KIND);
        if !dir.is_dir() {
            tracing::warn!("Content directory {:?} does not exist", dir);
            return ScanReport::empty(dir);
        }

        let mut report = ScanReport::empty(dir);

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read content directory {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let outcome = load_file::<T>(path);
            if let Err(e) = &outcome {
                tracing::warn!("Skipping {}", e);
            }
            report.entries.push(ScanEntry {
                path: path.to_path_buf(),
                outcome,
            });
        }

        report
    }
}

/// Read and parse a single markdown file
pub fn load_file<T: ContentEntity>(path: &Path) -> Result<T, SkipReason> {
    let text = fs::read_to_string(path).map_err(|source| SkipReason::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) = FrontMatter::parse(&text).map_err(|source| SkipReason::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let default_slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    entity_from_record(fm.data, &default_slug, body).map_err(|source| SkipReason::Shape {
        path: path.to_path_buf(),
        kind: T::KIND,
        source,
    })
}

/// Build an entity from a front-matter record and its markdown body.
///
/// An explicit `slug` in the record wins over `default_slug`; the body always
/// replaces any `content` key.
pub fn entity_from_record<T: ContentEntity>(
    mut record: Mapping,
    default_slug: &str,
    body: &str,
) -> Result<T, serde_yaml::Error> {
    let has_slug = matches!(
        record.get("slug"),
        Some(Value::String(s)) if !s.trim().is_empty()
    );
    if !has_slug {
        record.insert(Value::from("slug"), Value::from(default_slug));
    }
    record.insert(Value::from("content"), Value::from(body));

    T::reconcile(&mut record);

    serde_yaml::from_value(Value::Mapping(record))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}

/// A slug must name a file directly inside the type directory
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\', '\0'])
}
