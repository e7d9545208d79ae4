//! Create a new blog post or project

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::ContentType;
use crate::Folio;

/// Create a new draft entry and return its path.
///
/// The slug defaults to the slugified title. Existing files are never
/// overwritten.
pub fn create_entry(
    folio: &Folio,
    kind: ContentType,
    title: &str,
    slug: Option<&str>,
) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => slug::slugify(s),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from {:?}", title);
    }

    let target_dir = folio.dir_for(kind);
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let title_yaml = serde_yaml::to_string(title)?;
    let title_yaml = title_yaml.trim_end();

    let content = match kind {
        ContentType::Blog => format!(
            r#"---
title: {title}
excerpt: ''
author: {author}
status: draft
publishedAt: "{today}"
tags: []
featuredImage:
---

"#,
            title = title_yaml,
            author = serde_yaml::to_string(&folio.config.author)?.trim_end(),
            today = today,
        ),
        ContentType::Projects => format!(
            r#"---
title: {title}
excerpt: ''
status: draft
publishedAt: "{today}"
techStack: []
githubUrl:
liveUrl:
projectType:
projectStatus: active
thumbnailImage:
---

"#,
            title = title_yaml,
            today = today,
        ),
    };

    fs::write(&file_path, content)?;
    tracing::info!("Created {} entry {:?}", kind, file_path);

    Ok(file_path)
}
