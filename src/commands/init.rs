//! Initialize a new content site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: Portfolio
description: ''
author: John Doe
language: en
twitter:
default_image:

# URL
url: http://example.com
root: /

# Directory
content_dir: content
blog_dir: blog
projects_dir: projects

# Listing
per_page: 10
words_per_minute: 200
excerpt_length: 160

# Shown by the blog API when content/blog has no published posts
fallback:
  categories: []
  posts: []
"#;

const SAMPLE_PROJECT: &str = r#"---
title: Portfolio Site
excerpt: The site you are looking at.
status: draft
techStack:
  - Rust
githubUrl:
liveUrl:
projectType: web
projectStatus: active
---

Describe the project here.
"#;

/// Initialize a new site in the given directory.
///
/// An existing configuration file is left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("content/projects"))?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    // Create sample content
    let hello_path = target_dir.join("content/blog/hello-world.md");
    if !hello_path.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d");
        let sample_post = format!(
            r#"---
title: Hello World
excerpt: The first post on this site.
author: John Doe
status: published
publishedAt: "{}"
tags:
  - meta
---

Welcome! Posts live in `content/blog` and projects in `content/projects`.
Run `folio new blog "My Post"` to start another one.
"#,
            today
        );
        fs::write(hello_path, sample_post)?;
    }

    let project_path = target_dir.join("content/projects/portfolio-site.md");
    if !project_path.exists() {
        fs::write(project_path, SAMPLE_PROJECT)?;
    }

    Ok(())
}
