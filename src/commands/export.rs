//! Export published content as a single JSON document

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::{BlogPost, ContentReader, Project};
use crate::helpers::sort_by_published_desc;
use crate::Folio;

/// All published content, newest first, in the GraphQL-compatible shape
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub blog: Vec<BlogPost>,
    pub projects: Vec<Project>,
}

impl ExportDocument {
    pub fn collect(reader: &ContentReader) -> Self {
        let mut blog = reader.list::<BlogPost>();
        let mut projects = reader.list::<Project>();
        sort_by_published_desc(&mut blog);
        sort_by_published_desc(&mut projects);
        Self { blog, projects }
    }
}

/// Write the export to `output`, or stdout when none is given
pub fn run(folio: &Folio, output: Option<&Path>) -> Result<()> {
    let document = ExportDocument::collect(&folio.reader());
    let json = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!(
                "Exported {} posts and {} projects to {:?}",
                document.blog.len(),
                document.projects.len(),
                path
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_published_content() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();
        fs::create_dir_all(folio.blog_dir()).unwrap();
        fs::write(
            folio.blog_dir().join("a.md"),
            "---\ntitle: A\nstatus: published\ndateModified: 2024-02-02\n---\nA",
        )
        .unwrap();
        fs::write(folio.blog_dir().join("b.md"), "---\ntitle: B\n---\nB").unwrap();

        let out = tmp.path().join("out/content.json");
        run(&folio, Some(out.as_path())).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["blog"].as_array().unwrap().len(), 1);
        assert_eq!(json["blog"][0]["slug"], "a");
        assert_eq!(json["blog"][0]["updatedAt"], "2024-02-02");
        assert_eq!(json["projects"].as_array().unwrap().len(), 0);
    }
}
