//! Per-file failures of the content reader

use std::io;
use std::path::{Path, PathBuf};

use super::entity::ContentType;
use super::frontmatter::FrontMatterError;

/// Why a markdown file was left out of a scan.
///
/// These never reach callers of `list_content`/`get_content_by_slug`; they
/// are logged and kept in [`ScanReport`](super::reader::ScanReport) for
/// auditing.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed front-matter in {}: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("front-matter in {} does not fit a {kind} entry: {source}", .path.display())]
    Shape {
        path: PathBuf,
        kind: ContentType,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SkipReason {
    /// File the failure belongs to
    pub fn path(&self) -> &Path {
        match self {
            SkipReason::Read { path, .. }
            | SkipReason::FrontMatter { path, .. }
            | SkipReason::Shape { path, .. } => path,
        }
    }
}
