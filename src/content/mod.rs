//! Content module - blog posts, projects, and the markdown reader

mod entity;
mod error;
mod frontmatter;
mod post;
mod project;
pub mod reader;
pub mod reconcile;

pub use entity::{ContentEntity, ContentStatus, ContentType, ReadingTime, UnknownContentType};
pub use error::SkipReason;
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::BlogPost;
pub use project::Project;
pub use reader::{ContentItem, ContentReader, ScanEntry, ScanReport};
