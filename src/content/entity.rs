//! Shared content vocabulary: content types, publication status and the
//! [`ContentEntity`] trait implemented by blog posts and projects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kinds of content stored under the content directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Projects,
}

impl ContentType {
    /// All content types, in display order
    pub const ALL: [ContentType; 2] = [ContentType::Blog, ContentType::Projects];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Projects => "projects",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown content type: {0} (expected blog or projects)")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blog" | "post" | "posts" => Ok(ContentType::Blog),
            "projects" | "project" => Ok(ContentType::Projects),
            _ => Err(UnknownContentType(s.to_string())),
        }
    }
}

/// Publication status of an entity.
///
/// Comparison is case-insensitive: `Published`, `PUBLISHED` and `published`
/// all map to [`ContentStatus::Published`]. Unrecognised values are kept
/// verbatim and never count as published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    Published,
    Other(String),
}

impl ContentStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, ContentStatus::Published)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Other(s) => s,
        }
    }
}

impl From<&str> for ContentStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "published" => ContentStatus::Published,
            "draft" => ContentStatus::Draft,
            _ => ContentStatus::Other(value.to_string()),
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match serde_yaml::Value::deserialize(deserializer)? {
            serde_yaml::Value::String(s) => Ok(ContentStatus::from(s.as_str())),
            serde_yaml::Value::Number(n) => Ok(ContentStatus::Other(n.to_string())),
            serde_yaml::Value::Bool(b) => Ok(ContentStatus::Other(b.to_string())),
            _ => Err(D::Error::custom("status must be a single value")),
        }
    }
}

/// Reading time as authored: a number of minutes or free text such as
/// `"5 min read"`. Whole minutes stay integers when serialized again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingTime {
    Minutes(u64),
    FractionalMinutes(f64),
    Text(String),
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingTime::Minutes(m) => write!(f, "{} min read", m),
            ReadingTime::FractionalMinutes(m) => write!(f, "{} min read", m),
            ReadingTime::Text(s) => f.write_str(s),
        }
    }
}

/// Behaviour common to every entity the content reader produces
pub trait ContentEntity: DeserializeOwned + Serialize + Clone + Send + 'static {
    /// Directory/type tag this entity is loaded from
    const KIND: ContentType;

    /// Normalize the raw frontmatter record before it is deserialized.
    ///
    /// `record` already carries the resolved `slug` and the `content` body.
    fn reconcile(_record: &mut serde_yaml::Mapping) {}

    fn slug(&self) -> &str;
    fn title(&self) -> &str;
    fn excerpt(&self) -> Option<&str>;
    fn body(&self) -> &str;
    fn status(&self) -> Option<&ContentStatus>;
    fn published_at(&self) -> Option<&str>;
    fn updated_at(&self) -> Option<&str>;
    fn author(&self) -> Option<&str>;
    /// Preview image, if any
    fn image(&self) -> Option<&str>;
    /// Tags for posts, tech stack for projects
    fn keywords(&self) -> &[String];

    /// Reading time as authored, if the entity carries one
    fn reading_time(&self) -> Option<&ReadingTime> {
        None
    }

    /// Whether list views should show this entity
    fn is_published(&self) -> bool {
        self.status().map(ContentStatus::is_published).unwrap_or(false)
    }
}
