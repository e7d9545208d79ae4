//! Front-matter parsing

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

/// Reasons a front-matter block cannot be read
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("front-matter block is not closed by a `---` line")]
    Unterminated,

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front-matter must be a mapping of keys to values")]
    NotAMapping,
}

/// Front-matter of a markdown file, kept as a loosely-typed record so that
/// field reconciliation can run before typed deserialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };

        // The opening delimiter must be a line of its own; `----` or
        // `--- text` is markdown, not front-matter.
        let Some(newline) = rest.find('\n') else {
            return if rest.trim().is_empty() {
                Err(FrontMatterError::Unterminated)
            } else {
                Ok((FrontMatter::default(), content))
            };
        };
        if !rest[..newline].trim().is_empty() {
            return Ok((FrontMatter::default(), content));
        }

        let yaml_start = newline + 1;
        let mut offset = yaml_start;
        for line in rest[yaml_start..].split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml = &rest[yaml_start..offset];
                let body = rest[offset + line.len()..].trim_start_matches(['\n', '\r']);
                return Ok((Self::parse_yaml(yaml)?, body));
            }
            offset += line.len();
        }

        Err(FrontMatterError::Unterminated)
    }

    fn parse_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(data) => Ok(FrontMatter { data }),
            // A block holding only comments
            Value::Null => Ok(FrontMatter::default()),
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    /// String value of a key, ignoring nulls and non-string scalars
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }
}

/// Custom deserializer that handles both a single string and a list of strings
pub(crate) fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<Value>()? {
                if let Some(s) = scalar_to_string(item) {
                    vec.push(s);
                }
            }
            Ok(vec)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Render a YAML scalar as text; null and nested values yield `None`
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        _ => None,
    }
}

/// Deserialize an optional scalar as a string.
///
/// Dates are usually quoted or plain ISO strings, but a bare year or a
/// timestamp written as a number must not make the whole file unreadable.
pub(crate) fn opt_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

/// Deserialize a required text field; a blank value reads as `""` and a
/// number or boolean as its YAML spelling.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    opt_scalar_string(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
datePublished: 2024-01-15
tags:
  - rust
  - web
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Hello World"));
        assert_eq!(fm.get_str("datePublished"), Some("2024-01-15"));
        assert_eq!(body, "This is the content.\n");
    }

    #[test]
    fn test_no_frontmatter_is_all_body() {
        let content = "# Just markdown\n\nNo metadata here.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_horizontal_rule_is_not_frontmatter() {
        let content = "----\n\nA post starting with a rule.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_comment_only_frontmatter() {
        let (fm, body) = FrontMatter::parse("---\n# nothing yet\n---\nBody").unwrap();
        assert!(fm.data.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_closing_delimiter_must_be_whole_line() {
        let content = "---\ntitle: Rules\n---\nBody\n\n---\nMore body";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Rules"));
        assert_eq!(body, "Body\n\n---\nMore body");
    }

    #[test]
    fn test_unterminated_frontmatter_is_an_error() {
        let err = FrontMatter::parse("---\ntitle: Oops\n\nBody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let err = FrontMatter::parse("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }

    #[test]
    fn test_non_mapping_yaml_is_an_error() {
        let err = FrontMatter::parse("---\n- a\n- b\n---\nBody").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping));
    }

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(deserialize_with = "string_or_vec", default)]
        tags: Vec<String>,
        #[serde(deserialize_with = "opt_scalar_string", default)]
        date: Option<String>,
        #[serde(deserialize_with = "scalar_string", default)]
        title: String,
    }

    #[test]
    fn test_single_string_tags() {
        let tagged: Tagged = serde_yaml::from_str("tags: Notes").unwrap();
        assert_eq!(tagged.tags, vec!["Notes"]);

        let tagged: Tagged = serde_yaml::from_str("tags: [a, b]").unwrap();
        assert_eq!(tagged.tags, vec!["a", "b"]);

        let tagged: Tagged = serde_yaml::from_str("tags:").unwrap();
        assert!(tagged.tags.is_empty());
    }

    #[test]
    fn test_numeric_date_becomes_string() {
        let tagged: Tagged = serde_yaml::from_str("date: 2024").unwrap();
        assert_eq!(tagged.date.as_deref(), Some("2024"));

        let tagged: Tagged = serde_yaml::from_str("date: ~").unwrap();
        assert_eq!(tagged.date, None);
    }

    #[test]
    fn test_scalar_tags_become_strings() {
        let tagged: Tagged = serde_yaml::from_str("tags: [2024, rust, true, ~]").unwrap();
        assert_eq!(tagged.tags, vec!["2024", "rust", "true"]);

        let tagged: Tagged = serde_yaml::from_str("tags: 2024").unwrap();
        assert_eq!(tagged.tags, vec!["2024"]);
    }

    #[test]
    fn test_blank_or_numeric_title() {
        let tagged: Tagged = serde_yaml::from_str("title:").unwrap();
        assert_eq!(tagged.title, "");

        let tagged: Tagged = serde_yaml::from_str("title: 1984").unwrap();
        assert_eq!(tagged.title, "1984");

        let tagged: Tagged = serde_yaml::from_str("title: Dune").unwrap();
        assert_eq!(tagged.title, "Dune");
    }
}
