//! Field reconciliation between the legacy and current frontmatter schemas.
//!
//! Older posts were written with `datePublished`/`dateModified`/`image`,
//! newer ones with `publishedAt`/`updatedAt`/`featuredImage` (the names the
//! GraphQL contract uses). After reconciliation both names carry the same
//! value, whichever one the file used.

use serde_yaml::{Mapping, Value};

/// One row of the alias table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub legacy: &'static str,
    pub canonical: &'static str,
    /// Lower values are consulted first when filling a canonical field
    pub priority: u8,
}

/// Alias table for blog posts
pub const BLOG_ALIASES: &[FieldAlias] = &[
    FieldAlias {
        legacy: "datePublished",
        canonical: "publishedAt",
        priority: 0,
    },
    FieldAlias {
        legacy: "dateModified",
        canonical: "updatedAt",
        priority: 0,
    },
    FieldAlias {
        legacy: "publishDate",
        canonical: "publishedAt",
        priority: 1,
    },
    FieldAlias {
        legacy: "image",
        canonical: "featuredImage",
        priority: 0,
    },
];

/// Apply an alias table to a frontmatter record.
///
/// First every canonical field still missing is filled from its aliases in
/// priority order, then every alias still missing is filled from its
/// canonical field. Null values count as missing.
pub fn reconcile_aliases(record: &mut Mapping, table: &[FieldAlias]) {
    let mut rows: Vec<&FieldAlias> = table.iter().collect();
    rows.sort_by_key(|row| row.priority);

    for row in &rows {
        if present(record, row.canonical) {
            continue;
        }
        if let Some(value) = get(record, row.legacy).cloned() {
            record.insert(Value::from(row.canonical), value);
        }
    }

    for row in &rows {
        if present(record, row.legacy) {
            continue;
        }
        if let Some(value) = get(record, row.canonical).cloned() {
            record.insert(Value::from(row.legacy), value);
        }
    }
}

/// Default `id` to the slug when the record has none
pub fn default_id(record: &mut Mapping) {
    if present(record, "id") {
        return;
    }
    if let Some(slug) = get(record, "slug").cloned() {
        record.insert(Value::from("id"), slug);
    }
}

fn get<'a>(record: &'a Mapping, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

fn present(record: &Mapping, key: &str) -> bool {
    get(record, key).is_some()
}
