//! List helpers: ordering, tag counts and pagination for content listings

use indexmap::IndexMap;
use serde::Serialize;

use super::date::parse_date_string;
use crate::content::ContentEntity;

/// Sort entities newest first by `publishedAt`.
///
/// The sort is stable; entities without a parsable date keep their relative
/// order and go last.
pub fn sort_by_published_desc<T: ContentEntity>(items: &mut [T]) {
    items.sort_by_cached_key(|item| {
        std::cmp::Reverse(item.published_at().and_then(parse_date_string))
    });
}

/// Count tags across entities, in first-seen order
pub fn tag_counts<T: ContentEntity>(items: &[T]) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for item in items {
        for tag in item.keywords() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Entities carrying `tag`, compared case-insensitively
pub fn filter_by_tag<T: ContentEntity>(items: Vec<T>, tag: &str) -> Vec<T> {
    let tag = tag.trim().to_lowercase();
    items
        .into_iter()
        .filter(|item| item.keywords().iter().any(|t| t.to_lowercase() == tag))
        .collect()
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Cut one page out of `items`. Page numbers start at 1; page 0 is treated
/// as 1 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        page,
        per_page,
        total_pages,
        total_items,
        has_prev: page > 1 && total_pages > 0,
        has_next: page < total_pages,
    }
}
