//! List published content

use anyhow::Result;

use crate::content::{BlogPost, ContentEntity, ContentType, Project};
use crate::helpers::{estimate_reading_time, short_date, sort_by_published_desc};
use crate::Folio;

/// One printable line per entity, newest first
pub fn listing_lines<T: ContentEntity>(mut items: Vec<T>, words_per_minute: usize) -> Vec<String> {
    sort_by_published_desc(&mut items);
    items
        .iter()
        .map(|item| {
            let title = if item.title().is_empty() {
                "(untitled)"
            } else {
                item.title()
            };
            let reading = match item.reading_time() {
                Some(authored) => authored.to_string(),
                None => format!(
                    "~{} min read",
                    estimate_reading_time(item.body(), words_per_minute)
                ),
            };
            let keywords = if item.keywords().is_empty() {
                String::new()
            } else {
                format!(" [{}]", item.keywords().join(", "))
            };
            format!(
                "{}  {:<30} {} ({}){}",
                short_date(item.published_at()),
                item.slug(),
                title,
                reading,
                keywords
            )
        })
        .collect()
}

/// List published content by type
pub fn run(folio: &Folio, kind: ContentType) -> Result<()> {
    let reader = folio.reader();
    let wpm = folio.config.words_per_minute;

    let lines = match kind {
        ContentType::Blog => listing_lines(reader.list::<BlogPost>(), wpm),
        ContentType::Projects => listing_lines(reader.list::<Project>(), wpm),
    };

    println!("{} ({}):", kind, lines.len());
    for line in lines {
        println!("  {}", line);
    }

    Ok(())
}
