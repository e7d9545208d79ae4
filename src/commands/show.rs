//! Show a single entry by slug

use anyhow::Result;

use crate::content::ContentType;
use crate::Folio;

/// Print one entry as pretty JSON, whatever its status
pub fn run(folio: &Folio, kind: ContentType, slug: &str) -> Result<()> {
    let Some(item) = folio.reader().get_content_by_slug(kind, slug) else {
        anyhow::bail!("No {} entry with slug '{}'", kind, slug);
    };

    if !item.is_published() {
        tracing::info!("'{}' is not published", slug);
    }

    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
