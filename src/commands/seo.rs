//! Print SEO head tags for an entry

use anyhow::Result;

use crate::content::ContentType;
use crate::seo::SeoMetadata;
use crate::Folio;

/// Print the meta tags for one entry
pub fn run(folio: &Folio, kind: ContentType, slug: &str) -> Result<()> {
    let Some(item) = folio.reader().get_content_by_slug(kind, slug) else {
        anyhow::bail!("No {} entry with slug '{}'", kind, slug);
    };

    let meta = SeoMetadata::for_item(&folio.config, &item);
    println!("{}", meta.to_html());
    Ok(())
}
