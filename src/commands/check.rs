//! Audit every content file and report the ones the reader skips

use anyhow::Result;

use crate::content::{BlogPost, ContentEntity, ContentReader, ContentType, Project};
use crate::Folio;

/// Counts from scanning one content type
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub published: usize,
    pub unpublished: usize,
    pub skipped: usize,
    /// Human-readable problems, one per skipped file
    pub problems: Vec<String>,
}

/// Scan one content type
pub fn check_kind<T: ContentEntity>(reader: &ContentReader) -> CheckSummary {
    let report = reader.scan::<T>();
    let mut summary = CheckSummary::default();

    for item in report.loaded() {
        if item.is_published() {
            summary.published += 1;
        } else {
            summary.unpublished += 1;
        }
    }
    for reason in report.skipped() {
        summary.skipped += 1;
        summary.problems.push(reason.to_string());
    }

    summary
}

/// Check one content type, or all of them
pub fn run(folio: &Folio, kind: Option<ContentType>) -> Result<()> {
    let reader = folio.reader();
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => ContentType::ALL.to_vec(),
    };

    let mut total_skipped = 0;
    for kind in kinds {
        let summary = match kind {
            ContentType::Blog => check_kind::<BlogPost>(&reader),
            ContentType::Projects => check_kind::<Project>(&reader),
        };

        println!(
            "{}: {} published, {} unpublished, {} skipped ({:?})",
            kind,
            summary.published,
            summary.unpublished,
            summary.skipped,
            reader.dir_for(kind)
        );
        for problem in &summary.problems {
            println!("  ✗ {}", problem);
        }
        total_skipped += summary.skipped;
    }

    if total_skipped > 0 {
        anyhow::bail!("{} file(s) could not be read", total_skipped);
    }
    Ok(())
}
