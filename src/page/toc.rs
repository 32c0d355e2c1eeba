use crate::page::markers;
use crate::page::text::{find_all, raw_text, require};
use crate::ExtractError;
use scraper::Html;
use std::collections::BTreeMap;

/// Section heading text → in-page anchor
pub type TocRecord = BTreeMap<String, String>;

/// Extracts the table of contents
///
/// Anchors without an `href` are skipped. When two headings share the same
/// text, the later one wins.
///
/// # Errors
///
/// [`ExtractError::MissingElement`] if the page has no table-of-contents block.
pub fn extract_toc(document: &Html) -> Result<TocRecord, ExtractError> {
    let toc = require(
        document.root_element(),
        markers::TABLE_OF_CONTENTS,
        "table of contents",
    )?;

    let mut record = TocRecord::new();
    for link in find_all(toc, markers::ANCHOR)? {
        if let Some(href) = link.value().attr("href") {
            record.insert(raw_text(link), href.to_string());
        }
    }

    Ok(record)
}
