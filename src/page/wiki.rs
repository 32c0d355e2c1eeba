use crate::crawler::{fetch_page, PageClient};
use crate::page::markers;
use crate::page::text::{raw_text, require};
use crate::page::{extract_common, extract_infobox, extract_toc, PageRecord};
use crate::{CrawlError, ExtractError};
use scraper::Html;

/// Parses an already-fetched article page
///
/// # Errors
///
/// [`ExtractError::MissingElement`] if the title, current date, entry title or
/// table of contents is absent. A missing infobox is not an error.
pub fn parse_wiki_page(url: &str, html: &str) -> Result<PageRecord, ExtractError> {
    let document = Html::parse_document(html);
    let common = extract_common(&document, url)?;

    let entry_title = raw_text(require(
        document.root_element(),
        markers::ENTRY_TITLE,
        "entry title",
    )?);

    Ok(PageRecord {
        entry_title: Some(entry_title),
        infobox: extract_infobox(&document)?,
        toc: extract_toc(&document)?,
        ..PageRecord::from_common(url, common)
    })
}

/// Fetches and parses an article page
pub async fn extract_wiki_page<C: PageClient>(
    client: &C,
    url: &str,
) -> Result<PageRecord, CrawlError> {
    let body = fetch_page(client, url).await?;
    parse_wiki_page(url, &body).map_err(|source| CrawlError::Extract {
        url: url.to_string(),
        source,
    })
}
