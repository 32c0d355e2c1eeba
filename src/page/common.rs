use crate::links::{link_from_element, LinkRecord};
use crate::page::markers;
use crate::page::text::{find_all, raw_text, require};
use crate::url::UrlParts;
use crate::ExtractError;
use scraper::{ElementRef, Html};
use url::Url;

/// Fields every page variant carries
#[derive(Debug, Clone, PartialEq)]
pub struct CommonFields {
    pub parts: UrlParts,
    pub page_title: String,
    pub page_date: String,
    pub links: Vec<LinkRecord>,
}

/// Extracts the fields shared by article and main pages
///
/// # Errors
///
/// [`ExtractError::MissingElement`] if the `<title>` or the current-date
/// marker (or its `datetime` attribute) is absent.
pub fn extract_common(document: &Html, url: &str) -> Result<CommonFields, ExtractError> {
    let parsed = Url::parse(url)?;
    let root = document.root_element();

    let page_title = raw_text(require(root, markers::PAGE_TITLE, "page title")?);

    let page_date = require(root, markers::CURRENT_DATE, "current date")?
        .value()
        .attr(markers::CURRENT_DATE_ATTR)
        .ok_or(ExtractError::MissingElement("current date datetime attribute"))?
        .to_string();

    Ok(CommonFields {
        parts: UrlParts::from_url(&parsed),
        page_title,
        page_date,
        links: extract_links(root)?,
    })
}

/// Classifies every anchor under `scope`, in document order
pub fn extract_links(scope: ElementRef<'_>) -> Result<Vec<LinkRecord>, ExtractError> {
    find_all(scope, markers::ANCHOR)?
        .into_iter()
        .map(link_from_element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkType;
    use crate::page::fixtures::wiki_page;

    #[test]
    fn test_common_fields() {
        let html = wiki_page("Physics", r#"<p><a href="/wiki/2049-10-01/Energy">Energy</a></p>"#);
        let document = Html::parse_document(&html);
        let common =
            extract_common(&document, "https://omnipedia.app/wiki/2049-10-01/Physics").unwrap();

        assert_eq!(common.parts.scheme, "https");
        assert_eq!(common.parts.host, "omnipedia.app");
        assert_eq!(common.parts.path, "/wiki/2049-10-01/Physics");
        assert_eq!(common.page_title, "Physics | Omnipedia");
        assert_eq!(common.page_date, "2049-10-01");
    }

    #[test]
    fn test_links_in_document_order() {
        let html = wiki_page("Physics", r#"<p><a href="/wiki/2049-10-01/Energy">Energy</a></p>"#);
        let document = Html::parse_document(&html);
        let common = extract_common(&document, "https://omnipedia.app/wiki/Physics").unwrap();

        let types: Vec<LinkType> = common.links.iter().map(|l| l.link_type).collect();
        assert_eq!(
            types,
            vec![LinkType::SiteNav, LinkType::PageNav, LinkType::WikiPageLink]
        );
        assert_eq!(common.links[2].link_text, "Energy");
    }

    #[test]
    fn test_missing_title() {
        let html = r#"<html><body><time class="omnipedia-current-date" datetime="2049-10-01"></time></body></html>"#;
        let document = Html::parse_document(html);
        let result = extract_common(&document, "https://omnipedia.app/");
        assert!(matches!(result, Err(ExtractError::MissingElement("page title"))));
    }

    #[test]
    fn test_missing_date() {
        let html = r#"<html><head><title>T</title></head><body></body></html>"#;
        let document = Html::parse_document(html);
        let result = extract_common(&document, "https://omnipedia.app/");
        assert!(matches!(result, Err(ExtractError::MissingElement("current date"))));
    }

    #[test]
    fn test_missing_datetime_attribute() {
        let html = r#"<html><head><title>T</title></head><body><time class="omnipedia-current-date">today</time></body></html>"#;
        let document = Html::parse_document(html);
        let result = extract_common(&document, "https://omnipedia.app/");
        assert!(matches!(
            result,
            Err(ExtractError::MissingElement("current date datetime attribute"))
        ));
    }

    #[test]
    fn test_invalid_url() {
        let document = Html::parse_document(&wiki_page("Physics", ""));
        let result = extract_common(&document, "/wiki/Physics");
        assert!(matches!(result, Err(ExtractError::InvalidUrl(_))));
    }
}
