use crate::links::{classify_link, parse_flag, LinkType};
use crate::page::text::collapsed_text;
use crate::ExtractError;
use scraper::ElementRef;
use serde::Serialize;
use std::collections::BTreeSet;

const WIKIMEDIA_MARKER_ATTR: &str = "data-is-wikimedia-link";
const WIKIMEDIA_TITLE_ATTR: &str = "data-omnipedia-attached-data-title";
const WIKIMEDIA_CONTENT_ATTR: &str = "data-original-title";
const WIKIMEDIA_CONTENT_FORMATTED_ATTR: &str = "data-omnipedia-attached-data-content";

/// A single classified anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    /// Anchor text, with text nodes trimmed and joined by single spaces
    pub link_text: String,

    /// Raw `href`, if the anchor has one
    pub url: Option<String>,

    /// Classes from the `class` attribute (empty when absent)
    pub css_classes: BTreeSet<String>,

    /// Hover-preview data, present only on Wikimedia links
    pub wikimedia_data: Option<WikimediaData>,

    #[serde(rename = "type")]
    pub link_type: LinkType,
}

/// Hover-preview metadata attached to a Wikimedia link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WikimediaData {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_formatted: Option<String>,
}

impl LinkRecord {
    /// Builds a record from raw attributes and classifies it
    pub fn new(
        link_text: impl Into<String>,
        url: Option<String>,
        css_classes: Option<BTreeSet<String>>,
        wikimedia_data: Option<WikimediaData>,
    ) -> Self {
        let link_text = link_text.into();
        let link_type = classify_link(
            &link_text,
            url.as_deref(),
            css_classes.as_ref(),
            wikimedia_data.is_some(),
        );

        Self {
            link_text,
            url,
            css_classes: css_classes.unwrap_or_default(),
            wikimedia_data,
            link_type,
        }
    }

    /// Returns true if the crawler should follow this link
    pub fn is_followable(&self) -> bool {
        self.link_type == LinkType::WikiPageLink
    }
}

/// Builds a classified [`LinkRecord`] from an `<a>` element
///
/// # Errors
///
/// Returns [`ExtractError::InvalidFlag`] if the Wikimedia marker attribute is
/// present but is not a boolean-like string.
pub fn link_from_element(anchor: ElementRef<'_>) -> Result<LinkRecord, ExtractError> {
    let element = anchor.value();

    let is_wikimedia_link = match element.attr(WIKIMEDIA_MARKER_ATTR) {
        Some(value) => parse_flag(value)?.unwrap_or(false),
        None => false,
    };

    let wikimedia_data = is_wikimedia_link.then(|| WikimediaData {
        title: element.attr(WIKIMEDIA_TITLE_ATTR).map(str::to_string),
        content: element.attr(WIKIMEDIA_CONTENT_ATTR).map(str::to_string),
        content_formatted: element
            .attr(WIKIMEDIA_CONTENT_FORMATTED_ATTR)
            .map(str::to_string),
    });

    let css_classes = element
        .attr("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect());

    Ok(LinkRecord::new(
        collapsed_text(anchor),
        element.attr("href").map(str::to_string),
        css_classes,
        wikimedia_data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_link(html: &str) -> Result<LinkRecord, ExtractError> {
        let document = Html::parse_fragment(html);
        let selector = Selector::parse("a").unwrap();
        let anchor = document.select(&selector).next().unwrap();
        link_from_element(anchor)
    }

    #[test]
    fn test_plain_wiki_link() {
        let link = first_link(r#"<a href="/wiki/2049-10-01/Physics">Physics</a>"#).unwrap();
        assert_eq!(link.link_text, "Physics");
        assert_eq!(link.url.as_deref(), Some("/wiki/2049-10-01/Physics"));
        assert!(link.css_classes.is_empty());
        assert_eq!(link.wikimedia_data, None);
        assert_eq!(link.link_type, LinkType::WikiPageLink);
        assert!(link.is_followable());
    }

    #[test]
    fn test_text_is_collapsed() {
        let link = first_link("<a href=\"/wiki/X\">\n  Quantum <em> gravity </em>\n</a>").unwrap();
        assert_eq!(link.link_text, "Quantum gravity");
    }

    #[test]
    fn test_classes_split() {
        let link = first_link(
            r#"<a href="/media/x.jpg" class="ambientimpact-link  ambientimpact-is-image-link"><img src="x.jpg"></a>"#,
        )
        .unwrap();
        assert_eq!(link.css_classes.len(), 2);
        assert!(link.css_classes.contains("ambientimpact-link"));
        assert_eq!(link.link_type, LinkType::Image);
    }

    #[test]
    fn test_anchor_without_href_or_text() {
        let link = first_link(r#"<a name="top"></a>"#).unwrap();
        assert_eq!(link.url, None);
        assert_eq!(link.link_type, LinkType::None);
        assert!(!link.is_followable());
    }

    #[test]
    fn test_wikimedia_link() {
        let link = first_link(
            r#"<a href="https://en.wikipedia.org/wiki/Physics"
                  data-is-wikimedia-link="true"
                  data-omnipedia-attached-data-title="Physics"
                  data-original-title="Physics is the natural science..."
                  data-omnipedia-attached-data-content="<p>Physics is...</p>">physics</a>"#,
        )
        .unwrap();
        assert_eq!(link.link_type, LinkType::WikimediaLink);
        let data = link.wikimedia_data.unwrap();
        assert_eq!(data.title.as_deref(), Some("Physics"));
        assert_eq!(
            data.content.as_deref(),
            Some("Physics is the natural science...")
        );
        assert_eq!(data.content_formatted.as_deref(), Some("<p>Physics is...</p>"));
    }

    #[test]
    fn test_wikimedia_marker_false_or_empty() {
        let link = first_link(r#"<a href="/wiki/A" data-is-wikimedia-link="false">A</a>"#).unwrap();
        assert_eq!(link.wikimedia_data, None);
        assert_eq!(link.link_type, LinkType::WikiPageLink);

        let link = first_link(r#"<a href="/wiki/A" data-is-wikimedia-link="">A</a>"#).unwrap();
        assert_eq!(link.link_type, LinkType::WikiPageLink);
    }

    #[test]
    fn test_wikimedia_marker_malformed() {
        let result = first_link(r#"<a href="/wiki/A" data-is-wikimedia-link="yes">A</a>"#);
        assert!(matches!(result, Err(ExtractError::InvalidFlag(_))));
    }

    #[test]
    fn test_serialized_type_field() {
        let link = LinkRecord::new("Physics", Some("/wiki/Physics".to_string()), None, None);
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "wiki_page_link");
        assert_eq!(json["url"], "/wiki/Physics");
    }
}
