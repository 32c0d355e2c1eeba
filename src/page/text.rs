//! Small helpers over scraper's element API

use crate::ExtractError;
use scraper::{ElementRef, Selector};

/// Parses a CSS selector, mapping failures into an extraction error
pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|_| ExtractError::InvalidSelector(css.to_string()))
}

/// First element under `scope` matching `css`, if any
pub(crate) fn find_first<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    Ok(scope.select(&selector(css)?).next())
}

/// First element under `scope` matching `css`, or a missing-element error
pub(crate) fn require<'a>(
    scope: ElementRef<'a>,
    css: &str,
    what: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    find_first(scope, css)?.ok_or(ExtractError::MissingElement(what))
}

/// Every element under `scope` matching `css`, in document order
pub(crate) fn find_all<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    Ok(scope.select(&selector(css)?).collect())
}

/// Concatenated text content, untouched
pub(crate) fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text content with every text node trimmed, empty nodes dropped, and the
/// rest joined by a single space
pub(crate) fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first `tag` element that follows `target` in document order within
/// `scope`
pub(crate) fn next_element_after<'a>(
    scope: ElementRef<'a>,
    target: ElementRef<'a>,
    tag: &str,
) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip_while(|node| node.id() != target.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == tag)
}
