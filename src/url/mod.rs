//! URL handling module
//!
//! This module maps a URL's path shape to the page type that decides which
//! extractor runs, and splits/resolves URLs for the crawl engine.

mod parts;

pub use parts::{resolve_child, UrlParts};

use url::Url;

/// The path segment that marks an article page
const WIKI_TAG: &str = "wiki";

/// Page type derived from a URL's first path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageType {
    /// Empty path: the site's landing page
    MainPage,
    /// First segment is `wiki`: an article page
    WikiPage,
    /// Any other first segment, reported verbatim
    Other(String),
}

/// Classifies a URL by its path
///
/// An empty path (or a bare `/`) is the main page. Otherwise the first path
/// segment is the page-type tag; `wiki` is an article page and anything else
/// is reported as [`PageType::Other`].
///
/// # Examples
///
/// ```
/// use ompedia_crawler::url::{classify_url, PageType};
///
/// assert_eq!(classify_url("https://omnipedia.app/").unwrap(), PageType::MainPage);
/// assert_eq!(
///     classify_url("https://omnipedia.app/wiki/2049-10-01/Physics").unwrap(),
///     PageType::WikiPage
/// );
/// assert_eq!(
///     classify_url("https://omnipedia.app/user/login").unwrap(),
///     PageType::Other("user".to_string())
/// );
/// ```
pub fn classify_url(url: &str) -> Result<PageType, url::ParseError> {
    classify_url_within(url, "")
}

/// Classifies a URL for a site mounted under `base_path`
///
/// The mount prefix is stripped from the path before the first segment is
/// taken, so with `base_path = "/x"` the URL `https://site/x/` is the main page
/// and `https://site/x/wiki/Topic/` is an article. A path outside the prefix is
/// classified as-is.
pub fn classify_url_within(url: &str, base_path: &str) -> Result<PageType, url::ParseError> {
    let parsed = Url::parse(url)?;
    Ok(classify_path(strip_base(parsed.path(), base_path)))
}

fn strip_base<'a>(path: &'a str, base_path: &str) -> &'a str {
    let base = base_path.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }

    match path.strip_prefix(base) {
        // Only strip on a segment boundary: "/x" must not eat "/xyz"
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

fn classify_path(path: &str) -> PageType {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return PageType::MainPage;
    }

    let tag = trimmed.split('/').next().unwrap_or_default();
    if tag == WIKI_TAG {
        PageType::WikiPage
    } else {
        PageType::Other(tag.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_main_page() {
        assert_eq!(classify_url("https://site.x/").unwrap(), PageType::MainPage);
        assert_eq!(classify_url("https://site.x").unwrap(), PageType::MainPage);
    }

    #[test]
    fn test_wiki_path_is_wiki_page() {
        assert_eq!(
            classify_url("https://site.x/wiki/Topic/").unwrap(),
            PageType::WikiPage
        );
        assert_eq!(
            classify_url("https://omnipedia.app/wiki/2049-10-01/Main_Page").unwrap(),
            PageType::WikiPage
        );
    }

    #[test]
    fn test_other_tag_reported_verbatim() {
        assert_eq!(
            classify_url("https://site.x/changes/Topic").unwrap(),
            PageType::Other("changes".to_string())
        );
        assert_eq!(
            classify_url("https://site.x/Wiki/Topic").unwrap(),
            PageType::Other("Wiki".to_string())
        );
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(
            classify_url("https://site.x/?page=2#top").unwrap(),
            PageType::MainPage
        );
        assert_eq!(
            classify_url("https://site.x/wiki/Topic#History").unwrap(),
            PageType::WikiPage
        );
    }

    #[test]
    fn test_mounted_site() {
        assert_eq!(
            classify_url_within("https://site/x/wiki/Topic/", "/x").unwrap(),
            PageType::WikiPage
        );
        assert_eq!(
            classify_url_within("https://site/x/", "/x").unwrap(),
            PageType::MainPage
        );
        assert_eq!(
            classify_url_within("https://site/x", "/x/").unwrap(),
            PageType::MainPage
        );
    }

    #[test]
    fn test_mount_prefix_respects_segment_boundary() {
        assert_eq!(
            classify_url_within("https://site/xyz/wiki", "/x").unwrap(),
            PageType::Other("xyz".to_string())
        );
    }

    #[test]
    fn test_unparseable_url() {
        assert!(classify_url("not a url").is_err());
        assert!(classify_url("/wiki/Relative").is_err());
    }
}
