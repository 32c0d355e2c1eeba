//! Link classification
//!
//! Every anchor on a page is turned into a [`LinkRecord`] whose [`LinkType`]
//! is a pure function of the anchor's text, href, classes and Wikimedia
//! marker. The crawl engine only ever follows [`LinkType::WikiPageLink`].

mod date;
mod flag;
mod record;

pub use date::is_date;
pub use flag::parse_flag;
pub use record::{link_from_element, LinkRecord, WikimediaData};

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Hrefs that always point at site chrome
const SITE_NAV_URLS: &[&str] = &[
    "/user/login",
    "/privacy",
    "/support",
    "https://creativecommons.org/licenses/by-nc/4.0/",
    "/join",
];

/// Link labels that always belong to site chrome
const SITE_NAV_LABELS: &[&str] = &[
    "About Omnipedia",
    "View changes",
    "Random article",
    "Log in",
    "Privacy policy",
    "Close",
    "Support",
    "Copyright",
    "Join Omnipedia",
];

const BACKREFERENCE_PREFIX: &str = "#backreference";
const MAIN_PAGE_MARKER: &str = "Main_Page";
const MAIN_PAGE_LABEL: &str = "Main page";
const IMAGE_LINK_CLASS: &str = "ambientimpact-is-image-link";

/// The kind of thing an anchor points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// Anchor carrying Wikimedia hover-preview data
    WikimediaLink,
    /// In-page link back to a citation
    Backreference,
    /// Any other in-page fragment link
    PageNav,
    /// Login, privacy, date switcher and similar chrome
    SiteNav,
    /// The "Main page" link
    MainPage,
    /// Link wrapping an image
    Image,
    /// Empty anchor with neither text nor href
    None,
    /// Link to another wiki page; the only type the crawler follows
    WikiPageLink,
}

impl LinkType {
    /// Stable snake_case name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WikimediaLink => "wikimedia_link",
            Self::Backreference => "backreference",
            Self::PageNav => "page_nav",
            Self::SiteNav => "site_nav",
            Self::MainPage => "main_page",
            Self::Image => "image",
            Self::None => "none",
            Self::WikiPageLink => "wiki_page_link",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a link from its raw attributes
///
/// Rules are checked in this order and the first match wins:
///
/// 1. Wikimedia marker set → `WikimediaLink`
/// 2. href starts with `#backreference` → `Backreference`
/// 3. href starts with `#` → `PageNav`
/// 4. href is a known chrome path or contains `Main_Page` → `SiteNav`
/// 5. text is a known chrome label or a date → `SiteNav`
/// 6. text is exactly `Main page` → `MainPage`
/// 7. classes contain `ambientimpact-is-image-link` → `Image`
/// 8. empty text and no href → `None`
/// 9. anything else → `WikiPageLink`
///
/// # Examples
///
/// ```
/// use ompedia_crawler::links::{classify_link, LinkType};
///
/// assert_eq!(classify_link("", None, None, false), LinkType::None);
/// assert_eq!(
///     classify_link("Physics", Some("/wiki/2049-10-01/Physics"), None, false),
///     LinkType::WikiPageLink
/// );
/// ```
pub fn classify_link(
    link_text: &str,
    url: Option<&str>,
    css_classes: Option<&BTreeSet<String>>,
    is_wikimedia_link: bool,
) -> LinkType {
    if is_wikimedia_link {
        return LinkType::WikimediaLink;
    }

    if let Some(url) = url {
        if url.starts_with(BACKREFERENCE_PREFIX) {
            return LinkType::Backreference;
        }
        if url.starts_with('#') {
            return LinkType::PageNav;
        }
        if SITE_NAV_URLS.contains(&url) || url.contains(MAIN_PAGE_MARKER) {
            return LinkType::SiteNav;
        }
    }

    if SITE_NAV_LABELS.contains(&link_text) || is_date(link_text) {
        return LinkType::SiteNav;
    }

    if link_text == MAIN_PAGE_LABEL {
        return LinkType::MainPage;
    }

    if css_classes.is_some_and(|classes| classes.contains(IMAGE_LINK_CLASS)) {
        return LinkType::Image;
    }

    if link_text.is_empty() && url.is_none() {
        return LinkType::None;
    }

    LinkType::WikiPageLink
}
