//! Page extraction
//!
//! Turns a fetched Omnipedia page into a [`PageRecord`]. There are two
//! variants: article pages (`/wiki/...`) carry an entry title, an optional
//! infobox and a table of contents; the main page carries the featured article
//! and the news list. Both share the common metadata and link extraction.

mod common;
mod infobox;
mod main_page;
pub mod markers;
pub(crate) mod text;
mod toc;
mod wiki;

pub use common::{extract_common, extract_links, CommonFields};
pub use infobox::{extract_infobox, InfoboxMedia, InfoboxRecord, InfoboxTable};
pub use main_page::{extract_main_page, parse_main_page, FeaturedArticle, News, NewsItem};
pub use toc::{extract_toc, TocRecord};
pub use wiki::{extract_wiki_page, parse_wiki_page};

use crate::links::LinkRecord;
use crate::url::{resolve_child, UrlParts};
use serde::Serialize;

/// Everything extracted from one visited page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub url_scheme: String,
    pub url_host: String,
    pub url_path: String,
    pub page_title: String,
    pub page_date: String,

    /// Article pages only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_title: Option<String>,

    pub infobox: Option<InfoboxRecord>,
    pub toc: TocRecord,
    pub links: Vec<LinkRecord>,

    /// Main page only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_article: Option<FeaturedArticle>,

    /// Main page only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<News>,
}

impl PageRecord {
    fn from_common(url: &str, common: CommonFields) -> Self {
        Self {
            url: url.to_string(),
            url_scheme: common.parts.scheme,
            url_host: common.parts.host,
            url_path: common.parts.path,
            page_title: common.page_title,
            page_date: common.page_date,
            entry_title: None,
            infobox: None,
            toc: TocRecord::new(),
            links: common.links,
            featured_article: None,
            news: None,
        }
    }

    /// Links the crawler should follow, in page order
    pub fn followable_links(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter().filter(|link| link.is_followable())
    }

    /// The scheme, host and path this record was fetched from
    pub fn url_parts(&self) -> UrlParts {
        UrlParts {
            scheme: self.url_scheme.clone(),
            host: self.url_host.clone(),
            path: self.url_path.clone(),
        }
    }

    /// Absolute URLs of the wiki pages this page links to, in page order
    ///
    /// Links without an href, or whose href is not site-relative, are dropped.
    pub fn child_urls(&self) -> Vec<String> {
        let parts = self.url_parts();
        self.followable_links()
            .filter_map(|link| {
                let href = link.url.as_deref()?;
                let child = resolve_child(&parts, href);
                if child.is_none() {
                    tracing::debug!("Not following non site-relative link: {}", href);
                }
                child
            })
            .collect()
    }
}
