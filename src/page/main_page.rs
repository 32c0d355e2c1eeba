use crate::crawler::{fetch_page, PageClient};
use crate::links::{link_from_element, LinkRecord};
use crate::page::markers;
use crate::page::text::{collapsed_text, find_all, require};
use crate::page::{extract_common, extract_links, PageRecord};
use crate::{CrawlError, ExtractError};
use scraper::{ElementRef, Html};
use serde::Serialize;

/// The main page's featured article teaser
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedArticle {
    pub text: String,
    pub link: LinkRecord,
}

/// The main page's news list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct News {
    pub items: Vec<NewsItem>,
}

/// One entry of the news list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub text: String,
    pub links: Vec<LinkRecord>,
}

/// Parses an already-fetched main page
///
/// # Errors
///
/// [`ExtractError::MissingElement`] if the title, current date, featured
/// article content, featured article link or news container is absent.
pub fn parse_main_page(url: &str, html: &str) -> Result<PageRecord, ExtractError> {
    let document = Html::parse_document(html);
    let common = extract_common(&document, url)?;
    let root = document.root_element();

    Ok(PageRecord {
        featured_article: Some(extract_featured_article(root)?),
        news: Some(extract_news(root)?),
        ..PageRecord::from_common(url, common)
    })
}

/// Fetches and parses the main page
pub async fn extract_main_page<C: PageClient>(
    client: &C,
    url: &str,
) -> Result<PageRecord, CrawlError> {
    let body = fetch_page(client, url).await?;
    parse_main_page(url, &body).map_err(|source| CrawlError::Extract {
        url: url.to_string(),
        source,
    })
}

fn extract_featured_article(root: ElementRef<'_>) -> Result<FeaturedArticle, ExtractError> {
    let content = require(
        root,
        markers::FEATURED_ARTICLE_CONTENT,
        "featured article content",
    )?;
    let marker = require(root, markers::FEATURED_ARTICLE_LINK, "featured article link")?;

    // The marker is either the anchor itself or wraps it
    let anchor = if marker.value().name() == markers::ANCHOR {
        marker
    } else {
        require(marker, markers::ANCHOR, "featured article link")?
    };

    Ok(FeaturedArticle {
        text: collapsed_text(content),
        link: link_from_element(anchor)?,
    })
}

fn extract_news(root: ElementRef<'_>) -> Result<News, ExtractError> {
    let container = require(root, markers::NEWS_CONTENT, "news content")?;

    let items = find_all(container, markers::NEWS_ITEM)?
        .into_iter()
        .map(|item| {
            Ok(NewsItem {
                text: collapsed_text(item),
                links: extract_links(item)?,
            })
        })
        .collect::<Result<Vec<_>, ExtractError>>()?;

    Ok(News { items })
}
