//! Ompedia crawler: a polite Omnipedia site walker
//!
//! This crate crawls an Omnipedia site from a seed URL, follows intra-wiki links
//! depth-first, and extracts a structured record (metadata, infobox, table of
//! contents and classified links) from every page it visits.

pub mod config;
pub mod crawler;
pub mod links;
pub mod output;
pub mod page;
pub mod url;

use thiserror::Error;

/// Main error type for crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to extract {url}: {source}")]
    Extract { url: String, source: ExtractError },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while pulling a record out of a parsed page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Required element missing: {0}")]
    MissingElement(&'static str),

    #[error(transparent)]
    InvalidFlag(#[from] FlagError),

    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] ::url::ParseError),
}

/// A boolean-like attribute that is neither "true", "false" nor empty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("String must resolve to \"false\" or \"true\" or be empty. Got: \"{0}\"")]
pub struct FlagError(pub String);

/// Result type alias for crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for extraction operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, crawl_with, CrawlOptions, CrawlResult, Crawler, FailurePolicy};
pub use links::{classify_link, is_date, parse_flag, LinkRecord, LinkType, WikimediaData};
pub use page::{
    extract_infobox, extract_main_page, extract_toc, extract_wiki_page, InfoboxRecord,
    PageRecord, TocRecord,
};
pub use url::{classify_url, PageType};
