//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`PageClient`] seam
//! - Fixed-delay pacing between requests
//! - Visited-set tracking
//! - The depth-first traversal that ties them together

mod coordinator;
mod fetcher;
mod scheduler;
mod state;

pub use coordinator::{
    crawl, crawl_with, CrawlOptions, CrawlResult, Crawler, FailurePolicy, PageFailure,
};
pub use fetcher::{build_http_client, fetch_page, FetchedPage, PageClient};
pub use scheduler::Pacer;
pub use state::VisitedSet;
