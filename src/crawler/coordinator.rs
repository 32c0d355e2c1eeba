//! Crawler coordinator - main traversal logic
//!
//! Walks the site depth-first from a seed URL. Each URL is classified by its
//! path, fetched with the matching extractor, recorded once, and its wiki page
//! links are descended into in page order. The walk uses an explicit stack so
//! deep sites cannot overflow the call stack; children are pushed in reverse
//! and re-checked against the visited set when popped, which yields the same
//! pre-order a recursive walk would.

use crate::config::CrawlerConfig;
use crate::crawler::{Pacer, PageClient, VisitedSet};
use crate::page::{extract_main_page, extract_wiki_page, PageRecord};
use crate::url::{classify_url_within, PageType};
use crate::CrawlError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens when a single page fails to fetch or extract
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop the whole crawl on the first failing page
    #[default]
    Abort,
    /// Record the failure, mark the URL visited, and keep walking
    Skip,
}

/// Tunables for one crawl
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Pause before every fetch except the first
    pub request_delay: Duration,
    pub failure_policy: FailurePolicy,
    /// Path prefix the site is mounted under, empty for the host root
    pub base_path: String,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs(1),
            failure_policy: FailurePolicy::default(),
            base_path: String::new(),
        }
    }
}

impl From<&CrawlerConfig> for CrawlOptions {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            request_delay: Duration::from_millis(config.request_delay_ms),
            failure_policy: config.on_page_error,
            base_path: config.base_path.clone(),
        }
    }
}

/// A page that could not be crawled under [`FailurePolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    pub url: String,
    pub error: String,
}

/// Everything one crawl produced
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrawlResult {
    /// One record per unique URL, in discovery (pre-order) order
    pub pages: Vec<PageRecord>,
    /// URLs not fetched because their page type is not recognized
    pub skipped: Vec<String>,
    /// Pages that failed, when failures are skipped
    pub failures: Vec<PageFailure>,
    /// Delays issued between fetches
    pub pauses: u64,
}

impl CrawlResult {
    /// URLs of the visited pages, in visitation order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.url.as_str())
    }
}

/// Owns the state of one crawl: visited set, pacing, and accumulated results
///
/// Results collected before an aborting error stay available through
/// [`Crawler::results`].
pub struct Crawler<'c, C> {
    client: &'c C,
    options: CrawlOptions,
    pacer: Pacer,
    visited: VisitedSet,
    result: CrawlResult,
}

impl<'c, C: PageClient> Crawler<'c, C> {
    /// Creates a crawler with empty state
    pub fn new(client: &'c C, options: CrawlOptions) -> Self {
        let pacer = Pacer::new(options.request_delay);
        Self {
            client,
            options,
            pacer,
            visited: VisitedSet::new(),
            result: CrawlResult::default(),
        }
    }

    /// Walks the site starting from `seed_url`
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first fetch or extraction failure
    /// ends the walk and is returned. Pages recorded before it are kept.
    pub async fn run(&mut self, seed_url: &str) -> Result<(), CrawlError> {
        tracing::info!("Starting crawl at {}", seed_url);
        let mut stack = vec![seed_url.to_string()];

        while let Some(url) = stack.pop() {
            if self.visited.contains(&url) {
                continue;
            }

            let page_type = match classify_url_within(&url, &self.options.base_path) {
                Ok(page_type) => page_type,
                Err(e) => {
                    self.handle_failure(&url, e.into())?;
                    continue;
                }
            };

            if let PageType::Other(tag) = &page_type {
                tracing::info!("Page type not recognized ({}): {}", tag, url);
                if !self.result.skipped.contains(&url) {
                    self.result.skipped.push(url);
                }
                continue;
            }

            let page = match self.visit(&url, &page_type).await {
                Ok(page) => page,
                Err(e) => {
                    self.handle_failure(&url, e)?;
                    continue;
                }
            };

            self.visited.insert(url.as_str());
            stack.extend(page.child_urls().into_iter().rev());
            self.result.pages.push(page);
        }

        tracing::info!(
            "Crawl finished: {} pages, {} skipped, {} failed",
            self.result.pages.len(),
            self.result.skipped.len(),
            self.result.failures.len()
        );
        Ok(())
    }

    /// Waits for the pacer, then fetches and extracts one recognized page
    async fn visit(&mut self, url: &str, page_type: &PageType) -> Result<PageRecord, CrawlError> {
        self.pacer.wait_turn().await;
        self.result.pauses = self.pacer.pauses();

        match page_type {
            PageType::MainPage => extract_main_page(self.client, url).await,
            _ => extract_wiki_page(self.client, url).await,
        }
    }

    fn handle_failure(&mut self, url: &str, error: CrawlError) -> Result<(), CrawlError> {
        match self.options.failure_policy {
            FailurePolicy::Abort => {
                tracing::error!("Crawl aborted at {}: {}", url, error);
                Err(error)
            }
            FailurePolicy::Skip => {
                tracing::warn!("Skipping {}: {}", url, error);
                self.visited.insert(url);
                self.result.failures.push(PageFailure {
                    url: url.to_string(),
                    error: error.to_string(),
                });
                Ok(())
            }
        }
    }

    /// Pages recorded so far
    pub fn results(&self) -> &[PageRecord] {
        &self.result.pages
    }

    /// Consumes the crawler, returning what it recorded
    pub fn into_result(self) -> CrawlResult {
        self.result
    }
}

/// Crawls the site from `seed_url` with default options (1 s delay, abort on
/// the first failing page)
///
/// # Example
///
/// ```no_run
/// use ompedia_crawler::config::Config;
/// use ompedia_crawler::crawler::{build_http_client, crawl};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = build_http_client(&Config::default())?;
/// let result = crawl(&client, "https://omnipedia.app/").await?;
/// println!("Visited {} pages", result.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl<C: PageClient>(client: &C, seed_url: &str) -> Result<CrawlResult, CrawlError> {
    crawl_with(client, seed_url, CrawlOptions::default()).await
}

/// Crawls the site from `seed_url` with explicit options
pub async fn crawl_with<C: PageClient>(
    client: &C,
    seed_url: &str,
    options: CrawlOptions,
) -> Result<CrawlResult, CrawlError> {
    let mut crawler = Crawler::new(client, options);
    crawler.run(seed_url).await?;
    Ok(crawler.into_result())
}
