//! HTTP fetcher implementation
//!
//! The crawl engine only needs "GET this URL, give me the text and the
//! status". That contract is the [`PageClient`] trait, implemented here for
//! `reqwest::Client`; tests plug in an in-memory site instead.

use crate::config::Config;
use crate::CrawlError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Raw response of a page fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded to text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can GET a page
///
/// Implementations report transport failures as errors but return non-2xx
/// responses as ordinary [`FetchedPage`]s; [`fetch_page`] decides what counts
/// as a failure.
pub trait PageClient {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, CrawlError>> + Send;
}

impl PageClient for Client {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, CrawlError> {
        let http_error = |source: reqwest::Error| CrawlError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.get(url).send().await.map_err(http_error)?;
        let status = response.status().as_u16();
        // Decodes with the Content-Type charset, UTF-8 when none is given
        let body = response.text().await.map_err(http_error)?;

        Ok(FetchedPage { status, body })
    }
}

/// Fetches a page and returns its body as text
///
/// # Errors
///
/// * `CrawlError::Http` - The request failed (connection, timeout, body read)
/// * `CrawlError::Status` - The server answered with a non-2xx status
pub async fn fetch_page<C: PageClient>(client: &C, url: &str) -> Result<String, CrawlError> {
    tracing::info!("Scraping {}", url);

    let page = client.fetch(url).await?;
    if !page.is_success() {
        return Err(CrawlError::Status {
            url: url.to_string(),
            status: page.status,
        });
    }

    Ok(page.body)
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use ompedia_crawler::config::Config;
/// use ompedia_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let agent = &config.user_agent;
    let user_agent = format!(
        "{}/{} (+{}; {})",
        agent.crawler_name, agent.crawler_version, agent.contact_url, agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticClient(FetchedPage);

    impl PageClient for StaticClient {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage, CrawlError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_is_success() {
        let page = |status| FetchedPage {
            status,
            body: String::new(),
        };
        assert!(page(200).is_success());
        assert!(page(204).is_success());
        assert!(!page(301).is_success());
        assert!(!page(404).is_success());
        assert!(!page(500).is_success());
    }

    #[tokio::test]
    async fn test_transport_error_names_url() {
        // Nothing listens on port 1, so the connection is refused
        let client = build_http_client(&Config::default()).unwrap();
        let url = "http://127.0.0.1:1/wiki/A";

        match client.fetch(url).await {
            Err(CrawlError::Http { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected a transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let client = StaticClient(FetchedPage {
            status: 200,
            body: "<html></html>".to_string(),
        });
        let body = fetch_page(&client, "https://omnipedia.app/").await.unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_page_status_error() {
        let client = StaticClient(FetchedPage {
            status: 503,
            body: String::new(),
        });
        let result = fetch_page(&client, "https://omnipedia.app/").await;
        assert!(matches!(
            result,
            Err(CrawlError::Status { status: 503, .. })
        ));
    }
}
