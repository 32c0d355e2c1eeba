use url::Url;

/// The pieces of a page URL that end up in its record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Host plus explicit port, if any (the URL's network location)
    pub host: String,
    pub path: String,
}

impl UrlParts {
    /// Splits a parsed URL into scheme, network location and path
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use ompedia_crawler::url::UrlParts;
    ///
    /// let url = Url::parse("http://127.0.0.1:8080/wiki/Physics").unwrap();
    /// let parts = UrlParts::from_url(&url);
    /// assert_eq!(parts.host, "127.0.0.1:8080");
    /// assert_eq!(parts.path, "/wiki/Physics");
    /// ```
    pub fn from_url(url: &Url) -> Self {
        let host = url.host_str().unwrap_or_default();
        let host = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Self {
            scheme: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
        }
    }

    /// `scheme://host`, with no trailing slash
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}

/// Resolves a link found on a page to the absolute URL the crawler should visit
///
/// Hrefs are site-relative on Omnipedia, so the page's origin is simply
/// prepended to the raw href; no general URL merging happens. Anything that is
/// not site-relative (absolute URLs, protocol-relative `//host` hrefs, bare
/// relative paths) yields `None`.
pub fn resolve_child(parts: &UrlParts, href: &str) -> Option<String> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    Some(format!("{}{}", parts.origin(), href))
}
