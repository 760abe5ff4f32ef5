use crate::error::{BrowserError, Result};
use std::time::Duration;

/// The page interactions the pagination loop needs from a browser session.
///
/// `BrowserEngine` implements this against a live Chromium; tests implement
/// it with scripted page sequences.
#[async_trait::async_trait]
pub trait PageDriver {
    /// Navigate to a URL and wait for the load to finish
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Poll until a selector appears in the DOM, bounded by `timeout`
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()>;

    /// Click the first element matching a selector
    async fn click(&self, selector: &str) -> Result<()>;

    /// Current serialized HTML of the page
    async fn content(&self) -> Result<String>;
}

/// Helper to extract the host from a URL, for log context.
pub fn host_of(url: &str) -> Result<String> {
    let url = url::Url::parse(url)
        .map_err(|e| BrowserError::NavigationError(format!("Invalid URL: {}", e)))?;

    url.host_str()
        .ok_or_else(|| BrowserError::NavigationError("No host in URL".to_string()))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_of() {
        assert_eq!(
            host_of("https://www.cpubenchmark.net/CPU_mega_page.html").unwrap(),
            "www.cpubenchmark.net"
        );
        assert_eq!(
            host_of("http://subdomain.example.com:8080/path").unwrap(),
            "subdomain.example.com"
        );
    }

    #[test]
    fn test_host_of_invalid() {
        assert!(host_of("not-a-url").is_err());
    }
}
