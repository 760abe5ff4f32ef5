use crate::actions::{host_of, PageDriver};
use crate::error::{BrowserError, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use cpumark_core::config;
use futures_util::stream::StreamExt;
use std::time::Duration;

/// A single headless Chromium session holding one page.
///
/// The session is opened once per run and must be released with
/// [`BrowserEngine::close`] when the scrape is over, including on failure
/// paths.
pub struct BrowserEngine {
    browser: Browser,
    page: Page,
    navigation_timeout: Duration,
    poll_interval: Duration,
}

impl BrowserEngine {
    /// Launch a Chromium instance configured from `config`.
    pub async fn launch(config: &config::BrowserConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.window_width, config.window_height)
            .no_sandbox();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(BrowserError::ChromiumError)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        // The CDP event stream must be drained for the session to make progress
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;

        Ok(Self {
            browser,
            page,
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        })
    }

    /// Shut the browser down and reap the child process.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        let _ = self.browser.wait().await;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PageDriver for BrowserEngine {
    async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!(host = %host_of(url)?, "navigating");

        let load = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| BrowserError::NavigationError(e.to_string()))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| BrowserError::NavigationError(e.to_string()))?;
            Ok(())
        };

        tokio::time::timeout(self.navigation_timeout, load)
            .await
            .map_err(|_| {
                BrowserError::Timeout(format!(
                    "navigation to {url} exceeded {:?}",
                    self.navigation_timeout
                ))
            })?
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "selector {selector} did not appear within {timeout:?}"
                )));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn click(&self, selector: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))?;
        Ok(())
    }

    async fn content(&self) -> Result<String> {
        self.page
            .content()
            .await
            .map_err(|e| BrowserError::ChromiumError(e.to_string()))
    }
}
