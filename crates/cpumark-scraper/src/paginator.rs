//! Pagination loop for the benchmark listing.
//!
//! Drives a [`PageDriver`] through the JavaScript paginator: load the first
//! page, then repeatedly click the next-page control and wait for the table
//! to change, merging rows into the accumulator until the trailing row
//! repeats. Accepted records are flushed to the sink as soon as they are
//! deduplicated, so a failed run still leaves valid partial output behind.

use crate::accumulator::RecordSet;
use crate::emit::RecordSink;
use crate::error::{Result, ScrapeError};
use crate::parser::{TableParser, NEXT_LINK_SELECTOR, TABLE_BODY_SELECTOR};
use cpumark_browser::PageDriver;
use cpumark_core::{AppConfig, CpuRecord};
use serde::Serialize;
use std::time::Duration;

/// Outcome of a completed scrape.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeSummary {
    /// Pages visited, including the final repeated one
    pub pages: u32,
    /// Deduplicated records accumulated
    pub records: usize,
}

/// Drives the paginated listing to exhaustion.
pub struct Paginator<D> {
    driver: D,
    parser: TableParser,
    target_url: String,
    strict_termination: bool,
    max_pages: u32,
    settle_timeout: Duration,
    poll_interval: Duration,
}

impl<D: PageDriver> Paginator<D> {
    /// Build a paginator over `driver` with the run's scrape and timing
    /// settings.
    #[must_use]
    pub fn new(driver: D, config: &AppConfig) -> Self {
        Self {
            driver,
            parser: TableParser::new(),
            target_url: config.scrape.target_url.clone(),
            strict_termination: config.scrape.strict_termination,
            max_pages: config.scrape.max_pages,
            settle_timeout: Duration::from_millis(config.browser.settle_timeout_ms),
            poll_interval: Duration::from_millis(config.browser.poll_interval_ms),
        }
    }

    /// Give the driver back, e.g. to release the browser session.
    #[must_use]
    pub fn into_inner(self) -> D {
        self.driver
    }

    /// Run the scrape to completion, streaming accepted records to `sink`.
    ///
    /// The first page is merged unconditionally. Every later page is merged
    /// with duplicate suppression unless its trailing row matches the
    /// accumulated trailing row, which signals that the paginated source has
    /// stopped advancing.
    pub async fn run<S: RecordSink>(&self, sink: &mut S) -> Result<ScrapeSummary> {
        self.driver.navigate(&self.target_url).await?;
        self.driver
            .wait_for_selector(TABLE_BODY_SELECTOR, self.settle_timeout)
            .await?;

        let html = self.driver.content().await?;
        let rows = self.parser.parse(&html)?;
        if rows.is_empty() {
            return Err(ScrapeError::EmptyPage { page: 1 });
        }

        let mut records = RecordSet::new();
        for row in rows {
            sink.accept(&row)?;
            records.push_unchecked(row);
        }
        tracing::info!(rows = records.len(), "parsed first page");

        let mut visited: u32 = 1;
        let mut page: u32 = 2;
        loop {
            if self.max_pages != 0 && page > self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    "page cap reached before the listing was exhausted"
                );
                break;
            }

            let Some(trailing) = records.last().cloned() else {
                break;
            };

            let rows = self.advance(&trailing).await?;
            visited += 1;
            let done = match rows.last() {
                Some(last) => self.is_final_page(last, &trailing),
                None => return Err(ScrapeError::EmptyPage { page }),
            };
            if done {
                tracing::debug!(page, "trailing row repeated, listing exhausted");
                break;
            }

            let mut fresh = 0usize;
            for row in rows {
                if records.insert(row.clone()) {
                    sink.accept(&row)?;
                    fresh += 1;
                }
            }
            tracing::debug!(page, fresh, total = records.len(), "merged page");

            page += 1;
        }

        Ok(ScrapeSummary {
            pages: visited,
            records: records.len(),
        })
    }

    /// Click the next-page control once, then poll the rendered table until
    /// its trailing row no longer matches `trailing` or the settle timeout
    /// elapses. A timeout hands back the unchanged rows, which the caller's
    /// termination check reads as the source reporting the same page again.
    async fn advance(&self, trailing: &CpuRecord) -> Result<Vec<CpuRecord>> {
        self.driver.click(NEXT_LINK_SELECTOR).await?;

        let deadline = tokio::time::Instant::now() + self.settle_timeout;
        loop {
            let html = self.driver.content().await?;
            let rows = self.parser.parse(&html)?;

            if rows.last().is_some_and(|last| last.name != trailing.name) {
                return Ok(rows);
            }
            if tokio::time::Instant::now() >= deadline {
                return Ok(rows);
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Termination heuristic: the listing is exhausted when the new page's
    /// trailing row matches the previous one. The name-only comparison is
    /// kept for compatibility with the source's behavior; strict mode
    /// compares the full record.
    fn is_final_page(&self, last: &CpuRecord, trailing: &CpuRecord) -> bool {
        if self.strict_termination {
            last == trailing
        } else {
            last.name == trailing.name
        }
    }
}
