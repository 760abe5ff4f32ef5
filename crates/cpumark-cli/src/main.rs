//! cpumark application shell
//!
//! This is the thin binary that wires configuration, the browser session,
//! and the pagination loop together. Core business logic lives in the
//! `crates/` libraries.

use anyhow::Context;
use cpumark_browser::BrowserEngine;
use cpumark_core::AppConfig;
use cpumark_scraper::{CsvEmitter, Paginator};
use tracing::info;

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// The single mandated completion diagnostic.
fn finished_line(entries: usize) -> String {
    format!("Finished. Found {entries} entries.")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load_with_env().context("load configuration")?;

    info!(
        "Starting cpumark v{} against {}",
        env!("CARGO_PKG_VERSION"),
        config.scrape.target_url
    );

    let engine = BrowserEngine::launch(&config.browser)
        .await
        .context("launch browser session")?;

    let stdout = std::io::stdout();
    let mut emitter = CsvEmitter::new(stdout.lock());
    emitter.write_header().context("write output header")?;

    let paginator = Paginator::new(engine, &config);
    let outcome = paginator.run(&mut emitter).await;

    // Release the session on the failure path too before propagating
    if let Err(e) = paginator.into_inner().close().await {
        tracing::warn!("browser shutdown failed: {e}");
    }

    let summary = outcome.context("scrape benchmark listing")?;
    emitter.flush().context("flush output")?;

    info!(pages = summary.pages, records = summary.records, "scrape complete");
    eprintln!("{}", finished_line(summary.records));

    Ok(())
}
