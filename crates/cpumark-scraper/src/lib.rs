//! Cpumark Scraper - Pagination and extraction for the benchmark listing.
//!
//! This crate turns a rendered, JavaScript-paginated benchmark table into a
//! deduplicated stream of [`cpumark_core::CpuRecord`]s. It drives a
//! `PageDriver` (usually a live Chromium session from `cpumark-browser`)
//! through the listing's pages, detects exhaustion via the trailing-row
//! heuristic, and emits each accepted record incrementally as fixed-column
//! semicolon-delimited text.
//!
//! # Example
//!
//! ```rust,ignore
//! use cpumark_scraper::{CsvEmitter, Paginator};
//!
//! let paginator = Paginator::new(engine, &config);
//! let mut emitter = CsvEmitter::new(std::io::stdout().lock());
//! emitter.write_header()?;
//! let summary = paginator.run(&mut emitter).await?;
//! eprintln!("Finished. Found {} entries.", summary.records);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[allow(missing_docs)]
pub mod accumulator;
#[allow(missing_docs)]
pub mod emit;
pub mod error;
pub mod paginator;
#[allow(missing_docs)]
pub mod parser;

// Re-export commonly used types
pub use accumulator::RecordSet;
pub use emit::{CsvEmitter, RecordSink, CSV_HEADER};
pub use error::{Result, ScrapeError};
pub use paginator::{Paginator, ScrapeSummary};
pub use parser::{parse_row, TableParser, NEXT_LINK_SELECTOR, TABLE_BODY_SELECTOR};
