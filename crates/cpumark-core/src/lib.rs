//! Cpumark Core - Foundation crate for the cpumark scraper.
//!
//! This crate provides the shared record type, configuration management,
//! and error types that the other cpumark crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - The parsed benchmark row (`CpuRecord`)
//!
//! # Example
//!
//! ```rust
//! use cpumark_core::{AppConfig, CpuRecord};
//!
//! let config = AppConfig::default();
//! assert!(config.browser.headless);
//!
//! let record = CpuRecord {
//!     name: "Ryzen 5 3600".to_string(),
//!     cores: 6,
//!     cpu_mark: 17828,
//!     thread_mark: 2674,
//!     tdp: 65,
//!     socket: "AM4".to_string(),
//!     category: "Desktop".to_string(),
//! };
//! assert_eq!(record.cores, 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, BrowserConfig, ScrapeConfig};
pub use error::{ConfigError, ConfigResult};
pub use types::CpuRecord;
