//! Configuration management for cpumark.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. The compiled-in defaults reproduce the
//! fixed behavior of a plain run (benchmark listing URL, unbounded pages,
//! compat termination), so no config file is required.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default listing URL scraped when no override is configured.
pub const DEFAULT_TARGET_URL: &str = "https://www.cpubenchmark.net/CPU_mega_page.html";

/// Main application configuration.
///
/// This is loaded from `~/.config/cpumark/config.toml` (or platform
/// equivalent). If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pagination and termination settings
    pub scrape: ScrapeConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `CPUMARK_TARGET_URL`: Override the listing URL
    /// - `CPUMARK_MAX_PAGES`: Override the page cap (0 = unbounded)
    /// - `CPUMARK_HEADLESS`: Override browser headless mode (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("CPUMARK_TARGET_URL") {
            if !val.is_empty() {
                tracing::debug!("Override scrape.target_url from env: {}", val);
                config.scrape.target_url = val;
            }
        }

        if let Ok(val) = std::env::var("CPUMARK_MAX_PAGES") {
            if let Ok(pages) = val.parse() {
                config.scrape.max_pages = pages;
                tracing::debug!("Override scrape.max_pages from env: {}", pages);
            }
        }

        if let Ok(val) = std::env::var("CPUMARK_HEADLESS") {
            if let Ok(headless) = val.parse() {
                config.browser.headless = headless;
                tracing::debug!("Override browser.headless from env: {}", headless);
            }
        }

        Ok(config)
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/cpumark/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("net", "cpumark", "cpumark").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Pagination and termination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// URL of the benchmark listing page
    pub target_url: String,
    /// Upper bound on pages visited, 0 = unbounded
    pub max_pages: u32,
    /// Compare the full trailing record instead of just its name when
    /// deciding that pagination has reached its end
    pub strict_termination: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            max_pages: 0,
            strict_termination: false,
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
    /// How long to wait for the table to appear or change after an
    /// interaction, in milliseconds
    pub settle_timeout_ms: u64,
    /// Interval between DOM polls while waiting, in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            navigation_timeout_secs: 30,
            settle_timeout_ms: 10_000,
            poll_interval_ms: 250,
        }
    }
}
