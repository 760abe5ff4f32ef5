use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("benchmark table not found in rendered page")]
    TableMissing,

    #[error("page {page} rendered without any table rows")]
    EmptyPage { page: u32 },

    #[error("Browser error: {0}")]
    Browser(#[from] cpumark_browser::BrowserError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
