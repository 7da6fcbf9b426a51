//! Bounded same-prefix web crawler producing a [`search_core::Corpus`].

pub mod config;
pub mod crawl;
pub mod fetcher;
pub mod filter;

pub use config::{CrawlArgs, CrawlConfig};
pub use crawl::{crawl, CrawlReport, Crawler};
pub use fetcher::{parse_page, FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use filter::LinkFilter;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Crawl over HTTP with the settings in `config`.
pub async fn crawl_web(config: &CrawlConfig) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout)?;
    Ok(crawl(config, fetcher).await)
}
