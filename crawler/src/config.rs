use crate::CrawlError;
use clap::Args;
use search_core::Normalizer;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/wiki";
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://en.wikipedia.org/wiki/List_of_pharaohs",
    "https://en.wikipedia.org/wiki/Pharaoh",
];

/// Crawl options shared by every binary in the workspace.
#[derive(Args, Debug, Clone)]
pub struct CrawlArgs {
    /// Only links starting with this prefix are followed
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Maximum number of pages to fetch successfully
    #[arg(long, default_value_t = 10)]
    pub max_pages: usize,
    /// Seed URL (repeatable); defaults to the pharaoh pages
    #[arg(long = "seed")]
    pub seeds: Vec<String>,
    /// Number of concurrent fetches
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    pub timeout_secs: u64,
    /// User-Agent string sent with every request
    #[arg(long, default_value = "search-engine-rs-bot/0.1 (+https://example.com/bot)")]
    pub user_agent: String,
    /// Drop English stopwords from documents and queries
    #[arg(long, default_value_t = false)]
    pub stopwords: bool,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub max_pages: usize,
    pub seeds: Vec<Url>,
    pub concurrency: usize,
    pub timeout: Duration,
    pub user_agent: String,
    pub normalizer: Normalizer,
}

impl CrawlArgs {
    pub fn into_config(self) -> Result<CrawlConfig, CrawlError> {
        if self.max_pages == 0 {
            return Err(CrawlError::Config("max pages must be greater than zero".into()));
        }
        if self.concurrency == 0 {
            return Err(CrawlError::Config("concurrency must be at least 1".into()));
        }
        let raw: Vec<String> = if self.seeds.is_empty() {
            DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect()
        } else {
            self.seeds
        };
        let seeds = raw
            .iter()
            .map(|s| Url::parse(s.trim()).map_err(|e| CrawlError::Config(format!("invalid seed {s}: {e}"))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CrawlConfig {
            base_url: self.base_url,
            max_pages: self.max_pages,
            seeds,
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent,
            normalizer: Normalizer::new().with_stopwords(self.stopwords),
        })
    }
}

impl CrawlConfig {
    pub fn new(base_url: impl Into<String>, max_pages: usize, seeds: Vec<Url>) -> Self {
        Self {
            base_url: base_url.into(),
            max_pages,
            seeds,
            concurrency: 1,
            timeout: Duration::from_secs(12),
            user_agent: "search-engine-rs-bot/0.1 (+https://example.com/bot)".into(),
            normalizer: Normalizer::new(),
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
