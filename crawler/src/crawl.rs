//! Bounded breadth-first crawl.
//!
//! One coordinator owns the frontier, the set of URLs already claimed and the
//! corpus being built; fetches run on a `JoinSet` of at most `concurrency`
//! tasks. A URL enters the claimed set the moment it is first seen, so it is
//! queued once and fetched at most once. New fetches are only dispatched while
//! `visited + in_flight < max_pages`, which keeps `visited <= max_pages`.

use crate::config::CrawlConfig;
use crate::fetcher::{FetchedPage, Fetcher};
use crate::filter::LinkFilter;
use search_core::Corpus;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Fetched pages; doc ids follow fetch completion order.
    pub corpus: Corpus,
    /// URLs whose fetch failed, with the error message.
    pub failures: Vec<(String, String)>,
    /// Links still queued when the crawl stopped.
    pub frontier_left: usize,
}

pub struct Crawler<F> {
    fetcher: Arc<F>,
    filter: LinkFilter,
    max_pages: usize,
    concurrency: usize,
    frontier: VecDeque<Url>,
    seen: HashSet<String>,
}

impl<F> Crawler<F>
where
    F: Fetcher + Send + Sync + 'static,
{
    pub fn new(config: &CrawlConfig, fetcher: F) -> Self {
        let mut crawler = Self {
            fetcher: Arc::new(fetcher),
            filter: LinkFilter::new(config.base_url.clone()),
            max_pages: config.max_pages,
            concurrency: config.concurrency.max(1),
            frontier: VecDeque::new(),
            seen: HashSet::new(),
        };
        for seed in &config.seeds {
            crawler.enqueue(seed.clone());
        }
        crawler
    }

    fn enqueue(&mut self, url: Url) -> bool {
        if !self.seen.insert(url.to_string()) { return false; }
        self.frontier.push_back(url);
        true
    }

    pub async fn run(mut self) -> CrawlReport {
        let mut report = CrawlReport::default();
        let mut in_flight: JoinSet<(Url, Result<FetchedPage, crate::FetchError>)> = JoinSet::new();
        tracing::info!(
            seeds = self.frontier.len(),
            max_pages = self.max_pages,
            concurrency = self.concurrency,
            prefix = self.filter.prefix(),
            "crawl starting"
        );

        loop {
            while in_flight.len() < self.concurrency && report.corpus.len() + in_flight.len() < self.max_pages {
                let Some(url) = self.frontier.pop_front() else { break };
                tracing::info!(url = %url, "crawling");
                let fetcher = Arc::clone(&self.fetcher);
                in_flight.spawn(async move {
                    let res = fetcher.fetch(url.clone()).await;
                    (url, res)
                });
            }

            let Some(joined) = in_flight.join_next().await else { break };
            match joined {
                Ok((url, Ok(page))) => self.record(&mut report, url, page),
                Ok((url, Err(e))) => {
                    tracing::warn!(url = %url, error = %e, "failed to crawl");
                    report.failures.push((url.to_string(), e.to_string()));
                }
                Err(e) => tracing::warn!(error = %e, "fetch task did not complete"),
            }
        }

        report.frontier_left = self.frontier.len();
        tracing::info!(
            visited = report.corpus.len(),
            failed = report.failures.len(),
            frontier = report.frontier_left,
            "crawl finished"
        );
        report
    }

    fn record(&mut self, report: &mut CrawlReport, url: Url, page: FetchedPage) {
        let FetchedPage { title, text, links } = page;
        if let Err(e) = report.corpus.push(url.as_str(), title, text) {
            tracing::warn!(url = %url, error = %e, "skipping page");
            return;
        }

        for link in links {
            if report.corpus.len() >= self.max_pages { break; }
            if !self.filter.accepts(link.as_str()) {
                tracing::debug!(link = %link, "link filtered");
                continue;
            }
            self.enqueue(link);
        }
    }
}

/// Crawl `config.seeds` with the given fetcher.
pub async fn crawl<F>(config: &CrawlConfig, fetcher: F) -> CrawlReport
where
    F: Fetcher + Send + Sync + 'static,
{
    Crawler::new(config, fetcher).run().await
}
