//! Page fetching: the [`Fetcher`] seam the crawl loop talks to, and the
//! reqwest + scraper implementation used against real sites.

use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use thiserror::Error;
use url::Url;

/// Pages larger than this are dropped instead of buffered.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

lazy_static! {
    static ref TITLE: Selector = Selector::parse("title").expect("valid selector");
    static ref BODY: Selector = Selector::parse("body").expect("valid selector");
    static ref ANCHOR: Selector = Selector::parse("a[href]").expect("valid selector");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    pub title: String,
    pub text: String,
    /// Every anchor target, already resolved to an absolute http(s) URL.
    pub links: Vec<Url>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} could not be read: {message}")]
    Unreadable { url: String, message: String },

    #[error("{url} is larger than {limit} bytes")]
    TooLarge { url: String, limit: usize },
}

pub trait Fetcher {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_body_bytes: usize,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: std::time::Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, max_body_bytes: MAX_BODY_BYTES })
    }

    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send {
        let client = self.client.clone();
        let limit = self.max_body_bytes;
        async move {
            let mut resp = client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| FetchError::Http { url: url.to_string(), source })?;
            if !resp.status().is_success() {
                return Err(FetchError::Status { url: url.to_string(), status: resp.status().as_u16() });
            }
            if resp.content_length().is_some_and(|len| len > limit as u64) {
                return Err(FetchError::TooLarge { url: url.to_string(), limit });
            }

            let mut bytes = Vec::new();
            while let Some(chunk) = resp
                .chunk()
                .await
                .map_err(|e| FetchError::Unreadable { url: url.to_string(), message: e.to_string() })?
            {
                if bytes.len() + chunk.len() > limit {
                    return Err(FetchError::TooLarge { url: url.to_string(), limit });
                }
                bytes.extend_from_slice(&chunk);
            }
            let body = String::from_utf8_lossy(&bytes);
            Ok(parse_page(&url, &body))
        }
    }
}

/// Title, whitespace-collapsed body text and absolute links of an HTML page.
pub fn parse_page(url: &Url, html: &str) -> FetchedPage {
    let doc = Html::parse_document(html);
    let title = doc
        .select(&TITLE)
        .next()
        .map(|n| collapse_whitespace(&n.text().collect::<String>()))
        .unwrap_or_default();
    let text = doc
        .select(&BODY)
        .next()
        .map(|n| collapse_whitespace(&n.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default();

    let mut links = Vec::new();
    for a in doc.select(&ANCHOR) {
        if let Some(h) = a.value().attr("href") {
            if let Ok(u) = url.join(h.trim()) {
                if matches!(u.scheme(), "http" | "https") { links.push(u); }
            }
        }
    }
    FetchedPage { title, text, links }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
