//! Crawls against a wiremock server through the real HTTP fetcher.

use crawler::{crawl, CrawlConfig, FetchError, Fetcher, HttpFetcher};
use search_core::{Library, Normalizer};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, at: &str, title: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><head><title>{title}</title></head><body>{body}</body></html>"))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new("test-bot/0.1", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn crawls_prefix_and_indexes_pages() {
    let server = MockServer::start().await;
    let base = format!("{}/wiki", server.uri());

    mount_page(
        &server,
        "/wiki/Pharaoh",
        "Pharaoh",
        r#"<p>The pharaoh ruled egypt.</p>
           <a href="/wiki/Egypt">Egypt</a>
           <a href="/wiki/Egypt#Rulers">Rulers</a>
           <a href="/wiki/Talk:Egypt">Talk</a>
           <a href="/wiki/Missing">Missing</a>
           <a href="/about">About</a>"#,
    )
    .await;
    mount_page(&server, "/wiki/Egypt", "Egypt", r#"<p>Ancient egypt had many pharaohs.</p><a href="Pharaoh">back</a>"#).await;
    mount_page(&server, "/about", "About", "<p>not part of the wiki</p>").await;

    let seed = Url::parse(&format!("{base}/Pharaoh")).unwrap();
    let config = CrawlConfig::new(base.clone(), 10, vec![seed]);
    let report = crawl(&config, fetcher()).await;

    let urls: Vec<&str> = report.corpus.iter().map(|d| d.url.as_str()).collect();
    assert_eq!(urls, vec![format!("{base}/Pharaoh"), format!("{base}/Egypt")]);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].0.ends_with("/wiki/Missing"));

    let egypt = report.corpus.get(1).unwrap();
    assert_eq!(egypt.title, "Egypt");
    assert!(egypt.text.contains("Ancient egypt had many pharaohs."));

    let library = Library::build(report.corpus, Normalizer::new()).unwrap();
    // "pharaoh" occurs in both pages, "ruled" only in the first
    let hits = library.search("ruled pharaoh", 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].doc.title, "Pharaoh");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wiki/Broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/wiki/Broken", server.uri())).unwrap();
    let err = fetcher().fetch(url).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn oversized_pages_are_dropped() {
    let server = MockServer::start().await;
    mount_page(&server, "/wiki/Huge", "Huge", &"pharaoh ".repeat(2_000)).await;
    mount_page(&server, "/wiki/Small", "Small", "pharaoh").await;

    let limited = fetcher().with_max_body_bytes(1_024);
    let huge = Url::parse(&format!("{}/wiki/Huge", server.uri())).unwrap();
    let err = limited.fetch(huge).await.unwrap_err();
    assert!(matches!(err, FetchError::TooLarge { limit: 1_024, .. }));

    let small = Url::parse(&format!("{}/wiki/Small", server.uri())).unwrap();
    let page = limited.fetch(small).await.unwrap();
    assert_eq!(page.title, "Small");
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    // Nothing listens on port 9 of localhost in the test environment
    let url = Url::parse("http://127.0.0.1:9/wiki/Nowhere").unwrap();
    let err = fetcher().fetch(url).await.unwrap_err();
    assert!(matches!(err, FetchError::Http { .. }));
}
