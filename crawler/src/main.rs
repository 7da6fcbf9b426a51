use anyhow::Result;
use clap::Parser;
use crawler::{crawl_web, CrawlArgs};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "crawler")]
#[command(about = "Crawl pages under a URL prefix and list what was fetched")]
struct Cli {
    #[command(flatten)]
    crawl: CrawlArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Cli::parse();
    let config = args.crawl.into_config()?;

    let report = crawl_web(&config).await?;

    println!("Crawled Pages:");
    for doc in report.corpus.iter() {
        println!("{:>4}  {}  ({})", doc.doc_id, doc.url, doc.title);
    }
    if !report.failures.is_empty() {
        println!("\nFailed:");
        for (url, err) in &report.failures {
            println!("      {url}: {err}");
        }
    }
    Ok(())
}
