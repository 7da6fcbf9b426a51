use anyhow::Result;
use clap::Parser;
use crawler::{crawl_web, CrawlArgs};
use search_core::{Library, DEFAULT_TOP_K};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "repl")]
#[command(about = "Crawl, build a TF-IDF index in memory, then answer queries from stdin", long_about = None)]
struct Cli {
    #[command(flatten)]
    crawl: CrawlArgs,
    /// Number of results shown per query
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    let config = cli.crawl.into_config()?;

    let report = crawl_web(&config).await?;
    let library = Library::build(report.corpus, config.normalizer)?;
    tracing::info!(num_docs = library.corpus().len(), failed = report.failures.len(), "index ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    repl::run_session(&library, stdin.lock(), &mut stdout, cli.top_k)?;
    Ok(())
}
