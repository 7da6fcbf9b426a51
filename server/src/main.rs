use anyhow::Result;
use axum::Router;
use clap::Parser;
use crawler::{crawl_web, CrawlArgs};
use search_core::Library;
use server::build_app;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
struct Args {
    #[command(flatten)]
    crawl: CrawlArgs,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();
    let config = args.crawl.into_config()?;

    let report = crawl_web(&config).await?;
    let library = Library::build(report.corpus, config.normalizer)?;
    tracing::info!(num_docs = library.corpus().len(), "index ready");
    let app: Router = build_app(library);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
