// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr so stdout stays clean)
// 3. Load and validate the configuration; a bad config stops us here,
//    before any page is fetched
// 4. Run the parallel crawl and print (and optionally save) the result
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod output;
mod page;
mod pattern;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::{ParallelCrawler, SystemClock};
use page::HtmlPageSource;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain: "invalid configuration: parallelism must be..."
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.load_config()?;
    let settings = config.validate().context("invalid configuration")?;

    info!(
        start_pages = settings.start_pages.len(),
        ignored_urls = ?settings.ignored_urls.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        parallelism = settings.parallelism,
        "configuration loaded"
    );

    let page_source = HtmlPageSource::new(settings.ignored_words.clone())
        .context("failed to create HTTP client")?;
    let crawler = ParallelCrawler::new(&settings, Arc::new(page_source), Arc::new(SystemClock));
    info!(
        workers = crawler.pool_size(),
        cpus = ParallelCrawler::max_parallelism(),
        "worker pool ready"
    );

    let result = crawler.crawl(&settings.start_pages).await;

    if let Some(path) = &settings.result_path {
        output::write_result_file(path, &result)?;
        info!(path = %path.display(), "result written");
    }

    output::print_results(&result, cli.json)
}

// RUST_LOG always wins; otherwise -v switches our own logs from info to debug
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "word_crawler=debug,warn"
    } else {
        "word_crawler=info,warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
