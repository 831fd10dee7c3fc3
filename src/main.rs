// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info", written to stdout)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the crawl or serve handler
//
// Exit codes:
// - crawl always exits 0; fetch and report failures are logged, not raised
// - serve exits 2 if the server cannot start
// =============================================================================

mod cli;
mod contact;
mod crawl;
mod fetch;
mod seo;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use env_logger::Env;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            start_url,
            max_pages,
            output,
            delay_ms,
            json,
        } => {
            let config = crawl::CrawlConfig {
                start_url,
                max_pages,
                delay: Duration::from_millis(delay_ms),
            };
            Ok(handle_crawl(&config, &output, json).await)
        }
        Commands::Serve {
            host,
            port,
            search_url,
        } => handle_serve(&host, port, search_url).await,
    }
}

// Handles the 'crawl' subcommand
//
// Never fails: errors are logged and the exit code is always 0.
async fn handle_crawl(config: &crawl::CrawlConfig, output: &Path, json: bool) -> i32 {
    println!("🔍 Crawling website: {}", config.start_url);
    println!("📊 Page budget: {}", config.max_pages);

    let client = match fetch::build_client(fetch::CRAWLER_USER_AGENT) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            return 0;
        }
    };

    let records = crawl::crawl_website(&client, config).await;
    println!("📄 Crawled {} page(s)", records.len());

    if json {
        match serde_json::to_string_pretty(&records) {
            Ok(json_output) => println!("{}", json_output),
            Err(e) => log::error!("Failed to serialize records: {}", e),
        }
    }

    match seo::write_report(output, &records) {
        Ok(()) => println!("✅ Report written to {}", output.display()),
        Err(e) => log::error!("{:#}", e),
    }

    0
}

// Handles the 'serve' subcommand
async fn handle_serve(host: &str, port: u16, search_url: String) -> Result<i32> {
    let client = fetch::build_client(fetch::BROWSER_USER_AGENT)?;
    let finder = contact::ContactFinder::new(client, search_url);

    let address = format!("{}:{}", host, port);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    println!("🌐 Contact finder listening on http://{}", address);

    contact::server::run(listener, finder)?.await?;
    Ok(0)
}
