// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: run the SEO crawl and write the HTML report
// - serve: start the contact lookup web form
//
// Every flag has a default, so `seo-scout crawl` with no arguments crawls
// the default site with the default budget. Each flag can also be set from
// a SEO_SCOUT_* environment variable.
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_START_URL: &str = "https://www.w3schools.com/";
pub const DEFAULT_MAX_PAGES: usize = 10;
pub const DEFAULT_REPORT_PATH: &str = "w3schools_crawled_data.html";
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Parser, Debug)]
#[command(
    name = "seo-scout",
    version = "0.1.0",
    about = "Crawl a site for SEO metadata, or look up a company's contact details",
    long_about = "seo-scout crawls a website breadth-first and writes the title, meta description, \
                  H1 headings and keywords of every page into a static HTML report. \
                  It can also serve a small web form that guesses a company's website from its \
                  name and scrapes contact details from it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and write an SEO report
    ///
    /// Example: seo-scout crawl --start-url https://example.com --max-pages 25
    Crawl {
        /// URL the crawl starts from
        #[arg(long, env = "SEO_SCOUT_START_URL", default_value = DEFAULT_START_URL)]
        start_url: String,

        /// Maximum number of pages to fetch successfully
        #[arg(long, env = "SEO_SCOUT_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES)]
        max_pages: usize,

        /// Where to write the HTML report (overwritten on each run)
        #[arg(long, env = "SEO_SCOUT_OUTPUT", default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,

        /// Pause after each fetched page, in milliseconds
        #[arg(long, env = "SEO_SCOUT_DELAY_MS", default_value_t = DEFAULT_DELAY_MS)]
        delay_ms: u64,

        /// Also print the crawled records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the contact lookup form
    ///
    /// Example: seo-scout serve --port 8080
    Serve {
        /// Address to bind to
        #[arg(long, env = "SEO_SCOUT_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "SEO_SCOUT_PORT", default_value_t = 5000)]
        port: u16,

        /// Search endpoint used to guess websites
        #[arg(long, env = "SEO_SCOUT_SEARCH_URL", default_value = crate::contact::GOOGLE_SEARCH_URL)]
        search_url: String,
    },
}
