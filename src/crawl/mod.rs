// src/crawl/mod.rs
// =============================================================================
// This module handles the SEO crawl.
//
// Features:
// - Breadth-first crawling starting from a URL
// - A page budget instead of a depth limit
// - Allow-list filtering of disallowed URL patterns
// - Polite crawling with a delay between requests
// =============================================================================

mod filter;
mod queue;

pub use queue::{crawl_website, CrawlConfig};
