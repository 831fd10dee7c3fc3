// src/crawl/queue.rs
// =============================================================================
// This module implements the SEO crawl with a breadth-first approach.
//
// How it works:
// 1. Start with the initial URL in the frontier queue
// 2. Pop the oldest URL; skip it if already visited or disallowed
// 3. Mark it visited, then fetch it
// 4. Extract the SEO record and queue every allowed link it contains
// 5. Repeat until the frontier is empty or the page budget is spent
//
// Politeness:
// - A fixed delay after every successful fetch
//
// Only successful fetches count towards the budget. A failed URL is still
// marked visited, so it is never retried.
// =============================================================================

use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use super::filter::is_allowed;
use crate::fetch::fetch_page;
use crate::seo::{extract_page, PageRecord};

// Settings for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub start_url: String,
    /// Maximum number of successfully fetched pages
    pub max_pages: usize,
    /// Pause after each successful fetch
    pub delay: Duration,
}

// Frontier/visited bookkeeping for a single crawl
#[derive(Debug)]
struct CrawlSession {
    visited: HashSet<String>,
    frontier: VecDeque<String>,
    page_budget: usize,
    pages_crawled: usize,
}

impl CrawlSession {
    fn new(start_url: &str, page_budget: usize) -> Self {
        CrawlSession {
            visited: HashSet::new(),
            frontier: VecDeque::from([start_url.to_string()]),
            page_budget,
            pages_crawled: 0,
        }
    }

    // Next URL to look at, or None once the budget is spent or nothing is left
    fn next_candidate(&mut self) -> Option<String> {
        if self.pages_crawled >= self.page_budget {
            return None;
        }
        self.frontier.pop_front()
    }

    fn should_visit(&self, url: &str) -> bool {
        !self.visited.contains(url) && is_allowed(url)
    }

    // Returns false if the URL was already visited
    fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    fn enqueue(&mut self, links: Vec<String>) {
        self.frontier
            .extend(links.into_iter().filter(|link| is_allowed(link)));
    }

    fn record_success(&mut self) {
        self.pages_crawled += 1;
    }
}

// Crawls a site starting from config.start_url
//
// Parameters:
//   client: HTTP client (carries the crawler User-Agent)
//   config: start URL, page budget and politeness delay
//
// Returns: one PageRecord per successfully fetched page, in BFS order
pub async fn crawl_website(client: &Client, config: &CrawlConfig) -> Vec<PageRecord> {
    let mut session = CrawlSession::new(&config.start_url, config.max_pages);
    let mut records = Vec::new();

    while let Some(url) = session.next_candidate() {
        if !session.should_visit(&url) {
            log::debug!("Skipping {}", url);
            continue;
        }

        session.mark_visited(&url);

        match fetch_page(client, &url).await {
            Ok(html) => {
                let (record, links) = extract_page(&html, &url);
                records.push(record);
                session.enqueue(links);
                session.record_success();

                log::info!("Crawled: {}", url);

                if !config.delay.is_zero() {
                    tokio::time::sleep(config.delay).await;
                }
            }
            Err(e) => {
                log::warn!("Error fetching {}: {}", url, e);
            }
        }
    }

    log::debug!(
        "Crawl finished: {} page(s) crawled, {} URL(s) visited, {} left in frontier",
        session.pages_crawled,
        session.visited.len(),
        session.frontier.len()
    );

    records
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the URL marked visited *before* the fetch?
//    - A page that links to itself (or a cycle A -> B -> A) would otherwise
//      be queued again while the first fetch is still in flight
//    - It also means a URL that failed is not retried later
//
// 2. Why VecDeque?
//    - push_back() + pop_front() gives FIFO order, which is what makes the
//      crawl breadth-first: everything found on page 1 is visited before
//      anything found on page 2's links
//
// 3. Why check is_allowed both when queueing and when popping?
//    - Queue-time filtering keeps the frontier small
//    - Pop-time filtering also covers the start URL, which never went
//      through enqueue()
// -----------------------------------------------------------------------------
