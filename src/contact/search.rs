// src/contact/search.rs
// =============================================================================
// Guesses a company's website from its name.
//
// Strategy:
// - Ask the search engine for "<name> official website"
// - Scan the result page's anchors in document order
// - The first href carrying a results redirect ("url?q=") that is not a
//   cached copy ("webcache") holds the target URL between "url?q=" and the
//   next '&'
//
// This is a heuristic over the search engine's plain HTML layout and fails
// quietly: every error ends in None.
// =============================================================================

use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;

pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

const REDIRECT_MARKER: &str = "url?q=";
const CACHE_MARKER: &str = "webcache";

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

// Looks up the most probable website for `name`
//
// Parameters:
//   client: HTTP client (should carry a desktop browser User-Agent)
//   search_url: search endpoint, GOOGLE_SEARCH_URL outside of tests
//   name: free-text company or person name
pub async fn find_website(client: &Client, search_url: &str, name: &str) -> Option<String> {
    let query = format!("{} official website", name);

    let response = match client.get(search_url).query(&[("q", &query)]).send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error finding website for {:?}: {}", name, e);
            return None;
        }
    };

    let html = match response.text().await {
        Ok(html) => html,
        Err(e) => {
            log::error!("Error reading search results for {:?}: {}", name, e);
            return None;
        }
    };

    let candidate = extract_candidate(&html);
    match &candidate {
        Some(url) => log::info!("Probable website for {:?}: {}", name, url),
        None => log::info!("No website candidate found for {:?}", name),
    }
    candidate
}

// Picks the first redirect target out of a search results page
fn extract_candidate(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let href = document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .find(|href| href.contains(REDIRECT_MARKER) && !href.contains(CACHE_MARKER))?;

    let target = href.split(REDIRECT_MARKER).nth(1)?;
    let target = target.split('&').next().unwrap_or(target);

    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}
