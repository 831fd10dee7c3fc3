// src/contact/scrape.rs
// =============================================================================
// Pulls contact details out of a company website with plain text matching.
//
// Three heuristics, all case-insensitive substring matches over visible text:
// - contact info: text nodes with an '@', then text nodes mentioning
//                 "phone" or "contact"
// - location:     <p> text mentioning "address" or "location"
// - role:         <h1>/<h2>/<p> text mentioning "about", "services" or
//                 "what we do"
//
// Matches are joined with ", "; a field without matches reads "Not found".
// The page is fetched exactly once and any fetch failure fails the whole
// scrape; there are no partial results.
// =============================================================================

use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use super::ContactError;
use crate::fetch::fetch_page;

pub const NOT_FOUND: &str = "Not found";

const PHONE_KEYWORDS: [&str; 2] = ["phone", "contact"];
const LOCATION_KEYWORDS: [&str; 2] = ["address", "location"];
const ROLE_KEYWORDS: [&str; 3] = ["about", "services", "what we do"];

// Text under these elements is never rendered
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());
static ROLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1, h2, p").unwrap());

/// Scraped details for one website.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactResult {
    pub contact_info: String,
    pub location: String,
    pub role: String,
    pub elapsed: Duration,
}

impl ContactResult {
    /// Scrape duration as shown to the user, e.g. `"0.42 seconds"`.
    pub fn time_taken(&self) -> String {
        format!("{:.2} seconds", self.elapsed.as_secs_f64())
    }
}

// Fetches `url` once and runs all three heuristics over it
pub async fn scrape_contact_info(client: &Client, url: &str) -> Result<ContactResult, ContactError> {
    let started = Instant::now();

    let html = fetch_page(client, url).await?;
    let document = Html::parse_document(&html);

    let result = ContactResult {
        contact_info: or_not_found(extract_contact_info(&document)),
        location: or_not_found(extract_location(&document)),
        role: or_not_found(extract_role(&document)),
        elapsed: started.elapsed(),
    };

    log::info!("Scraped {} in {}", url, result.time_taken());
    Ok(result)
}

fn extract_contact_info(document: &Html) -> Option<String> {
    let texts: Vec<&str> = visible_text(document)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();

    let mut matches: Vec<&str> = texts.iter().copied().filter(|text| text.contains('@')).collect();

    // A node like "Contact: a@b.com" already matched above
    let phones: Vec<&str> = texts
        .iter()
        .copied()
        .filter(|text| !text.contains('@') && contains_any(text, &PHONE_KEYWORDS))
        .collect();
    matches.extend(phones);

    join_matches(matches)
}

fn extract_location(document: &Html) -> Option<String> {
    matching_element_text(document, &PARAGRAPH_SELECTOR, &LOCATION_KEYWORDS)
}

fn extract_role(document: &Html) -> Option<String> {
    matching_element_text(document, &ROLE_SELECTOR, &ROLE_KEYWORDS)
}

// Trimmed text of every element matched by `selector` that mentions a keyword
fn matching_element_text(document: &Html, selector: &Selector, keywords: &[&str]) -> Option<String> {
    let texts: Vec<String> = document
        .select(selector)
        .map(|element| element.text().collect::<String>())
        .filter(|text| contains_any(text, keywords))
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    join_matches(texts)
}

// Every text node in document order, minus script/style contents
fn visible_text(document: &Html) -> impl Iterator<Item = &str> {
    document.tree.root().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()));
        if hidden {
            None
        } else {
            Some(&**text)
        }
    })
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

fn join_matches<S: AsRef<str>>(matches: Vec<S>) -> Option<String> {
    if matches.is_empty() {
        return None;
    }
    let joined: Vec<&str> = matches.iter().map(|m| m.as_ref()).collect();
    Some(joined.join(", "))
}

fn or_not_found(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_FOUND.to_string())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why walk document.tree instead of using a selector?
//    - CSS selectors only match elements; the '@' rule looks at individual
//      text nodes wherever they sit
//    - descendants() yields every node (elements, text, comments) in
//      document order
//
// 2. What is &**text?
//    - text is a &Text; *text is the Text node; **text derefs Text to str
//    - & borrows that str for as long as the document lives
//
// 3. Why Option<String> from the extractors?
//    - None means "nothing matched"; the "Not found" string is only a
//      display default and is applied once, in scrape_contact_info
// -----------------------------------------------------------------------------
