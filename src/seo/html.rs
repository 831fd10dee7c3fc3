// src/seo/html.rs
// =============================================================================
// This module turns one fetched HTML page into a PageRecord.
//
// Extracted fields:
// - title:            text of the first <title>
// - meta description: content of the first <meta name="description">
// - h1 tags:          trimmed text of every <h1>, in document order
// - keywords:         content of the first <meta name="keywords">, split on ','
// - links:            href of every <a href>, resolved against the page URL
//
// A missing field is not an error. Title and meta description are kept as
// Option so "absent" stays distinguishable from "present but empty"; the
// report's default strings are applied through the *_or_default accessors.
// =============================================================================

use scraper::{Html, Selector};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::sync::LazyLock;
use url::Url;

pub const NO_TITLE: &str = "No title";
pub const NO_META_DESCRIPTION: &str = "No meta description";

// Selectors are constants and known to be valid, so unwrap() here can only
// fail on a programmer error
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="keywords"]"#).unwrap());
static H1_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// The SEO fields extracted from one successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1_tags: Vec<String>,
    pub keywords: Vec<String>,
}

impl PageRecord {
    /// Title as shown in the report, `"No title"` when the page has none.
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Meta description as shown in the report.
    pub fn meta_description_or_default(&self) -> &str {
        self.meta_description.as_deref().unwrap_or(NO_META_DESCRIPTION)
    }
}

// JSON output shows the same default strings as the report
impl Serialize for PageRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PageRecord", 5)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("title", self.title_or_default())?;
        state.serialize_field("meta_description", self.meta_description_or_default())?;
        state.serialize_field("h1_tags", &self.h1_tags)?;
        state.serialize_field("keywords", &self.keywords)?;
        state.end()
    }
}

// Extracts the SEO record and all outbound links from a page
//
// Parameters:
//   html: the page body
//   base_url: the URL the page was fetched from (for resolving relative links)
//
// Returns: (record, absolute link URLs in document order)
pub fn extract_page(html: &str, base_url: &str) -> (PageRecord, Vec<String>) {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>());

    let meta_description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string);

    let h1_tags = document
        .select(&H1_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();

    let keywords = document
        .select(&META_KEYWORDS_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(split_keywords)
        .unwrap_or_default();

    log::debug!("Extracted SEO fields from {}", base_url);

    let record = PageRecord {
        url: base_url.to_string(),
        title,
        meta_description,
        h1_tags,
        keywords,
    };

    (record, extract_links(&document, base_url))
}

// Splits a keywords attribute on ',' and trims each entry
//
// Empty entries are kept: "a,,b" gives ["a", "", "b"].
fn split_keywords(content: &str) -> Vec<String> {
    content
        .split(',')
        .map(|keyword| keyword.trim().to_string())
        .collect()
}

// Collects the href of every anchor, resolved to an absolute URL
//
// Every scheme is kept (mailto:, javascript:, ...); the crawl loop simply
// fails to fetch those and moves on.
fn extract_links(document: &Html, base_url: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Invalid base URL {}: {}", base_url, e);
            None
        }
    };

    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(base.as_ref(), href))
        .collect()
}

// Resolves a link (possibly relative) to an absolute URL
//
// Without a usable base only already-absolute hrefs survive.
fn resolve_link(base: Option<&Url>, href: &str) -> Option<String> {
    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };
    resolved.ok().map(|url| url.to_string())
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why LazyLock for selectors?
//    - Selector::parse does real work (it compiles the CSS selector)
//    - LazyLock parses each selector once, on first use, and shares it
//
// 2. What does element.text() return?
//    - An iterator over every text node under the element
//    - collect::<String>() glues them together: <h1>Hi <b>there</b></h1>
//      becomes "Hi there"
//
// 3. Why Url::join instead of string concatenation?
//    - join follows the standard relative-reference rules, so "../a",
//      "/a", "a" and "//host/a" all resolve the way a browser would
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"
        <html>
          <head>
            <title>Learn Rust</title>
            <meta name="description" content="Tutorials and references">
            <meta name="keywords" content="a, b ,c">
          </head>
          <body>
            <h1>  Welcome  </h1>
            <h1>Second <em>heading</em></h1>
            <a href="/docs">Docs</a>
            <a href="https://other.com/x">Other</a>
            <a>No href</a>
          </body>
        </html>
    "#;

    #[test]
    fn test_extract_all_fields() {
        let (record, links) = extract_page(FULL_PAGE, "https://example.com/page");

        assert_eq!(record.url, "https://example.com/page");
        assert_eq!(record.title_or_default(), "Learn Rust");
        assert_eq!(record.meta_description_or_default(), "Tutorials and references");
        assert_eq!(record.h1_tags, vec!["Welcome", "Second heading"]);
        assert_eq!(record.keywords, vec!["a", "b", "c"]);
        assert_eq!(
            links,
            vec!["https://example.com/docs", "https://other.com/x"]
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let (record, links) = extract_page("<html><body><p>bare</p></body></html>", "https://example.com/");

        assert_eq!(record.title, None);
        assert_eq!(record.title_or_default(), "No title");
        assert_eq!(record.meta_description_or_default(), "No meta description");
        assert!(record.h1_tags.is_empty());
        assert!(record.keywords.is_empty());
        assert!(links.is_empty());
    }

    #[test]
    fn test_json_uses_default_strings() {
        let (record, _) = extract_page("<h1>Only a heading</h1>", "https://example.com/");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "url": "https://example.com/",
                "title": "No title",
                "meta_description": "No meta description",
                "h1_tags": ["Only a heading"],
                "keywords": [],
            })
        );
    }

    #[test]
    fn test_first_meta_description_wins() {
        let html = r#"
            <meta name="description" content="first">
            <meta name="description" content="second">
        "#;
        let (record, _) = extract_page(html, "https://example.com/");
        assert_eq!(record.meta_description.as_deref(), Some("first"));
    }

    #[test]
    fn test_keywords_keep_empty_entries() {
        assert_eq!(split_keywords("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_resolve_relative_links() {
        let html = r#"
            <a href="../about">About</a>
            <a href="contact.html">Contact</a>
            <a href="mailto:team@example.com">Mail</a>
        "#;
        let (_, links) = extract_page(html, "https://example.com/docs/intro/");
        assert_eq!(
            links,
            vec![
                "https://example.com/docs/about",
                "https://example.com/docs/intro/contact.html",
                "mailto:team@example.com",
            ]
        );
    }

    #[test]
    fn test_invalid_base_keeps_absolute_links() {
        let html = r#"<a href="/relative">R</a><a href="https://example.com/abs">A</a>"#;
        let (_, links) = extract_page(html, "not a url");
        assert_eq!(links, vec!["https://example.com/abs"]);
    }
}
