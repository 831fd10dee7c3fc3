// src/contact/mod.rs
// =============================================================================
// This module implements the contact lookup behind the web form.
//
// Submodules:
// - search: Guesses a website URL from a name via a search query
// - scrape: Fetches that website and extracts contact/location/role text
// - server: The actix-web form endpoint
//
// A lookup either yields a full ContactResult or a ContactError; callers
// never see half-filled results.
// =============================================================================

mod scrape;
mod search;
pub mod server;

use reqwest::Client;
use thiserror::Error;

use crate::fetch::FetchError;

pub use scrape::{scrape_contact_info, ContactResult};
pub use search::{find_website, GOOGLE_SEARCH_URL};

#[derive(Debug, Error)]
pub enum ContactError {
    /// The search turned up no usable website
    #[error("Could not find a relevant website for the given name.")]
    NoWebsite,
    /// The guessed website could not be scraped
    #[error("An error occurred while scraping: {0}")]
    Scrape(#[from] FetchError),
}

// Name-to-contact-details lookup shared by all request handlers
pub struct ContactFinder {
    client: Client,
    search_url: String,
}

impl ContactFinder {
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        ContactFinder {
            client,
            search_url: search_url.into(),
        }
    }

    /// Resolves `name` to a website and scrapes it.
    pub async fn lookup(&self, name: &str) -> Result<ContactResult, ContactError> {
        let url = find_website(&self.client, &self.search_url, name)
            .await
            .ok_or(ContactError::NoWebsite)?;

        scrape_contact_info(&self.client, &url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{build_client, BROWSER_USER_AGENT};
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_lookup_resolves_and_scrapes() {
        let mut server = Server::new_async().await;
        let site = format!("{}/acme", server.url());
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(format!(r#"<a href="/url?q={}&sa=U">Acme</a>"#, site))
            .create_async()
            .await;
        let page = server
            .mock("GET", "/acme")
            .with_status(200)
            .with_body("<p>Our address: 5 Harbour Rd</p><p>info@acme.test</p>")
            .expect(1)
            .create_async()
            .await;

        let client = build_client(BROWSER_USER_AGENT).unwrap();
        let finder = ContactFinder::new(client, format!("{}/search", server.url()));
        let result = finder.lookup("Acme").await.unwrap();

        assert_eq!(result.contact_info, "info@acme.test");
        assert_eq!(result.location, "Our address: 5 Harbour Rd");
        assert_eq!(result.role, "Not found");
        page.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_without_candidate() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<p>did not match any documents</p>")
            .create_async()
            .await;

        let client = build_client(BROWSER_USER_AGENT).unwrap();
        let finder = ContactFinder::new(client, format!("{}/search", server.url()));
        let error = finder.lookup("Nobody").await.unwrap_err();

        assert!(matches!(error, ContactError::NoWebsite));
        assert_eq!(
            error.to_string(),
            "Could not find a relevant website for the given name."
        );
    }

    #[tokio::test]
    async fn test_lookup_scrape_failure_has_no_fields() {
        let mut server = Server::new_async().await;
        let site = format!("{}/down", server.url());
        server
            .mock("GET", "/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(format!(r#"<a href="/url?q={}&sa=U">Down</a>"#, site))
            .create_async()
            .await;
        server
            .mock("GET", "/down")
            .with_status(500)
            .create_async()
            .await;

        let client = build_client(BROWSER_USER_AGENT).unwrap();
        let finder = ContactFinder::new(client, format!("{}/search", server.url()));
        let error = finder.lookup("Down Inc").await.unwrap_err();

        assert!(error
            .to_string()
            .starts_with("An error occurred while scraping: HTTP 500"));
    }
}
