// src/fetch.rs
// =============================================================================
// Shared HTTP plumbing for both the crawler and the contact lookup.
//
// Key functionality:
// - Builds a reqwest Client with a fixed User-Agent, timeout and redirect cap
// - Fetches a page body with a single GET (no retries)
// - Turns every failure mode into a FetchError the caller can log and skip
//
// A failed fetch is never fatal: the crawler abandons that URL, and the
// contact lookup reports it as a scrape error.
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// User-Agent sent by the crawler.
pub const CRAWLER_USER_AGENT: &str = "Mozilla/5.0 (compatible; SEO-Crawler/1.0)";

/// User-Agent sent by the contact lookup. Search engines serve plain HTML
/// results to regular desktop browsers.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;

// Everything that can go wrong while fetching a single page
//
// The transport variants carry the full reqwest error chain so the log line
// still says *why* a fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("too many redirects: {0}")]
    TooManyRedirects(String),
    #[error("could not resolve hostname: {0}")]
    Dns(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("SSL certificate error: {0}")]
    Ssl(String),
    #[error("{0}")]
    Other(String),
}

// Categorizes reqwest errors
//
// reqwest doesn't expose DNS or TLS failures as distinct kinds, so those are
// recognised from the error chain text. TLS handshake failures also report
// is_connect(), so they are checked first.
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        let chain = error_chain(&error);
        let lower = chain.to_lowercase();

        if error.is_timeout() {
            FetchError::Timeout(chain)
        } else if error.is_redirect() {
            FetchError::TooManyRedirects(chain)
        } else if is_tls_failure(&lower) {
            FetchError::Ssl(chain)
        } else if error.is_connect() {
            if lower.contains("dns") || lower.contains("failed to lookup address") {
                FetchError::Dns(chain)
            } else {
                FetchError::Connect(chain)
            }
        } else {
            FetchError::Other(chain)
        }
    }
}

fn is_tls_failure(lower: &str) -> bool {
    ["certificate", "ssl", "tls", "handshake"]
        .iter()
        .any(|marker| lower.contains(marker))
}

// Joins an error and all of its sources: "outer: inner: root cause"
//
// reqwest's own Display stops at "error sending request for url (...)".
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

// Creates the HTTP client used for a whole command run
//
// The client is reused for every request so connections are pooled.
pub fn build_client(user_agent: &str) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(REQUEST_TIMEOUT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()?;
    Ok(client)
}

// Fetches a web page and returns its HTML content
//
// Returns an error for transport failures and for any non-2xx status.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let html = response.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .match_header("user-agent", CRAWLER_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><title>Hi</title></html>")
            .expect(1)
            .create_async()
            .await;

        let client = build_client(CRAWLER_USER_AGENT).unwrap();
        let html = fetch_page(&client, &format!("{}/page", server.url()))
            .await
            .unwrap();

        assert_eq!(html, "<html><title>Hi</title></html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_error_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = build_client(CRAWLER_USER_AGENT).unwrap();
        let result = fetch_page(&client, &format!("{}/missing", server.url())).await;

        match result {
            Err(FetchError::Status(status)) => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused_keeps_cause() {
        let client = build_client(CRAWLER_USER_AGENT).unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:1/").await;

        match result {
            Err(FetchError::Connect(cause)) => {
                assert!(cause.contains("127.0.0.1:1"));
                assert!(cause.to_lowercase().contains("refused"));
            }
            other => panic!("expected connect error, got {:?}", other),
        }
    }

    #[test]
    fn test_tls_markers() {
        assert!(is_tls_failure("invalid peer certificate: unknownissuer"));
        assert!(is_tls_failure("received fatal alert: handshakefailure"));
        assert!(!is_tls_failure("tcp connect error: connection refused"));
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendError(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_sources() {
        let error = SendError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(error_chain(&error), "error sending request: Connection refused");

        let plain = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(error_chain(&plain), "boom");
    }

    #[test]
    fn test_transport_error_message_keeps_cause() {
        let error = FetchError::Connect("tcp connect error: Connection refused".to_string());
        assert_eq!(
            error.to_string(),
            "connection failed: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_status_error_message() {
        let error = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "HTTP 500 Internal Server Error");
    }
}
