//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent string
//! - A single GET per URL, with no retries
//! - Turning transport failures into a `FetchResult::Failure` value
//!
//! Any response whose body can be read counts as a success, whatever its
//! status code. Error pages still carry links.

use crate::config::UserAgentConfig;
use crate::crawler::parser::Document;
use crate::MydsError;
use reqwest::Client;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// A response body was received
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Content-Type header value, empty if absent
        content_type: String,
        /// Page body content
        body: String,
    },

    /// The request or the body read failed (DNS, connection, TLS, decoding)
    Failure {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns true for [`FetchResult::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use myds::config::UserAgentConfig;
/// use myds::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, MydsError> {
    let client = Client::builder()
        .user_agent(config.header_value())
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Issues a single GET request and reads the body
///
/// This never logs; reporting a failure is left to the caller.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::Failure {
                error: describe_error(&e),
            }
        }
    };

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code,
            content_type,
            body,
        },
        Err(e) => FetchResult::Failure {
            error: describe_error(&e),
        },
    }
}

fn describe_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        format!("Invalid request: {}", e)
    } else if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    }
}

/// Fetches a URL and parses the response as HTML
///
/// A failed fetch is logged with the URL and the reason and reported as
/// `None`; callers skip the URL and carry on.
pub async fn fetch_document(client: &Client, url: &str) -> Option<Document> {
    tracing::debug!("GET {}", url);

    match fetch_url(client, url).await {
        FetchResult::Success {
            final_url,
            status_code,
            body,
            ..
        } => {
            tracing::debug!(
                "Fetched {} (status {}, final url {}, {} bytes)",
                url,
                status_code,
                final_url,
                body.len()
            );
            Some(Document::parse(&body))
        }
        FetchResult::Failure { error } => {
            tracing::warn!("Error in HTTP GET from {}: {}", url, error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&UserAgentConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_is_failure() {
        let client = build_http_client(&UserAgentConfig::default()).unwrap();
        let result = fetch_url(&client, "not a url").await;
        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_fetch_document_unreachable_is_none() {
        let client = build_http_client(&UserAgentConfig::default()).unwrap();
        // Port 1 on loopback refuses connections
        assert!(fetch_document(&client, "http://127.0.0.1:1/").await.is_none());
    }
}
