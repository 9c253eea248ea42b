use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::types::{Comment, Post};

/// Errors that can occur while talking to the posts API.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// The API returned a non-success status. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// The response body did not decode as the expected shape. Not retryable.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// The read-only surface of the posts API.
///
/// The UI depends on this trait, never on HTTP directly. Tests substitute
/// a canned implementation; production uses [`RestClient`].
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// GET `{base}/posts` — the full post collection.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// GET `{base}/posts/{id}` — a single post.
    async fn get_post(&self, id: u64) -> Result<Post, ApiError>;

    /// GET `{base}/comments?post_id={id}` — comments belonging to one post.
    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError>;
}

/// reqwest-backed [`PostsApi`] implementation.
pub struct RestClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            base_url: sanitize_base_url(base_url.into()),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a URL and decode the JSON body.
    ///
    /// Decoding goes through the body text rather than `Response::json` so
    /// that transport failures and shape mismatches stay distinguishable.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("API error: {} - {}", status.as_u16(), message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PostsApi for RestClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json(format!("{}/posts", self.base_url)).await
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        self.get_json(format!("{}/posts/{id}", self.base_url)).await
    }

    async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(format!("{}/comments?post_id={post_id}", self.base_url))
            .await
    }
}

/// Default to https and strip trailing slashes so endpoint paths join cleanly.
fn sanitize_base_url(mut base: String) -> String {
    if !base.starts_with("http://") && !base.starts_with("https://") {
        base = format!("https://{base}");
    }
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_adds_scheme() {
        assert_eq!(
            sanitize_base_url("gorest.co.in/public/v2".to_string()),
            "https://gorest.co.in/public/v2"
        );
    }

    #[test]
    fn sanitize_keeps_explicit_http() {
        assert_eq!(
            sanitize_base_url("http://localhost:8080".to_string()),
            "http://localhost:8080"
        );
    }

    #[test]
    fn sanitize_strips_trailing_slashes() {
        assert_eq!(
            sanitize_base_url("https://example.com/v2///".to_string()),
            "https://example.com/v2"
        );
    }

    #[test]
    fn client_reports_sanitized_base_url() {
        let client = RestClient::new("example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Api {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 503): down");
        assert_eq!(
            ApiError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
    }
}
