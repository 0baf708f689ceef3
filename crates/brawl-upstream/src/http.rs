//! HTTP backend abstraction for the upstream APIs.
//!
//! The clients talk to a trait-based backend so that they can be exercised
//! against canned responses in tests. The production backend is a thin
//! wrapper around reqwest: one request per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use url::Url;

use crate::error::ClientResult;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Status and body of an upstream answer, read in full.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP backends that can issue a GET and hand back the answer.
///
/// Non-success statuses are NOT errors at this level; the clients decide
/// what a rejection means for their API.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url`, optionally with an `Authorization: Bearer` header.
    async fn get(&self, url: &Url, bearer: Option<&str>) -> ClientResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend. Without a timeout the reqwest default applies.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    fn build_request(&self, url: &Url, bearer: Option<&str>) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url, bearer: Option<&str>) -> ClientResult<RawResponse> {
        let response = self.build_request(url, bearer).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());

        let redirect = RawResponse {
            status: 301,
            body: Vec::new(),
        };
        assert!(!redirect.is_success());

        let not_found = RawResponse {
            status: 404,
            body: Vec::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_reqwest_backend_creation() {
        assert!(ReqwestBackend::new(None, "test-agent").is_ok());
        assert!(ReqwestBackend::new(Some(Duration::from_secs(1)), "test-agent").is_ok());
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new().with_json("players", &json!({"name": "Colt"}));

        let url = Url::parse("https://example.com/v1/players/%23ABC").unwrap();
        let response = backend.get(&url, Some("token")).await.unwrap();

        assert_eq!(response.status, 200);
        let value: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(value["name"], "Colt");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("token"));
    }

    #[tokio::test]
    async fn test_fake_backend_unknown_url() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://example.com/unknown").unwrap();

        let result = backend.get(&url, None).await;
        assert!(matches!(
            result,
            Err(crate::error::ClientError::ApiRequestFailed { status: 404, .. })
        ));
    }
}
