//! HTTP transport seam.
//!
//! The client only ever issues plain GET requests with a query string, so the
//! transport is reduced to that single call. Swap in
//! [`MockTransport`](crate::testing::MockTransport) to test without network.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{HunterError, Result};

/// Issues a GET request and returns the body of a 2xx response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Non-2xx statuses and network failures are both `HunterError::Transport`.
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<String>;
}

/// Production transport backed by `reqwest`.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<String> {
        let params: Vec<&str> = query.iter().map(|(k, _)| *k).collect();
        debug!(url = %url, params = ?params, "Hunter request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                let err = HunterError::from_reqwest(e);
                warn!(url = %url, error = %err, "Hunter request failed");
                err
            })?;

        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!(url = %url, status = %status, "Hunter API error");
            HunterError::from_reqwest(e)
        })?;

        response.text().await.map_err(HunterError::from_reqwest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let transport = ReqwestTransport::new();
        let query = vec![("api_key", "hk-secret".to_string())];

        let err = transport
            .get("http://127.0.0.1:1/v2/email-finder", &query)
            .await
            .unwrap_err();

        match err {
            HunterError::Transport(msg) => {
                assert!(!msg.contains("hk-secret"), "{}", msg);
                assert!(!msg.is_empty());
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
