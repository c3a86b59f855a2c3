//! Testing utilities.
//!
//! [`MockTransport`] stands in for the HTTP layer: it returns canned bodies
//! or failures per endpoint and records every request it receives, so tests
//! can assert how many calls were made and with which parameters.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{HunterError, Result};
use crate::transport::Transport;
use crate::types::Endpoint;

/// A mock transport for testing.
///
/// Clones share state, so keep a clone around to inspect calls after handing
/// one to the client.
#[derive(Default, Clone)]
pub struct MockTransport {
    /// Canned response bodies by endpoint
    bodies: Arc<RwLock<HashMap<Endpoint, String>>>,

    /// Endpoints that should fail, with the failure text
    failures: Arc<RwLock<HashMap<Endpoint, String>>>,

    /// Call tracking
    calls: Arc<RwLock<Vec<MockRequest>>>,
}

/// Record of a request made through the mock transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl MockRequest {
    /// Value of a query parameter, if it was sent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }
}

impl MockTransport {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `endpoint` with a raw body.
    pub fn with_body(self, endpoint: Endpoint, body: impl Into<String>) -> Self {
        self.bodies.write().unwrap().insert(endpoint, body.into());
        self
    }

    /// Respond to `endpoint` with a JSON value.
    pub fn with_json(self, endpoint: Endpoint, body: serde_json::Value) -> Self {
        self.with_body(endpoint, body.to_string())
    }

    /// Make `endpoint` fail as if the network or API did.
    pub fn fail(self, endpoint: Endpoint, message: impl Into<String>) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(endpoint, message.into());
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockRequest> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    fn endpoint_for(url: &str) -> Option<Endpoint> {
        [Endpoint::EmailFinder, Endpoint::DomainSearch]
            .into_iter()
            .find(|e| url.ends_with(e.path()))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<String> {
        self.calls.write().unwrap().push(MockRequest {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });

        let endpoint = Self::endpoint_for(url)
            .ok_or_else(|| HunterError::Transport(format!("404 Not Found: {}", url)))?;

        if let Some(message) = self.failures.read().unwrap().get(&endpoint) {
            return Err(HunterError::Transport(message.clone()));
        }

        self.bodies
            .read()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .ok_or_else(|| HunterError::Transport("Mock connection refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_and_returns_body() {
        let mock = MockTransport::new().with_body(Endpoint::DomainSearch, "{}");
        let query = vec![("domain", "example.com".to_string())];

        let body = mock
            .get("https://api.hunter.io/v2/domain-search", &query)
            .await
            .unwrap();

        assert_eq!(body, "{}");
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].param("domain"), Some("example.com"));
        assert!(!mock.calls()[0].has_param("limit"));
    }

    #[tokio::test]
    async fn test_failure_takes_precedence() {
        let mock = MockTransport::new()
            .with_body(Endpoint::EmailFinder, "{}")
            .fail(Endpoint::EmailFinder, "operation timed out");

        let err = mock
            .get("https://api.hunter.io/v2/email-finder", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, HunterError::Transport(ref m) if m == "operation timed out"));
    }
}
