//! Hunter.io email finder tools.
//!
//! Four actions, each one GET request against the Hunter API rendered into a
//! human-readable text block:
//!
//! - find an email from a domain and a person's first/last name
//! - find an email from a company name and a person's first/last name
//! - find an email from a domain and a person's full name
//! - list the email addresses known for a domain
//!
//! Every action returns a [`ToolResponse`]; nothing is propagated as an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use hunter_client::{HunterClient, HunterConfig};
//!
//! let client = HunterClient::new(HunterConfig::from_env());
//!
//! let reply = client
//!     .find_email_by_domain_and_name("stripe.com", "Patrick", "Collison")
//!     .await;
//! println!("{}", reply);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod response;
pub mod testing;
pub mod tool;
pub mod transport;
pub mod types;

pub use config::{ApiKey, HunterConfig, DEFAULT_BASE_URL};
pub use error::{HunterError, Result};
pub use response::ToolResponse;
pub use tool::{ErasedTool, Tool, ToolDefinition, ToolRegistry};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Endpoint, LookupRequest, DEFAULT_DOMAIN_SEARCH_LIMIT};

use std::sync::Arc;
use tracing::debug;

use types::{ApiResponse, DomainSearchData, EmailFinderData};

/// Hunter API client exposing the four lookup actions.
#[derive(Clone)]
pub struct HunterClient {
    config: HunterConfig,
    transport: Arc<dyn Transport>,
}

impl HunterClient {
    /// Create a client that talks to the API over HTTP.
    pub fn new(config: HunterConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: HunterConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    /// Create from `HUNTER_API_KEY` (and optional `HUNTER_BASE_URL`).
    pub fn from_env() -> Self {
        Self::new(HunterConfig::from_env())
    }

    pub fn config(&self) -> &HunterConfig {
        &self.config
    }

    /// Find an email address using a domain and a person's name.
    pub async fn find_email_by_domain_and_name(
        &self,
        domain: &str,
        first_name: &str,
        last_name: &str,
    ) -> ToolResponse {
        let request = LookupRequest::by_domain_and_name(domain, first_name, last_name);
        let not_found = format!("No email found for {} {} at {}.", first_name, last_name, domain);
        self.find_email(&request, not_found).await
    }

    /// Find an email address using a company name and a person's name.
    pub async fn find_email_by_company_and_name(
        &self,
        company: &str,
        first_name: &str,
        last_name: &str,
    ) -> ToolResponse {
        let request = LookupRequest::by_company_and_name(company, first_name, last_name);
        let not_found = format!("No email found for {} {} at {}.", first_name, last_name, company);
        self.find_email(&request, not_found).await
    }

    /// Find an email address using a domain and a person's full name.
    pub async fn find_email_by_full_name(&self, domain: &str, full_name: &str) -> ToolResponse {
        let request = LookupRequest::by_full_name(domain, full_name);
        let not_found = format!("No email found for {} at {}.", full_name, domain);
        self.find_email(&request, not_found).await
    }

    /// Find all email addresses for a domain, up to `limit` (default 10).
    pub async fn domain_search(&self, domain: &str, limit: Option<u32>) -> ToolResponse {
        let limit = limit.unwrap_or(DEFAULT_DOMAIN_SEARCH_LIMIT);
        let request = LookupRequest::domain_search(domain, limit);

        match self.try_domain_search(domain, &request).await {
            Ok(Some(text)) => ToolResponse::Success(text),
            Ok(None) => {
                debug!(domain, "No emails found for domain");
                ToolResponse::Success(format!("No email addresses found for domain {}.", domain))
            }
            Err(e) => ToolResponse::Failure(e.domain_search_message()),
        }
    }

    async fn find_email(&self, request: &LookupRequest, not_found: String) -> ToolResponse {
        match self.try_find_email(request).await {
            Ok(Some(text)) => ToolResponse::Success(text),
            Ok(None) => {
                debug!("Email finder returned no email");
                ToolResponse::Success(not_found)
            }
            Err(e) => ToolResponse::Failure(e.finder_message()),
        }
    }

    async fn try_find_email(&self, request: &LookupRequest) -> Result<Option<String>> {
        let body = self.fetch(Endpoint::EmailFinder, request).await?;
        let response: ApiResponse<EmailFinderData> = serde_json::from_str(&body)?;

        let Some(data) = response.data else {
            return Ok(None);
        };
        let Some(email) = data.email.as_deref() else {
            return Ok(None);
        };
        format::render_email(&data, email).map(Some)
    }

    async fn try_domain_search(
        &self,
        domain: &str,
        request: &LookupRequest,
    ) -> Result<Option<String>> {
        let body = self.fetch(Endpoint::DomainSearch, request).await?;
        let response: ApiResponse<DomainSearchData> = serde_json::from_str(&body)?;

        let Some(data) = response.data else {
            return Ok(None);
        };
        match data.emails.as_deref() {
            Some(emails) if !emails.is_empty() => {
                Ok(Some(format::render_domain_search(domain, emails, &data)))
            }
            _ => Ok(None),
        }
    }

    /// Single GET against `endpoint`. Refuses to run without an API key.
    async fn fetch(&self, endpoint: Endpoint, request: &LookupRequest) -> Result<String> {
        if !self.config.has_api_key() {
            return Err(HunterError::MissingApiKey);
        }

        let url = format!("{}{}", self.config.base_url, endpoint.path());
        let query = request.query(self.config.api_key.expose());
        self.transport.get(&url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;

    #[test]
    fn test_client_builder() {
        let config = HunterConfig::new("hk-test").with_base_url("https://proxy.local/v2");
        let client = HunterClient::with_transport(config, MockTransport::new());

        assert_eq!(client.config().api_key.expose(), "hk-test");
        assert_eq!(client.config().base_url, "https://proxy.local/v2");
    }

    #[tokio::test]
    async fn test_request_targets_endpoint_under_base_url() {
        let transport = MockTransport::new().with_body(
            Endpoint::EmailFinder,
            r#"{"data": {"email": "jane@example.com", "score": 95}}"#,
        );
        let config = HunterConfig::new("hk-test").with_base_url("https://proxy.local/v2");
        let client = HunterClient::with_transport(config, transport.clone());

        client.find_email_by_full_name("example.com", "Jane Doe").await;

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://proxy.local/v2/email-finder");
        assert_eq!(calls[0].param("api_key"), Some("hk-test"));
        assert_eq!(calls[0].param("full_name"), Some("Jane Doe"));
    }
}
