use serde::{Deserialize, Deserializer};

/// Default number of contacts requested from the domain-search endpoint.
pub const DEFAULT_DOMAIN_SEARCH_LIMIT: u32 = 10;

/// Hunter API endpoints used by this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    EmailFinder,
    DomainSearch,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::EmailFinder => "/email-finder",
            Self::DomainSearch => "/domain-search",
        }
    }
}

/// Identifying parameters for a single lookup.
///
/// Only the fields that are set end up in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRequest {
    pub domain: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub limit: Option<u32>,
}

impl LookupRequest {
    pub fn by_domain_and_name(domain: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            ..Default::default()
        }
    }

    pub fn by_company_and_name(company: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            company: Some(company.to_string()),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            ..Default::default()
        }
    }

    pub fn by_full_name(domain: &str, full_name: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            full_name: Some(full_name.to_string()),
            ..Default::default()
        }
    }

    pub fn domain_search(domain: &str, limit: u32) -> Self {
        Self {
            domain: Some(domain.to_string()),
            limit: Some(limit),
            ..Default::default()
        }
    }

    /// Query parameters for this lookup, with the API key appended last.
    pub fn query(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(5);
        let fields = [
            ("domain", &self.domain),
            ("company", &self.company),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("full_name", &self.full_name),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                params.push((name, value.clone()));
            }
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params.push(("api_key", api_key.to_string()));
        params
    }
}

/// Wrapper for Hunter API responses. `data` may be missing or null.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
}

/// Payload of `GET /email-finder`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailFinderData {
    pub email: Option<String>,
    /// `None` when the key is absent, `Some(Value::Null)` when sent as null.
    #[serde(default, deserialize_with = "present")]
    pub score: Option<serde_json::Value>,
    pub verification: Option<Verification>,
    pub position: Option<String>,
    pub company: Option<String>,
    pub sources: Option<Vec<serde_json::Value>>,
}

fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<serde_json::Value>, D::Error> {
    serde_json::Value::deserialize(d).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Verification {
    pub status: Option<String>,
}

/// Payload of `GET /domain-search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainSearchData {
    pub emails: Option<Vec<DomainEmail>>,
    pub domain: Option<DomainField>,
    pub organization: Option<String>,
}

impl DomainSearchData {
    /// Organization name, from either `data.organization` or `data.domain.organization`.
    pub fn organization(&self) -> Option<&str> {
        let nested = match &self.domain {
            Some(DomainField::Details { organization }) => organization.as_deref(),
            _ => None,
        };
        nested.or(self.organization.as_deref())
    }
}

/// `data.domain` is a plain string in the public API, but some responses
/// nest an object carrying the organization name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DomainField {
    Name(String),
    Details { organization: Option<String> },
}

/// A single contact from a domain search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainEmail {
    pub value: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
}
