//! Error types for the Hunter client.

use thiserror::Error;

/// Result type for Hunter client operations.
pub type Result<T> = std::result::Result<T, HunterError>;

/// Hunter client errors.
///
/// These never reach the caller of a tool operation directly; they are
/// rendered into text by [`HunterError::finder_message`] and
/// [`HunterError::domain_search_message`].
#[derive(Debug, Error)]
pub enum HunterError {
    /// No API key configured
    #[error("API key is required. Please set your Hunter.io API key in the tool settings.")]
    MissingApiKey,

    /// Network error or non-2xx response
    #[error("{0}")]
    Transport(String),

    /// Response body is not the JSON we expect
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// JSON parsed but a required field is missing
    #[error("{0}")]
    MalformedResponse(String),
}

impl HunterError {
    /// Build a transport error from a reqwest failure.
    ///
    /// The URL is stripped because the query string carries the API key.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url().to_string())
    }

    /// Message for the three email-finder operations.
    pub fn finder_message(&self) -> String {
        self.render("Error fetching email")
    }

    /// Message for the domain-search operation.
    pub fn domain_search_message(&self) -> String {
        self.render("Error fetching domain emails")
    }

    fn render(&self, transport_prefix: &str) -> String {
        match self {
            Self::MissingApiKey => format!("Error: {}", self),
            Self::Transport(cause) => format!("{}: {}", transport_prefix, cause),
            Self::Json(_) | Self::MalformedResponse(_) => format!("Unexpected error: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            HunterError::MissingApiKey.finder_message(),
            "Error: API key is required. Please set your Hunter.io API key in the tool settings."
        );
        assert_eq!(
            HunterError::MissingApiKey.finder_message(),
            HunterError::MissingApiKey.domain_search_message()
        );
    }

    #[test]
    fn test_transport_prefix_depends_on_operation() {
        let err = HunterError::Transport("operation timed out".into());
        assert_eq!(err.finder_message(), "Error fetching email: operation timed out");
        assert_eq!(
            err.domain_search_message(),
            "Error fetching domain emails: operation timed out"
        );
    }

    #[test]
    fn test_parse_errors_are_unexpected() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let msg = HunterError::from(json_err).finder_message();
        assert!(msg.starts_with("Unexpected error: "), "{}", msg);

        let msg = HunterError::MalformedResponse("missing score".into()).domain_search_message();
        assert_eq!(msg, "Unexpected error: missing score");
    }
}
