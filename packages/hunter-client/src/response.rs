use std::fmt;

/// Text returned by every tool operation.
///
/// "Not found" is a `Success`: it is a valid answer, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResponse {
    Success(String),
    Failure(String),
}

impl ToolResponse {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl fmt::Display for ToolResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ToolResponse> for String {
    fn from(response: ToolResponse) -> Self {
        response.into_string()
    }
}
