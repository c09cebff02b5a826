use std::fmt;

use async_trait::async_trait;

use super::types::PartialContentDocument;

/// Errors that can occur while fetching the remote dossier.
/// None of them are fatal: the resolver falls back to bundled content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No endpoint configured. No request was made.
    NotConfigured,
    /// Server answered with a non-success status.
    RequestFailed { status: u16, body: String },
    /// Transport failure (timeout, DNS, connection refused or reset).
    Network(String),
    /// Body was not valid JSON.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotConfigured => write!(f, "remote content source is not configured"),
            FetchError::RequestFailed { status, .. } => {
                write!(f, "content request failed (HTTP {status})")
            }
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Parse(msg) => write!(f, "could not parse remote content: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// The endpoint this source reads from, if any.
    fn endpoint(&self) -> Option<&str>;

    fn is_configured(&self) -> bool {
        self.endpoint().is_some()
    }

    /// Performs a single fetch attempt. No retries.
    async fn fetch(&self) -> Result<PartialContentDocument, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FetchError::NotConfigured.to_string(),
            "remote content source is not configured"
        );
        assert_eq!(
            FetchError::RequestFailed {
                status: 503,
                body: "down".to_string()
            }
            .to_string(),
            "content request failed (HTTP 503)"
        );
        assert!(FetchError::Network("refused".to_string())
            .to_string()
            .contains("refused"));
        assert!(FetchError::Parse("eof".to_string())
            .to_string()
            .starts_with("could not parse"));
    }
}
