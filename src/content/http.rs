//! HTTP content source.
//!
//! Issues one GET against the configured URL and hands back whatever JSON
//! object it finds there as a sparse `PartialContentDocument`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;

use super::source::{ContentSource, FetchError};
use super::types::PartialContentDocument;

pub struct HttpContentSource {
    endpoint: Option<String>,
    client: reqwest::Client,
}

impl HttpContentSource {
    /// Creates a source for `endpoint`. Blank endpoints count as unconfigured.
    ///
    /// `timeout` of `None` leaves reqwest's transport defaults in place.
    pub fn new(endpoint: Option<String>, timeout: Option<Duration>) -> Self {
        let endpoint = endpoint
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with custom settings, using defaults: {}", e);
            reqwest::Client::new()
        });

        Self { endpoint, client }
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    fn name(&self) -> &str {
        "http"
    }

    fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    async fn fetch(&self) -> Result<PartialContentDocument, FetchError> {
        let Some(url) = self.endpoint.as_deref() else {
            debug!("No content endpoint configured, skipping fetch");
            return Err(FetchError::NotConfigured);
        };

        info!("Fetching remote dossier from {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Content endpoint response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Content endpoint error: {} - {}", status, body);
            return Err(FetchError::RequestFailed { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))?;

        let partial = PartialContentDocument::from_json_value(value);
        info!(
            "Remote dossier received: {} bytes, empty payload: {}",
            bytes.len(),
            partial.is_empty()
        );
        Ok(partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_endpoint_is_not_configured() {
        let source = HttpContentSource::new(Some("   ".to_string()), None);
        assert!(!source.is_configured());
        assert_eq!(source.endpoint(), None);
    }

    #[test]
    fn test_endpoint_is_trimmed() {
        let source = HttpContentSource::new(Some(" https://example.com/d.json ".to_string()), None);
        assert_eq!(source.endpoint(), Some("https://example.com/d.json"));
    }

    #[tokio::test]
    async fn test_unconfigured_fetch_fails_fast() {
        let source = HttpContentSource::new(None, None);
        assert_eq!(source.fetch().await, Err(FetchError::NotConfigured));
    }
}
