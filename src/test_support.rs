//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::content::{fallback_document, ContentSource, FetchError, PartialContentDocument};
use crate::core::state::App;

/// A source with no endpoint; every fetch is `NotConfigured`.
pub struct UnconfiguredSource;

#[async_trait]
impl ContentSource for UnconfiguredSource {
    fn name(&self) -> &str {
        "unconfigured"
    }

    fn endpoint(&self) -> Option<&str> {
        None
    }

    async fn fetch(&self) -> Result<PartialContentDocument, FetchError> {
        Err(FetchError::NotConfigured)
    }
}

/// A configured source that always answers with the same result.
pub struct ScriptedSource {
    result: Result<serde_json::Value, FetchError>,
}

impl ScriptedSource {
    pub fn ok(value: serde_json::Value) -> Self {
        Self { result: Ok(value) }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn endpoint(&self) -> Option<&str> {
        Some("scripted://dossier")
    }

    async fn fetch(&self) -> Result<PartialContentDocument, FetchError> {
        self.result
            .clone()
            .map(PartialContentDocument::from_json_value)
    }
}

/// Creates a test App backed by an unconfigured source and the bundled dossier.
pub fn test_app() -> App {
    test_app_with_source(Arc::new(UnconfiguredSource))
}

pub fn test_app_with_source(source: Arc<dyn ContentSource>) -> App {
    App::new(source, Arc::new(fallback_document()))
}
