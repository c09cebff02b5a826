//! One resolution cycle: fetch, then merge over the fallback or keep it.

use std::sync::Arc;

use log::{info, warn};

use super::merge::merge;
use super::source::{ContentSource, FetchError};
use super::types::{ContentDocument, PartialContentDocument};

/// Outcome of a resolution cycle. `content` is always complete.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub content: Arc<ContentDocument>,
    pub error: Option<FetchError>,
}

impl Resolution {
    /// Applies a fetch result to the fallback.
    ///
    /// On failure the returned `content` is the fallback `Arc` itself; no
    /// merge is attempted.
    pub fn from_fetch(
        fallback: &Arc<ContentDocument>,
        result: Result<PartialContentDocument, FetchError>,
    ) -> Self {
        match result {
            Ok(partial) => Self {
                content: Arc::new(merge(fallback, Some(partial))),
                error: None,
            },
            Err(e) => {
                warn!("Using bundled dossier: {}", e);
                Self {
                    content: Arc::clone(fallback),
                    error: Some(e),
                }
            }
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

/// Runs one fetch against `source` and resolves it against `fallback`.
pub async fn resolve(source: &dyn ContentSource, fallback: &Arc<ContentDocument>) -> Resolution {
    info!("Resolving dossier via '{}' source", source.name());
    let result = source.fetch().await;
    Resolution::from_fetch(fallback, result)
}
