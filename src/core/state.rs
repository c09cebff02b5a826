//! # Application State
//!
//! Per-screen state for the dossier viewer. No TUI types in here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ContentSource>   // remote dossier source
//! ├── fallback: Arc<ContentDocument>   // bundled dossier, never mutated
//! ├── content: Arc<ContentDocument>    // what the screen renders
//! ├── loading: bool                    // a fetch is in flight
//! ├── error: Option<String>            // last resolution error
//! ├── generation: u64                  // id of the latest issued fetch
//! ├── last_updated: Option<DateTime>   // when content last settled
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::content::{ContentDocument, ContentSource};

pub struct App {
    pub source: Arc<dyn ContentSource>,
    pub fallback: Arc<ContentDocument>,
    pub content: Arc<ContentDocument>,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented on every refresh; results tagged with an older value are stale.
    pub generation: u64,
    pub last_updated: Option<DateTime<Local>>,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn ContentSource>, fallback: Arc<ContentDocument>) -> Self {
        let loading = source.is_configured();
        Self {
            source,
            content: Arc::clone(&fallback),
            fallback,
            loading,
            error: None,
            generation: 0,
            last_updated: None,
            status_message: String::from("Bundled dossier"),
        }
    }

    /// True while the bundled document is what's on screen.
    pub fn showing_fallback(&self) -> bool {
        Arc::ptr_eq(&self.content, &self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{test_app, test_app_with_source, ScriptedSource};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_app_new_unconfigured_is_not_loading() {
        let app = test_app();
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.generation, 0);
        assert!(app.showing_fallback());
    }

    #[test]
    fn test_app_new_configured_starts_loading() {
        let app = test_app_with_source(Arc::new(ScriptedSource::ok(json!({}))));
        assert!(app.loading);
        assert!(app.showing_fallback());
    }
}
