//! # Dossier Content
//!
//! Resolution pipeline for the expose dossier: a bundled fallback, a remote
//! JSON source, and a field-level merge that always yields a full document.

pub mod fallback;
pub mod http;
pub mod merge;
pub mod resolve;
pub mod source;
pub mod types;

pub use fallback::fallback_document;
pub use http::HttpContentSource;
pub use merge::merge;
pub use resolve::{Resolution, resolve};
pub use source::{ContentSource, FetchError};
pub use types::{
    ContentDocument, DossierHighlight, HighlightCard, PartialContentDocument, Takeaway,
    TimelineEntry,
};
