//! # Dossier Types
//!
//! `ContentDocument` is what screens render. It is always complete.
//!
//! `PartialContentDocument` is what the remote endpoint sends. Every field is
//! optional and validated on its own: a missing, `null`, or wrongly typed field
//! simply becomes `None` instead of rejecting the whole payload.
//!
//! ```text
//! remote JSON ──► PartialContentDocument ──┐
//!                                          ├──► merge() ──► ContentDocument
//! bundled fallback ──► ContentDocument ────┘
//! ```

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Resolved document
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub hero_badge_label: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub highlight_card: HighlightCard,
    pub dossier_highlights: Vec<DossierHighlight>,
    pub timeline: Vec<TimelineEntry>,
    pub takeaway: Takeaway,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
    pub title: String,
    pub quote: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DossierHighlight {
    pub title: String,
    pub detail: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: String,
    pub headline: String,
    pub summary: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Takeaway {
    pub title: String,
    pub body: String,
    pub icon: String,
}

// ============================================================================
// Remote payload (sparse, untrusted)
// ============================================================================

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartialContentDocument {
    #[serde(default, deserialize_with = "lenient")]
    pub hero_badge_label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub hero_subtitle: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub highlight_card: Option<PartialHighlightCard>,
    #[serde(default, deserialize_with = "lenient")]
    pub dossier_highlights: Option<Vec<DossierHighlight>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timeline: Option<Vec<TimelineEntry>>,
    #[serde(default, deserialize_with = "lenient")]
    pub takeaway: Option<PartialTakeaway>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialHighlightCard {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quote: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialTakeaway {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<String>,
}

impl PartialContentDocument {
    /// Builds a partial document from any JSON value.
    ///
    /// Non-object values (arrays, strings, `null`) carry no usable fields and
    /// yield an empty partial, which merges to the fallback unchanged.
    pub fn from_json_value(value: Value) -> Self {
        if !value.is_object() {
            log::debug!("Remote payload is not a JSON object, ignoring its contents");
            return Self::default();
        }
        // Every field is lenient, so an object can only fail on serde internals.
        serde_json::from_value(value).unwrap_or_else(|e| {
            log::warn!("Remote payload could not be mapped: {}", e);
            Self::default()
        })
    }

    /// True when the payload would not change anything in a merge.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Accepts a field only if it has the expected shape; anything else is `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            log::debug!("Dropping malformed field from remote payload: {}", e);
            Ok(None)
        }
    }
}
