//! Field-level merge of a remote payload over the fallback dossier.
//!
//! Scalars and nested objects override per field. Sequences are replaced
//! whole, and only when the incoming sequence has at least one entry.

use super::types::{
    ContentDocument, HighlightCard, PartialContentDocument, PartialHighlightCard, PartialTakeaway,
    Takeaway,
};

/// Combines `incoming` over `fallback`, always returning a complete document.
pub fn merge(fallback: &ContentDocument, incoming: Option<PartialContentDocument>) -> ContentDocument {
    let Some(incoming) = incoming else {
        return fallback.clone();
    };

    ContentDocument {
        hero_badge_label: incoming
            .hero_badge_label
            .unwrap_or_else(|| fallback.hero_badge_label.clone()),
        hero_title: incoming
            .hero_title
            .unwrap_or_else(|| fallback.hero_title.clone()),
        hero_subtitle: incoming
            .hero_subtitle
            .unwrap_or_else(|| fallback.hero_subtitle.clone()),
        highlight_card: merge_highlight_card(&fallback.highlight_card, incoming.highlight_card),
        dossier_highlights: non_empty_or(incoming.dossier_highlights, &fallback.dossier_highlights),
        timeline: non_empty_or(incoming.timeline, &fallback.timeline),
        takeaway: merge_takeaway(&fallback.takeaway, incoming.takeaway),
    }
}

fn merge_highlight_card(fallback: &HighlightCard, incoming: Option<PartialHighlightCard>) -> HighlightCard {
    let incoming = incoming.unwrap_or_default();
    HighlightCard {
        title: incoming.title.unwrap_or_else(|| fallback.title.clone()),
        quote: incoming.quote.unwrap_or_else(|| fallback.quote.clone()),
    }
}

fn merge_takeaway(fallback: &Takeaway, incoming: Option<PartialTakeaway>) -> Takeaway {
    let incoming = incoming.unwrap_or_default();
    Takeaway {
        title: incoming.title.unwrap_or_else(|| fallback.title.clone()),
        body: incoming.body.unwrap_or_else(|| fallback.body.clone()),
        icon: incoming.icon.unwrap_or_else(|| fallback.icon.clone()),
    }
}

fn non_empty_or<T: Clone>(incoming: Option<Vec<T>>, fallback: &[T]) -> Vec<T> {
    match incoming {
        Some(items) if !items.is_empty() => items,
        _ => fallback.to_vec(),
    }
}
