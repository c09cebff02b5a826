//! Bundled dossier shipped with the binary.
//!
//! Built once during bootstrap and shared behind an `Arc`; nothing mutates it.

use super::types::{
    ContentDocument, DossierHighlight, HighlightCard, Takeaway, TimelineEntry,
};

fn highlight(title: &str, detail: &str, icon: &str) -> DossierHighlight {
    DossierHighlight {
        title: title.to_string(),
        detail: detail.to_string(),
        icon: icon.to_string(),
    }
}

fn entry(year: &str, headline: &str, summary: &str) -> TimelineEntry {
    TimelineEntry {
        year: year.to_string(),
        headline: headline.to_string(),
        summary: summary.to_string(),
    }
}

/// Returns the always-available 1MDB accountability dossier.
pub fn fallback_document() -> ContentDocument {
    ContentDocument {
        hero_badge_label: "Accountability desk".to_string(),
        hero_title: "1MDB global money trail".to_string(),
        hero_subtitle: "How Malaysia’s sovereign development fund became the centre of a \
            multi-billion-dollar fraud touching Hollywood, Gulf investment funds, and Wall Street banks."
            .to_string(),
        highlight_card: HighlightCard {
            title: "“The largest kleptocracy case to date”".to_string(),
            quote: "U.S. prosecutors say bonds arranged for 1MDB were immediately rerouted to shell \
                companies controlled by financier Low Taek Jho and allies—funding luxury property, \
                films like “The Wolf of Wall Street,” and political influence campaigns."
                .to_string(),
        },
        dossier_highlights: vec![
            highlight(
                "USD $4.5B allegedly siphoned",
                "U.S. Department of Justice investigators allege more than $4.5 billion was diverted \
                 from 1MDB into offshore vehicles linked to Malaysian and Emirati officials between \
                 2009 and 2014.",
                "globe.asia.australia.fill",
            ),
            highlight(
                "Luxuries seized worldwide",
                "Civil forfeiture cases recovered assets including a $250M superyacht, Beverly Hills \
                 mansions, and rare art purchased with misappropriated funds, according to DoJ filings.",
                "sailboat.fill",
            ),
            highlight(
                "Banks paid record fines",
                "Goldman Sachs agreed to a $2.9B global settlement in 2020 and Malaysia negotiated \
                 $3.9B in penalties after prosecutors said bond offerings enabled the scheme.",
                "dollarsign.circle.fill",
            ),
        ],
        timeline: vec![
            entry(
                "2009",
                "1MDB founded under Najib Razak",
                "Malaysia transformed the Terengganu Investment Authority into 1MDB with Najib as \
                 advisory board chair, pledging to spur strategic development projects.",
            ),
            entry(
                "2015",
                "Wall Street Journal exposes $700M transfer",
                "Investigative reporting revealed funds linked to 1MDB were wired into Najib’s \
                 personal accounts, prompting domestic protests and official denials.",
            ),
            entry(
                "2016",
                "DoJ launches “kleptocracy” suits",
                "U.S. authorities filed civil actions to seize $1B in assets, calling it the largest \
                 kleptocracy case in DoJ history.",
            ),
            entry(
                "2022",
                "Najib begins 12-year prison term",
                "Malaysia’s Federal Court upheld Najib’s conviction for abuse of power, criminal \
                 breach of trust, and money laundering tied to SRC International, a former 1MDB unit.",
            ),
        ],
        takeaway: Takeaway {
            title: "What’s next".to_string(),
            body: "Malaysia continues pursuing Low Taek Jho and other fugitives while auditing \
                recovery of 1MDB-linked assets. Stay alert for U.S. court filings on forfeiture \
                auctions and Malaysia’s ongoing negotiations with international banks."
                .to_string(),
            icon: "lightbulb.fill".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_fully_populated() {
        let doc = fallback_document();
        assert!(!doc.hero_badge_label.is_empty());
        assert!(!doc.hero_title.is_empty());
        assert!(!doc.hero_subtitle.is_empty());
        assert!(!doc.highlight_card.title.is_empty());
        assert!(!doc.highlight_card.quote.is_empty());
        assert_eq!(doc.dossier_highlights.len(), 3);
        assert_eq!(doc.timeline.len(), 4);
        assert!(!doc.takeaway.body.is_empty());
    }

    #[test]
    fn test_timeline_is_chronological() {
        let doc = fallback_document();
        let years: Vec<&str> = doc.timeline.iter().map(|e| e.year.as_str()).collect();
        assert_eq!(years, vec!["2009", "2015", "2016", "2022"]);
    }

    #[test]
    fn test_highlight_quote_text() {
        let doc = fallback_document();
        assert_eq!(
            doc.highlight_card.quote,
            "U.S. prosecutors say bonds arranged for 1MDB were immediately rerouted to shell \
             companies controlled by financier Low Taek Jho and allies—funding luxury property, \
             films like “The Wolf of Wall Street,” and political influence campaigns."
        );
    }
}
