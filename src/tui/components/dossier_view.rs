//! # DossierView Component
//!
//! Scrollable rendering of a `ContentDocument`: hero text, highlight card,
//! dossier highlights, timeline, and the closing takeaway.
//!
//! `DossierView` is transient (built each frame around the current document),
//! `DossierViewState` persists in `TuiState` and owns the scroll position.
//!
//! Each section is rendered as its own `Paragraph` and stacked inside a
//! `ScrollView`. Section heights come from `Paragraph::line_count`, which adds
//! the block's top/bottom borders but wraps at the width it is given, so the
//! block's horizontal borders and padding are subtracted first.
//!
//! Remote content can be arbitrarily long, so heights are summed in `u32` and
//! the scroll buffer is capped at `MAX_CONTENT_HEIGHT` rows. Sections that
//! start past the cap are not placed; one that straddles it is cut short.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::content::ContentDocument;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Blank rows between sections.
const SECTION_GAP: u16 = 1;
/// Columns taken by `Padding::horizontal(1)`.
const PADDED_OVERHEAD: u16 = 2;
/// Columns taken by left/right borders plus horizontal padding.
const CARD_OVERHEAD: u16 = 4;
/// Upper bound on the scroll buffer height. The buffer is allocated in full
/// every frame, so this also bounds memory per render.
const MAX_CONTENT_HEIGHT: u16 = 8192;

struct Section<'a> {
    paragraph: Paragraph<'a>,
    horizontal_overhead: u16,
}

impl<'a> Section<'a> {
    fn padded(paragraph: Paragraph<'a>) -> Self {
        Self {
            paragraph,
            horizontal_overhead: PADDED_OVERHEAD,
        }
    }

    fn card(paragraph: Paragraph<'a>) -> Self {
        Self {
            paragraph,
            horizontal_overhead: CARD_OVERHEAD,
        }
    }

    fn height(&self, width: u16) -> u32 {
        let wrap_width = width.saturating_sub(self.horizontal_overhead).max(1);
        u32::try_from(self.paragraph.line_count(wrap_width)).unwrap_or(u32::MAX)
    }
}

#[derive(Default)]
pub struct DossierViewState {
    pub scroll_state: ScrollViewState,
    /// Total content height from the last render.
    pub content_height: u16,
    /// Viewport height from the last render.
    pub viewport_height: u16,
}

impl DossierViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never passes the end of the content.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for DossierViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct DossierView<'a> {
    state: &'a mut DossierViewState,
    document: &'a ContentDocument,
}

impl<'a> DossierView<'a> {
    pub fn new(state: &'a mut DossierViewState, document: &'a ContentDocument) -> Self {
        Self { state, document }
    }
}

impl Component for DossierView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column reserved for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 || area.height == 0 {
            return;
        }

        let sections = build_sections(self.document);
        let heights: Vec<u32> = sections.iter().map(|s| s.height(content_width)).collect();
        let total_height = stacked_height(&heights);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u32 = 0;
        for (section, height) in sections.into_iter().zip(heights) {
            let Some(rect) = section_area(y_offset, height, content_width, total_height) else {
                break;
            };
            scroll_view.render_widget(section.paragraph, rect);
            y_offset = y_offset
                .saturating_add(height)
                .saturating_add(u32::from(SECTION_GAP));
        }

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Total height of the stacked sections plus gaps, capped at `MAX_CONTENT_HEIGHT`.
fn stacked_height(heights: &[u32]) -> u16 {
    let gaps = u32::from(SECTION_GAP).saturating_mul(heights.len().saturating_sub(1) as u32);
    let total = heights
        .iter()
        .fold(gaps, |acc, height| acc.saturating_add(*height));
    total.min(u32::from(MAX_CONTENT_HEIGHT)) as u16
}

/// Where a section lands in the scroll buffer, or `None` once it starts past the end.
fn section_area(y_offset: u32, height: u32, width: u16, total_height: u16) -> Option<Rect> {
    let total = u32::from(total_height);
    if y_offset >= total {
        return None;
    }
    let visible = height.min(total - y_offset);
    Some(Rect::new(0, y_offset as u16, width, visible as u16))
}

fn build_sections(doc: &ContentDocument) -> Vec<Section<'_>> {
    vec![
        Section::padded(hero_section(doc)),
        Section::card(highlight_card_section(doc)),
        Section::padded(highlights_section(doc)),
        Section::padded(timeline_section(doc)),
        Section::card(takeaway_section(doc)),
    ]
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn hero_section(doc: &ContentDocument) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", doc.hero_badge_label.to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            doc.hero_title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            doc.hero_subtitle.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: true })
}

fn highlight_card_section(doc: &ContentDocument) -> Paragraph<'_> {
    let border = Style::default().fg(Color::Magenta);
    Paragraph::new(Line::from(Span::styled(
        doc.highlight_card.quote.as_str(),
        Style::default().add_modifier(Modifier::ITALIC),
    )))
    .block(
        Block::bordered()
            .title(Span::styled(
                format!(" {} ", doc.highlight_card.title),
                border.add_modifier(Modifier::BOLD),
            ))
            .border_style(border)
            .padding(Padding::horizontal(1)),
    )
    .wrap(Wrap { trim: true })
}

fn highlights_section(doc: &ContentDocument) -> Paragraph<'_> {
    let mut lines = vec![heading("Dossier highlights")];
    for item in &doc.dossier_highlights {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", icon_glyph(&item.icon))),
            Span::styled(item.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            item.detail.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: true })
}

fn timeline_section(doc: &ContentDocument) -> Paragraph<'_> {
    let mut lines = vec![heading("Timeline")];
    for entry in &doc.timeline {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<6}", entry.year),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.headline.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            entry.summary.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: true })
}

fn takeaway_section(doc: &ContentDocument) -> Paragraph<'_> {
    let border = Style::default().fg(Color::Green);
    Paragraph::new(doc.takeaway.body.as_str())
        .block(
            Block::bordered()
                .title(Span::styled(
                    format!(" {} {} ", icon_glyph(&doc.takeaway.icon), doc.takeaway.title),
                    border.add_modifier(Modifier::BOLD),
                ))
                .border_style(border)
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true })
}

/// Maps symbol names from the content feed to a terminal glyph.
fn icon_glyph(icon: &str) -> &'static str {
    let icon = icon.to_ascii_lowercase();
    if icon.contains("globe") {
        "◍"
    } else if icon.contains("sailboat") || icon.contains("ferry") {
        "⛵"
    } else if icon.contains("dollarsign") || icon.contains("banknote") {
        "$"
    } else if icon.contains("lightbulb") {
        "✦"
    } else if icon.contains("exclamationmark") {
        "!"
    } else {
        "•"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::fallback_document;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_into(width: u16, height: u16, doc: &ContentDocument, state: &mut DossierViewState) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DossierView::new(state, doc).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_hero_at_top() {
        let doc = fallback_document();
        let mut state = DossierViewState::new();
        let text = render_into(100, 30, &doc, &mut state);
        assert!(text.contains("ACCOUNTABILITY DESK"));
        assert!(text.contains("1MDB global money trail"));
    }

    #[test]
    fn test_records_content_height() {
        let doc = fallback_document();
        let mut state = DossierViewState::new();
        render_into(100, 10, &doc, &mut state);
        assert!(state.content_height > 10);
        assert_eq!(state.viewport_height, 10);
    }

    #[test]
    fn test_scroll_to_bottom_reveals_takeaway() {
        let doc = fallback_document();
        let mut state = DossierViewState::new();
        render_into(100, 10, &doc, &mut state);

        state.handle_event(&TuiEvent::ScrollToBottom);
        let text = render_into(100, 10, &doc, &mut state);
        assert!(text.contains("What"));
        assert!(!text.contains("ACCOUNTABILITY DESK"));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let doc = fallback_document();
        let mut state = DossierViewState::new();
        render_into(100, 10, &doc, &mut state);
        for _ in 0..500 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        let max_y = state.content_height - state.viewport_height;
        assert_eq!(state.scroll_state.offset().y, max_y);

        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    fn oversized_document(entries: usize) -> ContentDocument {
        let mut doc = fallback_document();
        let entry = doc.timeline[0].clone();
        doc.timeline = vec![entry; entries];
        let highlight = doc.dossier_highlights[0].clone();
        doc.dossier_highlights = vec![highlight; entries];
        doc
    }

    #[test]
    fn test_huge_document_renders_within_cap() {
        let doc = oversized_document(30_000);
        let mut state = DossierViewState::new();
        let text = render_into(80, 20, &doc, &mut state);

        assert!(text.contains("ACCOUNTABILITY DESK"));
        assert_eq!(state.content_height, MAX_CONTENT_HEIGHT);
    }

    #[test]
    fn test_huge_document_scrolls_to_capped_bottom() {
        let doc = oversized_document(30_000);
        let mut state = DossierViewState::new();
        render_into(80, 20, &doc, &mut state);

        state.handle_event(&TuiEvent::ScrollToBottom);
        let text = render_into(80, 20, &doc, &mut state);
        assert_eq!(state.scroll_state.offset().y, MAX_CONTENT_HEIGHT - 20);
        assert!(!text.contains("ACCOUNTABILITY DESK"));
    }

    #[test]
    fn test_stacked_height_saturates() {
        assert_eq!(stacked_height(&[3, 4]), 8);
        assert_eq!(stacked_height(&[u32::MAX, u32::MAX]), MAX_CONTENT_HEIGHT);
        assert_eq!(stacked_height(&[]), 0);
    }

    #[test]
    fn test_section_area_clips_at_end() {
        assert_eq!(section_area(10, 5, 40, 100), Some(Rect::new(0, 10, 40, 5)));
        assert_eq!(section_area(98, 5, 40, 100), Some(Rect::new(0, 98, 40, 2)));
        assert_eq!(section_area(100, 5, 40, 100), None);
        assert_eq!(section_area(u32::MAX, 5, 40, 100), None);
    }

    #[test]
    fn test_icon_glyphs() {
        assert_eq!(icon_glyph("globe.asia.australia.fill"), "◍");
        assert_eq!(icon_glyph("dollarsign.circle.fill"), "$");
        assert_eq!(icon_glyph("unknown.symbol"), "•");
    }
}
