//! # TitleBar Component
//!
//! Top status bar: app name, dossier badge, and the current status.
//!
//! Stateless: everything it shows is passed in as props each frame.
//!
//! 1. **Loading**: `"Dossier · Accountability desk | ⠋ Refreshing dossier..."`
//! 2. **Settled**: `"Dossier · Accountability desk | Updated 12:04:31"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct TitleBar<'a> {
    pub badge_label: &'a str,
    pub status_message: &'a str,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(badge_label: &'a str, status_message: &'a str, loading: bool, spinner_frame: usize) -> Self {
        Self {
            badge_label,
            status_message,
            loading,
            spinner_frame,
        }
    }

    fn title_text(&self) -> String {
        let status = if self.loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("{spinner} {}", self.status_message)
        } else {
            self.status_message.to_string()
        };

        if status.is_empty() {
            format!("Dossier · {}", self.badge_label)
        } else {
            format!("Dossier · {} | {}", self.badge_label, status)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.title_text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_settled() {
        let text = rendered(TitleBar::new("Accountability desk", "Updated 10:00:00", false, 0));
        assert!(text.contains("Dossier · Accountability desk"));
        assert!(text.contains("| Updated 10:00:00"));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let text = rendered(TitleBar::new("Desk", "Refreshing dossier...", true, 1));
        assert!(text.contains("⠙ Refreshing dossier..."));
    }

    #[test]
    fn test_title_bar_without_status() {
        let title_bar = TitleBar::new("Desk", "", false, 0);
        assert_eq!(title_bar.title_text(), "Dossier · Desk");
    }
}
