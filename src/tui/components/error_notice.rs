//! Inline notice shown under the dossier when the last refresh failed.
//! The dossier itself keeps rendering; this only explains why it may be stale.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct ErrorNotice<'a> {
    pub message: &'a str,
    /// Whether pressing `r` can change the outcome.
    pub retryable: bool,
}

impl<'a> ErrorNotice<'a> {
    pub fn new(message: &'a str, retryable: bool) -> Self {
        Self { message, retryable }
    }

    fn text(&self) -> String {
        if self.retryable {
            format!(" {}. Showing bundled dossier, press r to retry.", self.message)
        } else {
            format!(" {}. Showing bundled dossier.", self.message)
        }
    }
}

impl Component for ErrorNotice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                " ! ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.text(), Style::default().fg(Color::Yellow)),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut notice: ErrorNotice) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                notice.render(f, f.area());
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
    fn test_notice_includes_message() {
        let text = rendered(ErrorNotice::new("content request failed (HTTP 502)", true));
        assert!(text.contains("content request failed (HTTP 502)"));
        assert!(text.contains("press r to retry"));
    }

    #[test]
    fn test_notice_without_retry_hint() {
        let text = rendered(ErrorNotice::new("remote content source is not configured", false));
        assert!(text.contains("not configured. Showing bundled dossier."));
        assert!(!text.contains("press r to retry"));
    }
}
