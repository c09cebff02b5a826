use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DossierView, ErrorNotice, TitleBar};

const HELP_TEXT: &str = " r refresh  ↑/↓ scroll  PgUp/PgDn page  Home/End jump  q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let notice_height = if app.error.is_some() { 1 } else { 0 };
    let layout = Layout::vertical([Length(1), Min(0), Length(notice_height), Length(1)]);
    let [title_area, main_area, notice_area, help_area] = layout.areas(frame.area());

    TitleBar::new(
        &app.content.hero_badge_label,
        &app.status_message,
        app.loading,
        spinner_frame,
    )
    .render(frame, title_area);

    // Content always renders, error or not.
    DossierView::new(&mut tui.dossier_view, &app.content).render(frame, main_area);

    if let Some(error) = &app.error {
        ErrorNotice::new(error, app.source.is_configured()).render(frame, notice_area);
    }

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
