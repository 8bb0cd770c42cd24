//! Status bar view
//!
//! Shows the last status message and the key hints for the active step

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveDialog, App};
use crate::wizard::Stage;

/// Key hints for whatever currently has focus
pub fn key_hints(app: &App) -> &'static str {
    match app.active_dialog {
        ActiveDialog::Notice(_) => " Enter:OK ",
        ActiveDialog::SaveResults => " Enter:Save  Esc:Cancel ",
        ActiveDialog::None => match app.stage {
            Stage::Income(_) => " Enter:Next  Esc:Quit ",
            Stage::Expenses(_) => " Tab:Category  Enter:Add  F2:Calculate  Esc:Quit ",
            Stage::Summary(_) => " s:Save CSV  q:Quit ",
        },
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = key_hints(app);

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
