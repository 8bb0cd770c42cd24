//! Save results dialog
//!
//! Asks for the path of the CSV file. Relative paths land in the configured
//! export directory; leaving the field blank cancels.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Render the save dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 9, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Save Results to CSV ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let folder = match &app.settings.default_export_dir {
        Some(dir) => dir.display().to_string(),
        None => "current directory".to_string(),
    };

    let lines = vec![
        Line::from(""),
        TextInput::new(&app.save_input)
            .label("File")
            .placeholder("budget.csv")
            .line(),
        Line::from(Span::styled(
            format!("Relative to {}", folder),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::models::Income;
    use crate::tui::app::{ActiveDialog, App};
    use crate::tui::views::test_support::render_to_string;
    use crate::wizard::{ExpenseStage, Stage};

    #[test]
    fn test_save_prompt_shows_path() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.stage = Stage::Summary(ExpenseStage::new(Income::parse("10").unwrap()).finish());
        app.active_dialog = ActiveDialog::SaveResults;
        app.save_input.set("march.csv");

        let screen = render_to_string(&app, 80, 24);
        assert!(screen.contains("Save Results to CSV"));
        assert!(screen.contains("File: march.csv"));
        assert!(screen.contains("Relative to current directory"));
    }
}
