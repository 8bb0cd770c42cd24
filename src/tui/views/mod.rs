//! TUI Views module
//!
//! One view per wizard step, plus the header and status bar around them.

pub mod expenses;
pub mod income;
pub mod status_bar;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::WizardLayout;
use crate::wizard::Stage;

/// Number of steps in the wizard
const STEP_COUNT: usize = 3;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match &app.stage {
        Stage::Income(stage) => income::render(frame, stage, layout.body),
        Stage::Expenses(stage) => expenses::render(frame, stage, app.settings, layout.body),
        Stage::Summary(stage) => summary::render(frame, stage, app.settings, layout.body),
    }

    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::Notice(notice) => dialogs::notice::render(frame, notice),
        ActiveDialog::SaveResults => dialogs::save::render(frame, app),
        ActiveDialog::None => {}
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(
            " Budget Wizard ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(
            format!("Step {} of {}: ", app.stage.number(), STEP_COUNT),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            app.stage.title(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::tui::app::App;

    /// Draw the app on an in-memory terminal and return the screen as text
    pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for row in buffer.content().chunks(usize::from(width)) {
            for cell in row {
                screen.push_str(cell.symbol());
            }
            screen.push('\n');
        }
        screen
    }
}
