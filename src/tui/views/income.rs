//! Income step view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::widgets::TextInput;
use crate::wizard::IncomeStage;

/// Render the income form
pub fn render(frame: &mut Frame, stage: &IncomeStage, area: Rect) {
    let block = Block::default()
        .title(" Enter Income ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let input = TextInput::new(&stage.income_input)
        .label("Income")
        .placeholder("e.g. 1500.00");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter your income for the period.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        input.line(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Next"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
