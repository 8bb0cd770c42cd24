//! Expense step view
//!
//! Category picker and amount field on the left, the expenses entered so far
//! on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::config::Settings;
use crate::models::ExpenseCategory;
use crate::tui::widgets::TextInput;
use crate::wizard::ExpenseStage;

/// Render the expense form and the running list
pub fn render(frame: &mut Frame, stage: &ExpenseStage, settings: &Settings, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_form(frame, stage, chunks[0]);
    render_entered(frame, stage, settings, chunks[1]);
}

fn render_form(frame: &mut Frame, stage: &ExpenseStage, area: Rect) {
    let block = Block::default()
        .title(" Enter Expenses ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Category", Style::default().fg(Color::Cyan))),
    ];

    for category in ExpenseCategory::ALL {
        let line = if category == stage.category {
            Line::from(Span::styled(
                format!(" > {}", category),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("   {}", category),
                Style::default().fg(Color::White),
            ))
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(
        TextInput::new(&stage.amount_input)
            .label("Amount")
            .placeholder("e.g. 200")
            .line(),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add Expense  "),
        Span::styled("[F2]", Style::default().fg(Color::Green)),
        Span::raw(" Calculate Budget"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_entered(frame: &mut Frame, stage: &ExpenseStage, settings: &Settings, area: Rect) {
    let expenses = stage.expenses();
    let symbol = settings.currency_symbol.as_str();

    let block = Block::default()
        .title(format!(
            " Entered ({}) - Income {} ",
            expenses.len(),
            stage.income().amount().format_with_symbol(symbol)
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if expenses.is_empty() {
        let text = Paragraph::new("No expenses yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = expenses
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.category().to_string()),
                Cell::from(entry.amount().format_with_symbol(symbol)),
            ])
        })
        .collect();

    let widths = [Constraint::Length(12), Constraint::Min(10)];
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
