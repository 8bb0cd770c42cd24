//! Summary step view
//!
//! Totals on top, every expense below in entry order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::config::Settings;
use crate::reports::expense_rows;
use crate::tui::layout::SummaryLayout;
use crate::wizard::SummaryStage;

/// Render the results screen
pub fn render(frame: &mut Frame, stage: &SummaryStage, settings: &Settings, area: Rect) {
    let layout = SummaryLayout::new(area);

    render_totals(frame, stage, layout.totals);
    render_table(frame, stage, settings, layout.table);
}

fn render_totals(frame: &mut Frame, stage: &SummaryStage, area: Rect) {
    let summary = stage.summary();

    let block = Block::default()
        .title(" Results ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let balance_color = if summary.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(format!("Total Income: {}", summary.total_income)),
        Line::from(format!("Total Expenses: {}", summary.total_expenses)),
        Line::from(vec![
            Span::raw("Balance: "),
            Span::styled(
                summary.balance.to_string(),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_table(frame: &mut Frame, stage: &SummaryStage, settings: &Settings, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(vec![
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = expense_rows(stage.expenses(), &settings.currency_symbol)
        .into_iter()
        .map(|row| Row::new(vec![Cell::from(row.category), Cell::from(row.amount)]))
        .collect();

    let widths = [Constraint::Length(14), Constraint::Min(12)];
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
