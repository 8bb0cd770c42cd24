//! Notice widget
//!
//! Blocking message box shown after an action: confirmations, rejected input
//! and failed saves. It stays until the user dismisses it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::BudgetError;

/// Type of notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Action completed
    Success,
    /// Input was rejected
    Warning,
    /// Action failed
    Error,
}

impl NoticeKind {
    /// Get the color for this notice type
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this notice type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this notice type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Error",
            Self::Error => "Error",
        }
    }
}

/// A message waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    /// Rejected input becomes a warning, anything else an error
    pub fn from_error(error: &BudgetError) -> Self {
        if error.is_validation() {
            Self::warning(error.user_message())
        } else {
            Self::error(error.user_message())
        }
    }
}

/// Widget for rendering a notice
pub struct NoticeWidget<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeWidget<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notice.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(
                " {} {} ",
                self.notice.kind.icon(),
                self.notice.kind.title()
            ))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.notice.message.as_str(),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
