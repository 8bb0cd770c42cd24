//! Text input widget
//!
//! Renders an [`InputBuffer`] as a single line with a label and cursor.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::wizard::InputBuffer;

/// A single-line text input
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    buffer: &'a InputBuffer,
    label: &'a str,
    placeholder: &'a str,
}

impl<'a> TextInput<'a> {
    pub fn new(buffer: &'a InputBuffer) -> Self {
        Self {
            buffer,
            label: "",
            placeholder: "",
        }
    }

    /// Set the label
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Set the placeholder shown while the field is empty
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Build the styled line for this input
    pub fn line(&self) -> Line<'a> {
        let mut spans = Vec::new();

        if !self.label.is_empty() {
            spans.push(Span::styled(self.label, Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(": "));
        }

        if self.buffer.is_empty() && !self.placeholder.is_empty() {
            spans.push(cursor_span(' '));
            spans.push(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            return Line::from(spans);
        }

        let (before, current, after) = self.buffer.split_at_cursor();
        spans.push(Span::styled(before, Style::default().fg(Color::White)));
        spans.push(cursor_span(current.unwrap_or(' ')));
        if !after.is_empty() {
            spans.push(Span::styled(after, Style::default().fg(Color::White)));
        }

        Line::from(spans)
    }
}

fn cursor_span(c: char) -> Span<'static> {
    Span::styled(
        c.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )
}
