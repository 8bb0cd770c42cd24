//! Notice dialog
//!
//! Centered message box that blocks input until dismissed

use ratatui::Frame;

use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notice, NoticeWidget};

const MIN_WIDTH: u16 = 36;
const MAX_WIDTH: u16 = 70;

/// Borders, the blank lines around the message, the key hint and one spare row
const FIXED_ROWS: u16 = 6;

/// Render a notice over the current screen
pub fn render(frame: &mut Frame, notice: &Notice) {
    let message_len = u16::try_from(notice.message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len.saturating_add(6).clamp(MIN_WIDTH, MAX_WIDTH);
    let lines = wrapped_line_count(&notice.message, usize::from(width - 2));
    let height = u16::try_from(lines)
        .unwrap_or(u16::MAX)
        .saturating_add(FIXED_ROWS);

    let area = centered_rect_fixed(width, height, frame.area());

    frame.render_widget(NoticeWidget::new(notice), area);
}

/// Lines needed to word-wrap `text` into `width` columns
fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 1;
    }

    let mut lines = 1;
    let mut current = 0;

    for word in text.split(' ') {
        let len = word.chars().count();
        if current > 0 && current + 1 + len <= width {
            current += 1 + len;
            continue;
        }
        if current > 0 {
            lines += 1;
        }
        // Words longer than a line are broken across lines
        lines += len.saturating_sub(1) / width;
        current = match len % width {
            0 if len > 0 => width,
            rest => rest,
        };
    }

    lines
}
