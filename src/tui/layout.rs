//! Layout definitions for the TUI
//!
//! Header on top, the active step in the middle, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct WizardLayout {
    /// Title and step indicator
    pub header: Rect,
    /// Active step content
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the summary step
pub struct SummaryLayout {
    /// The three total labels
    pub totals: Rect,
    /// Expense table
    pub table: Rect,
}

impl SummaryLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Totals (3 lines + borders)
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            totals: chunks[0],
            table: chunks[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_layout() {
        let layout = WizardLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.body.height, 20);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = centered_rect_fixed(40, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(area, Rect::new(20, 7, 40, 10));

        let clipped = centered_rect_fixed(100, 50, Rect::new(0, 0, 80, 24));
        assert_eq!(clipped, Rect::new(0, 0, 80, 24));
    }
}
