//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + endpoint + keybindings)
    pub header: Rect,

    /// Switch table pane (left)
    pub table: Rect,

    /// Snapshot tree pane (right)
    pub tree: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (bordered, one inner row)
        Constraint::Min(3),    // Content
    ])
    .split(area);

    let panes = Layout::horizontal([
        Constraint::Percentage(40), // Switch table
        Constraint::Percentage(60), // Snapshot tree
    ])
    .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        table: panes[0],
        tree: panes[1],
    }
}
