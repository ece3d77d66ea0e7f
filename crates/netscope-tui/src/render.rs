//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use netscope_app::AppState;

use crate::layout;
use crate::viewer::JsonTreeViewer;

/// Render the complete UI.
///
/// Pure apart from clamping the tree scroll offset to the current line
/// count.
pub fn view(frame: &mut Frame, state: &mut AppState, viewer: &JsonTreeViewer) {
    let areas = layout::create(frame.area());

    render_header(frame, areas.header, state);
    render_table(frame, areas.table, state);
    render_tree(frame, areas.tree, state, viewer);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let refreshed = state
        .last_refresh
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    let line = Line::from(vec![
        Span::styled(" netscope ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{}  refreshed {}  ", state.settings.base_url, refreshed)),
        Span::styled(
            "q quit  r refresh  j/k scroll",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Switches ");

    if let Some(message) = state.table.placeholder() {
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let items: Vec<ListItem> = state
        .table
        .rows()
        .iter()
        .map(|row| ListItem::new(row.as_str()))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_tree(frame: &mut Frame, area: Rect, state: &mut AppState, viewer: &JsonTreeViewer) {
    let lines = viewer.lines();

    // Keep the offset inside the flattened tree after a refresh shrinks it.
    state.tree_scroll = state.tree_scroll.min(lines.len().saturating_sub(1));

    let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(" Snapshots "))
        .scroll((state.tree_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
