//! Layout components (sidebar nav, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar nav; the current page gets the active marker
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let mut lines = vec![Line::from("")];
    for (idx, view) in View::ALL.iter().enumerate() {
        let is_active = idx == app.state.nav_index;
        let style = if is_active {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        let marker = if is_active { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{marker}{}", view.label()), style),
        ]));
    }

    let block = Block::default()
        .title(" Fadhiri Masudi ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let palette = app.theme.palette();
    let hints = get_view_hints(&app.state.current_view);
    let theme_label = app.theme.as_config_str();

    let status = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {hints}"), Style::default().fg(palette.bg)),
        Span::styled(
            format!("  [{theme_label}]"),
            Style::default().fg(palette.bg),
        ),
    ]))
    .style(Style::default().bg(palette.muted));

    frame.render_widget(status, status_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home | View::Projects => "j/k:nav  1-5:jump  t:theme  q:quit".to_string(),
        View::About => "f:reveal  j/k:nav  t:theme  q:quit".to_string(),
        View::Contact => "Tab:next  ^S:send  ^T:theme  Esc:back".to_string(),
        View::Survey => "Tab:next  1-4/Space:pick  ^S:send  Esc:back".to_string(),
    }
}
