//! About page with the fun fact reveal

use crate::app::App;
use crate::state::FUN_FACT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Bio
            Constraint::Length(3), // Fun fact button
            Constraint::Length(3), // Fun fact text (when revealed)
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let bio = Paragraph::new(vec![
        Line::from("Self-taught developer, five years of building tools for"),
        Line::from("clinics, markets, and classrooms across central Tanzania."),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(bio, chunks[0]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" Fun fact? {} ", app.state.fun_fact_button_label()),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(button, chunks[1]);

    if app.state.fun_fact_revealed {
        let fact = Paragraph::new(Line::from(Span::styled(
            FUN_FACT,
            Style::default().fg(palette.success),
        )))
        .wrap(Wrap { trim: false });
        frame.render_widget(fact, chunks[2]);
    }
}
