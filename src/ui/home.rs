//! Home page with the time-of-day greeting banner

use crate::app::App;
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
            Constraint::Length(5), // Greeting banner
            Constraint::Min(0),    // Intro
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Home ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let greeting = app.greeting();
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(format!(" {} ", greeting.icon)),
            Span::styled(
                greeting.text,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(banner, chunks[0]);

    let intro = Paragraph::new(vec![
        Line::from("Software developer based in Dodoma, Tanzania."),
        Line::from(""),
        Line::from(Span::styled(
            "Browse with j/k or jump with 1-5. Say hello on the Contact page.",
            Style::default().fg(palette.muted),
        )),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(intro, chunks[1]);
}
