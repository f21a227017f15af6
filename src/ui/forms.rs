//! Form rendering: inputs with inline error slots and the status banner

use crate::app::App;
use crate::state::{ChoiceGroup, Form, FormField, StatusKind, StatusMessage, SurveyForm};
use crate::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw one input field; an error marks the border invalid (red)
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
    palette: &Palette,
) {
    let border_style = if has_error {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let value = field.as_text();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let value_style = if is_active {
        Style::default().fg(palette.fg)
    } else {
        Style::default().fg(palette.muted)
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(palette.accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(palette.accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(palette.accent)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the error slot under a field or group: visible only while it holds
/// a message
fn draw_error_slot(frame: &mut Frame, area: Rect, error: Option<&str>, palette: &Palette) {
    if let Some(message) = error {
        let slot = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(palette.error),
        )));
        frame.render_widget(slot, area);
    }
}

/// Draw the radio-style choice group as one row of options
fn draw_group(
    frame: &mut Frame,
    area: Rect,
    group: &ChoiceGroup,
    is_active: bool,
    has_error: bool,
    palette: &Palette,
) {
    let border_style = if has_error {
        Style::default().fg(palette.error)
    } else if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let mut spans = Vec::new();
    for (idx, option) in group.options.iter().enumerate() {
        let selected = group.selected() == Some(idx);
        let mark = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        spans.push(Span::styled(format!("{mark} {option}  "), style));
    }

    let block = Block::default()
        .title(format!(" {} ", group.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the single status banner, success or error styled
fn draw_status(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>, palette: &Palette) {
    if let Some(status) = status {
        let color = match status.kind {
            StatusKind::Success => palette.success,
            StatusKind::Error => palette.error,
        };
        let banner = Paragraph::new(Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(banner, area);
    }
}

/// Draw the contact form page
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let Some(form) = app.state.contact.as_ref() else {
        let notice = Paragraph::new(" Contact form is unavailable on this page.")
            .style(Style::default().fg(palette.muted));
        frame.render_widget(notice, inner(area));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // name-error
            Constraint::Length(3), // Email
            Constraint::Length(1), // email-error
            Constraint::Length(3), // Subject
            Constraint::Length(1), // subject-error
            Constraint::Min(4),    // Message
            Constraint::Length(1), // message-error
            Constraint::Length(1), // form-status
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    let fields = [&form.name, &form.email, &form.subject, &form.message];
    for (idx, field) in fields.into_iter().enumerate() {
        let error = form.errors.error(&field.id);
        draw_field(
            frame,
            chunks[idx * 2],
            field,
            form.active_field() == idx,
            error.is_some(),
            &palette,
        );
        draw_error_slot(frame, chunks[idx * 2 + 1], error, &palette);
    }

    draw_status(frame, chunks[8], form.status.as_ref(), &palette);
    draw_help(frame, chunks[9], &palette);
}

/// Draw the survey form page
pub fn draw_survey(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let block = Block::default()
        .title(" Survey ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    frame.render_widget(block, area);

    let Some(form) = app.state.survey.as_ref() else {
        let notice = Paragraph::new(" Survey form is unavailable on this page.")
            .style(Style::default().fg(palette.muted));
        frame.render_widget(notice, inner(area));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(1), // survey-email-error
            Constraint::Length(3), // Satisfaction group
            Constraint::Length(1), // satisfaction-error
            Constraint::Min(4),    // Suggestions
            Constraint::Length(1), // suggestions-error
            Constraint::Length(1), // survey-form-status
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    let email_error = form.errors.error(&form.email.id);
    draw_field(
        frame,
        chunks[0],
        &form.email,
        form.active_field() == 0,
        email_error.is_some(),
        &palette,
    );
    draw_error_slot(frame, chunks[1], email_error, &palette);

    let group_error = form.errors.error(&form.satisfaction.name);
    draw_group(
        frame,
        chunks[2],
        &form.satisfaction,
        form.active_field() == SurveyForm::GROUP_INDEX,
        group_error.is_some(),
        &palette,
    );
    draw_error_slot(frame, chunks[3], group_error, &palette);

    let suggestions_error = form.errors.error(&form.suggestions.id);
    draw_field(
        frame,
        chunks[4],
        &form.suggestions,
        form.active_field() == 2,
        suggestions_error.is_some(),
        &palette,
    );
    draw_error_slot(frame, chunks[5], suggestions_error, &palette);

    draw_status(frame, chunks[6], form.status.as_ref(), &palette);
    draw_help(frame, chunks[7], &palette);
}

fn draw_help(frame: &mut Frame, area: Rect, palette: &Palette) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(palette.accent)),
        Span::raw(": next field  "),
        Span::styled("Ctrl+S", Style::default().fg(palette.accent)),
        Span::raw(": send  "),
        Span::styled("Esc", Style::default().fg(palette.accent)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
