//! Authenticated home screen

use super::layout::{centered_rect, CARD_WIDTH};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme.theme();
    let card = centered_rect(area, CARD_WIDTH, 8);

    let mut lines = vec![
        Line::from(Span::styled(
            "Signed in",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(session) = &app.state.session {
        lines.push(Line::from(vec![
            Span::styled("Account  ", Style::default().fg(theme.muted)),
            Span::raw(session.email.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Expires  ", Style::default().fg(theme.muted)),
            Span::raw(
                session
                    .expires_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.accent)));
    frame.render_widget(paragraph, card);
}
