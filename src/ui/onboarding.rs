//! Onboarding screen, the entry point before signing in

use super::layout::{centered_rect, CARD_WIDTH};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let card = centered_rect(area, CARD_WIDTH, 9);

    let lines = vec![
        Line::from(Span::styled(
            "Welcome",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Sign in with your email and password to continue.",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" sign in   "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.muted)));
    frame.render_widget(paragraph, card);
}
