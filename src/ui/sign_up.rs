//! Sign-up screen

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
    let card = centered_rect(area, CARD_WIDTH, 8);

    let lines = vec![
        Line::from(Span::styled(
            "Create an account",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Accounts are created with your identity provider."),
        Line::from("Once you have one, come back and sign in."),
        Line::from(""),
        Line::from(Span::styled("Esc: back to sign in", Style::default().fg(theme.muted))),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.muted)));
    frame.render_widget(paragraph, card);
}
