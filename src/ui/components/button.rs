//! Button component for TUI

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a centered button with border.
///
/// Busy buttons keep the accent border but dim their label.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_busy: bool,
    theme: &Theme,
) {
    let border_style = if is_selected || is_busy {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_busy {
        Style::default().fg(theme.muted)
    } else if is_selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
