//! Notification dialog for failed sign-ins

use super::base::{render_dialog, DialogConfig};
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
    Frame,
};

const MAX_WIDTH: u16 = 56;

/// Render a modal notification over the current screen
pub fn render_error_dialog(frame: &mut Frame, title: &str, message: &str, theme: &Theme) {
    let key = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(theme.muted);

    let hint = vec![
        Span::styled("Enter", key),
        Span::styled("/", muted),
        Span::styled("Esc", key),
        Span::styled(" try again", muted),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: theme.error,
            border_color: theme.error,
            message,
            hint: Some(hint),
            max_width: MAX_WIDTH,
        },
    );
}
