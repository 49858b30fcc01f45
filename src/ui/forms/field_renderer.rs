//! Field rendering utilities for forms

use crate::state::FormField;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-render decoration of a field
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldDecor<'a> {
    pub is_active: bool,
    /// Show secret values in clear text
    pub reveal: bool,
    /// Show the error marker next to the label
    pub has_error: bool,
    /// Text shown on the right of the top border
    pub side_hint: Option<&'a str>,
}

/// Draw a single-line form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, decor: FieldDecor, theme: &Theme) {
    let border_style = if decor.is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_line = if field.is_empty() && !decor.is_active {
        Line::from(Span::styled(
            field.label.clone(),
            Style::default().fg(theme.muted),
        ))
    } else {
        let mut spans = vec![Span::raw(field.display_value(decor.reveal))];
        if decor.is_active {
            spans.push(Span::styled("▌", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label))];
    if decor.has_error {
        title.push(Span::styled(
            "✗ ",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ));
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(hint) = decor.side_hint {
        block = block.title(
            Line::from(Span::styled(format!(" {hint} "), Style::default().fg(theme.muted)))
                .right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(value_line).block(block), area);
}
