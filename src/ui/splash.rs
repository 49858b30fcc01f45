//! Splash screen rendering, shown while resources load

use crate::state::SplashState;
use crate::theme::{LoadState, Theme};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    " ___ ___ ___ _  _   ___ _  _ ",
    "/ __|_ _/ __| \\| | |_ _| \\| |",
    "\\__ \\| | (_ | .` |  | || .` |",
    "|___/___\\___|_|\\_| |___|_|\\_|",
    "                             ",
];

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, theme: &LoadState<Theme>) {
    let style = Style::default().fg(theme.theme().accent);
    let lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();

    let logo_height = lines.len() as u16;
    let logo_width = LOGO[0].len() as u16;

    // Center position with scroll offset (can go above screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = (area.y as i32 - y_pos).max(0) as usize;
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = y_pos.max(area.y as i32) as u16;

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Hint at the bottom, only before scrolling starts
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint = if theme.is_settled() {
            "Press any key to skip"
        } else {
            "Loading…"
        };
        let hint_width = hint.chars().count() as u16;
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint_width)) / 2,
            y: area.y + area.height - 2,
            width: hint_width.min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
