//! Sign-in screen rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, FieldDecor};
use super::layout::{centered_rect, CARD_WIDTH};
use crate::app::App;
use crate::state::{SignInFocus, SignInPhase};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the sign-in form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme.theme();
    let form = &app.state.sign_in;

    let card = centered_rect(area, CARD_WIDTH, 17);
    let [title, subtitle, _, email, password, message, submit, _, sign_up] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(card);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Sign In",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Welcome back you've been missed!",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
        subtitle,
    );

    let has_error = form.phase() == SignInPhase::Failed;
    draw_field(
        frame,
        email,
        form.email(),
        FieldDecor {
            is_active: form.focus == SignInFocus::Email,
            has_error,
            ..Default::default()
        },
        &theme,
    );

    let reveal_hint = if form.is_password_visible() {
        format!("{} hide", crate::platform::REVEAL_SHORTCUT)
    } else {
        format!("{} show", crate::platform::REVEAL_SHORTCUT)
    };
    draw_field(
        frame,
        password,
        form.password(),
        FieldDecor {
            is_active: form.focus == SignInFocus::Password,
            reveal: form.is_password_visible(),
            side_hint: Some(reveal_hint.as_str()),
            ..Default::default()
        },
        &theme,
    );

    if !form.validation_flag().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                form.validation_flag(),
                Style::default().fg(theme.error),
            )),
            message,
        );
    }

    let label = if form.is_submitting() {
        format!("{} Signing in…", app.spinner_frame())
    } else {
        "Sign In".to_string()
    };
    render_button(
        frame,
        submit,
        &label,
        form.focus == SignInFocus::Submit,
        form.is_submitting(),
        &theme,
    );

    let link_style = if form.focus == SignInFocus::SignUp {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("Don't have an account?", link_style)))
            .alignment(Alignment::Center),
        sign_up,
    );
}
