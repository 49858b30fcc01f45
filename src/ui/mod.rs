//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod onboarding;
mod sign_in;
mod sign_up;
mod splash;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Title of the notification dialog
const NOTIFICATION_TITLE: &str = "Sign in failed";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Nothing but the splash until it has finished
    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state, &app.state.theme);
        return;
    }

    let (main_area, status_area) = layout::create_layout(area);
    let theme = app.state.theme.theme();

    match app.state.current_view {
        View::Splash => {}
        View::Onboarding => onboarding::draw(frame, main_area, &theme),
        View::SignIn => sign_in::draw(frame, main_area, app),
        View::SignUp => sign_up::draw(frame, main_area, &theme),
        View::Home => home::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, NOTIFICATION_TITLE, message, &theme);
    }
}
