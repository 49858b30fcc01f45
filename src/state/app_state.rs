//! Application state definitions

use super::forms::SignInController;
use crate::auth::Session;
use crate::theme::{LoadState, Theme};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen shown while resources load
    #[default]
    Splash,
    Onboarding,
    SignIn,
    SignUp,
    /// Authenticated home, reached after a successful sign-in
    Home,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Splash => "",
            View::Onboarding => "Welcome",
            View::SignIn => "Sign In",
            View::SignUp => "Sign Up",
            View::Home => "Home",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Views to return to with `go_back`
    pub view_history: Vec<View>,
    /// Sign-in form, recreated every time the sign-in view is entered
    pub sign_in: SignInController,
    /// Signed-in identity
    pub session: Option<Session>,
    pub theme: LoadState<Theme>,
    /// Pending notifications, shown one at a time as a modal dialog
    errors: VecDeque<String>,
}

impl AppState {
    /// Queue a notification for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Notification currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_splash() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Splash);
        assert!(state.view_history.is_empty());
        assert!(state.session.is_none());
        assert_eq!(state.theme, LoadState::Loading);
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::SignIn.title(), "Sign In");
        assert_eq!(View::Home.title(), "Home");
    }
}
