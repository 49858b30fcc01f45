//! Application state and core logic

use crate::auth::{AuthProvider, FirebaseAuthClient};
use crate::config::Config;
use crate::state::{AppState, SignInController, SignInFocus, SignInOutcome, SplashState, View};
use crate::theme::{FileThemeLoader, LoadState, Theme, ThemeLoader};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot::{self, error::TryRecvError};

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Identity provider used by the sign-in form
    auth: Arc<dyn AuthProvider>,
    /// Receiver for the theme load result
    theme_rx: Option<oneshot::Receiver<Result<Theme>>>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// When the app started, drives the spinner
    started: Instant,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &Config) -> Result<Self> {
        let auth = Arc::new(FirebaseAuthClient::from_config(config)?);
        let theme_loader = Arc::new(FileThemeLoader::new(Config::theme_path()));
        Ok(Self::with_providers(auth, theme_loader))
    }

    /// Create an App with explicit collaborators; starts loading the theme.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_providers(auth: Arc<dyn AuthProvider>, theme_loader: Arc<dyn ThemeLoader>) -> Self {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(theme_loader.load().await);
        });

        Self {
            state: AppState::default(),
            auth,
            theme_rx: Some(rx),
            quit: false,
            splash_state: Some(SplashState::new()),
            started: Instant::now(),
        }
    }

    /// Poll background work: theme loading and the in-flight sign-in
    pub fn tick(&mut self) {
        self.poll_theme();
        self.poll_sign_in();
    }

    fn poll_theme(&mut self) {
        let Some(rx) = self.theme_rx.as_mut() else {
            return;
        };

        let loaded = match rx.try_recv() {
            Ok(Ok(theme)) => LoadState::Ready(theme),
            Ok(Err(err)) => {
                tracing::warn!("Theme failed to load, using defaults: {err:#}");
                LoadState::Failed(format!("{err:#}"))
            }
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => {
                tracing::warn!("Theme loader stopped without a result, using defaults");
                LoadState::Failed("Theme loader stopped".to_string())
            }
        };

        self.theme_rx = None;
        self.state.theme = loaded;
    }

    fn poll_sign_in(&mut self) {
        match self.state.sign_in.poll_outcome() {
            Some(SignInOutcome::SignedIn(session)) => {
                self.state.session = Some(session);
                self.navigate(View::Home);
            }
            Some(SignInOutcome::Failed(message)) => self.push_error(message),
            None => {}
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        let ready = self.state.theme.is_settled();
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height, ready);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Onboarding;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Whether something is animating and wants a fast redraw
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.sign_in.is_submitting()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Current spinner glyph for in-flight work
    pub fn spinner_frame(&self) -> &'static str {
        let index = (self.started.elapsed().as_millis() / 80) as usize % SPINNER_FRAMES.len();
        SPINNER_FRAMES[index]
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Onboarding => self.handle_onboarding_key(key),
            View::SignIn => self.handle_sign_in_key(key),
            View::SignUp => self.handle_sign_up_key(key),
            View::Home => self.handle_home_key(key),
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = ?self.state.current_view, to = ?view, "Navigating");
        self.leave_view(view);
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.leave_view(view);
            self.state.current_view = view;
        }
    }

    /// Switch to `view` and forget the navigation history
    fn reset_to(&mut self, view: View) {
        self.leave_view(view);
        self.state.view_history.clear();
        self.state.current_view = view;
    }

    /// Sign-in form state lives only as long as the sign-in view is shown
    fn leave_view(&mut self, next: View) {
        if self.state.current_view == View::SignIn || next == View::SignIn {
            self.state.sign_in = SignInController::new();
        }
    }

    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if !self.state.theme.is_settled() {
            return;
        }
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => self.navigate(View::SignIn),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.sign_in;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focus = form.focus;

        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::REVEAL_MODIFIER) => {
                form.toggle_password_visibility();
            }
            KeyCode::Tab | KeyCode::Down => form.focus = focus.next(),
            KeyCode::BackTab | KeyCode::Up => form.focus = focus.prev(),
            KeyCode::Esc => self.reset_to(View::Onboarding),
            KeyCode::Enter => match focus {
                SignInFocus::Email => form.focus = SignInFocus::Password,
                SignInFocus::Password | SignInFocus::Submit => {
                    form.submit(Arc::clone(&self.auth));
                }
                SignInFocus::SignUp => self.navigate(View::SignUp),
            },
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = focus.field() {
                    form.push_char(field, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focus.field() {
                    form.pop_char(field);
                }
            }
            _ => {}
        }
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.go_back();
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') => {
                tracing::info!("Signing out");
                self.state.session = None;
                self.reset_to(View::SignIn);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthError, MockAuthProvider, Session};
    use crate::theme::MockThemeLoader;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use secrecy::{ExposeSecret, SecretString};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn session_for(email: &str) -> Session {
        Session {
            local_id: "uid-1".to_string(),
            email: email.to_string(),
            id_token: SecretString::from("id".to_string()),
            refresh_token: SecretString::from("refresh".to_string()),
            expires_at: Utc::now(),
        }
    }

    fn ready_theme() -> Arc<MockThemeLoader> {
        let mut loader = MockThemeLoader::new();
        loader.expect_load().returning(|| Ok(Theme::default()));
        Arc::new(loader)
    }

    struct PendingThemeLoader;

    #[async_trait]
    impl ThemeLoader for PendingThemeLoader {
        async fn load(&self) -> Result<Theme> {
            std::future::pending().await
        }
    }

    async fn tick_until(app: &mut App, done: impl Fn(&App) -> bool) {
        tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                app.tick();
                if done(app) {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("condition not reached");
    }

    /// App past the splash, on the sign-in view
    async fn app_on_sign_in(auth: MockAuthProvider) -> App {
        let mut app = App::with_providers(Arc::new(auth), ready_theme());
        tick_until(&mut app, |app| app.state.theme.is_settled()).await;
        app.handle_key(key(KeyCode::Char(' ')));
        app.update_splash(24);
        assert_eq!(app.state.current_view, View::Onboarding);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.current_view, View::SignIn);
        app
    }

    fn enter_credentials(app: &mut App, email: &str, password: &str) {
        type_text(app, email);
        app.handle_key(key(KeyCode::Enter));
        type_text(app, password);
    }

    #[tokio::test]
    async fn test_successful_sign_in_navigates_home_once() {
        let mut auth = MockAuthProvider::new();
        auth.expect_sign_in()
            .withf(|c| c.email == "a@b.com" && c.password.expose_secret() == "secret")
            .times(1)
            .returning(|c| Ok(session_for(&c.email)));

        let mut app = app_on_sign_in(auth).await;
        enter_credentials(&mut app, "a@b.com", "secret");
        app.handle_key(key(KeyCode::Enter));

        tick_until(&mut app, |app| app.state.current_view == View::Home).await;
        for _ in 0..5 {
            app.tick();
        }

        assert_eq!(app.state.view_history, vec![View::Onboarding, View::SignIn]);
        assert!(!app.state.has_errors());
        assert_eq!(
            app.state.session.as_ref().map(|s| s.email.as_str()),
            Some("a@b.com")
        );
    }

    #[tokio::test]
    async fn test_failed_sign_in_notifies_and_stays() {
        let mut auth = MockAuthProvider::new();
        auth.expect_sign_in()
            .times(1)
            .returning(|_| Err(AuthError::new("Sign in failed: invalid password")));

        let mut app = app_on_sign_in(auth).await;
        enter_credentials(&mut app, "a@b.com", "wrong");
        app.handle_key(key(KeyCode::Enter));

        tick_until(&mut app, |app| app.state.has_errors()).await;

        assert_eq!(
            app.state.current_error(),
            Some("Sign in failed: invalid password")
        );
        assert_eq!(app.state.current_view, View::SignIn);
        assert!(!app.state.sign_in.is_submitting());
        assert!(app.state.session.is_none());
    }

    #[tokio::test]
    async fn test_double_submit_dispatches_once() {
        let mut auth = MockAuthProvider::new();
        auth.expect_sign_in()
            .times(1)
            .returning(|_| Err(AuthError::new("nope")));

        let mut app = app_on_sign_in(auth).await;
        enter_credentials(&mut app, "a@b.com", "secret");
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        tick_until(&mut app, |app| app.state.has_errors()).await;
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_error_dialog_is_modal() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        app.push_error("boom");
        type_text(&mut app, "abc");
        assert_eq!(app.state.sign_in.email().as_text(), "");

        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_reveal_shortcut_toggles_visibility() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        let reveal = KeyEvent::new(KeyCode::Char('r'), crate::platform::REVEAL_MODIFIER);

        app.handle_key(reveal);
        assert!(app.state.sign_in.is_password_visible());
        assert_eq!(app.state.sign_in.email().as_text(), "");

        app.handle_key(reveal);
        assert!(!app.state.sign_in.is_password_visible());
    }

    #[tokio::test]
    async fn test_backspace_edits_focused_field() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        type_text(&mut app, "ab");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state.sign_in.email().as_text(), "a");
    }

    #[tokio::test]
    async fn test_escape_returns_to_onboarding_and_discards_form() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        type_text(&mut app, "a@b.com");

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.current_view, View::Onboarding);
        assert!(app.state.view_history.is_empty());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.sign_in.email().as_text(), "");
    }

    #[tokio::test]
    async fn test_sign_up_link_and_back() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.state.sign_in.focus, SignInFocus::SignUp);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state.current_view, View::SignUp);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state.current_view, View::SignIn);
    }

    #[tokio::test]
    async fn test_sign_out_returns_to_fresh_sign_in() {
        let mut auth = MockAuthProvider::new();
        auth.expect_sign_in()
            .returning(|c| Ok(session_for(&c.email)));

        let mut app = app_on_sign_in(auth).await;
        enter_credentials(&mut app, "a@b.com", "secret");
        app.handle_key(key(KeyCode::Enter));
        tick_until(&mut app, |app| app.state.current_view == View::Home).await;

        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.state.current_view, View::SignIn);
        assert!(app.state.session.is_none());
        assert!(app.state.view_history.is_empty());
        assert_eq!(app.state.sign_in.email().as_text(), "");
    }

    #[tokio::test]
    async fn test_leaving_sign_in_drops_late_outcome() {
        let mut auth = MockAuthProvider::new();
        auth.expect_sign_in()
            .returning(|_| Err(AuthError::new("late")));

        let mut app = app_on_sign_in(auth).await;
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Esc));

        tokio::time::sleep(Duration::from_millis(20)).await;
        app.tick();
        assert!(!app.state.has_errors());
        assert_eq!(app.state.current_view, View::Onboarding);
    }

    #[tokio::test]
    async fn test_onboarding_quit() {
        let mut app = app_on_sign_in(MockAuthProvider::new()).await;
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_theme_failure_falls_back_to_default() {
        let mut loader = MockThemeLoader::new();
        loader.expect_load().returning(|| Err(anyhow!("bad theme")));

        let mut app = App::with_providers(Arc::new(MockAuthProvider::new()), Arc::new(loader));
        tick_until(&mut app, |app| app.state.theme.is_settled()).await;

        assert!(matches!(app.state.theme, LoadState::Failed(_)));
        assert_eq!(app.state.theme.theme(), Theme::default());
    }

    #[tokio::test]
    async fn test_splash_waits_for_theme() {
        let mut app = App::with_providers(
            Arc::new(MockAuthProvider::new()),
            Arc::new(PendingThemeLoader),
        );
        if let Some(splash) = app.splash_state.as_mut() {
            splash.start_time = Instant::now() - Duration::from_secs(10);
        }

        app.handle_key(key(KeyCode::Enter));
        for _ in 0..5 {
            app.tick();
            assert!(!app.update_splash(24));
        }
        assert!(app.in_splash());
        assert!(app.is_animating());
    }

    #[tokio::test]
    async fn test_spinner_frame_is_known_glyph() {
        let app = App::with_providers(Arc::new(MockAuthProvider::new()), ready_theme());
        assert!(SPINNER_FRAMES.contains(&app.spinner_frame()));
    }
}
