//! Sign-in form state and submission lifecycle

use super::field::FormField;
use crate::auth::{AuthError, AuthProvider, Credentials, Session};
use std::sync::Arc;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Message reported when a dispatched sign-in never reports back
pub const INTERRUPTED_MESSAGE: &str = "Sign in was interrupted";

/// Submission phase of the sign-in form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInPhase {
    #[default]
    Idle,
    /// A sign-in call is in flight
    Submitting,
    /// The last attempt was rejected; the message is in the validation flag
    Failed,
}

/// Result of a resolved sign-in dispatch
#[derive(Debug)]
pub enum SignInOutcome {
    SignedIn(Session),
    Failed(String),
}

/// Editable credential inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Email,
    Password,
}

/// Keyboard focus on the sign-in view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInFocus {
    #[default]
    Email,
    Password,
    Submit,
    SignUp,
}

impl SignInFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Submit,
            Self::Submit => Self::SignUp,
            Self::SignUp => Self::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Email => Self::SignUp,
            Self::Password => Self::Email,
            Self::Submit => Self::Password,
            Self::SignUp => Self::Submit,
        }
    }

    /// The credential input under focus, if any
    pub fn field(&self) -> Option<CredentialField> {
        match self {
            Self::Email => Some(CredentialField::Email),
            Self::Password => Some(CredentialField::Password),
            Self::Submit | Self::SignUp => None,
        }
    }
}

/// Owns the sign-in form and drives at most one sign-in call at a time.
///
/// Field edits are accepted in every phase. A dispatched call works on the
/// credentials captured by [`SignInController::submit`], so edits made while
/// it is in flight only affect the next attempt.
#[derive(Debug)]
pub struct SignInController {
    email: FormField,
    password: FormField,
    is_password_visible: bool,
    validation_flag: String,
    phase: SignInPhase,
    pending: Option<oneshot::Receiver<Result<Session, AuthError>>>,
    pub focus: SignInFocus,
}

impl Default for SignInController {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInController {
    pub fn new() -> Self {
        Self {
            email: FormField::text("Email"),
            password: FormField::secret("Password"),
            is_password_visible: false,
            validation_flag: String::new(),
            phase: SignInPhase::Idle,
            pending: None,
            focus: SignInFocus::default(),
        }
    }

    pub fn email(&self) -> &FormField {
        &self.email
    }

    pub fn password(&self) -> &FormField {
        &self.password
    }

    pub fn is_password_visible(&self) -> bool {
        self.is_password_visible
    }

    /// Message from the last failed attempt; empty when there is none
    pub fn validation_flag(&self) -> &str {
        &self.validation_flag
    }

    pub fn phase(&self) -> SignInPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SignInPhase::Submitting
    }

    #[allow(dead_code)]
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email.set_text(value.into());
    }

    #[allow(dead_code)]
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password.set_text(value.into());
    }

    pub fn push_char(&mut self, field: CredentialField, c: char) {
        self.field_mut(field).push_char(c);
    }

    pub fn pop_char(&mut self, field: CredentialField) {
        self.field_mut(field).pop_char();
    }

    fn field_mut(&mut self, field: CredentialField) -> &mut FormField {
        match field {
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.is_password_visible = !self.is_password_visible;
    }

    /// Dispatch a sign-in with the current credentials.
    ///
    /// Returns `false` without dispatching while another attempt is in flight.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, provider: Arc<dyn AuthProvider>) -> bool {
        if self.is_submitting() {
            tracing::debug!("Sign-in already in flight, ignoring submit");
            return false;
        }

        let credentials = Credentials::new(self.email.as_text(), self.password.as_text());
        self.validation_flag.clear();
        self.phase = SignInPhase::Submitting;

        tracing::info!(email = %credentials.email, "Dispatching sign-in");

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = provider.sign_in(credentials).await;
            // Receiver is gone when the screen was left; nothing to report to
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        true
    }

    /// Check whether the in-flight attempt has resolved, without blocking
    pub fn poll_outcome(&mut self) -> Option<SignInOutcome> {
        let rx = self.pending.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(AuthError::new(INTERRUPTED_MESSAGE)),
        };
        self.pending = None;
        Some(self.resolve(result))
    }

    fn resolve(&mut self, result: Result<Session, AuthError>) -> SignInOutcome {
        match result {
            Ok(session) => {
                tracing::info!(local_id = %session.local_id, "Sign-in succeeded");
                SignInOutcome::SignedIn(session)
            }
            Err(err) => {
                tracing::info!(error = %err, "Sign-in failed");
                self.phase = SignInPhase::Failed;
                self.validation_flag = err.message.clone();
                SignInOutcome::Failed(err.message)
            }
        }
    }
}
