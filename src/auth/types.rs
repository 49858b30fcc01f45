//! Credential, session and error types shared by auth providers

use chrono::{DateTime, Utc};
use secrecy::SecretString;

/// Email/password pair captured at the moment a sign-in is dispatched
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Authenticated identity returned by the provider on a successful sign-in
#[derive(Debug)]
pub struct Session {
    /// Provider-side user id
    pub local_id: String,
    pub email: String,
    #[allow(dead_code)]
    pub id_token: SecretString,
    #[allow(dead_code)]
    pub refresh_token: SecretString,
    pub expires_at: DateTime<Utc>,
}

/// Sign-in failure reported by the identity provider.
///
/// The provider does not distinguish wrong passwords, unknown users or
/// transport failures; all of them carry a user-facing message only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("a@b.com", "hunter2");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("a@b.com"));
        assert!(!debug_str.contains("hunter2"));
        assert_eq!(creds.password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_auth_error_displays_message_verbatim() {
        let err = AuthError::new("Sign in failed: invalid password");
        assert_eq!(err.to_string(), "Sign in failed: invalid password");
    }
}
