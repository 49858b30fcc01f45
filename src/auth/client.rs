//! HTTP client for the Firebase Identity Toolkit REST API
//!
//! Implements password sign-in via `accounts:signInWithPassword` and maps
//! the provider's error envelope onto user-facing [`AuthError`] messages.

use super::traits::AuthProvider;
use super::types::{AuthError, Credentials, Session};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default identity provider address
pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: String,
    refresh_token: String,
    /// Token lifetime in seconds, encoded as a string
    expires_in: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the Firebase email/password sign-in endpoint
pub struct FirebaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl FirebaseAuthClient {
    /// Create a new client against `base_url`
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Create a client from user configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.auth_base_url(),
            config.api_key(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuthClient {
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AuthError::new("No API key configured for the identity provider"))?;

        let body = SignInRequest {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
            return_secure_token: true,
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "identity provider rejected sign-in");
            return Err(error_from_body(status, &text));
        }

        let payload: SignInResponse = response.json().await.map_err(|e| {
            AuthError::new(format!("Unexpected response from identity provider: {e}"))
        })?;

        into_session(payload)
    }
}

fn into_session(payload: SignInResponse) -> Result<Session, AuthError> {
    let invalid_lifetime = || {
        AuthError::new(format!(
            "Identity provider returned an invalid token lifetime: {}",
            payload.expires_in
        ))
    };

    let expires_at = payload
        .expires_in
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .ok_or_else(invalid_lifetime)?;

    Ok(Session {
        local_id: payload.local_id,
        email: payload.email,
        id_token: SecretString::from(payload.id_token),
        refresh_token: SecretString::from(payload.refresh_token),
        expires_at,
    })
}

fn transport_error(err: reqwest::Error) -> AuthError {
    if err.is_timeout() {
        AuthError::new("The sign-in request timed out")
    } else if err.is_connect() {
        AuthError::new("Could not reach the identity provider")
    } else {
        AuthError::new(format!("Network error: {err}"))
    }
}

/// Map a non-2xx response body onto an [`AuthError`]
fn error_from_body(status: reqwest::StatusCode, body: &str) -> AuthError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return AuthError::new(format!("Identity provider returned HTTP {status}"));
    };

    // Messages look like "CODE" or "CODE : free-form detail"
    let raw = envelope.error.message;
    let (code, detail) = match raw.split_once(" : ") {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (raw.trim(), None),
    };

    match (describe_code(code), detail) {
        (Some(text), _) => AuthError::new(text),
        (None, Some(detail)) if !detail.is_empty() => AuthError::new(detail),
        _ => AuthError::new(raw.clone()),
    }
}

fn describe_code(code: &str) -> Option<&'static str> {
    let text = match code {
        "EMAIL_NOT_FOUND" => "There is no user record corresponding to this identifier.",
        "INVALID_PASSWORD" => "The password is invalid or the user does not have a password.",
        "INVALID_LOGIN_CREDENTIALS" => "The supplied credentials are incorrect.",
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "MISSING_PASSWORD" => "A password is required.",
        "MISSING_EMAIL" => "An email address is required.",
        "USER_DISABLED" => "The user account has been disabled by an administrator.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many unsuccessful sign-in attempts. Please try again later."
        }
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this project.",
        _ => return None,
    };
    Some(text)
}
