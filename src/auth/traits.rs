//! Trait abstraction for identity providers to enable mocking in tests

use super::types::{AuthError, Credentials, Session};
use async_trait::async_trait;

/// Identity provider operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange an email/password pair for a session
    async fn sign_in(&self, credentials: Credentials) -> Result<Session, AuthError>;
}
