//! Identity provider module for password sign-in

mod client;
mod traits;
mod types;

pub use client::{FirebaseAuthClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use traits::AuthProvider;
pub use types::{AuthError, Credentials, Session};

#[cfg(test)]
pub use traits::MockAuthProvider;
