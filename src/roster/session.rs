//! # Session Gate
//!
//! A two-state machine: **Locked** (initial) and **Unlocked** (terminal). The only
//! transition is a successful [`login`]; there is no logout. While locked, every
//! roster command refuses to run.
//!
//! Credential checking sits behind [`CredentialVerifier`] so a hashed store or an
//! external service can replace [`FixedCredentials`] without touching the gate.

use crate::error::{Result, RosterError};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single built-in username/password pair.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub unlocked: bool,
}

impl SessionState {
    pub fn locked() -> Self {
        Self::default()
    }

    pub fn require_unlocked(&self) -> Result<()> {
        if self.unlocked {
            Ok(())
        } else {
            Err(RosterError::Locked)
        }
    }
}

/// Check credentials and unlock the session on a match.
///
/// A mismatch leaves the session exactly as it was.
pub fn login<V: CredentialVerifier + ?Sized>(
    verifier: &V,
    session: &mut SessionState,
    username: &str,
    password: &str,
) -> Result<()> {
    if verifier.verify(username.trim(), password.trim()) {
        session.unlocked = true;
        tracing::debug!(user = username.trim(), "login succeeded");
        Ok(())
    } else {
        tracing::warn!(user = username.trim(), "login failed");
        Err(RosterError::AccessDenied)
    }
}
