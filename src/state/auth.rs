//! Auth-session state for the current client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the login flow (`ApiClient::login`) and by explicit logout, read
//! by the request dispatcher on every call. The token is read at dispatch
//! time, so a request started before `logout` keeps the token it began with.
//!
//! DESIGN
//! ======
//! `AuthStore` is a cheap handle onto one shared `AuthState`. Token and profile
//! only change together: the store exposes no setter for either field alone.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::net::types::Profile;

/// Token and profile of the signed-in employee. An empty token means signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: String,
    pub profile: Option<Profile>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Shared handle to the process-local [`AuthState`].
///
/// Clones observe and mutate the same state; last write wins.
#[derive(Clone, Debug, Default)]
pub struct AuthStore {
    inner: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    /// Empty store: no token, no profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace token and profile together. No validation is applied.
    pub async fn set_auth(&self, token: impl Into<String>, profile: Profile) {
        let mut state = self.inner.write().await;
        state.token = token.into();
        state.profile = Some(profile);
    }

    /// Clear token and profile together.
    pub async fn logout(&self) {
        let mut state = self.inner.write().await;
        state.token.clear();
        state.profile = None;
    }

    /// Current token; empty when signed out.
    pub async fn token(&self) -> String {
        self.inner.read().await.token.clone()
    }

    pub async fn profile(&self) -> Option<Profile> {
        self.inner.read().await.profile.clone()
    }

    /// Consistent copy of both fields.
    pub async fn snapshot(&self) -> AuthState {
        self.inner.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_authenticated()
    }
}
