//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::auth::UserInfo;

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal<AuthState>` context from the app root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // A fresh state is loading until the first `/api/auth/me` resolves;
        // route guards must not bounce to login while loading is true.
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Whether a signed-in user is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record a resolved session (or lack of one) and stop loading.
    pub fn resolve(&mut self, user: Option<UserInfo>) {
        self.user = user;
        self.loading = false;
    }

    /// Drop the signed-in user after a logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
