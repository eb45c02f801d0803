// ABOUTME: Session store interface holding the bearer token and cached user profile
// ABOUTME: Injected into the pipeline so tests can substitute a fake and assert mutations
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::{PoisonError, RwLock};

use crate::models::auth::UserProfile;

/// Client-held authentication state: bearer token plus cached profile.
///
/// Exactly one logical session exists per client process. It is written by
/// the login/logout flows and cleared by the pipeline on authentication
/// failure; clearing an already-clear session is a no-op.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, `None` when unauthenticated
    fn token(&self) -> Option<String>;

    /// Replace the bearer token
    fn set_token(&self, token: String);

    /// Cached profile of the authenticated user, if fetched
    fn profile(&self) -> Option<UserProfile>;

    /// Cache the authenticated user's profile
    fn set_profile(&self, profile: UserProfile);

    /// Drop the token and profile; idempotent
    fn clear(&self);
}

#[derive(Debug, Default)]
struct SessionState {
    token: String,
    profile: Option<UserProfile>,
}

/// In-memory session store; the default for a fresh client
#[derive(Debug, Default)]
pub struct MemorySession {
    state: RwLock<SessionState>,
}

impl MemorySession {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if state.token.is_empty() {
            None
        } else {
            Some(state.token.clone())
        }
    }

    fn set_token(&self, token: String) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = token;
    }

    fn profile(&self) -> Option<UserProfile> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.profile.clone()
    }

    fn set_profile(&self, profile: UserProfile) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.profile = Some(profile);
    }

    fn clear(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token.clear();
        state.profile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            username: "admin".into(),
            email: "admin@example.com".into(),
            full_name: "Site Admin".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn test_empty_token_is_none() {
        let session = MemorySession::new();
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let session = MemorySession::new();
        session.set_token("abc123".into());
        session.set_profile(profile());
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.profile().is_some());

        session.clear();
        assert!(session.token().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let session = MemorySession::new();
        session.set_token("abc123".into());
        session.clear();
        session.clear();
        assert!(session.token().is_none());
    }
}
