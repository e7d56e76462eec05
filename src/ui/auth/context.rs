//! Auth context for managing session state
//!
//! This module provides the reactive authentication context that:
//! - Holds the current session (bearer token + role)
//! - Handles login and logout
//! - Persists the session to localStorage and restores it at startup

use leptos::prelude::*;

use crate::core::{Role, Session};

/// Storage key for the bearer token.
#[allow(dead_code)]
pub const STORAGE_KEY_TOKEN: &str = "internlink_token";
/// Storage key for the role the token was issued for.
#[allow(dead_code)]
pub const STORAGE_KEY_ROLE: &str = "internlink_role";

/// Auth context providing session state and actions.
///
/// The single source of truth for identity. Constructed once at the
/// composition root and handed to views through the context tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session identity
    pub session: RwSignal<Session>,
    /// Whether the persisted session has been read yet. Stays false during
    /// server rendering; flips once the client-side restore effect has run.
    pub restored: RwSignal<bool>,
}

impl AuthContext {
    /// Check if a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_authenticated()
    }

    /// Role of the current session (if authenticated)
    pub fn role(&self) -> Option<Role> {
        self.session.get().role()
    }

    /// Bearer token for outgoing requests (if authenticated)
    /// Uses get_untracked() since this is typically called outside reactive contexts
    pub fn token(&self) -> Option<String> {
        self.session.get_untracked().token().map(str::to_string)
    }

    /// Set the session and persist token + role together.
    ///
    /// Infallible: the caller obtained the token from a successful login
    /// response, so there is nothing left to validate. An empty token
    /// normalizes to an anonymous session and persists nothing.
    pub fn login(&self, token: String, role: Role) {
        let session = Session::from_parts(Some(token), Some(role));
        if let Session::Authenticated { token, role } = &session {
            save_to_storage(token, *role);
        }
        self.session.set(session);
    }

    /// Clear the session and remove both persisted keys.
    ///
    /// Idempotent: logging out while already anonymous is a no-op.
    pub fn logout(&self) {
        clear_storage();
        self.session.set(Session::Anonymous);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start anonymous on both server and client to avoid hydration mismatch
    let session = RwSignal::new(Session::Anonymous);
    let restored = RwSignal::new(false);

    let ctx = AuthContext { session, restored };

    // Restore the session from localStorage after hydration (client-side
    // only). Trust-on-read: no network call validates the token at startup;
    // a stale token is caught by the first 401 from the API.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            session.set(read_storage());
            restored.set(true);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Read the persisted token + role, normalizing anything partial or
/// malformed to an anonymous session.
#[cfg(not(feature = "ssr"))]
fn read_storage() -> Session {
    use std::str::FromStr;

    let Some(window) = web_sys::window() else {
        return Session::Anonymous;
    };
    let Ok(Some(storage)) = window.local_storage() else {
        return Session::Anonymous;
    };

    let token = storage.get_item(STORAGE_KEY_TOKEN).ok().flatten();
    let role = storage
        .get_item(STORAGE_KEY_ROLE)
        .ok()
        .flatten()
        .and_then(|s| Role::from_str(&s).ok());
    Session::from_parts(token, role)
}

/// Save token and role to localStorage
#[cfg(not(feature = "ssr"))]
fn save_to_storage(token: &str, role: Role) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY_TOKEN, token);
            let _ = storage.set_item(STORAGE_KEY_ROLE, role.as_str());
        }
    }
}

/// Clear auth data from localStorage. The two keys go together, never one
/// without the other.
#[cfg(not(feature = "ssr"))]
fn clear_storage() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY_TOKEN);
            let _ = storage.remove_item(STORAGE_KEY_ROLE);
        }
    }
}

#[cfg(feature = "ssr")]
#[allow(dead_code)]
fn save_to_storage(_token: &str, _role: Role) {}

#[cfg(feature = "ssr")]
#[allow(dead_code)]
fn clear_storage() {}
