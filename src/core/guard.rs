//! Route guard decision logic.
//!
//! A pure function of (session, requested scope). The UI re-evaluates it
//! reactively on every navigation and session change; nothing here is cached.

use super::role::Role;
use super::session::Session;

/// Outcome of checking a navigation target against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session role matches the requested scope.
    Render,
    /// No authenticated session; go to the login entry point.
    RedirectToLogin,
    /// Authenticated, but for a different role.
    RedirectToUnauthorized,
}

/// Decide whether the current session may render a page scoped to `scope`.
pub fn decide(session: &Session, scope: Role) -> RouteDecision {
    match session.role() {
        None => RouteDecision::RedirectToLogin,
        Some(role) if role == scope => RouteDecision::Render,
        Some(_) => RouteDecision::RedirectToUnauthorized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::role::ALL_ROLES;

    fn authenticated(role: Role) -> Session {
        Session::from_parts(Some("t1".to_string()), Some(role))
    }

    #[test]
    fn test_unauthenticated_always_redirects_to_login() {
        for scope in ALL_ROLES {
            assert_eq!(
                decide(&Session::Anonymous, scope),
                RouteDecision::RedirectToLogin
            );
        }
    }

    #[test]
    fn test_matching_role_renders() {
        for role in ALL_ROLES {
            assert_eq!(decide(&authenticated(role), role), RouteDecision::Render);
        }
    }

    #[test]
    fn test_mismatched_role_redirects_to_unauthorized() {
        assert_eq!(
            decide(&authenticated(Role::Student), Role::Employer),
            RouteDecision::RedirectToUnauthorized
        );
        assert_eq!(
            decide(&authenticated(Role::Employer), Role::Institute),
            RouteDecision::RedirectToUnauthorized
        );
    }
}
