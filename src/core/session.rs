//! Session identity model.
//!
//! A session is either anonymous or carries a bearer token together with the
//! role it was issued for. The representation makes the auth invariants hold
//! by construction: there is no way to be authenticated without a non-empty
//! token, and no way to have a token without a role.

use super::role::Role;

/// Current session identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No user is signed in.
    #[default]
    Anonymous,
    /// A user is signed in with a bearer token scoped to one role.
    Authenticated { token: String, role: Role },
}

impl Session {
    /// Build a session from possibly-partial persisted parts.
    ///
    /// Only a non-empty token together with a role produces an authenticated
    /// session; anything else (missing token, blank token, missing role)
    /// normalizes to `Anonymous`. Used when restoring from storage, where the
    /// two keys may have been tampered with or half-written.
    pub fn from_parts(token: Option<String>, role: Option<Role>) -> Self {
        match (token, role) {
            (Some(token), Some(role)) if !token.is_empty() => {
                Session::Authenticated { token, role }
            }
            _ => Session::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Authenticated { role, .. } => Some(*role),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_by_default() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_authenticated_iff_token_present() {
        let session = Session::from_parts(Some("t1".to_string()), Some(Role::Employer));
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.role(), Some(Role::Employer));
    }

    #[test]
    fn test_role_present_whenever_authenticated() {
        // The invariant holds structurally; from_parts can never produce a
        // token without a role.
        let session = Session::from_parts(Some("t1".to_string()), None);
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let session = Session::from_parts(Some(String::new()), Some(Role::Student));
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_missing_token_is_anonymous() {
        let session = Session::from_parts(None, Some(Role::Student));
        assert!(!session.is_authenticated());
    }
}
