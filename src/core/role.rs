//! Account role kinds.
//!
//! Every role-dependent decision in the app (routing, dashboard dispatch,
//! signup variants) goes through this enum with an exhaustive match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three account kinds the marketplace knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Employer,
    Institute,
}

/// All roles, in the order they appear in the signup selector.
pub const ALL_ROLES: [Role; 3] = [Role::Student, Role::Employer, Role::Institute];

impl Role {
    /// Canonical lowercase name, as used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Employer => "employer",
            Role::Institute => "institute",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Employer => "Employer",
            Role::Institute => "Institute",
        }
    }

    /// The dashboard route this role lands on after login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Employer => "/employer",
            Role::Institute => "/institute",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "employer" => Ok(Role::Employer),
            "institute" => Ok(Role::Institute),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_str() {
        for role in ALL_ROLES {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("Student".parse::<Role>().is_err()); // case sensitive
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
        let parsed: Role = serde_json::from_str("\"institute\"").unwrap();
        assert_eq!(parsed, Role::Institute);
    }

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(Role::Student.dashboard_path(), "/student");
        assert_eq!(Role::Employer.dashboard_path(), "/employer");
        assert_eq!(Role::Institute.dashboard_path(), "/institute");
    }
}
