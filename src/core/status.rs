//! Application status state machine.
//!
//! Legal transitions are `pending -> shortlisted`, `pending -> rejected`,
//! and `shortlisted -> accepted`. The dashboard only ever offers the actions
//! listed by [`ApplicationStatus::available_actions`], so an application can
//! never jump straight from pending to accepted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a student's application to an internship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    /// Whether moving from `self` to `to` is a legal transition.
    pub fn can_transition(&self, to: ApplicationStatus) -> bool {
        matches!(
            (self, to),
            (
                ApplicationStatus::Pending,
                ApplicationStatus::Shortlisted | ApplicationStatus::Rejected
            ) | (ApplicationStatus::Shortlisted, ApplicationStatus::Accepted)
        )
    }

    /// The statuses the UI may offer as next actions from `self`.
    pub fn available_actions(&self) -> &'static [ApplicationStatus] {
        match self {
            ApplicationStatus::Pending => {
                &[ApplicationStatus::Shortlisted, ApplicationStatus::Rejected]
            }
            ApplicationStatus::Shortlisted => &[ApplicationStatus::Accepted],
            ApplicationStatus::Rejected | ApplicationStatus::Accepted => &[],
        }
    }

    /// Terminal states have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.available_actions().is_empty()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationStatus::*;

    #[test]
    fn test_pending_transitions() {
        assert!(Pending.can_transition(Shortlisted));
        assert!(Pending.can_transition(Rejected));
        assert!(!Pending.can_transition(Accepted));
        assert!(!Pending.can_transition(Pending));
    }

    #[test]
    fn test_shortlisted_transitions() {
        assert!(Shortlisted.can_transition(Accepted));
        assert!(!Shortlisted.can_transition(Rejected));
        assert!(!Shortlisted.can_transition(Pending));
    }

    #[test]
    fn test_terminal_states() {
        assert!(Rejected.is_terminal());
        assert!(Accepted.is_terminal());
        assert!(!Pending.is_terminal());
        assert!(!Shortlisted.is_terminal());
    }

    #[test]
    fn test_actions_match_transitions() {
        for from in [Pending, Shortlisted, Rejected, Accepted] {
            for to in [Pending, Shortlisted, Rejected, Accepted] {
                assert_eq!(
                    from.available_actions().contains(&to),
                    from.can_transition(to)
                );
            }
        }
    }

    #[test]
    fn test_accepted_never_offered_from_pending() {
        assert!(!Pending.available_actions().contains(&Accepted));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Shortlisted).unwrap(), "\"shortlisted\"");
        let parsed: super::ApplicationStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, Pending);
    }
}
