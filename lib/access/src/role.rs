//! Role vocabulary for the retention department.
//!
//! The platform recognizes a closed set of four roles. Earlier iterations of
//! the dashboard used department-specific names (`hod`, `senior_manager`,
//! `data_analyst`) and contact-center names (`agent`, `supervisor`, `branch`,
//! `exec`); those are accepted as parse-time aliases of the canonical set so
//! stored sessions from older deployments keep working. Anything else fails
//! to parse; an unrecognized role is never silently mapped to a legitimate
//! low-privilege role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownRoleError;

/// Role assigned to a session for the lifetime of that session.
///
/// Every authorization decision in the platform is driven by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator: user, model, and settings management.
    Admin,
    /// Department head / senior manager: oversight, approvals, reporting.
    Manager,
    /// Retention analyst: segments, bulk predictions, campaign design.
    Analyst,
    /// Retention contact-center officer: customer engagement and logging.
    Officer,
}

impl Role {
    /// All roles in the closed set, in privilege order (most to least).
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Analyst, Role::Officer];

    /// Returns the canonical lowercase name for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Analyst => "analyst",
            Self::Officer => "officer",
        }
    }

    /// Returns true if this role has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            // Legacy department vocabulary
            "manager" | "hod" | "senior_manager" | "supervisor" | "branch" | "exec" => {
                Ok(Self::Manager)
            }
            "analyst" | "data_analyst" => Ok(Self::Analyst),
            "officer" | "agent" => Ok(Self::Officer),
            other => Err(UnknownRoleError {
                role: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_roundtrip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().expect("should parse");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn legacy_aliases_map_to_canonical_roles() {
        assert_eq!("hod".parse::<Role>().expect("alias"), Role::Manager);
        assert_eq!("exec".parse::<Role>().expect("alias"), Role::Manager);
        assert_eq!("senior_manager".parse::<Role>().expect("alias"), Role::Manager);
        assert_eq!("supervisor".parse::<Role>().expect("alias"), Role::Manager);
        assert_eq!("branch".parse::<Role>().expect("alias"), Role::Manager);
        assert_eq!("data_analyst".parse::<Role>().expect("alias"), Role::Analyst);
        assert_eq!("agent".parse::<Role>().expect("alias"), Role::Officer);
    }

    #[test]
    fn unknown_role_fails_to_parse() {
        let err = "superadmin_typo".parse::<Role>().unwrap_err();
        assert_eq!(err.role, "superadmin_typo");
    }

    #[test]
    fn unknown_role_is_not_aliased_to_officer() {
        // The original dashboard silently fell back to officer for any
        // unrecognized role; that masked configuration bugs.
        assert!("officeer".parse::<Role>().is_err());
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());
        assert!(!Role::Analyst.is_admin());
        assert!(!Role::Officer.is_admin());
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Manager).expect("serialize");
        assert_eq!(json, "\"manager\"");

        let parsed: Role = serde_json::from_str("\"officer\"").expect("deserialize");
        assert_eq!(parsed, Role::Officer);
    }
}
