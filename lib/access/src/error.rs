//! Error types for the access-control crate.
//!
//! There are only two failure modes here, both configuration-shaped:
//! - `UnknownRoleError`: a role name outside the closed set, or a role the
//!   registry has no profile for
//! - `RegistryError`: a profile table that violates the registry's
//!   construction invariants
//!
//! Denied permission checks are *not* errors; the evaluator answers those
//! with plain `false`.

use std::fmt;

use crate::role::Role;

/// A role name outside the closed set, or a role missing from the registry.
///
/// This is a configuration error, not an authorization denial. It surfaces
/// loudly in development so a missing role mapping is caught before release;
/// navigation rendering catches it and degrades to an empty projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError {
    /// The offending role name, preserved verbatim for audit logs.
    pub role: String,
}

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: '{}'", self.role)
    }
}

impl std::error::Error for UnknownRoleError {}

/// Errors from constructing a role registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A profile claims a navigation key without holding a permission
    /// token backing it. Menus must never be visible beyond what the
    /// permission set independently allows.
    NavigationExceedsPermissions {
        /// The role whose profile is inconsistent.
        role: Role,
        /// The unbacked navigation key.
        key: String,
    },
    /// Two profiles were supplied for the same role.
    DuplicateProfile {
        /// The duplicated role.
        role: Role,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NavigationExceedsPermissions { role, key } => {
                write!(
                    f,
                    "role '{role}' claims navigation key '{key}' without a backing permission"
                )
            }
            Self::DuplicateProfile { role } => {
                write!(f, "duplicate profile for role '{role}'")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_display() {
        let err = UnknownRoleError {
            role: "superadmin_typo".to_string(),
        };
        assert!(err.to_string().contains("unknown role"));
        assert!(err.to_string().contains("superadmin_typo"));
    }

    #[test]
    fn navigation_exceeds_permissions_display() {
        let err = RegistryError::NavigationExceedsPermissions {
            role: Role::Officer,
            key: "user_management".to_string(),
        };
        assert!(err.to_string().contains("officer"));
        assert!(err.to_string().contains("user_management"));
    }

    #[test]
    fn duplicate_profile_display() {
        let err = RegistryError::DuplicateProfile { role: Role::Admin };
        assert!(err.to_string().contains("duplicate"));
        assert!(err.to_string().contains("admin"));
    }
}
