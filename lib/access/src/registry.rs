//! The role registry: the authoritative `Role -> RoleProfile` mapping.
//!
//! The registry is built once at application start and never mutated.
//! Construction validates that no profile claims a navigation key without a
//! backing permission, so the whole class of "menu entry visible without the
//! permission behind it" bugs is caught before the first session exists.

use std::collections::HashMap;

use crate::error::{RegistryError, UnknownRoleError};
use crate::perm;
use crate::profile::{AuditLevel, DataAccessLevel, DataRetention, RoleProfile};
use crate::role::Role;

/// Immutable mapping from role to profile.
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    profiles: HashMap<Role, RoleProfile>,
}

impl RoleRegistry {
    /// Builds a registry from the given profiles.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateProfile` if two profiles share a
    /// role, or `RegistryError::NavigationExceedsPermissions` if any profile
    /// claims a navigation key it holds no permission for.
    pub fn new(profiles: impl IntoIterator<Item = RoleProfile>) -> Result<Self, RegistryError> {
        let mut table = HashMap::new();
        for profile in profiles {
            if let Some(key) = profile.unbacked_navigation_key() {
                return Err(RegistryError::NavigationExceedsPermissions {
                    role: profile.role(),
                    key: key.to_string(),
                });
            }
            let role = profile.role();
            if table.insert(role, profile).is_some() {
                return Err(RegistryError::DuplicateProfile { role });
            }
        }
        Ok(Self { profiles: table })
    }

    /// The built-in registry for the retention department's four roles.
    ///
    /// Page tokens double as navigation keys; action tokens grant
    /// capabilities pages check before exposing controls.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table violates a registry invariant. That can
    /// only happen from editing this function, and is a startup integrity
    /// check rather than a runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        let admin = RoleProfile::new(Role::Admin, "System Administrator", "System Administration")
            .with_pages([
                perm::ADMIN_DASHBOARD,
                perm::USER_MANAGEMENT,
                perm::MODEL_MANAGEMENT,
                perm::ADMIN_REPORTS,
                perm::SETTINGS,
                perm::KNOWLEDGE_ADMIN,
            ])
            .with_data_access(DataAccessLevel::Full)
            .with_pii_access(true)
            .with_export_access(true)
            .with_features(["reporting", "analytics", "admin"])
            .with_audit_level(AuditLevel::Enhanced)
            .with_data_retention(DataRetention::TwoYears)
            .with_home_route("/admin/dashboard");

        let manager = RoleProfile::new(
            Role::Manager,
            "Head of Department (Retention)",
            "Strategic oversight, performance monitoring, and reporting",
        )
        .with_pages([
            perm::EXECUTIVE_DASHBOARD,
            perm::SEGMENTATION_ANALYTICS,
            perm::CAMPAIGN_APPROVALS,
            perm::CUSTOMER_OVERVIEW,
            perm::REPORTS_VISUALIZATION,
            perm::MODEL_INSIGHTS,
        ])
        .with_permissions([
            perm::MANAGE_TARGETS,
            perm::MANAGE_CAMPAIGNS,
            perm::EXPORT_EXECUTIVE_DATA,
        ])
        .with_data_access(DataAccessLevel::Full)
        .with_pii_access(true)
        .with_export_access(true)
        .with_features([
            "real_time_alerts",
            "customer_scoring",
            "task_management",
            "reporting",
            "analytics",
            "retention_kpis",
            "target_management",
            "campaign_management",
            "team_performance",
            "quality_assurance",
        ])
        .with_audit_level(AuditLevel::Executive)
        .with_data_retention(DataRetention::ThreeYears)
        .with_home_route("/manager/dashboard");

        let analyst = RoleProfile::new(
            Role::Analyst,
            "Retention Data Analyst",
            "Data processing, model monitoring, and insight generation",
        )
        .with_pages([
            perm::CUSTOMER_SEGMENTS,
            perm::BULK_PREDICTIONS,
            perm::CAMPAIGN_MANAGEMENT,
            perm::ANALYTICS_INSIGHTS,
            perm::KNOWLEDGE_BASE,
            perm::ANALYST_REPORTS,
        ])
        .with_permissions([perm::EXPORT_ANALYTICS_DATA])
        .with_data_access(DataAccessLevel::Masked)
        .with_pii_access(false)
        .with_export_access(true)
        .with_features([
            "customer_scoring",
            "reporting",
            "analytics",
            "model_monitoring",
            "data_quality",
            "customer_insights",
            "product_conversion",
        ])
        .with_audit_level(AuditLevel::Enhanced)
        .with_data_retention(DataRetention::TwoYears)
        .with_home_route("/analyst/segments");

        let officer = RoleProfile::new(
            Role::Officer,
            "Retention Contact Center Officer",
            "Customer engagement, retention calls, and product promotion",
        )
        .with_pages([
            perm::CUSTOMERS,
            perm::CUSTOMER_DETAILS,
            perm::CAMPAIGN_EXECUTION,
            perm::PREDICTIONS,
            perm::PERFORMANCE_METRICS,
            perm::OFFICER_KNOWLEDGE,
            perm::ALERTS_RECOMMENDATIONS,
            perm::ANALYTICS_DASHBOARD,
        ])
        .with_permissions([perm::LOG_INTERACTIONS, perm::UPDATE_CUSTOMER_STATUS])
        .with_data_access(DataAccessLevel::Full)
        .with_pii_access(true)
        .with_export_access(false)
        .with_features([
            "real_time_alerts",
            "customer_scoring",
            "task_management",
            "feedback_collection",
            "customer_360",
            "call_queue",
            "interaction_logging",
            "performance_tracking",
            "knowledge_hub",
        ])
        .with_audit_level(AuditLevel::Standard)
        .with_data_retention(DataRetention::OneYear)
        .with_home_route("/officer/customers");

        Self::new([admin, manager, analyst, officer])
            .expect("built-in role table violates a registry invariant")
    }

    /// Looks up the profile for a role.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoleError` if the registry holds no profile for the
    /// role. That means the running build references a role the registry
    /// does not define; it is never silently defaulted.
    pub fn profile(&self, role: Role) -> Result<&RoleProfile, UnknownRoleError> {
        self.profiles.get(&role).ok_or_else(|| UnknownRoleError {
            role: role.to_string(),
        })
    }

    /// Parses a role name (canonical or legacy alias) and looks up its
    /// profile.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoleError` for names outside the closed set or roles
    /// missing from the registry.
    pub fn profile_named(&self, name: &str) -> Result<&RoleProfile, UnknownRoleError> {
        let role: Role = name.parse()?;
        self.profile(role)
    }

    /// Returns the roles this registry defines.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.profiles.keys().copied()
    }

    /// Returns the number of registered roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no roles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
