//! The authorization evaluator: pure allow/deny predicates.
//!
//! Every predicate takes the session's role as an explicit `Option<Role>`
//! parameter rather than reading ambient state, so each call site's
//! dependency is visible and testable in isolation. An absent role (no
//! authenticated session) answers `false` to everything.
//!
//! Denials are the designed answer, not failures: nothing here logs a
//! denial as an error or raises. The only condition worth a log line is a
//! role the registry has no profile for, which is a configuration bug.

use tracing::warn;

use crate::profile::{DataAccessLevel, RoleProfile};
use crate::registry::RoleRegistry;
use crate::role::Role;

/// Answers yes/no authorization questions against a role registry.
///
/// All predicates are synchronous, side-effect-free, and fail-closed:
/// unknown roles, unknown permission tokens, and absent roles all deny.
#[derive(Debug, Clone, Copy)]
pub struct AccessEvaluator<'a> {
    registry: &'a RoleRegistry,
}

impl<'a> AccessEvaluator<'a> {
    /// Creates an evaluator over the given registry.
    #[must_use]
    pub fn new(registry: &'a RoleRegistry) -> Self {
        Self { registry }
    }

    /// Resolves a role to its profile, or `None` for unauthenticated
    /// sessions and misconfigured registries.
    fn profile(&self, role: Option<Role>) -> Option<&'a RoleProfile> {
        let role = role?;
        match self.registry.profile(role) {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(role = %role, error = %err, "role has no registry profile; denying");
                None
            }
        }
    }

    /// Returns true iff the role holds the permission token.
    #[must_use]
    pub fn has_permission(&self, role: Option<Role>, token: &str) -> bool {
        self.profile(role)
            .is_some_and(|profile| profile.has_permission(token))
    }

    /// Returns true iff the role holds at least one of the tokens.
    ///
    /// This is the OR semantics navigation entries use: an item listing
    /// several required permissions is visible to any role matching one.
    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, role: Option<Role>, tokens: &[S]) -> bool {
        self.profile(role).is_some_and(|profile| {
            tokens
                .iter()
                .any(|token| profile.has_permission(token.as_ref()))
        })
    }

    /// Returns true iff the role's data-access level is at least
    /// `required` under `none < masked < full`.
    #[must_use]
    pub fn can_access_data(&self, role: Option<Role>, required: DataAccessLevel) -> bool {
        self.profile(role)
            .is_some_and(|profile| profile.data_access() >= required)
    }

    /// Returns true iff the role may see PII fields.
    #[must_use]
    pub fn can_access_pii(&self, role: Option<Role>) -> bool {
        self.profile(role).is_some_and(RoleProfile::pii_access)
    }

    /// Returns true iff the role may export data.
    #[must_use]
    pub fn can_export_data(&self, role: Option<Role>) -> bool {
        self.profile(role).is_some_and(RoleProfile::export_access)
    }

    /// Returns true iff the feature flag is enabled for the role.
    #[must_use]
    pub fn has_feature(&self, role: Option<Role>, feature: &str) -> bool {
        self.profile(role)
            .is_some_and(|profile| profile.has_feature(feature))
    }

    /// Returns the role's landing route, if the role resolves to a profile.
    #[must_use]
    pub fn home_route(&self, role: Option<Role>) -> Option<&'a str> {
        self.profile(role).map(RoleProfile::home_route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm;
    use crate::profile::RoleProfile;

    fn registry() -> RoleRegistry {
        RoleRegistry::builtin()
    }

    #[test]
    fn officer_has_customer_permissions() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert!(eval.has_permission(Some(Role::Officer), perm::CUSTOMERS));
        assert!(eval.has_permission(Some(Role::Officer), perm::PREDICTIONS));
        assert!(!eval.has_permission(Some(Role::Officer), perm::USER_MANAGEMENT));
    }

    #[test]
    fn absent_role_denies_every_predicate() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert!(!eval.has_permission(None, perm::CUSTOMERS));
        assert!(!eval.has_any_permission(None, &[perm::CUSTOMERS, perm::SETTINGS]));
        assert!(!eval.can_access_data(None, DataAccessLevel::None));
        assert!(!eval.can_access_pii(None));
        assert!(!eval.can_export_data(None));
        assert!(!eval.has_feature(None, "reporting"));
        assert!(eval.home_route(None).is_none());
    }

    #[test]
    fn unknown_token_denies_for_every_role() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        for role in Role::ALL {
            assert!(!eval.has_permission(Some(role), "no_such_permission"));
        }
    }

    #[test]
    fn fail_closed_totality_over_builtin_roles() {
        // For every role, every builtin token the role does not hold denies.
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        let all_tokens: Vec<String> = Role::ALL
            .iter()
            .flat_map(|role| {
                registry
                    .profile(*role)
                    .expect("profile")
                    .permissions()
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        for role in Role::ALL {
            let profile = registry.profile(role).expect("profile");
            for token in &all_tokens {
                assert_eq!(
                    eval.has_permission(Some(role), token),
                    profile.permissions().contains(token),
                );
            }
        }
    }

    #[test]
    fn data_access_is_monotone() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        let levels = [
            DataAccessLevel::None,
            DataAccessLevel::Masked,
            DataAccessLevel::Full,
        ];
        for role in Role::ALL {
            for window in levels.windows(2) {
                // Access at a higher level implies access at every lower one.
                if eval.can_access_data(Some(role), window[1]) {
                    assert!(eval.can_access_data(Some(role), window[0]));
                }
            }
        }
    }

    #[test]
    fn analyst_sees_masked_but_not_full_data() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert!(!eval.can_access_data(Some(Role::Analyst), DataAccessLevel::Full));
        assert!(eval.can_access_data(Some(Role::Analyst), DataAccessLevel::Masked));
        assert!(eval.can_access_data(Some(Role::Analyst), DataAccessLevel::None));
    }

    #[test]
    fn pii_and_export_flags_are_independent() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        // Analysts work on anonymized data but publish reports.
        assert!(!eval.can_access_pii(Some(Role::Analyst)));
        assert!(eval.can_export_data(Some(Role::Analyst)));
        // Officers see full customer records but cannot take them out.
        assert!(eval.can_access_pii(Some(Role::Officer)));
        assert!(!eval.can_export_data(Some(Role::Officer)));
        // Managers hold both.
        assert!(eval.can_access_pii(Some(Role::Manager)));
        assert!(eval.can_export_data(Some(Role::Manager)));
    }

    #[test]
    fn any_permission_uses_or_semantics() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert!(eval.has_any_permission(
            Some(Role::Officer),
            &[perm::USER_MANAGEMENT, perm::CUSTOMERS]
        ));
        assert!(!eval.has_any_permission(
            Some(Role::Officer),
            &[perm::USER_MANAGEMENT, perm::SETTINGS]
        ));
        let empty: [&str; 0] = [];
        assert!(!eval.has_any_permission(Some(Role::Officer), &empty));
    }

    #[test]
    fn role_missing_from_registry_denies_without_panicking() {
        let registry = RoleRegistry::new([RoleProfile::new(
            Role::Officer,
            "Officer",
            "Contact center",
        )
        .with_pages([perm::CUSTOMERS])])
        .expect("valid registry");
        let eval = AccessEvaluator::new(&registry);
        assert!(!eval.has_permission(Some(Role::Admin), perm::SETTINGS));
        assert!(!eval.can_access_pii(Some(Role::Admin)));
        assert!(eval.home_route(Some(Role::Admin)).is_none());
    }

    #[test]
    fn feature_flags_differ_per_role() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert!(eval.has_feature(Some(Role::Officer), "call_queue"));
        assert!(!eval.has_feature(Some(Role::Manager), "call_queue"));
        assert!(eval.has_feature(Some(Role::Manager), "retention_kpis"));
    }

    #[test]
    fn home_route_per_role() {
        let registry = registry();
        let eval = AccessEvaluator::new(&registry);
        assert_eq!(eval.home_route(Some(Role::Admin)), Some("/admin/dashboard"));
        assert_eq!(
            eval.home_route(Some(Role::Officer)),
            Some("/officer/customers")
        );
    }
}
