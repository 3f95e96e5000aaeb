//! Role profiles: the per-role aggregate of capabilities.
//!
//! Profiles are static configuration. They are constructed once when the
//! registry is built and never mutated at runtime; changing a role's
//! capabilities is a deployment change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::role::Role;

/// Ordered classification governing visibility of sensitive fields.
///
/// The order is total: `None < Masked < Full`. A role may access data at a
/// given level iff its own level is at least that high, so any role that can
/// see full records can also see masked ones.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DataAccessLevel {
    /// No customer data visibility at all.
    #[default]
    None,
    /// Customer data with PII fields redacted.
    Masked,
    /// Unredacted customer data.
    Full,
}

impl DataAccessLevel {
    /// Returns the lowercase name for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Masked => "masked",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for DataAccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compliance audit tier applied to a role's actions.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    /// Standard interaction logging.
    #[default]
    Standard,
    /// Enhanced logging for roles that touch aggregated customer data.
    Enhanced,
    /// Executive-tier logging for oversight roles.
    Executive,
}

/// How long a role's interaction records are retained for compliance.
///
/// Ordered shortest to longest; higher-oversight roles keep records longer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DataRetention {
    /// Records kept for one year.
    #[default]
    #[serde(rename = "1_year")]
    OneYear,
    /// Records kept for two years.
    #[serde(rename = "2_years")]
    TwoYears,
    /// Records kept for three years.
    #[serde(rename = "3_years")]
    ThreeYears,
}

/// The aggregate of capabilities owned by one role.
///
/// Invariant, enforced by [`RoleRegistry`](crate::registry::RoleRegistry)
/// construction: `navigation_keys` is a subset of `permissions`, so a menu
/// entry is never visible without the backing permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProfile {
    role: Role,
    display_name: String,
    description: String,
    permissions: BTreeSet<String>,
    data_access: DataAccessLevel,
    pii_access: bool,
    export_access: bool,
    features: BTreeSet<String>,
    audit_level: AuditLevel,
    data_retention: DataRetention,
    navigation_keys: BTreeSet<String>,
    home_route: String,
}

impl RoleProfile {
    /// Creates a profile with no capabilities.
    ///
    /// Capabilities are added with the `with_*` builder methods.
    #[must_use]
    pub fn new(
        role: Role,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            role,
            display_name: display_name.into(),
            description: description.into(),
            permissions: BTreeSet::new(),
            data_access: DataAccessLevel::None,
            pii_access: false,
            export_access: false,
            features: BTreeSet::new(),
            audit_level: AuditLevel::Standard,
            data_retention: DataRetention::OneYear,
            navigation_keys: BTreeSet::new(),
            home_route: String::new(),
        }
    }

    /// Adds permission tokens. Page tokens double as navigation keys and
    /// are also recorded in `navigation_keys` via [`Self::with_pages`].
    #[must_use]
    pub fn with_permissions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Adds page tokens: each becomes both a permission and a navigation key.
    #[must_use]
    pub fn with_pages<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            self.permissions.insert(key.clone());
            self.navigation_keys.insert(key);
        }
        self
    }

    /// Sets the data-access level.
    #[must_use]
    pub fn with_data_access(mut self, level: DataAccessLevel) -> Self {
        self.data_access = level;
        self
    }

    /// Sets the PII-visibility flag.
    #[must_use]
    pub fn with_pii_access(mut self, allowed: bool) -> Self {
        self.pii_access = allowed;
        self
    }

    /// Sets the data-export flag.
    #[must_use]
    pub fn with_export_access(mut self, allowed: bool) -> Self {
        self.export_access = allowed;
        self
    }

    /// Adds feature-flag tokens.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Sets the audit tier.
    #[must_use]
    pub fn with_audit_level(mut self, level: AuditLevel) -> Self {
        self.audit_level = level;
        self
    }

    /// Sets the record-retention policy.
    #[must_use]
    pub fn with_data_retention(mut self, retention: DataRetention) -> Self {
        self.data_retention = retention;
        self
    }

    /// Sets the landing route shown after login.
    #[must_use]
    pub fn with_home_route(mut self, route: impl Into<String>) -> Self {
        self.home_route = route.into();
        self
    }

    /// Returns the role this profile belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the human-readable role name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the role description (used as the user's department label).
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true iff this profile holds the given permission token.
    ///
    /// Unknown tokens return false (fail-closed).
    #[must_use]
    pub fn has_permission(&self, token: &str) -> bool {
        self.permissions.contains(token)
    }

    /// Returns the full permission set.
    #[must_use]
    pub fn permissions(&self) -> &BTreeSet<String> {
        &self.permissions
    }

    /// Returns the data-access level.
    #[must_use]
    pub fn data_access(&self) -> DataAccessLevel {
        self.data_access
    }

    /// Returns true if the role may see PII fields.
    #[must_use]
    pub fn pii_access(&self) -> bool {
        self.pii_access
    }

    /// Returns true if the role may export data.
    #[must_use]
    pub fn export_access(&self) -> bool {
        self.export_access
    }

    /// Returns true iff the feature flag is enabled for this role.
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Returns the enabled feature flags.
    #[must_use]
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Returns the audit tier.
    #[must_use]
    pub fn audit_level(&self) -> AuditLevel {
        self.audit_level
    }

    /// Returns the record-retention policy.
    #[must_use]
    pub fn data_retention(&self) -> DataRetention {
        self.data_retention
    }

    /// Returns the navigation keys this profile claims.
    #[must_use]
    pub fn navigation_keys(&self) -> &BTreeSet<String> {
        &self.navigation_keys
    }

    /// Returns the landing route for this role.
    #[must_use]
    pub fn home_route(&self) -> &str {
        &self.home_route
    }

    /// Returns the first navigation key, if any, without a backing
    /// permission token. Used by registry construction to enforce the
    /// navigation ⊆ permissions invariant.
    #[must_use]
    pub fn unbacked_navigation_key(&self) -> Option<&str> {
        self.navigation_keys
            .iter()
            .find(|key| !self.permissions.contains(*key))
            .map(String::as_str)
    }
}
