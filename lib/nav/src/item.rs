//! Navigation entry type.

use serde::{Deserialize, Serialize};

/// One entry in the navigation catalog.
///
/// Every item declares at least one required permission; an item whose
/// permissions no role holds is never surfaced. The `disabled` flag is a
/// UI-only "coming soon" affordance, distinct from authorization: a
/// disabled item still requires a matching permission to appear at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable key, also the item's default required permission.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Icon glyph.
    pub icon: String,
    /// Route path.
    pub route: String,
    /// Short description shown as a tooltip.
    pub description: String,
    /// Permission tokens, any one of which makes the item visible.
    pub required_permissions: Vec<String>,
    /// Rendered greyed-out instead of navigable.
    #[serde(default)]
    pub disabled: bool,
}

impl NavItem {
    /// Creates an item requiring its own key as the permission token.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        route: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let key = key.into();
        Self {
            required_permissions: vec![key.clone()],
            key,
            label: label.into(),
            icon: icon.into(),
            route: route.into(),
            description: description.into(),
            disabled: false,
        }
    }

    /// Replaces the required permissions. The list must stay nonempty; an
    /// item with no required permissions would be invisible to every role.
    #[must_use]
    pub fn with_required_permissions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_permissions = tokens.into_iter().map(Into::into).collect();
        debug_assert!(
            !self.required_permissions.is_empty(),
            "navigation item '{}' must declare at least one required permission",
            self.key
        );
        self
    }

    /// Marks the item as a greyed-out "coming soon" affordance.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_requires_its_own_key() {
        let item = NavItem::new("customers", "Customers", "👤", "/officer/customers", "Search");
        assert_eq!(item.required_permissions, vec!["customers".to_string()]);
        assert!(!item.disabled);
    }

    #[test]
    fn required_permissions_can_be_widened() {
        let item = NavItem::new("knowledge", "Knowledge", "📚", "/knowledge", "Scripts")
            .with_required_permissions(["knowledge_base", "officer_knowledge"]);
        assert_eq!(item.required_permissions.len(), 2);
    }

    #[test]
    #[should_panic(expected = "at least one required permission")]
    fn empty_required_permissions_are_rejected() {
        let _ = NavItem::new("customers", "Customers", "👤", "/officer/customers", "Search")
            .with_required_permissions(Vec::<String>::new());
    }

    #[test]
    fn disabled_flag_survives_serde() {
        let item = NavItem::new("settings", "Settings", "⚙️", "/admin/settings", "Config").disabled();
        let json = serde_json::to_string(&item).expect("serialize");
        let parsed: NavItem = serde_json::from_str(&json).expect("deserialize");
        assert!(parsed.disabled);
        assert_eq!(item, parsed);
    }
}
