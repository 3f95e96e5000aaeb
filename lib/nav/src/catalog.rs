//! The master navigation catalog.
//!
//! The catalog lists every possible menu entry across the whole dashboard,
//! in render order, regardless of role. Role filtering happens in
//! [`project`](crate::project::project); the catalog itself is assembled
//! once at application start and never reordered.

use serde::{Deserialize, Serialize};

use crate::item::NavItem;

/// Ordered, role-agnostic list of every navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavCatalog {
    items: Vec<NavItem>,
}

impl NavCatalog {
    /// Creates a catalog from items, preserving their order.
    #[must_use]
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// The full dashboard catalog: admin, manager, analyst, and officer
    /// pages, in sidebar render order.
    #[must_use]
    pub fn builtin() -> Self {
        use bk_pulse_access::perm;

        Self::new(vec![
            // Admin pages
            NavItem::new(
                perm::ADMIN_DASHBOARD,
                "Dashboard",
                "🏠",
                "/admin/dashboard",
                "System overview & health",
            ),
            NavItem::new(
                perm::USER_MANAGEMENT,
                "User Management",
                "👥",
                "/admin/users",
                "Manage users & roles",
            ),
            NavItem::new(
                perm::MODEL_MANAGEMENT,
                "Model Management",
                "🤖",
                "/admin/models",
                "ML models & performance",
            ),
            NavItem::new(
                perm::ADMIN_REPORTS,
                "Reports & Analytics",
                "📊",
                "/admin/reports",
                "System-wide KPIs",
            ),
            NavItem::new(
                perm::SETTINGS,
                "Settings",
                "⚙️",
                "/admin/settings",
                "System configuration",
            ),
            NavItem::new(
                perm::KNOWLEDGE_ADMIN,
                "Knowledge Base Admin",
                "📚",
                "/admin/knowledge",
                "Manage training content",
            ),
            // Manager pages
            NavItem::new(
                perm::EXECUTIVE_DASHBOARD,
                "Executive Dashboard",
                "📈",
                "/manager/dashboard",
                "Portfolio & revenue insights",
            ),
            NavItem::new(
                perm::SEGMENTATION_ANALYTICS,
                "Segmentation & Analytics",
                "👥",
                "/manager/segmentation",
                "Cohort & campaign analysis",
            ),
            NavItem::new(
                perm::CAMPAIGN_APPROVALS,
                "Campaign Approvals",
                "✅",
                "/manager/approvals",
                "Review & approve campaigns",
            ),
            NavItem::new(
                perm::CUSTOMER_OVERVIEW,
                "Customer Overview",
                "👤",
                "/manager/customers",
                "High-risk customer summary",
            ),
            NavItem::new(
                perm::REPORTS_VISUALIZATION,
                "Reports & Visualization",
                "📊",
                "/manager/reports",
                "Power BI dashboards",
            ),
            NavItem::new(
                perm::MODEL_INSIGHTS,
                "Model Insights",
                "🔍",
                "/manager/insights",
                "Feature importance & accuracy",
            ),
            // Analyst pages
            NavItem::new(
                perm::CUSTOMER_SEGMENTS,
                "Customer Segments",
                "👥",
                "/analyst/segments",
                "Segment analysis & trends",
            ),
            NavItem::new(
                perm::BULK_PREDICTIONS,
                "Bulk Predictions",
                "🎯",
                "/analyst/predictions",
                "Multi-customer predictions",
            ),
            NavItem::new(
                perm::CAMPAIGN_MANAGEMENT,
                "Campaign Management",
                "📢",
                "/analyst/campaigns",
                "Create & track campaigns",
            ),
            NavItem::new(
                perm::ANALYTICS_INSIGHTS,
                "Analytics & Insights",
                "📊",
                "/analyst/analytics",
                "Churn drivers & trends",
            ),
            NavItem::new(
                perm::KNOWLEDGE_BASE,
                "Knowledge Base",
                "📚",
                "/analyst/knowledge",
                "Scripts & best practices",
            ),
            NavItem::new(
                perm::ANALYST_REPORTS,
                "Reports",
                "📋",
                "/analyst/reports",
                "Exportable dashboards",
            ),
            // Officer pages
            NavItem::new(
                perm::CUSTOMERS,
                "Customers",
                "👤",
                "/officer/customers",
                "Customer database & search",
            ),
            NavItem::new(
                perm::CUSTOMER_DETAILS,
                "Customer Details",
                "📋",
                "/officer/customer-details",
                "Full customer profiles",
            ),
            NavItem::new(
                perm::CAMPAIGN_EXECUTION,
                "Campaign Execution",
                "📢",
                "/officer/campaigns",
                "Log interactions & outcomes",
            ),
            NavItem::new(
                perm::PREDICTIONS,
                "Predictions",
                "🎯",
                "/officer/predictions",
                "Single-customer predictions",
            ),
            NavItem::new(
                perm::PERFORMANCE_METRICS,
                "Performance Metrics",
                "📊",
                "/officer/performance",
                "Personal KPIs & goals",
            ),
            NavItem::new(
                perm::OFFICER_KNOWLEDGE,
                "Knowledge Base",
                "📚",
                "/officer/knowledge",
                "Scripts & training",
            ),
            NavItem::new(
                perm::ALERTS_RECOMMENDATIONS,
                "Alerts & Recommendations",
                "🔔",
                "/officer/alerts",
                "Action suggestions",
            ),
            NavItem::new(
                perm::ANALYTICS_DASHBOARD,
                "Analytics Dashboard",
                "📈",
                "/officer/analytics",
                "Personal performance view",
            ),
        ])
    }

    /// Returns the items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Looks up an item by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a NavCatalog {
    type Item = &'a NavItem;
    type IntoIter = std::slice::Iter<'a, NavItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_has_every_dashboard_page() {
        let catalog = NavCatalog::builtin();
        assert_eq!(catalog.len(), 26);
    }

    #[test]
    fn builtin_keys_are_unique() {
        let catalog = NavCatalog::builtin();
        let keys: HashSet<&str> = catalog.items().iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys.len(), catalog.len());
    }

    #[test]
    fn every_builtin_item_requires_a_permission() {
        let catalog = NavCatalog::builtin();
        for item in &catalog {
            assert!(
                !item.required_permissions.is_empty(),
                "item '{}' requires no permission",
                item.key
            );
        }
    }

    #[test]
    fn get_finds_items_by_key() {
        let catalog = NavCatalog::builtin();
        let item = catalog.get("customers").expect("customers page");
        assert_eq!(item.route, "/officer/customers");
        assert!(catalog.get("no_such_page").is_none());
    }
}
