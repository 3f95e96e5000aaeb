//! Role-filtered navigation projection.
//!
//! Projection is a pure, order-preserving filter of the master catalog:
//! same role and catalog in, same list out, every time. Configuration
//! errors (role names outside the closed set) stop here and degrade to an
//! empty menu; they never propagate into rendering.

use tracing::debug;

use bk_pulse_access::{AccessEvaluator, Role};

use crate::catalog::NavCatalog;
use crate::item::NavItem;

/// Returns true iff the role holds at least one of the item's required
/// permissions. Disabled items use the same rule; `disabled` only affects
/// how the UI renders an included item, never whether it is included.
#[must_use]
pub fn can_see_nav_item(evaluator: &AccessEvaluator<'_>, role: Option<Role>, item: &NavItem) -> bool {
    evaluator.has_any_permission(role, &item.required_permissions)
}

/// Projects the catalog for a role: an order-preserving subsequence
/// containing exactly the items the role may see.
///
/// `None` (no authenticated session) projects to the empty list.
#[must_use]
pub fn project(
    evaluator: &AccessEvaluator<'_>,
    role: Option<Role>,
    catalog: &NavCatalog,
) -> Vec<NavItem> {
    catalog
        .items()
        .iter()
        .filter(|item| can_see_nav_item(evaluator, role, item))
        .cloned()
        .collect()
}

/// Projects the catalog for a role given by name (canonical or legacy
/// alias). Unknown names degrade to the empty projection instead of
/// erroring, so a stale stored role can never break menu rendering.
#[must_use]
pub fn project_named(
    evaluator: &AccessEvaluator<'_>,
    role_name: &str,
    catalog: &NavCatalog,
) -> Vec<NavItem> {
    match role_name.parse::<Role>() {
        Ok(role) => project(evaluator, Some(role), catalog),
        Err(err) => {
            debug!(role = role_name, error = %err, "unknown role; projecting empty menu");
            Vec::new()
        }
    }
}

/// Counts the items in a projection that are navigable right now,
/// excluding disabled "coming soon" entries.
#[must_use]
pub fn navigable_count(items: &[NavItem]) -> usize {
    items.iter().filter(|item| !item.disabled).count()
}
