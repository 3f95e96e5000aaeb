//! Role-filtered navigation for the BK Pulse retention platform.
//!
//! The master [`NavCatalog`] lists every menu entry in the dashboard;
//! [`project`] filters it through an
//! [`AccessEvaluator`](bk_pulse_access::AccessEvaluator) into the ordered
//! list a given role should actually see. Projection is a pure function:
//! deterministic, order-preserving, and empty for unknown or absent roles.

pub mod catalog;
pub mod item;
pub mod project;

pub use catalog::NavCatalog;
pub use item::NavItem;
pub use project::{can_see_nav_item, navigable_count, project, project_named};
