//! Role-based access control for the BK Pulse retention platform.
//!
//! This crate provides:
//! - The closed role vocabulary (`Role`) with legacy-alias parsing
//! - Static per-role capability profiles (`RoleProfile`, `RoleRegistry`)
//! - Pure fail-closed authorization predicates (`AccessEvaluator`)
//! - Session management (`Session`, `SessionId`, `User`)
//!
//! # Access Control Model
//!
//! A session carries exactly one immutable role. The registry maps each
//! role to a permission set, a data-access level (`none < masked < full`),
//! PII/export flags, and feature flags. Every check is a synchronous pure
//! lookup; unrecognized input of any kind denies rather than erroring.
//!
//! # Example
//!
//! ```
//! use bk_pulse_access::{
//!     AccessEvaluator, DataAccessLevel, Role, RoleRegistry, Session, SessionId, User,
//! };
//! use chrono::Duration;
//!
//! let registry = RoleRegistry::builtin();
//! let evaluator = AccessEvaluator::new(&registry);
//!
//! // Log an officer in.
//! let user = User::from_email("jane.doe@bk.rw", "Retention Contact Center");
//! let session = Session::new(SessionId::generate(), user, Role::Officer, Duration::hours(8));
//!
//! assert!(evaluator.has_permission(Some(session.role()), "customers"));
//! assert!(!evaluator.has_permission(Some(session.role()), "user_management"));
//! assert!(evaluator.can_access_data(Some(session.role()), DataAccessLevel::Full));
//!
//! // No session, no access.
//! assert!(!evaluator.has_permission(None, "customers"));
//! ```

pub mod error;
pub mod evaluator;
pub mod perm;
pub mod profile;
pub mod registry;
pub mod role;
pub mod session;
pub mod user;

// Re-export main types at crate root
pub use error::{RegistryError, UnknownRoleError};
pub use evaluator::AccessEvaluator;
pub use profile::{AuditLevel, DataAccessLevel, DataRetention, RoleProfile};
pub use registry::RoleRegistry;
pub use role::Role;
pub use session::{Session, SessionId};
pub use user::User;
