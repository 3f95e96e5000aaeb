//! Session management for authenticated users.
//!
//! A session binds a user to exactly one role for its whole lifetime; there
//! is no mid-session role elevation. Sessions are created at login, read by
//! every page needing a role check, and dropped at logout.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::role::Role;
use crate::user::User;

/// Unique identifier for a session.
///
/// Session IDs are opaque strings generated during session creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session ID from a string.
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generates a fresh random session ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("sess_{}", Ulid::new()))
    }

    /// Returns the session ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An active authenticated session.
///
/// The role is fixed at creation; everything else is display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier for this session.
    id: SessionId,
    /// The logged-in user.
    user: User,
    /// The role driving every authorization decision for this session.
    role: Role,
    /// When the user logged in.
    login_time: DateTime<Utc>,
    /// When the session expires.
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session valid for the given duration.
    #[must_use]
    pub fn new(id: SessionId, user: User, role: Role, duration: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            user,
            role,
            login_time: now,
            expires_at: now + duration,
        }
    }

    /// Returns the session ID.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the logged-in user.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Returns the session's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns when the user logged in.
    #[must_use]
    pub fn login_time(&self) -> DateTime<Utc> {
        self.login_time
    }

    /// Returns when the session expires.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Returns true if the session is still valid (not expired).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::from_email("jane.doe@bk.rw", "Retention")
    }

    #[test]
    fn session_id_display() {
        let id = SessionId::new("sess_test_123".to_string());
        assert_eq!(id.to_string(), "sess_test_123");
    }

    #[test]
    fn generated_session_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
        assert!(SessionId::generate().as_str().starts_with("sess_"));
    }

    #[test]
    fn new_session_is_valid_for_its_duration() {
        let session = Session::new(
            SessionId::generate(),
            test_user(),
            Role::Officer,
            Duration::hours(8),
        );
        assert!(session.is_valid());
        assert!(!session.is_expired());
        assert_eq!(session.role(), Role::Officer);
    }

    #[test]
    fn zero_duration_session_is_expired() {
        let session = Session::new(
            SessionId::generate(),
            test_user(),
            Role::Analyst,
            Duration::zero(),
        );
        assert!(session.is_expired());
        assert!(!session.is_valid());
    }

    #[test]
    fn expiry_follows_login_time() {
        let session = Session::new(
            SessionId::generate(),
            test_user(),
            Role::Manager,
            Duration::minutes(480),
        );
        assert_eq!(
            session.expires_at() - session.login_time(),
            Duration::minutes(480)
        );
    }

    #[test]
    fn session_serde_roundtrip() {
        let session = Session::new(
            SessionId::generate(),
            test_user(),
            Role::Admin,
            Duration::hours(1),
        );
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(session, parsed);
    }
}
