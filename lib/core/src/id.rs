//! Strongly-typed ID types for domain entities.
//!
//! IDs use ULID (Universally Unique Lexicographically Sortable Identifier)
//! format, providing both uniqueness and temporal ordering. The display form
//! carries a short type prefix (`usr_01H...`) so IDs stay recognizable in
//! logs and exported reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Unique identifier for a platform user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Ulid);

impl UserId {
    /// Creates a new ID with a randomly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates an ID from a ULID.
    #[must_use]
    pub const fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// Returns the underlying ULID.
    #[must_use]
    pub const fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// Returns the prefix used for display formatting.
    #[must_use]
    pub const fn prefix() -> &'static str {
        "usr"
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "usr_{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the prefixed display form and a raw ULID.
        let ulid_str = s.strip_prefix("usr_").unwrap_or(s);

        Ulid::from_str(ulid_str).map(Self).map_err(|e| ParseIdError {
            id_type: "UserId",
            reason: e.to_string(),
        })
    }
}

impl From<Ulid> for UserId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

impl From<UserId> for Ulid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_format() {
        let id = UserId::new();
        let display = id.to_string();
        assert!(display.starts_with("usr_"));
    }

    #[test]
    fn parse_with_prefix() {
        let id = UserId::new();
        let display = id.to_string();
        let parsed: UserId = display.parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let ulid = Ulid::new();
        let id: UserId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_invalid_ulid() {
        let result: Result<UserId, _> = "not_a_ulid".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "UserId");
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let id1 = UserId::new();
        let id2 = UserId::new();

        let mut set = HashSet::new();
        set.insert(id1);
        set.insert(id2);
        set.insert(id1); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: UserId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
