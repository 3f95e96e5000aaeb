//! User display record.
//!
//! Only the session's role feeds authorization; the user fields exist for
//! UI chrome (sidebar header, audit trails). The display name is derived
//! from the email local part when none is supplied, matching the login
//! behavior of the dashboard (`jane.doe@bk.rw` becomes "jane doe").

use bk_pulse_core::UserId;
use serde::{Deserialize, Serialize};

/// A logged-in user as shown in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal platform user ID.
    id: UserId,
    /// Login email address.
    email: String,
    /// Display name.
    name: String,
    /// Department label (the role description at login time).
    department: String,
}

impl User {
    /// Creates a user with a display name derived from the email.
    #[must_use]
    pub fn from_email(email: impl Into<String>, department: impl Into<String>) -> Self {
        let email = email.into();
        let local = email.split('@').next().unwrap_or(&email);
        let name = local.replace('.', " ");
        Self {
            id: UserId::new(),
            email,
            name,
            department: department.into(),
        }
    }

    /// Creates a user with an explicit display name.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            name: name.into(),
            department: department.into(),
        }
    }

    /// Returns the user's internal platform ID.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the department label.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }
}
