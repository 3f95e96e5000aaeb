//! Domain error types for the session shell.

use std::fmt;

/// Errors from establishing a session and rendering the menu document.
#[derive(Debug)]
pub enum ShellError {
    /// Configuration could not be loaded from the environment.
    Config {
        /// Error details.
        details: String,
    },
    /// The configured role is outside the closed set, or has no profile
    /// in the registry.
    UnknownRole {
        /// The offending role name.
        role: String,
    },
    /// The menu document failed to serialize.
    Render {
        /// Error details.
        details: String,
    },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { details } => {
                write!(f, "failed to load configuration: {}", details)
            }
            Self::UnknownRole { role } => {
                write!(f, "configured role '{}' is not recognized", role)
            }
            Self::Render { details } => {
                write!(f, "failed to render menu document: {}", details)
            }
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ShellError::Config {
            details: "missing field 'email'".to_string(),
        };
        assert!(err.to_string().contains("configuration"));
        assert!(err.to_string().contains("missing field 'email'"));
    }

    #[test]
    fn unknown_role_display() {
        let err = ShellError::UnknownRole {
            role: "superadmin_typo".to_string(),
        };
        assert!(err.to_string().contains("superadmin_typo"));
        assert!(err.to_string().contains("not recognized"));
    }

    #[test]
    fn render_error_display() {
        let err = ShellError::Render {
            details: "key must be a string".to_string(),
        };
        assert!(err.to_string().contains("render"));
    }
}
