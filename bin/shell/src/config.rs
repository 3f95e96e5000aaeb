//! Shell configuration.
//!
//! Strongly-typed configuration loaded via the `config` crate from
//! environment variables with the `BK_PULSE` prefix and `__` separator,
//! e.g. `BK_PULSE__EMAIL`, `BK_PULSE__ROLE`,
//! `BK_PULSE__SESSION__DURATION_MINUTES`.

use serde::Deserialize;

/// Top-level shell configuration.
#[derive(Debug, Deserialize)]
pub struct ShellConfig {
    /// Login email for the session.
    pub email: String,

    /// Role name, canonical (`admin`, `manager`, `analyst`, `officer`) or a
    /// legacy alias (`hod`, `senior_manager`, `data_analyst`, `agent`, ...).
    pub role: String,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session duration in minutes. Defaults to a working day.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,
}

fn default_session_duration_minutes() -> i64 {
    480
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_session_duration_minutes(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("BK_PULSE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_has_correct_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.duration_minutes, 480);
    }
}
