//! Session shell for the BK Pulse retention dashboard.
//!
//! Stands in for the web shell during development and operations work:
//! establishes a session for the configured role, projects the navigation
//! menu through the access evaluator, and prints the result as JSON.

mod config;
mod error;

use chrono::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bk_pulse_access::{AccessEvaluator, Role, RoleRegistry, Session, SessionId, User};
use bk_pulse_core::Result;
use bk_pulse_nav::{NavCatalog, navigable_count, project};

use crate::config::ShellConfig;
use crate::error::ShellError;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(report) = run() {
        tracing::error!(error = %report, "shell failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShellError> {
    // Load configuration from environment
    let config = ShellConfig::from_env().map_err(|e| ShellError::Config {
        details: e.to_string(),
    })?;
    tracing::info!("Loaded configuration");

    // Static access-control state, built once at startup
    let registry = RoleRegistry::builtin();
    let catalog = NavCatalog::builtin();
    let evaluator = AccessEvaluator::new(&registry);

    let role: Role = config
        .role
        .parse()
        .map_err(|e: bk_pulse_access::UnknownRoleError| ShellError::UnknownRole { role: e.role })?;

    let profile = registry
        .profile(role)
        .map_err(|e| ShellError::UnknownRole { role: e.role })?;

    // Establish the session
    let user = User::from_email(config.email, profile.description());
    let session = Session::new(
        SessionId::generate(),
        user,
        role,
        Duration::minutes(config.session.duration_minutes),
    );
    tracing::info!(
        session = %session.id(),
        user = session.user().name(),
        role = %session.role(),
        "session established"
    );

    // Project the menu for this session's role
    let menu = project(&evaluator, Some(session.role()), &catalog);
    let navigable = navigable_count(&menu);

    let document = serde_json::json!({
        "session": session.id().as_str(),
        "user": session.user(),
        "role": session.role(),
        "department": session.user().department(),
        "home": evaluator.home_route(Some(session.role())),
        "pii_access": evaluator.can_access_pii(Some(session.role())),
        "export_access": evaluator.can_export_data(Some(session.role())),
        "navigable": navigable,
        "menu": menu,
    });

    let rendered = serde_json::to_string_pretty(&document).map_err(|e| ShellError::Render {
        details: e.to_string(),
    })?;
    println!("{rendered}");

    Ok(())
}
