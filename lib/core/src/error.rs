//! Error handling foundation for the BK Pulse platform.
//!
//! Only the `Result` alias lives here. Access-control and navigation
//! errors are concrete enums owned by their crates; fallible entry points
//! (such as the shell binary) propagate them as `Result<T, DomainError>`
//! reports, converting with `.into()` or `?` and adding context as the
//! error crosses layers.

use rootcause::Report;

/// A Result type alias using rootcause's Report for error handling.
///
/// The context parameter is the domain error type of the failing layer.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct BrokenProfile;

    impl fmt::Display for BrokenProfile {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "profile table is broken")
        }
    }

    impl std::error::Error for BrokenProfile {}

    fn load() -> Result<u32, BrokenProfile> {
        Err(BrokenProfile.into())
    }

    #[test]
    fn domain_errors_convert_into_reports() {
        let report = load().unwrap_err();
        assert!(report.to_string().contains("profile table is broken"));
    }

    #[test]
    fn result_defaults_to_unit_context() {
        let ok: Result<i32> = Ok(42);
        assert_eq!(ok.expect("should be ok"), 42);
    }
}
