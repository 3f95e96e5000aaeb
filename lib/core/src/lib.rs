//! Core domain types and utilities for the BK Pulse retention platform.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout the BK Pulse customer-retention dashboard.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, UserId};
