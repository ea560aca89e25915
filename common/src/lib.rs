//! Common utilities shared across the orders workspace
//!
//! This crate provides functionality that is not tied to the order domain:
//!
//! - Configuration loading with `!include` support
//! - Shared test helpers for database-backed test suites

pub mod config;
pub mod yaml_include;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{create_test_connection, generate_unique_id, get_test_database_url};
