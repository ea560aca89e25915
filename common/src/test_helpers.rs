//! Shared Test Helpers for Cross-Crate Use
//!
//! This module provides centralized test utilities so every crate in the
//! workspace opens its test store the same way.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Environment variable that points the test suites at a real database.
pub const TEST_DATABASE_URL_ENV: &str = "ORDERS_TEST_DATABASE_URL";

// Global counter for unique test identifiers across parallel tests
static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate test identifiers that won't conflict across parallel tests
///
/// # Returns
/// A unique string in the format: "{prefix}-{timestamp}-{counter}"
pub fn generate_unique_id(prefix: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, timestamp, counter)
}

/// Get the test database URL from environment or default
///
/// Defaults to a private in-memory SQLite database, so each connection
/// created by [`create_test_connection`] starts from an empty store.
/// A shared database set through the environment needs `--test-threads=1`.
pub fn get_test_database_url() -> String {
    std::env::var(TEST_DATABASE_URL_ENV).unwrap_or_else(|_| get_test_in_memory_database_url())
}

pub fn get_test_in_memory_database_url() -> String {
    "sqlite::memory:".to_string()
}

/// Open a connection to the test store
///
/// The pool is pinned to one connection: every SQLite `:memory:` connection
/// is its own database.
pub async fn create_test_connection() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(get_test_database_url());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Database::connect(options).await
}
