//! Shared helpers for backend integration tests.
//!
//! Each file under `tests/` is its own crate, so suites pull these in with
//! `mod support;` and use only what they need.

#![allow(dead_code, reason = "each integration test crate uses a different subset")]

mod cluster_skip;
mod embedded_postgres;
mod pg_embed;

pub use cluster_skip::{handle_cluster_setup_failure, should_skip_test_cluster};
pub use embedded_postgres::{drop_users_table, migrate_schema, reset_database};
pub use pg_embed::test_cluster;

/// Render a `postgres` error with its SQLSTATE and message.
///
/// `postgres::Error`'s `Display` collapses database errors to `db error`,
/// which is useless in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}
