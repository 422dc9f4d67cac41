//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module holds the embedded PostgreSQL plumbing they share.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::provision_contacts_database;

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `Display` implementation collapses database errors to `db error`,
/// hiding the message and SQLSTATE.
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
