//! Embedded schema migrations.
//!
//! The `migrations/` tree is compiled into the binary so a fresh database can
//! be brought up to date at startup without shipping SQL files alongside it.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use thiserror::Error;

/// Migrations bundled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connect { message: String },
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
}

/// Apply every pending migration and return how many ran.
///
/// Blocking; call it from `spawn_blocking` inside async contexts.
///
/// # Errors
///
/// [`MigrationError::Connect`] when the database is unreachable and
/// [`MigrationError::Apply`] when a migration fails.
pub fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let mut connection =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connect {
            message: err.to_string(),
        })?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::migration::MigrationSource;
    use diesel::pg::Pg;
    use rstest::rstest;

    #[rstest]
    fn contacts_table_migration_is_embedded() {
        let migrations =
            MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("embedded migrations load");
        let names: Vec<String> = migrations
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();
        assert!(
            names.iter().any(|name| name.ends_with("create_contacts")),
            "unexpected migrations: {names:?}"
        );
    }

    #[rstest]
    fn unreachable_database_reports_connect_error() {
        let err = run_pending_migrations("postgres://nobody@127.0.0.1:1/contacts")
            .expect_err("nothing listens on port 1");
        assert!(matches!(err, MigrationError::Connect { .. }));
    }
}
