//! Contact persistence adapters.
//!
//! `DieselContactRepository` talks to PostgreSQL through `diesel-async` and a
//! `bb8` pool. `InMemoryContactRepository` backs database-less runs and
//! handler tests. Row structs and table definitions stay private.
//!
//! ```ignore
//! use contacts::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/contacts")).await?;
//! let repo = DieselContactRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod in_memory_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use in_memory_contact_repository::InMemoryContactRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
