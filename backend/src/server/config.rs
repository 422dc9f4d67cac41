//! HTTP server configuration object and helpers.

use contacts::inbound::http::health::{AvatarBackend, ContactsBackend, HealthReport};
use contacts::inbound::http::session_config::SessionSettings;
use contacts::outbound::persistence::DbPool;
use contacts::outbound::storage::StorageSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: (String, u16),
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) storage: Option<StorageSettings>,
}

impl ServerConfig {
    /// Configuration with in-memory contacts and avatars disabled.
    #[must_use]
    pub fn new(session: SessionSettings, host: impl Into<String>, port: u16) -> Self {
        Self {
            session,
            bind_addr: (host.into(), port),
            db_pool: None,
            storage: None,
        }
    }

    /// Attach a database connection pool; contacts then persist to PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach object-storage settings; avatar endpoints are disabled without
    /// them.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageSettings) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Adapters this configuration wires, as reported by the readiness probe.
    #[must_use]
    pub fn health_report(&self) -> HealthReport {
        HealthReport {
            contacts: if self.db_pool.is_some() {
                ContactsBackend::Postgres
            } else {
                ContactsBackend::InMemory
            },
            avatars: if self.storage.is_some() {
                AvatarBackend::ObjectStorage
            } else {
                AvatarBackend::Disabled
            },
        }
    }
}
