//! Process settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CONTACTS_*` environment variables or a
//! configuration file. The database URL also honours the legacy `DB_URL`.

use mockable::Env;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const LEGACY_DATABASE_URL_ENV: &str = "DB_URL";

/// Listener and database settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
}

impl AppSettings {
    /// Bind host, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port, defaulting to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured database URL, falling back to `DB_URL`. Blank values count
    /// as unset.
    pub fn database_url<E: Env>(&self, env: &E) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| env.string(LEGACY_DATABASE_URL_ENV))
            .filter(|url| !url.trim().is_empty())
    }
}
