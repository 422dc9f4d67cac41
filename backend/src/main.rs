//! Contacts API entry-point: loads configuration, wires adapters and serves
//! REST endpoints plus OpenAPI docs.

mod server;

use std::time::Duration;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contacts::inbound::http::health::HealthState;
use contacts::inbound::http::oidc::OidcSettings;
use contacts::inbound::http::session_config::{
    BuildMode, KeySource, SessionSettings, session_settings_from_env,
};
use contacts::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use contacts::outbound::storage::StorageSettings;
use contacts::settings::AppSettings;
use server::{ServerConfig, create_server};

const DB_POOL_MAX_SIZE: u32 = 10;
const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let env = DefaultEnv::new();

    let session = load_session_settings(&env)?;
    log_oidc_status(&env);

    let mut config = ServerConfig::new(session, settings.host(), settings.port());
    match settings.database_url(&env) {
        Some(database_url) => {
            let pool = connect_database(database_url).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; contacts are kept in memory"),
    }
    match StorageSettings::from_env(&env) {
        Ok(storage) => {
            info!(
                endpoint = storage.endpoint(),
                bucket = storage.bucket(),
                "avatar storage configured"
            );
            config = config.with_storage(storage);
        }
        Err(e) => warn!(error = %e, "avatar storage disabled"),
    }

    let health_state = web::Data::new(HealthState::new(config.health_report()));
    info!(host = settings.host(), port = settings.port(), "starting server");
    create_server(health_state, config)?.await
}

fn load_session_settings(env: &DefaultEnv) -> std::io::Result<SessionSettings> {
    let session = session_settings_from_env(env, BuildMode::from_debug_assertions())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    match &session.key_source {
        KeySource::Ephemeral => {
            warn!("using temporary session key (dev only); sessions end on restart");
        }
        KeySource::Secret => info!("session key loaded from SESSION_SECRET"),
        KeySource::File(path) => info!(path = %path.display(), "session key loaded from file"),
    }
    if !session.cookie_secure {
        warn!("session cookies are not marked Secure");
    }
    Ok(session)
}

fn log_oidc_status(env: &DefaultEnv) {
    match OidcSettings::from_env(env) {
        Ok(oidc) => info!(
            client_id = oidc.client_id(),
            discovery_url = %oidc.discovery_url(),
            redirect_url = %oidc.redirect_url(),
            "OIDC provider registered"
        ),
        Err(e) => warn!(error = %e, "OIDC provider not registered"),
    }
}

async fn connect_database(database_url: String) -> std::io::Result<DbPool> {
    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!(applied, "database migrations up to date");

    let pool = DbPool::new(
        PoolConfig::new(database_url)
            .with_max_size(DB_POOL_MAX_SIZE)
            .with_connection_timeout(DB_CONNECT_TIMEOUT),
    )
    .await
    .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!("connected to PostgreSQL");
    Ok(pool)
}
