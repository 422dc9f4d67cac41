//! Builders for HTTP state ports.
//!
//! Each port pair falls back to a database-less adapter when its backing
//! service is not configured.

use std::sync::Arc;

use actix_web::web;

use contacts::domain::ports::{AvatarStore, ContactRepository};
use contacts::domain::{AvatarService, ContactsService};
use contacts::inbound::http::state::{AvatarPorts, ContactPorts, HttpState};
use contacts::outbound::persistence::{DieselContactRepository, InMemoryContactRepository};
use contacts::outbound::storage::{S3AvatarStore, UnconfiguredAvatarStore};

use super::ServerConfig;

fn contact_ports<R>(repository: R) -> ContactPorts
where
    R: ContactRepository + 'static,
{
    let service = Arc::new(ContactsService::new(Arc::new(repository)));
    ContactPorts {
        query: service.clone(),
        command: service,
    }
}

fn avatar_ports<S>(store: S) -> AvatarPorts
where
    S: AvatarStore + 'static,
{
    let service = Arc::new(AvatarService::new(Arc::new(store)));
    AvatarPorts {
        query: service.clone(),
        command: service,
    }
}

fn build_contact_ports(config: &ServerConfig) -> ContactPorts {
    match &config.db_pool {
        Some(pool) => contact_ports(DieselContactRepository::new(pool.clone())),
        None => contact_ports(InMemoryContactRepository::new()),
    }
}

fn build_avatar_ports(config: &ServerConfig) -> AvatarPorts {
    match &config.storage {
        Some(settings) => avatar_ports(S3AvatarStore::new(settings)),
        None => avatar_ports(UnconfiguredAvatarStore),
    }
}

/// Build the shared HTTP state from the configured adapters.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        build_contact_ports(config),
        build_avatar_ports(config),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Key;
    use contacts::domain::{AvatarKey, ContactDraft, ContactId, ErrorCode};
    use contacts::inbound::http::session_config::{KeySource, SessionSettings};
    use rstest::rstest;

    fn config() -> ServerConfig {
        ServerConfig::new(
            SessionSettings {
                key: Key::generate(),
                cookie_secure: false,
                key_source: KeySource::Ephemeral,
            },
            "127.0.0.1",
            0,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn without_database_contacts_live_in_memory() {
        let state = build_http_state(&config());
        let draft = ContactDraft::try_from_parts("Anna Nowak", "+48123456789").expect("draft");

        let created = state
            .contacts_command
            .create_contact(draft)
            .await
            .expect("in-memory create");
        let listed = state.contacts.list_contacts().await.expect("list");

        assert_eq!(listed, vec![created]);
    }

    #[rstest]
    #[tokio::test]
    async fn without_storage_avatars_are_unavailable() {
        let state = build_http_state(&config());
        let key = AvatarKey::for_contact(ContactId::new(1));

        let err = state
            .avatars
            .open_avatar(&key)
            .await
            .err()
            .expect("storage is disabled");

        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
