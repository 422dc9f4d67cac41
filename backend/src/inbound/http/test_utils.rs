//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{AvatarStore, ContactRepository};
use crate::domain::{AvatarService, ContactDraft, ContactsService};
use crate::inbound::http::state::{AvatarPorts, ContactPorts, HttpState};
use crate::outbound::persistence::InMemoryContactRepository;

/// Repository holding the two sample contacts, ids 1 and 2.
pub fn seeded_repository() -> InMemoryContactRepository {
    InMemoryContactRepository::seeded([
        ContactDraft::try_from_parts("Agnieszka Szymańska", "888-999-000").expect("seed"),
        ContactDraft::try_from_parts("Anna Nowak", "+48123456789").expect("seed"),
    ])
}

/// Wire real services over the given adapters.
pub fn http_state<R, S>(repository: Arc<R>, store: Arc<S>) -> HttpState
where
    R: ContactRepository + 'static,
    S: AvatarStore + 'static,
{
    let contacts = Arc::new(ContactsService::new(repository));
    let avatars = Arc::new(AvatarService::new(store));
    HttpState::new(
        ContactPorts {
            query: contacts.clone(),
            command: contacts,
        },
        AvatarPorts {
            query: avatars.clone(),
            command: avatars,
        },
    )
}
