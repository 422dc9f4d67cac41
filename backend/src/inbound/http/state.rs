//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against in-memory adapters or mocks.

use std::sync::Arc;

use crate::domain::ports::{AvatarCommand, AvatarQuery, ContactsCommand, ContactsQuery};

/// Contact ports bundle.
#[derive(Clone)]
pub struct ContactPorts {
    pub query: Arc<dyn ContactsQuery>,
    pub command: Arc<dyn ContactsCommand>,
}

/// Avatar ports bundle.
#[derive(Clone)]
pub struct AvatarPorts {
    pub query: Arc<dyn AvatarQuery>,
    pub command: Arc<dyn AvatarCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactsQuery>,
    pub contacts_command: Arc<dyn ContactsCommand>,
    pub avatars: Arc<dyn AvatarQuery>,
    pub avatars_command: Arc<dyn AvatarCommand>,
}

impl HttpState {
    /// Assemble state from the contact and avatar port bundles.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts::domain::{AvatarService, ContactsService};
    /// use contacts::inbound::http::state::{AvatarPorts, ContactPorts, HttpState};
    /// use contacts::outbound::persistence::InMemoryContactRepository;
    /// use contacts::outbound::storage::UnconfiguredAvatarStore;
    ///
    /// let contacts = Arc::new(ContactsService::new(Arc::new(InMemoryContactRepository::new())));
    /// let avatars = Arc::new(AvatarService::new(Arc::new(UnconfiguredAvatarStore)));
    /// let state = HttpState::new(
    ///     ContactPorts { query: contacts.clone(), command: contacts },
    ///     AvatarPorts { query: avatars.clone(), command: avatars },
    /// );
    /// let _query = state.contacts.clone();
    /// ```
    pub fn new(contacts: ContactPorts, avatars: AvatarPorts) -> Self {
        Self {
            contacts: contacts.query,
            contacts_command: contacts.command,
            avatars: avatars.query,
            avatars_command: avatars.command,
        }
    }
}
