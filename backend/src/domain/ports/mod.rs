//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`ContactRepository`, `AvatarStore`) are implemented by
//! outbound adapters. Driving ports (`ContactsQuery`, `ContactsCommand`,
//! `AvatarQuery`, `AvatarCommand`) are implemented by domain services and
//! called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod avatar_command;
mod avatar_query;
mod avatar_store;
mod contact_repository;
mod contacts_command;
mod contacts_query;

#[cfg(test)]
pub use avatar_command::MockAvatarCommand;
pub use avatar_command::AvatarCommand;
#[cfg(test)]
pub use avatar_query::MockAvatarQuery;
pub use avatar_query::AvatarQuery;
#[cfg(test)]
pub use avatar_store::MockAvatarStore;
pub use avatar_store::{AvatarBody, AvatarStore, AvatarStoreError, AvatarStream};
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
#[cfg(test)]
pub use contacts_command::MockContactsCommand;
pub use contacts_command::ContactsCommand;
#[cfg(test)]
pub use contacts_query::MockContactsQuery;
pub use contacts_query::ContactsQuery;
