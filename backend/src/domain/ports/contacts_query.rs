//! Driving port for contact reads.
//!
//! HTTP handlers depend on this trait rather than on the repository so the
//! mapping from persistence failures to domain errors stays in one place.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, Error};

/// Domain use-case port for reading contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// All contacts; empty when none exist.
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error>;

    /// A single contact, or a `not_found` error.
    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error>;
}
