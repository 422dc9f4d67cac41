//! Driving port for contact mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId, Error};

/// Domain use-case port for creating, replacing and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Persist a new contact.
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Replace name and phone of an existing contact.
    ///
    /// A missing row surfaces as an internal error, not `not_found`.
    async fn update_contact(&self, id: ContactId, draft: ContactDraft) -> Result<Contact, Error>;

    /// Delete a contact, or fail with `not_found`.
    async fn delete_contact(&self, id: ContactId) -> Result<(), Error>;
}
