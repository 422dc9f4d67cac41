//! Port abstraction for contact persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
        /// No row exists for the targeted identifier.
        NotFound { id: i32 } => "contact {id} not found",
    }
}

/// Driven port over the `contacts` table.
///
/// Each operation maps to a single statement. Reads report a missing row as
/// `Ok(None)`; writes report it as [`ContactRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every contact, ordered by identifier.
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Fetch one contact.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Insert a contact and return it with its assigned identifier.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactRepositoryError>;

    /// Replace name and phone of an existing contact.
    async fn update(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> Result<Contact, ContactRepositoryError>;

    /// Hard-delete a contact.
    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError>;
}
