//! Contact domain services.
//!
//! [`ContactsService`] implements both contact driving ports on top of a
//! [`ContactRepository`], folding repository failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactDraft, ContactId, Error};

/// Message returned when a contact lookup or delete misses.
pub const CONTACT_NOT_FOUND_MESSAGE: &str = "Contact not found";

/// Contact service implementing the driving ports.
#[derive(Clone)]
pub struct ContactsService<R> {
    repository: Arc<R>,
}

impl<R> ContactsService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ContactsService<R>
where
    R: ContactRepository,
{
    fn map_repository_error(error: ContactRepositoryError) -> Error {
        match error {
            ContactRepositoryError::Connection { message } => {
                Error::internal(format!("contact repository unavailable: {message}"))
            }
            ContactRepositoryError::Query { message } => {
                Error::internal(format!("contact repository error: {message}"))
            }
            ContactRepositoryError::NotFound { .. } => Error::not_found(CONTACT_NOT_FOUND_MESSAGE),
        }
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self) -> Result<Vec<Contact>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(CONTACT_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        self.repository
            .create(&draft)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn update_contact(&self, id: ContactId, draft: ContactDraft) -> Result<Contact, Error> {
        self.repository
            .update(id, &draft)
            .await
            .map_err(|err| match err {
                ContactRepositoryError::NotFound { id } => {
                    debug!(contact_id = id, "update targeted a missing contact");
                    Error::internal(format!("contact {id} not found during update"))
                }
                other => Self::map_repository_error(other),
            })
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        self.repository
            .delete(id)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[cfg(test)]
#[path = "contacts_service_tests.rs"]
mod tests;
