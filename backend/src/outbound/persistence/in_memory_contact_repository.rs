//! In-process `ContactRepository` for database-less runs and tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDraft, ContactId};

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Contact>,
}

/// Contact store kept in a mutex-guarded map.
///
/// Identifiers start at 1 and are never reused, mirroring a serial column.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    table: Mutex<Table>,
}

impl InMemoryContactRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `drafts`, assigned ids 1, 2, ...
    pub fn seeded(drafts: impl IntoIterator<Item = ContactDraft>) -> Self {
        let mut table = Table::default();
        for draft in drafts {
            table.insert(&draft);
        }
        Self {
            table: Mutex::new(table),
        }
    }

    fn with_table<T>(
        &self,
        op: impl FnOnce(&mut Table) -> Result<T, ContactRepositoryError>,
    ) -> Result<T, ContactRepositoryError> {
        let mut table = self
            .table
            .lock()
            .map_err(|_| ContactRepositoryError::connection("contact table lock poisoned"))?;
        op(&mut table)
    }
}

impl Table {
    fn insert(&mut self, draft: &ContactDraft) -> Contact {
        self.next_id += 1;
        let id = self.next_id;
        let (name, phone) = draft.clone().into_parts();
        let contact = Contact::new(ContactId::new(id), name, phone, None);
        self.rows.insert(id, contact.clone());
        contact
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        self.with_table(|table| Ok(table.rows.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        self.with_table(|table| Ok(table.rows.get(&id.get()).cloned()))
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactRepositoryError> {
        self.with_table(|table| Ok(table.insert(draft)))
    }

    async fn update(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> Result<Contact, ContactRepositoryError> {
        self.with_table(|table| {
            let existing = table
                .rows
                .remove(&id.get())
                .ok_or_else(|| ContactRepositoryError::not_found(id.get()))?;
            let updated = existing.apply(draft.clone());
            table.rows.insert(id.get(), updated.clone());
            Ok(updated)
        })
    }

    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError> {
        self.with_table(|table| {
            table
                .rows
                .remove(&id.get())
                .map(|_| ())
                .ok_or_else(|| ContactRepositoryError::not_found(id.get()))
        })
    }
}
