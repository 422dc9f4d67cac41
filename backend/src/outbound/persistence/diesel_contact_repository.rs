//! PostgreSQL-backed `ContactRepository` using Diesel.
//!
//! Every operation is one parameterised statement. Writes that touch no row
//! report [`ContactRepositoryError::NotFound`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactDraft, ContactId, ContactName, OwnerId, PhoneNumber};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel implementation of [`ContactRepository`].
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, |message| ContactRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        |message| ContactRepositoryError::query(message),
        |message| ContactRepositoryError::connection(message),
    )
}

fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let name = ContactName::new(row.name).map_err(|err| {
        ContactRepositoryError::query(format!("contact {} has invalid name: {err}", row.id))
    })?;
    let phone = PhoneNumber::from_stored(row.phone).map_err(|err| {
        ContactRepositoryError::query(format!("contact {} has invalid phone: {err}", row.id))
    })?;
    Ok(Contact::new(
        ContactId::new(row.id),
        name,
        phone,
        row.owner_id.map(OwnerId::new),
    ))
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .select(ContactRow::as_select())
            .order(contacts::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(id.get())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(NewContactRow {
                name: draft.name().as_str(),
                phone: draft.phone().as_str(),
            })
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_contact(row)
    }

    async fn update(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = diesel::update(contacts::table.find(id.get()))
            .set(ContactUpdate {
                name: draft.name().as_str(),
                phone: draft.phone().as_str(),
            })
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        match row {
            Some(row) => row_to_contact(row),
            None => Err(ContactRepositoryError::not_found(id.get())),
        }
    }

    async fn delete(&self, id: ContactId) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(contacts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(ContactRepositoryError::not_found(id.get()));
        }
        Ok(())
    }
}
