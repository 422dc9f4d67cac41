//! Internal Diesel row structs for the `contacts` table.
//!
//! These never leave the persistence module; repositories convert them into
//! domain [`Contact`](crate::domain::Contact) values.

use diesel::prelude::*;

use super::schema::contacts;

/// Row read from `contacts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub owner_id: Option<i32>,
}

/// Insertable payload; `id` is assigned by the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub name: &'a str,
    pub phone: &'a str,
}

/// Full replacement of the mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactUpdate<'a> {
    pub name: &'a str,
    pub phone: &'a str,
}
