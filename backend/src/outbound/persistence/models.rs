//! Internal Diesel row structs for the `users` table.
//!
//! These never leave the persistence layer.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::{UserFields, UserRecord, UserRecordId};

use super::schema::users;

/// Row read back from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRecordRow {
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecordRow> for UserRecord {
    fn from(row: UserRecordRow) -> Self {
        Self {
            id: UserRecordId::new(row.id),
            fields: UserFields::from_trusted_parts(
                row.name,
                row.date_of_birth,
                row.address,
                row.description,
            ),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row; the id comes from the `serial` sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRecordRow<'a> {
    pub name: &'a str,
    pub date_of_birth: NaiveDate,
    pub address: &'a str,
    pub description: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewUserRecordRow<'a> {
    pub fn new(fields: &'a UserFields, now: DateTime<Utc>) -> Self {
        Self {
            name: fields.name(),
            date_of_birth: fields.date_of_birth(),
            address: fields.address(),
            description: fields.description(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full replacement of the mutable columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserRecordChangeset<'a> {
    pub name: &'a str,
    pub date_of_birth: NaiveDate,
    pub address: &'a str,
    pub description: &'a str,
    pub updated_at: DateTime<Utc>,
}

impl<'a> UserRecordChangeset<'a> {
    pub fn new(fields: &'a UserFields, updated_at: DateTime<Utc>) -> Self {
        Self {
            name: fields.name(),
            date_of_birth: fields.date_of_birth(),
            address: fields.address(),
            description: fields.description(),
            updated_at,
        }
    }
}
