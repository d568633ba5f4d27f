//! PostgreSQL-backed [`UserRecordRepository`] using Diesel.
//!
//! Every operation is a single statement: inserts and updates use
//! `RETURNING` so the stored row comes back without a second round trip.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRecordRepository, UserRecordRepositoryError};
use crate::domain::{UserFields, UserRecord, UserRecordId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRecordRow, UserRecordChangeset, UserRecordRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel implementation of the user record repository port.
#[derive(Clone)]
pub struct DieselUserRecordRepository {
    pool: DbPool,
}

impl DieselUserRecordRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRecordRepository for DieselUserRecordRepository {
    async fn insert(
        &self,
        fields: &UserFields,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, UserRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(users::table)
            .values(NewUserRecordRow::new(fields, now))
            .returning(UserRecordRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRecordRow> = users::table
            .find(id.get())
            .select(UserRecordRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(UserRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRecordRow> = users::table
            .order(users::id.asc())
            .select(UserRecordRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(UserRecord::from).collect())
    }

    async fn replace_fields(
        &self,
        id: UserRecordId,
        fields: &UserFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRecordRow> = diesel::update(users::table.find(id.get()))
            .set(UserRecordChangeset::new(fields, updated_at))
            .returning(UserRecordRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(UserRecord::from))
    }

    async fn delete_by_id(&self, id: UserRecordId) -> Result<u64, UserRecordRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(deleted).unwrap_or(u64::MAX))
    }
}
