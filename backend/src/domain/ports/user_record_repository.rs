//! Port for user record persistence.
//!
//! Adapters provide five primitive operations. Every mutation must be a single
//! atomic statement so partially written records are never observable.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{UserFields, UserRecord, UserRecordId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user record repository adapters.
    pub enum UserRecordRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user record repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user record repository query failed: {message}",
    }
}

/// Port for storing and retrieving user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    /// Insert a new record, assigning a fresh id.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    async fn insert(
        &self,
        fields: &UserFields,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, UserRecordRepositoryError>;

    /// Fetch one record, `None` when absent.
    async fn find_by_id(
        &self,
        id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError>;

    /// Every record ordered by id ascending.
    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError>;

    /// Replace the four mutable fields and `updated_at` of an existing record.
    ///
    /// Returns `None` when no row matched.
    async fn replace_fields(
        &self,
        id: UserRecordId,
        fields: &UserFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError>;

    /// Delete a record, returning the number of rows removed.
    async fn delete_by_id(&self, id: UserRecordId) -> Result<u64, UserRecordRepositoryError>;
}

/// Fixture repository that stores nothing.
///
/// Lookups return nothing and deletes affect zero rows; inserts echo the
/// record back with id 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRecordRepository;

#[async_trait]
impl UserRecordRepository for FixtureUserRecordRepository {
    async fn insert(
        &self,
        fields: &UserFields,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, UserRecordRepositoryError> {
        Ok(UserRecord {
            id: UserRecordId::new(1),
            fields: fields.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(
        &self,
        _id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError> {
        Ok(Vec::new())
    }

    async fn replace_fields(
        &self,
        _id: UserRecordId,
        _fields: &UserFields,
        _updated_at: DateTime<Utc>,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        Ok(None)
    }

    async fn delete_by_id(&self, _id: UserRecordId) -> Result<u64, UserRecordRepositoryError> {
        Ok(0)
    }
}
