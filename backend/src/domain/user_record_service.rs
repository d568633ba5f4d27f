//! User record lifecycle service.
//!
//! Implements the query and command driving ports on top of a
//! [`UserRecordRepository`]. Input is validated before any repository call,
//! and repository failures surface as [`UserRecordError::StorageFailure`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{
    UserRecordRepository, UserRecordRepositoryError, UserRecordsCommand, UserRecordsQuery,
};
use crate::domain::{UserFields, UserInput, UserRecord, UserRecordError, UserRecordId};

/// Service owning the authoritative collection of user records.
#[derive(Clone)]
pub struct UserRecordService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserRecordService<R> {
    /// Create a service backed by `repository`, stamping mutations with
    /// `clock`.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use profile_registry::domain::UserRecordService;
    /// # use profile_registry::domain::ports::FixtureUserRecordRepository;
    /// let service = UserRecordService::new(
    ///     Arc::new(FixtureUserRecordRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> UserRecordService<R>
where
    R: UserRecordRepository,
{
    fn map_repository_error(error: UserRecordRepositoryError) -> UserRecordError {
        error!(error = %error, "user record repository operation failed");
        UserRecordError::storage_failure(error.to_string())
    }

    fn validate(input: &UserInput) -> Result<UserFields, UserRecordError> {
        input.validate().map_err(|violations| {
            debug!(violations = violations.len(), "user input rejected");
            UserRecordError::validation_failed(violations)
        })
    }
}

#[async_trait]
impl<R> UserRecordsQuery for UserRecordService<R>
where
    R: UserRecordRepository,
{
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserRecordError> {
        let records = self
            .repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)?;
        debug!(count = records.len(), "listed user records");
        Ok(records)
    }

    async fn get_by_id(&self, id: UserRecordId) -> Result<UserRecord, UserRecordError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| UserRecordError::not_found(id))
    }
}

#[async_trait]
impl<R> UserRecordsCommand for UserRecordService<R>
where
    R: UserRecordRepository,
{
    async fn create(&self, input: UserInput) -> Result<UserRecord, UserRecordError> {
        let fields = Self::validate(&input)?;
        let now = self.clock.utc();
        let record = self
            .repository
            .insert(&fields, now)
            .await
            .map_err(Self::map_repository_error)?;
        debug!(user_id = %record.id, "created user record");
        Ok(record)
    }

    async fn update(
        &self,
        id: UserRecordId,
        input: UserInput,
    ) -> Result<UserRecord, UserRecordError> {
        let fields = Self::validate(&input)?;
        let existing = self.get_by_id(id).await?;

        // Clock skew must never move the timestamp backwards.
        let updated_at = self.clock.utc().max(existing.updated_at);
        let record = self
            .repository
            .replace_fields(id, &fields, updated_at)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| UserRecordError::not_found(id))?;
        debug!(user_id = %id, "updated user record");
        Ok(record)
    }

    async fn delete(&self, id: UserRecordId) -> Result<(), UserRecordError> {
        let affected = self
            .repository
            .delete_by_id(id)
            .await
            .map_err(Self::map_repository_error)?;
        if affected == 0 {
            return Err(UserRecordError::not_found(id));
        }
        debug!(user_id = %id, "deleted user record");
        Ok(())
    }
}

#[cfg(test)]
#[path = "user_record_service_tests.rs"]
mod tests;
