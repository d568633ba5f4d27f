//! Driving port for mutating user records.
//!
//! Implementations validate input before touching storage and report every
//! failure as a [`UserRecordError`].

use async_trait::async_trait;

use crate::domain::{UserInput, UserRecord, UserRecordError, UserRecordId};

/// Use-case port for creating, replacing, and deleting user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordsCommand: Send + Sync {
    /// Validate and persist a new record.
    async fn create(&self, input: UserInput) -> Result<UserRecord, UserRecordError>;

    /// Validate and replace the mutable fields of an existing record.
    async fn update(
        &self,
        id: UserRecordId,
        input: UserInput,
    ) -> Result<UserRecord, UserRecordError>;

    /// Remove a record; deleting an absent id is `NotFound`.
    async fn delete(&self, id: UserRecordId) -> Result<(), UserRecordError>;
}
