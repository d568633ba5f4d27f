//! Driving port for reading user records.

use async_trait::async_trait;

use crate::domain::{UserRecord, UserRecordError, UserRecordId};

/// Use-case port for listing and fetching user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRecordsQuery: Send + Sync {
    /// Every record ordered by id ascending.
    async fn list_all(&self) -> Result<Vec<UserRecord>, UserRecordError>;

    /// Fetch one record, failing with `NotFound` when absent.
    async fn get_by_id(&self, id: UserRecordId) -> Result<UserRecord, UserRecordError>;
}
