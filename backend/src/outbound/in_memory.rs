//! Process-local [`UserRecordRepository`] used when no database is configured.
//!
//! Ids are assigned sequentially from 1 and never reused, matching a
//! PostgreSQL `serial` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{UserRecordRepository, UserRecordRepositoryError};
use crate::domain::{UserFields, UserRecord, UserRecordId};

#[derive(Debug)]
struct Store {
    next_id: i32,
    records: BTreeMap<UserRecordId, UserRecord>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

/// In-memory user record repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRecordRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserRecordRepositoryError> {
        self.store
            .lock()
            .map_err(|_| UserRecordRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRecordRepository for InMemoryUserRecordRepository {
    async fn insert(
        &self,
        fields: &UserFields,
        now: DateTime<Utc>,
    ) -> Result<UserRecord, UserRecordRepositoryError> {
        let mut store = self.lock()?;
        let id = UserRecordId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserRecordRepositoryError::query("user id sequence exhausted"))?;
        let record = UserRecord {
            id,
            fields: fields.clone(),
            created_at: now,
            updated_at: now,
        };
        store.records.insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        id: UserRecordId,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, UserRecordRepositoryError> {
        Ok(self.lock()?.records.values().cloned().collect())
    }

    async fn replace_fields(
        &self,
        id: UserRecordId,
        fields: &UserFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<UserRecord>, UserRecordRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.records.get_mut(&id).map(|record| {
            record.fields = fields.clone();
            record.updated_at = updated_at;
            record.clone()
        }))
    }

    async fn delete_by_id(&self, id: UserRecordId) -> Result<u64, UserRecordRepositoryError> {
        Ok(u64::from(self.lock()?.records.remove(&id).is_some()))
    }
}
