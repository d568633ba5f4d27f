//! Driving port for resolving a stored address into coordinates.

use async_trait::async_trait;

use crate::domain::{Coordinates, UserRecordError, UserRecordId};

/// Use-case port for geocoding the address of a stored record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve the address of record `id`.
    ///
    /// Absent records fail with `NotFound` before any provider call.
    async fn resolve_address(&self, id: UserRecordId) -> Result<Coordinates, UserRecordError>;
}
