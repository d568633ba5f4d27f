//! Diesel and pool error mapping for the user record repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserRecordRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> UserRecordRepositoryError {
    UserRecordRepositoryError::connection(error.message())
}

/// Collapse Diesel errors into connection or query failures.
///
/// Driver detail is logged at debug level and kept out of the port error.
pub(crate) fn map_diesel_error(error: DieselError) -> UserRecordRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            UserRecordRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            UserRecordRepositoryError::query("database constraint violated")
        }
        DieselError::QueryBuilderError(_) => {
            UserRecordRepositoryError::query("database query error")
        }
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            UserRecordRepositoryError::query("database value conversion error")
        }
        _ => UserRecordRepositoryError::query("database error"),
    }
}
