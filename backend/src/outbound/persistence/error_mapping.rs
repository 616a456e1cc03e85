//! Translation of pool and Diesel failures into repository port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(error = %error, "user repository could not obtain a connection");
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Closed connections count as connectivity failures; every other Diesel
/// error, including constraint violations, is a query failure.
pub(crate) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection closed")
        }
        DieselError::DatabaseError(_, info) => {
            UserPersistenceError::query(format!("database error: {}", info.message()))
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}
