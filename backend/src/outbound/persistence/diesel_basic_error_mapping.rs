//! Diesel and pool error mapping shared by the board adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure into an adapter's connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection checkout failed");
    connection(error.message().to_owned())
}

/// Map a Diesel failure into query or connection errors.
///
/// Foreign key violations are returned to the caller untouched so each
/// adapter can translate them into its own unknown-reference variant.
pub(crate) fn map_diesel_error<E, Q, C>(
    error: DieselError,
    query: Q,
    connection: C,
) -> Result<E, DieselError>
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => Err(error),
        DieselError::NotFound => Ok(query("record not found")),
        DieselError::QueryBuilderError(_) => Ok(query("database query error")),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => Ok(connection("database connection error")),
        _ => Ok(query("database error")),
    }
}
