//! Shared Diesel and pool error mapping onto [`RepositoryError`].

use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::RepositoryError;

/// Map pool failures to connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepositoryError::connection(message)
}

/// Map Diesel failures to query or connection errors.
///
/// Database messages are logged at debug level and replaced with generic
/// text so SQL details never reach clients.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        _ => RepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"))]
    #[case(PoolError::build("bad url"))]
    fn pool_errors_become_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error),
            RepositoryError::Connection { .. }
        ));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );
        assert_eq!(
            map_diesel_error(error),
            RepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    #[case(DieselError::NotFound, "record not found")]
    #[case(DieselError::RollbackTransaction, "database error")]
    fn other_failures_are_query_errors(#[case] error: DieselError, #[case] message: &str) {
        assert_eq!(map_diesel_error(error), RepositoryError::query(message));
    }

    #[rstest]
    fn database_messages_are_not_propagated() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::Unknown,
            Box::new("relation \"policies\" does not exist".to_owned()),
        );
        let mapped = map_diesel_error(error);
        assert!(!mapped.to_string().contains("policies"));
    }
}
