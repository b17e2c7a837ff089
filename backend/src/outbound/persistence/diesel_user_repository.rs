//! PostgreSQL-backed `Repository<User>` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{User, UserId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{UserRow, UserValues};
use super::pool::DbPool;
use super::schema::users;

/// Diesel adapter for the users table.
///
/// Identifiers come from the table's `BIGSERIAL` sequence, so a client id the
/// table has never issued results in a fresh insert.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<User> for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn save(&self, user: User) -> Result<User, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = UserValues::from(&user);

        if let Some(id) = user.id {
            let replaced = diesel::update(users::table.find(id.get()))
                .set(&values)
                .returning(UserRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;
            if let Some(row) = replaced {
                debug!(%id, "replaced user");
                return Ok(row.into());
            }
        }

        let row = diesel::insert_into(users::table)
            .values(&values)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(id = row.id, "inserted user");
        Ok(row.into())
    }
}
