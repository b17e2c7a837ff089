//! PostgreSQL-backed `Repository<Policy>` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Policy, PolicyId};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{PolicyRow, PolicyValues};
use super::pool::DbPool;
use super::schema::policies;

/// Diesel adapter for the policies table.
///
/// Identifiers come from the table's `BIGSERIAL` sequence, so a client id the
/// table has never issued results in a fresh insert.
#[derive(Clone)]
pub struct DieselPolicyRepository {
    pool: DbPool,
}

impl DieselPolicyRepository {
    /// Create a repository backed by `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Policy> for DieselPolicyRepository {
    async fn find_all(&self) -> Result<Vec<Policy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PolicyRow> = policies::table
            .order(policies::id.asc())
            .select(PolicyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Policy::from).collect())
    }

    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = policies::table
            .find(id.get())
            .select(PolicyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Policy::from))
    }

    async fn save(&self, policy: Policy) -> Result<Policy, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = PolicyValues::from(&policy);

        if let Some(id) = policy.id {
            let replaced = diesel::update(policies::table.find(id.get()))
                .set(&values)
                .returning(PolicyRow::as_returning())
                .get_result(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;
            if let Some(row) = replaced {
                debug!(%id, "replaced policy");
                return Ok(row.into());
            }
        }

        let row = diesel::insert_into(policies::table)
            .values(&values)
            .returning(PolicyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(id = row.id, "inserted policy");
        Ok(row.into())
    }
}
