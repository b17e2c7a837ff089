//! Generic persistence port shared by every entity collection.

use async_trait::async_trait;

use crate::domain::{Entity, Policy, User};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by repository adapters.
    pub enum RepositoryError {
        /// The backing store could not be reached.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
    }
}

/// List, find and save operations over one entity collection.
///
/// Identifiers are generated by the store and never reused. Adapters must
/// make a record visible to reads only once its `save` has completed.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored record in insertion order; empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;

    /// The record with `id`, or `None` for identifiers never issued.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError>;

    /// Insert or replace a record and return exactly what was stored.
    ///
    /// A record without an identifier, or whose identifier is unknown to the
    /// store, is inserted under a freshly generated one. A record whose
    /// identifier matches a stored record replaces all of its fields.
    async fn save(&self, entity: T) -> Result<T, RepositoryError>;
}

/// Repository over the users collection.
pub type UserRepository = dyn Repository<User>;

/// Repository over the policies collection.
pub type PolicyRepository = dyn Repository<Policy>;
