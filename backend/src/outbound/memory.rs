//! Process-local repository adapter.
//!
//! Used when no database URL is configured and as the default store in
//! tests. Identifiers come from a per-collection counter starting at 1, so
//! ascending-id order is also insertion order.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Entity;
use crate::domain::ports::{Repository, RepositoryError};

struct StoreState<T: Entity> {
    last_id: i64,
    records: BTreeMap<T::Id, T>,
}

impl<T: Entity> StoreState<T> {
    fn next_id(&mut self) -> T::Id {
        self.last_id += 1;
        T::Id::from(self.last_id)
    }
}

/// In-memory implementation of [`Repository`] for any [`Entity`].
///
/// A single lock serialises writers, which makes identifier assignment and
/// the subsequent insert one atomic step.
pub struct InMemoryRepository<T: Entity> {
    state: RwLock<StoreState<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                last_id: 0,
                records: BTreeMap::new(),
            }),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::connection("in-memory store lock poisoned")
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.records.get(&id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepositoryError> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let id = match entity.id() {
            Some(id) if state.records.contains_key(&id) => id,
            _ => state.next_id(),
        };
        let stored = entity.with_id(id);
        state.records.insert(id, stored.clone());
        debug!(?id, "record saved to in-memory store");
        Ok(stored)
    }
}
