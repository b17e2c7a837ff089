//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever see the
//! repository ports, so tests can swap in any store.

use std::sync::Arc;

use crate::domain::ports::{PolicyRepository, UserRepository};
use crate::domain::{Policy, User};
use crate::outbound::InMemoryRepository;

/// Repository handles for the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Store behind `/api/v1/users`.
    pub users: Arc<UserRepository>,
    /// Store behind `/api/v1/policies`.
    pub policies: Arc<PolicyRepository>,
}

impl HttpState {
    /// Bundle the given repositories.
    pub fn new(users: Arc<UserRepository>, policies: Arc<PolicyRepository>) -> Self {
        Self { users, policies }
    }

    /// State backed by empty in-memory stores.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<User>::new()),
            Arc::new(InMemoryRepository::<Policy>::new()),
        )
    }
}
