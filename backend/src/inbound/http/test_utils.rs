//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use mockall::mock;

use super::api_scope;
use super::state::HttpState;
use crate::domain::ports::{Repository, RepositoryError};
use crate::domain::{Policy, PolicyId, User, UserId};
use crate::outbound::InMemoryRepository;

mock! {
    pub UserStore {}

    #[async_trait]
    impl Repository<User> for UserStore {
        async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
        async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
        async fn save(&self, entity: User) -> Result<User, RepositoryError>;
    }
}

mock! {
    pub PolicyStore {}

    #[async_trait]
    impl Repository<Policy> for PolicyStore {
        async fn find_all(&self) -> Result<Vec<Policy>, RepositoryError>;
        async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, RepositoryError>;
        async fn save(&self, entity: Policy) -> Result<Policy, RepositoryError>;
    }
}

/// User store whose every call fails with `error`.
pub fn failing_user_store(error: &RepositoryError) -> MockUserStore {
    let mut store = MockUserStore::new();
    let err = error.clone();
    store.expect_find_all().returning(move || Err(err.clone()));
    let err = error.clone();
    store.expect_find_by_id().returning(move |_| Err(err.clone()));
    let err = error.clone();
    store.expect_save().returning(move |_| Err(err.clone()));
    store
}

/// Policy store whose every call fails with `error`.
pub fn failing_policy_store(error: &RepositoryError) -> MockPolicyStore {
    let mut store = MockPolicyStore::new();
    let err = error.clone();
    store.expect_find_all().returning(move || Err(err.clone()));
    let err = error.clone();
    store.expect_find_by_id().returning(move |_| Err(err.clone()));
    let err = error.clone();
    store.expect_save().returning(move |_| Err(err.clone()));
    store
}

/// State whose repositories all fail with `error`.
pub fn failing_state(error: &RepositoryError) -> HttpState {
    HttpState::new(
        Arc::new(failing_user_store(error)),
        Arc::new(failing_policy_store(error)),
    )
}

/// State with an in-memory user store and the given policy store.
pub fn state_with_policies(policies: impl Repository<Policy> + 'static) -> HttpState {
    HttpState::new(Arc::new(InMemoryRepository::<User>::new()), Arc::new(policies))
}

/// App serving the `/api/v1` scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(api_scope())
}
