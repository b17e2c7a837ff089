//! HTTP inbound adapter exposing the `/api/v1` REST endpoints.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, Scope, web};

pub mod cors;
pub mod error;
pub mod health;
pub mod policies;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Base path shared by every resource endpoint.
pub const API_BASE_PATH: &str = "/api/v1";

/// Build the `/api/v1` scope with every resource handler registered.
///
/// A path segment that does not parse as an id is a bad request answered
/// with an empty 400 body.
#[must_use]
pub fn api_scope() -> Scope {
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
    });

    web::scope(API_BASE_PATH)
        .app_data(path_config)
        .service(users::list_users)
        .service(users::create_user)
        .service(policies::list_policies)
        .service(policies::get_policy)
        .service(policies::create_policy)
}
