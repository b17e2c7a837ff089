//! Users API handlers.
//!
//! ```text
//! GET  /api/v1/users
//! POST /api/v1/users {"name":"Ada","email":"ada@example.com"}
//! ```

use actix_web::{get, post, web};
use tracing::info;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every stored user in ascending id order.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.find_all().await?;
    Ok(web::Json(users))
}

/// Create a user.
///
/// Any `id` in the body is dropped; the store always assigns a new one.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = User,
    responses(
        (status = 200, description = "Stored user with its assigned id", body = User),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<User>,
) -> ApiResult<web::Json<User>> {
    let user = User {
        id: None,
        ..payload.into_inner()
    };
    let saved = state.users.save(user).await?;
    if let Some(id) = saved.id {
        info!(user_id = %id, "user created");
    }
    Ok(web::Json(saved))
}
