//! Policies API handlers.
//!
//! ```text
//! GET  /api/v1/policies
//! GET  /api/v1/policies/{id}
//! POST /api/v1/policies {"policyNumber":"P-100","policyType":"auto","premium":499.99}
//! ```

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::{Error, Policy, PolicyId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every stored policy in ascending id order.
#[utoipa::path(
    get,
    path = "/api/v1/policies",
    responses(
        (status = 200, description = "Policies", body = [Policy]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["policies"],
    operation_id = "listPolicies"
)]
#[get("/policies")]
pub async fn list_policies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Policy>>> {
    let policies = state.policies.find_all().await?;
    Ok(web::Json(policies))
}

/// Fetch one policy. Unknown ids answer 404 with an empty body.
#[utoipa::path(
    get,
    path = "/api/v1/policies/{id}",
    params(("id" = i64, Path, description = "Policy identifier")),
    responses(
        (status = 200, description = "Policy", body = Policy),
        (status = 404, description = "No policy with this id"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["policies"],
    operation_id = "getPolicy"
)]
#[get("/policies/{id}")]
pub async fn get_policy(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = PolicyId::new(path.into_inner());
    match state.policies.find_by_id(id).await? {
        Some(policy) => Ok(HttpResponse::Ok().json(policy)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a policy, or replace it when the body carries a stored id.
#[utoipa::path(
    post,
    path = "/api/v1/policies",
    request_body = Policy,
    responses(
        (status = 200, description = "Stored policy with its id", body = Policy),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["policies"],
    operation_id = "createPolicy"
)]
#[post("/policies")]
pub async fn create_policy(
    state: web::Data<HttpState>,
    payload: web::Json<Policy>,
) -> ApiResult<web::Json<Policy>> {
    let saved = state.policies.save(payload.into_inner()).await?;
    if let Some(id) = saved.id {
        info!(policy_id = %id, "policy saved");
    }
    Ok(web::Json(saved))
}
