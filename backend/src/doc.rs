//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects the `/api/v1` handlers, the health checks and the
//! domain schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, Policy, User};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Insurance backend API",
        description = "CRUD access to users and insurance policies, plus health checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::policies::list_policies,
        crate::inbound::http::policies::get_policy,
        crate::inbound::http::policies::create_policy,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Policy, Error, ErrorCode)),
    tags(
        (name = "users", description = "User records"),
        (name = "policies", description = "Insurance policies"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/api/v1/users")]
    #[case("/api/v1/policies")]
    #[case("/api/v1/policies/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    #[case("Policy", &["id", "policyNumber", "policyType", "premium"])]
    #[case("User", &["id", "name", "email"])]
    #[case("Error", &["code", "message", "traceId"])]
    fn schemas_use_camel_case_fields(#[case] schema: &str, #[case] expected: &[&str]) {
        let fields = object_fields(schema);
        for field in expected {
            assert!(
                fields.iter().any(|f| f == field),
                "{schema} should have field '{field}'"
            );
        }
    }
}
