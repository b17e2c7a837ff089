//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use insurance_backend::Trace;
#[cfg(debug_assertions)]
use insurance_backend::doc::ApiDoc;
use insurance_backend::inbound::http::api_scope;
use insurance_backend::inbound::http::health::{HealthState, live, ready};
use insurance_backend::inbound::http::state::HttpState;
use insurance_backend::outbound::persistence::{
    DbPool, DieselPolicyRepository, DieselUserRepository,
};

fn build_http_state(db_pool: Option<DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselPolicyRepository::new(pool)),
        ),
        None => HttpState::in_memory(),
    }
}

/// Bind the HTTP server and mark the service ready.
///
/// Middleware order, outermost first: trace id, Prometheus (with the
/// `metrics` feature), CORS.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        cors_origin,
        db_pool,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = metrics::build_metrics()?;

    let http_state = web::Data::new(build_http_state(db_pool));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .wrap(cors_origin.cors());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        let app = app
            .wrap(Trace)
            .service(api_scope())
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
