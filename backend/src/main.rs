//! Backend entry-point: loads settings, selects the store and serves the API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use insurance_backend::inbound::http::cors::AllowedOrigin;
use insurance_backend::inbound::http::health::HealthState;
use insurance_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use insurance_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let cors_origin = AllowedOrigin::parse(settings.cors_origin())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let mut config = ServerConfig::new(bind_addr, cors_origin);
    match settings.database_url() {
        Some(url) => {
            run_pending_migrations(url).await.map_err(io::Error::other)?;
            let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(pool_config).await.map_err(io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database URL configured; data is kept in memory only"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "listening");
    server.await
}
