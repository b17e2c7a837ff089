//! HTTP server configuration object.

use std::net::SocketAddr;

use insurance_backend::inbound::http::cors::AllowedOrigin;
use insurance_backend::outbound::persistence::DbPool;

/// Everything [`create_server`](super::create_server) needs besides the
/// health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) cors_origin: AllowedOrigin,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration serving in-memory stores until a pool is attached.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, cors_origin: AllowedOrigin) -> Self {
        Self {
            bind_addr,
            cors_origin,
            db_pool: None,
        }
    }

    /// Back the repositories with PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
