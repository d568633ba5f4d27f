//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use profile_registry::domain::ports::{GeocodingProvider, UnconfiguredGeocodingProvider};
use profile_registry::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) geocoder: Arc<dyn GeocodingProvider>,
}

impl ServerConfig {
    /// Configuration with the in-memory store and no geocoding provider.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            geocoder: Arc::new(UnconfiguredGeocodingProvider),
        }
    }

    /// Persist records in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Resolve addresses through `geocoder`.
    #[must_use]
    pub fn with_geocoder(mut self, geocoder: Arc<dyn GeocodingProvider>) -> Self {
        self.geocoder = geocoder;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
