//! Backend entry-point: loads settings, wires storage and geocoding, and
//! serves the REST API with health probes and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use profile_registry::inbound::http::health::HealthState;
use profile_registry::outbound::geocoding::MapboxGeocodingProvider;
use profile_registry::outbound::persistence::{
    DbPool, PoolConfig, run_pending_migrations,
};
use profile_registry::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(database_url, &settings).await?);
    }
    if let Some(token) = settings.geocoding_access_token() {
        let base_url = settings.geocoding_base_url().map_err(std::io::Error::other)?;
        let geocoder =
            MapboxGeocodingProvider::new(base_url, token, settings.geocoding_timeout())
                .map_err(|e| std::io::Error::other(format!("geocoding client: {e}")))?;
        config = config.with_geocoder(Arc::new(geocoder));
    } else {
        warn!("no geocoding access token configured; address lookups will fail");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, &config)?;
    info!(%bind_addr, "listening");
    server.await
}

async fn connect_database(database_url: &str, settings: &AppSettings) -> std::io::Result<DbPool> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database schema is current");

    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
    DbPool::new(pool_config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))
}
