//! Runtime settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `PROFILES_*` environment variables over an
//! optional configuration file. Unset values fall back to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::geocoding::DEFAULT_MAPBOX_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_GEOCODING_TIMEOUT_SECS: u64 = 10;

/// Setting values that are present but unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("invalid geocoding base URL {value:?}: {message}")]
    GeocodingBaseUrl { value: String, message: String },
}

/// Application settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILES")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Base URL of the forward geocoding endpoint.
    pub geocoding_base_url: Option<String>,
    /// Access token for the geocoding provider.
    pub geocoding_access_token: Option<String>,
    /// Per-request timeout for geocoding calls, in seconds.
    pub geocoding_timeout_secs: Option<u64>,
}

impl AppSettings {
    /// Listening address, defaulting to `0.0.0.0:3000`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        non_blank(self.database_url.as_deref())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Geocoding endpoint, defaulting to the Mapbox places API.
    pub fn geocoding_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .geocoding_base_url
            .as_deref()
            .unwrap_or(DEFAULT_MAPBOX_BASE_URL);
        Url::parse(raw).map_err(|err| SettingsError::GeocodingBaseUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Provider token, ignoring blank values.
    pub fn geocoding_access_token(&self) -> Option<&str> {
        non_blank(self.geocoding_access_token.as_deref())
    }

    pub fn geocoding_timeout(&self) -> Duration {
        Duration::from_secs(
            self.geocoding_timeout_secs
                .unwrap_or(DEFAULT_GEOCODING_TIMEOUT_SECS),
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}
