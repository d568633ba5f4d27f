//! Driven port for forward geocoding of free-form postal addresses.

use async_trait::async_trait;

use crate::domain::Coordinates;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while calling a geocoding provider.
    pub enum GeocodingProviderError {
        /// No provider credential was configured.
        NotConfigured =>
            "geocoding provider is not configured",
        /// Adapter rejected the request before sending it.
        InvalidRequest { message: String } =>
            "geocoding request invalid: {message}",
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "geocoding transport failed: {message}",
        /// Provider call exceeded the client timeout.
        Timeout { message: String } =>
            "geocoding timeout: {message}",
        /// Provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "geocoding provider returned status {status}: {message}",
        /// Provider body could not be decoded.
        Decode { message: String } =>
            "geocoding response decode failed: {message}",
        /// Provider answered without a usable point.
        NoMatch { message: String } =>
            "geocoding returned no usable result: {message}",
    }
}

/// Port resolving an address into a single point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Geocode `address`, returning the best match.
    async fn forward_geocode(&self, address: &str) -> Result<Coordinates, GeocodingProviderError>;
}

/// Provider used when no credential is configured; every lookup fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGeocodingProvider;

#[async_trait]
impl GeocodingProvider for UnconfiguredGeocodingProvider {
    async fn forward_geocode(&self, _address: &str) -> Result<Coordinates, GeocodingProviderError> {
        Err(GeocodingProviderError::not_configured())
    }
}
