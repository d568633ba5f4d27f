//! Reqwest-backed Mapbox forward geocoding adapter.
//!
//! Owns transport details only: request URL construction, timeout and status
//! mapping, and decoding the first feature into domain coordinates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::{FeatureCollectionDto, ProviderErrorDto};
use crate::domain::Coordinates;
use crate::domain::ports::{GeocodingProvider, GeocodingProviderError};

/// Mapbox places endpoint used when no base URL is configured.
pub const DEFAULT_MAPBOX_BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places/";

/// Geocoding adapter issuing `GET {base}/{address}.json?access_token=...`.
pub struct MapboxGeocodingProvider {
    client: Client,
    base_url: Url,
    access_token: String,
}

impl MapboxGeocodingProvider {
    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            access_token: access_token.into(),
        })
    }

    fn request_url(&self, address: &str) -> Result<Url, GeocodingProviderError> {
        if address.trim().is_empty() {
            return Err(GeocodingProviderError::invalid_request(
                "address must not be blank",
            ));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GeocodingProviderError::invalid_request("geocoding base URL cannot hold a path")
            })?
            .pop_if_empty()
            .push(&format!("{address}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }
}

#[async_trait]
impl GeocodingProvider for MapboxGeocodingProvider {
    async fn forward_geocode(&self, address: &str) -> Result<Coordinates, GeocodingProviderError> {
        let url = self.request_url(address)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_first_point(body.as_ref())
    }
}

fn parse_first_point(body: &[u8]) -> Result<Coordinates, GeocodingProviderError> {
    let decoded: FeatureCollectionDto = serde_json::from_slice(body).map_err(|error| {
        GeocodingProviderError::decode(format!("invalid geocoding JSON payload: {error}"))
    })?;
    decoded.into_first_point()
}

// Request URLs carry the access token, so it is stripped before reporting.
fn map_transport_error(error: reqwest::Error) -> GeocodingProviderError {
    let error = error.without_url();
    if error.is_timeout() {
        GeocodingProviderError::timeout(error.to_string())
    } else {
        GeocodingProviderError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeocodingProviderError {
    let detail = serde_json::from_slice::<ProviderErrorDto>(body)
        .map(|dto| dto.message)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| body_preview(body));
    let message = if detail.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        detail
    };
    GeocodingProviderError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
