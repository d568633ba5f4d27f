//! Geocoding outbound adapters.
//!
//! Provides a reqwest implementation of the `GeocodingProvider` port against
//! the Mapbox forward geocoding API.

mod dto;
mod mapbox;

pub use mapbox::{DEFAULT_MAPBOX_BASE_URL, MapboxGeocodingProvider};
