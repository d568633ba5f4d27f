//! DTOs for decoding geocoding provider responses.
//!
//! Only the fields the adapter reads are modelled; everything else in the
//! GeoJSON feature collection is ignored.

use serde::Deserialize;

use crate::domain::Coordinates;
use crate::domain::ports::GeocodingProviderError;

#[derive(Debug, Deserialize)]
pub(super) struct FeatureCollectionDto {
    #[serde(default)]
    pub(super) features: Vec<FeatureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FeatureDto {
    pub(super) geometry: GeometryDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    #[serde(rename = "type")]
    pub(super) geometry_type: String,
    #[serde(default)]
    pub(super) coordinates: Vec<f64>,
}

/// Error body returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ProviderErrorDto {
    pub(super) message: String,
}

impl FeatureCollectionDto {
    /// Take the geometry of the first (best-ranked) feature.
    pub(super) fn into_first_point(self) -> Result<Coordinates, GeocodingProviderError> {
        let feature = self
            .features
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingProviderError::no_match("feature collection is empty"))?;
        feature.geometry.into_point()
    }
}

impl GeometryDto {
    fn into_point(self) -> Result<Coordinates, GeocodingProviderError> {
        if self.geometry_type != "Point" {
            return Err(GeocodingProviderError::no_match(format!(
                "expected Point geometry, got {}",
                self.geometry_type
            )));
        }
        match self.coordinates.as_slice() {
            [longitude, latitude, ..] => Coordinates::new(*longitude, *latitude)
                .map_err(|err| GeocodingProviderError::decode(err.to_string())),
            _ => Err(GeocodingProviderError::decode(
                "Point geometry must carry [longitude, latitude]",
            )),
        }
    }
}
