//! Geographic point produced by address resolution.

use thiserror::Error;

/// Validation errors raised by [`Coordinates::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinatesValidationError {
    #[error("longitude must be finite and within [-180, 180], got {0}")]
    Longitude(f64),
    #[error("latitude must be finite and within [-90, 90], got {0}")]
    Latitude(f64),
}

/// WGS84 point, longitude first as geocoding providers report it.
///
/// # Examples
/// ```
/// use profile_registry::domain::Coordinates;
///
/// let point = Coordinates::new(14.36639, 35.91972).expect("valid point");
/// assert_eq!(point.as_lon_lat(), [14.36639, 35.91972]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    longitude: f64,
    latitude: f64,
}

impl Coordinates {
    /// Build a point, rejecting non-finite or out-of-range components.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, CoordinatesValidationError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesValidationError::Longitude(longitude));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesValidationError::Latitude(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// `[longitude, latitude]` pair in GeoJSON order.
    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
