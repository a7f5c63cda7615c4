use crate::file_access::domain::model::enums::file_access_domain_error::FileAccessDomainError;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FileAccessDomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(FileAccessDomainError::InvalidRequest(
                "latitude must be between -90 and 90".to_string(),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(FileAccessDomainError::InvalidRequest(
                "longitude must be between -180 and 180".to_string(),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// For coordinates known to be in range at compile time.
    pub(crate) const fn from_trusted_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance in meters (haversine).
    pub fn distance_meters_to(&self, other: &GeoLocation) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}
