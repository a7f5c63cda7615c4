use chrono::NaiveTime;

use crate::file_access::domain::model::{
    enums::file_access_domain_error::FileAccessDomainError,
    value_objects::{geo_location::GeoLocation, wifi_ssid::WifiSsid},
};

/// Office geofence used by strict enforcement: a circle around the office,
/// the office network name and the daily access window.
#[derive(Clone, Debug, PartialEq)]
pub struct GeofencePolicy {
    center: GeoLocation,
    radius_meters: f64,
    allowed_ssid: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

pub struct GeofencePolicyParts {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub allowed_ssid: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl GeofencePolicy {
    pub fn new(parts: GeofencePolicyParts) -> Result<Self, FileAccessDomainError> {
        let center = GeoLocation::new(parts.latitude, parts.longitude).map_err(|_| {
            FileAccessDomainError::InvalidGeofencePolicy(
                "office coordinates are out of range".to_string(),
            )
        })?;

        if !parts.radius_meters.is_finite() || parts.radius_meters <= 0.0 {
            return Err(FileAccessDomainError::InvalidGeofencePolicy(
                "radius_meters must be positive".to_string(),
            ));
        }

        let allowed_ssid = parts.allowed_ssid.trim();
        if allowed_ssid.is_empty() {
            return Err(FileAccessDomainError::InvalidGeofencePolicy(
                "allowed_ssid is required".to_string(),
            ));
        }

        if parts.start_time > parts.end_time {
            return Err(FileAccessDomainError::InvalidGeofencePolicy(
                "start_time must not be after end_time".to_string(),
            ));
        }

        Ok(Self {
            center,
            radius_meters: parts.radius_meters,
            allowed_ssid: allowed_ssid.to_string(),
            start_time: parts.start_time,
            end_time: parts.end_time,
        })
    }

    /// Policy in force until an administrator stores one.
    pub fn office_default() -> Self {
        Self {
            center: GeoLocation::from_trusted_degrees(10.8505, 76.2711),
            radius_meters: 500.0,
            allowed_ssid: "OfficeWiFi".to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }

    pub fn center(&self) -> &GeoLocation {
        &self.center
    }
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }
    pub fn allowed_ssid(&self) -> &str {
        &self.allowed_ssid
    }
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn contains(&self, location: &GeoLocation) -> bool {
        self.center.distance_meters_to(location) <= self.radius_meters
    }

    pub fn allows_ssid(&self, ssid: &WifiSsid) -> bool {
        ssid.matches(&self.allowed_ssid)
    }

    /// Inclusive at both ends, compared at minute granularity.
    pub fn within_office_hours(&self, local_time: NaiveTime) -> bool {
        self.start_time <= local_time && local_time <= self.end_time
    }
}
