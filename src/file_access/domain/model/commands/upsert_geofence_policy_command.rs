use chrono::NaiveTime;

use crate::file_access::domain::model::{
    entities::geofence_policy::{GeofencePolicy, GeofencePolicyParts},
    enums::file_access_domain_error::FileAccessDomainError,
};

#[derive(Clone, Debug)]
pub struct UpsertGeofencePolicyCommand {
    policy: GeofencePolicy,
}

pub struct UpsertGeofencePolicyCommandParts {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub allowed_ssid: String,
    pub start_time: String,
    pub end_time: String,
}

impl UpsertGeofencePolicyCommand {
    pub fn new(parts: UpsertGeofencePolicyCommandParts) -> Result<Self, FileAccessDomainError> {
        let policy = GeofencePolicy::new(GeofencePolicyParts {
            latitude: parts.latitude,
            longitude: parts.longitude,
            radius_meters: parts.radius_meters,
            allowed_ssid: parts.allowed_ssid,
            start_time: parse_time_of_day(&parts.start_time, "start_time")?,
            end_time: parse_time_of_day(&parts.end_time, "end_time")?,
        })?;

        Ok(Self { policy })
    }

    pub fn policy(&self) -> &GeofencePolicy {
        &self.policy
    }
}

fn parse_time_of_day(value: &str, field: &str) -> Result<NaiveTime, FileAccessDomainError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| {
        FileAccessDomainError::InvalidGeofencePolicy(format!("{field} must use HH:MM"))
    })
}
