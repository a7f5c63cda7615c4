use std::str::FromStr;

use super::file_access_domain_error::FileAccessDomainError;

/// Cause attached to an access decision. `None` accompanies every grant.
///
/// The codes and messages are part of the public contract: clients key their
/// prompts ("enable location access", "enter WiFi name") off `as_str`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AccessDecisionReason {
    None,
    LocationMissing,
    WifiMissing,
    OutsideGeofence,
    UnauthorizedWifi,
    OutsideOfficeHours,
}

impl AccessDecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LocationMissing => "location_missing",
            Self::WifiMissing => "wifi_missing",
            Self::OutsideGeofence => "outside_geofence",
            Self::UnauthorizedWifi => "unauthorized_wifi",
            Self::OutsideOfficeHours => "outside_office_hours",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::None => "Access granted",
            Self::LocationMissing => "Enable location access and try again",
            Self::WifiMissing => "Enter the name of the WiFi network you are connected to",
            Self::OutsideGeofence => "You are outside the allowed office area",
            Self::UnauthorizedWifi => "Connect to the office WiFi network",
            Self::OutsideOfficeHours => "Files can only be accessed during office hours",
        }
    }
}

impl FromStr for AccessDecisionReason {
    type Err = FileAccessDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "location_missing" => Ok(Self::LocationMissing),
            "wifi_missing" => Ok(Self::WifiMissing),
            "outside_geofence" => Ok(Self::OutsideGeofence),
            "unauthorized_wifi" => Ok(Self::UnauthorizedWifi),
            "outside_office_hours" => Ok(Self::OutsideOfficeHours),
            _ => Err(FileAccessDomainError::InfrastructureError(
                "invalid decision reason stored".to_string(),
            )),
        }
    }
}
