use std::str::FromStr;

use super::file_access_domain_error::FileAccessDomainError;

/// How far the evaluator goes once location and WiFi are present.
///
/// `PresenceOnly` stops at the presence checks. `Strict` additionally compares
/// the claims against the stored geofence policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GeofenceEnforcement {
    #[default]
    PresenceOnly,
    Strict,
}

impl GeofenceEnforcement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PresenceOnly => "presence",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for GeofenceEnforcement {
    type Err = FileAccessDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "presence" | "presence_only" => Ok(Self::PresenceOnly),
            "strict" => Ok(Self::Strict),
            other => Err(FileAccessDomainError::InvalidGeofencePolicy(format!(
                "unknown enforcement mode '{other}'"
            ))),
        }
    }
}
