use crate::file_access::domain::model::{
    enums::file_access_domain_error::FileAccessDomainError,
    value_objects::{
        employee_id::EmployeeId, file_id::FileId, geo_location::GeoLocation, wifi_ssid::WifiSsid,
    },
};

#[derive(Clone, Debug)]
pub struct EvaluateFileAccessQuery {
    employee_id: EmployeeId,
    file_id: FileId,
    claimed_location: Option<GeoLocation>,
    claimed_wifi_ssid: Option<WifiSsid>,
    request_id: Option<String>,
}

pub struct EvaluateFileAccessQueryParts {
    pub employee_id: String,
    pub file_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wifi_ssid: Option<String>,
    pub request_id: Option<String>,
}

impl EvaluateFileAccessQuery {
    pub fn new(parts: EvaluateFileAccessQueryParts) -> Result<Self, FileAccessDomainError> {
        let employee_id = EmployeeId::new(parts.employee_id)?;
        let file_id = FileId::new(parts.file_id)?;

        let claimed_location = match (parts.latitude, parts.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoLocation::new(latitude, longitude)?),
            (None, None) => None,
            _ => {
                return Err(FileAccessDomainError::InvalidRequest(
                    "latitude and longitude must be provided together".to_string(),
                ));
            }
        };

        Ok(Self {
            employee_id,
            file_id,
            claimed_location,
            claimed_wifi_ssid: WifiSsid::from_claim(parts.wifi_ssid),
            request_id: parts.request_id,
        })
    }

    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }
    pub fn file_id(&self) -> &FileId {
        &self.file_id
    }
    pub fn claimed_location(&self) -> Option<&GeoLocation> {
        self.claimed_location.as_ref()
    }
    pub fn claimed_wifi_ssid(&self) -> Option<&WifiSsid> {
        self.claimed_wifi_ssid.as_ref()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}
