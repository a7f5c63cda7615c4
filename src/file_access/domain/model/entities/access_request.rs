use chrono::{DateTime, Utc};

use crate::file_access::domain::model::{
    queries::evaluate_file_access_query::EvaluateFileAccessQuery,
    value_objects::{
        employee_id::EmployeeId, file_id::FileId, geo_location::GeoLocation, wifi_ssid::WifiSsid,
    },
};

/// A validated file access request stamped with the time it was received.
#[derive(Clone, Debug)]
pub struct AccessRequest {
    query: EvaluateFileAccessQuery,
    request_time: DateTime<Utc>,
}

impl AccessRequest {
    pub fn new(query: EvaluateFileAccessQuery, request_time: DateTime<Utc>) -> Self {
        Self {
            query,
            request_time,
        }
    }

    pub fn employee_id(&self) -> &EmployeeId {
        self.query.employee_id()
    }
    pub fn file_id(&self) -> &FileId {
        self.query.file_id()
    }
    pub fn claimed_location(&self) -> Option<&GeoLocation> {
        self.query.claimed_location()
    }
    pub fn claimed_wifi_ssid(&self) -> Option<&WifiSsid> {
        self.query.claimed_wifi_ssid()
    }
    pub fn request_id(&self) -> Option<&str> {
        self.query.request_id()
    }
    pub fn request_time(&self) -> DateTime<Utc> {
        self.request_time
    }
}
