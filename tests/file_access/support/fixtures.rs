use chrono::{DateTime, TimeZone, Utc};
use geocrypt_access::file_access::domain::model::{
    entities::{access_request::AccessRequest, geofence_policy::GeofencePolicy},
    queries::evaluate_file_access_query::{EvaluateFileAccessQuery, EvaluateFileAccessQueryParts},
};

pub const EMPLOYEE_ID: &str = "emp-001";
pub const FILE_ID: &str = "file-quarterly-report";
pub const OFFICE_LATITUDE: f64 = 10.8505;
pub const OFFICE_LONGITUDE: f64 = 76.2711;
pub const OFFICE_SSID: &str = "OfficeWiFi";

pub fn evaluate_query(location: Option<(f64, f64)>, wifi_ssid: Option<&str>) -> EvaluateFileAccessQuery {
    EvaluateFileAccessQuery::new(EvaluateFileAccessQueryParts {
        employee_id: EMPLOYEE_ID.to_string(),
        file_id: FILE_ID.to_string(),
        latitude: location.map(|(latitude, _)| latitude),
        longitude: location.map(|(_, longitude)| longitude),
        wifi_ssid: wifi_ssid.map(str::to_string),
        request_id: Some("req-fixture".to_string()),
    })
    .expect("valid query")
}

pub fn evaluate_query_inside_office() -> EvaluateFileAccessQuery {
    evaluate_query(Some((OFFICE_LATITUDE, OFFICE_LONGITUDE)), Some(OFFICE_SSID))
}

/// 2026-03-02 at the given UTC wall clock time.
pub fn utc_at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, second)
        .single()
        .expect("valid timestamp")
}

pub fn access_request(location: Option<(f64, f64)>, wifi_ssid: Option<&str>) -> AccessRequest {
    access_request_at(location, wifi_ssid, utc_at(10, 30, 0))
}

pub fn access_request_at(
    location: Option<(f64, f64)>,
    wifi_ssid: Option<&str>,
    at: DateTime<Utc>,
) -> AccessRequest {
    AccessRequest::new(evaluate_query(location, wifi_ssid), at)
}

pub fn office_policy() -> GeofencePolicy {
    GeofencePolicy::office_default()
}
