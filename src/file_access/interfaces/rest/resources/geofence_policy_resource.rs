use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct GeofencePolicyResource {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub radius_meters: f64,
    #[validate(length(min = 1, max = 64))]
    pub allowed_ssid: String,
    /// Office opening time, `HH:MM`.
    #[validate(regex(path = "*OFFICE_TIME_REGEX"))]
    pub start_time: String,
    /// Office closing time, `HH:MM`.
    #[validate(regex(path = "*OFFICE_TIME_REGEX"))]
    pub end_time: String,
}

lazy_static::lazy_static! {
    pub static ref OFFICE_TIME_REGEX: regex::Regex = regex::Regex::new("^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex");
}
