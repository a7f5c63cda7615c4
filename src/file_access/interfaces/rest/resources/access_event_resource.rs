use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListAccessEventsQueryResource {
    pub employee_id: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AccessEventResource {
    pub event_id: String,
    pub employee_id: String,
    pub file_id: String,
    pub request_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wifi_ssid: Option<String>,
    pub wfh_status: String,
    pub allowed: bool,
    pub reason: String,
    pub occurred_at: String,
}
