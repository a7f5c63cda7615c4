use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::file_access::domain::model::{
    entities::{access_decision::AccessDecision, access_request::AccessRequest},
    enums::{access_decision_reason::AccessDecisionReason, wfh_status::WfhStatus},
};

#[derive(Clone, Debug)]
pub struct FileAccessAuditedEvent {
    pub event_id: Uuid,
    pub employee_id: String,
    pub file_id: String,
    pub request_id: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub wifi_ssid: Option<String>,
    pub wfh_status: WfhStatus,
    pub allowed: bool,
    pub reason: AccessDecisionReason,
    pub occurred_at: DateTime<Utc>,
}

impl FileAccessAuditedEvent {
    pub fn record(request: &AccessRequest, wfh_status: WfhStatus, decision: &AccessDecision) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            employee_id: request.employee_id().value().to_string(),
            file_id: request.file_id().value().to_string(),
            request_id: request.request_id().map(str::to_string),
            latitude: request.claimed_location().map(|l| l.latitude()),
            longitude: request.claimed_location().map(|l| l.longitude()),
            wifi_ssid: request.claimed_wifi_ssid().map(|s| s.value().to_string()),
            wfh_status,
            allowed: decision.allowed(),
            reason: decision.reason(),
            occurred_at: decision.evaluated_at(),
        }
    }
}
