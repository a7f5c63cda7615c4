use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EvaluateFileAccessRequestResource {
    /// Blank ids are rejected by the query, not here.
    #[validate(length(max = 256))]
    pub file_id: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[validate(length(max = 64))]
    pub wifi_ssid: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EvaluateFileAccessResponseResource {
    pub allowed: bool,
    /// Lowercase reason code, `none` when allowed.
    pub reason: String,
    pub message: String,
    /// RFC 3339 evaluation timestamp.
    pub evaluated_at: String,
}
