use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WfhRequestResource {
    pub request_id: String,
    pub employee_id: String,
    pub reason: String,
    pub status: String,
    pub requested_at: String,
    pub reviewed_at: Option<String>,
    pub admin_comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WfhStatusResource {
    /// Status of the latest request, `none` when the employee never asked.
    pub status: String,
    pub request: Option<WfhRequestResource>,
}
