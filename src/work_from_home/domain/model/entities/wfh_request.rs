use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::work_from_home::domain::model::{
    enums::{
        wfh_request_status::WfhRequestStatus, wfh_review_decision::WfhReviewDecision,
        work_from_home_domain_error::WorkFromHomeDomainError,
    },
    value_objects::{employee_id::EmployeeId, wfh_reason::WfhReason},
};

#[derive(Clone, Debug)]
pub struct WfhRequest {
    request_id: Uuid,
    employee_id: EmployeeId,
    reason: WfhReason,
    status: WfhRequestStatus,
    requested_at: DateTime<Utc>,
    reviewed_at: Option<DateTime<Utc>>,
    admin_comment: Option<String>,
}

pub struct WfhRequestParts {
    pub request_id: Uuid,
    pub employee_id: EmployeeId,
    pub reason: WfhReason,
    pub status: WfhRequestStatus,
    pub requested_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub admin_comment: Option<String>,
}

impl WfhRequest {
    pub fn new_pending(
        employee_id: EmployeeId,
        reason: WfhReason,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            employee_id,
            reason,
            status: WfhRequestStatus::Pending,
            requested_at,
            reviewed_at: None,
            admin_comment: None,
        }
    }

    pub fn restore(parts: WfhRequestParts) -> Self {
        Self {
            request_id: parts.request_id,
            employee_id: parts.employee_id,
            reason: parts.reason,
            status: parts.status,
            requested_at: parts.requested_at,
            reviewed_at: parts.reviewed_at,
            admin_comment: parts.admin_comment,
        }
    }

    pub fn review(
        &mut self,
        decision: WfhReviewDecision,
        comment: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Result<(), WorkFromHomeDomainError> {
        if self.status != WfhRequestStatus::Pending {
            return Err(WorkFromHomeDomainError::InvalidStatusTransition);
        }
        self.status = decision.resulting_status();
        self.reviewed_at = Some(reviewed_at);
        self.admin_comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        Ok(())
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }
    pub fn reason(&self) -> &WfhReason {
        &self.reason
    }
    pub fn status(&self) -> WfhRequestStatus {
        self.status
    }
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
    pub fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        self.reviewed_at
    }
    pub fn admin_comment(&self) -> Option<&str> {
        self.admin_comment.as_deref()
    }
}
