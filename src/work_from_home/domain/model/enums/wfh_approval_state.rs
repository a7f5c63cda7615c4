use crate::work_from_home::domain::model::{
    entities::wfh_request::WfhRequest, enums::wfh_request_status::WfhRequestStatus,
};

/// Aggregate work-from-home standing of one employee.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WfhApprovalState {
    None,
    Pending,
    Approved,
}

impl WfhApprovalState {
    /// Any approved request wins; a pending one comes next. Rejections count as nothing.
    pub fn from_requests(requests: &[WfhRequest]) -> Self {
        if requests
            .iter()
            .any(|r| r.status() == WfhRequestStatus::Approved)
        {
            Self::Approved
        } else if requests
            .iter()
            .any(|r| r.status() == WfhRequestStatus::Pending)
        {
            Self::Pending
        } else {
            Self::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}
