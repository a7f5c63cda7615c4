use std::str::FromStr;

use super::{
    wfh_request_status::WfhRequestStatus, work_from_home_domain_error::WorkFromHomeDomainError,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WfhReviewDecision {
    Approve,
    Reject,
}

impl WfhReviewDecision {
    pub fn resulting_status(&self) -> WfhRequestStatus {
        match self {
            Self::Approve => WfhRequestStatus::Approved,
            Self::Reject => WfhRequestStatus::Rejected,
        }
    }
}

impl FromStr for WfhReviewDecision {
    type Err = WorkFromHomeDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "approved" => Ok(Self::Approve),
            "rejected" => Ok(Self::Reject),
            _ => Err(WorkFromHomeDomainError::InvalidReviewDecision),
        }
    }
}
