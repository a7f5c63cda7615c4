use std::str::FromStr;

use super::work_from_home_domain_error::WorkFromHomeDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WfhRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl WfhRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for WfhRequestStatus {
    type Err = WorkFromHomeDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(WorkFromHomeDomainError::InfrastructureError(
                "invalid wfh request status stored".to_string(),
            )),
        }
    }
}
