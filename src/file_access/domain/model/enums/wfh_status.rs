use std::str::FromStr;

use super::file_access_domain_error::FileAccessDomainError;

/// Work-from-home approval state as reported by the directory.
///
/// Only `Approved` exempts an employee from the location and WiFi checks;
/// `Pending` is handled exactly like `None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum WfhStatus {
    #[default]
    None,
    Pending,
    Approved,
}

impl WfhStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl FromStr for WfhStatus {
    type Err = FileAccessDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            _ => Err(FileAccessDomainError::InfrastructureError(
                "invalid wfh status stored".to_string(),
            )),
        }
    }
}
