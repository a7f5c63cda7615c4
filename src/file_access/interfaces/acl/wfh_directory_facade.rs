use async_trait::async_trait;

use crate::file_access::domain::model::{
    enums::wfh_status::WfhStatus, value_objects::employee_id::EmployeeId,
};

#[derive(Debug, thiserror::Error)]
pub enum WfhDirectoryError {
    #[error("employee not found in wfh directory")]
    NotFound,

    #[error("wfh directory unavailable: {0}")]
    Unavailable(String),
}

/// Employee / work-from-home directory as seen from file access.
#[async_trait]
pub trait WfhDirectoryFacade: Send + Sync {
    async fn get_wfh_status(&self, employee_id: &EmployeeId)
    -> Result<WfhStatus, WfhDirectoryError>;
}
