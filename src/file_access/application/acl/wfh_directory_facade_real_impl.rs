use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    file_access::{
        domain::model::{enums::wfh_status::WfhStatus, value_objects::employee_id::EmployeeId},
        interfaces::acl::wfh_directory_facade::{WfhDirectoryError, WfhDirectoryFacade},
    },
    work_from_home::{
        domain::model::enums::{
            wfh_approval_state::WfhApprovalState,
            work_from_home_domain_error::WorkFromHomeDomainError,
        },
        interfaces::acl::work_from_home_facade::WorkFromHomeFacade,
    },
};

pub struct WfhDirectoryFacadeRealImpl {
    facade: Arc<dyn WorkFromHomeFacade>,
}

impl WfhDirectoryFacadeRealImpl {
    pub fn new(facade: Arc<dyn WorkFromHomeFacade>) -> Self {
        Self { facade }
    }
}

#[async_trait]
impl WfhDirectoryFacade for WfhDirectoryFacadeRealImpl {
    async fn get_wfh_status(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<WfhStatus, WfhDirectoryError> {
        let state = self
            .facade
            .resolve_approval_state(employee_id.value().to_string())
            .await
            .map_err(|e| match e {
                WorkFromHomeDomainError::InvalidEmployeeId => WfhDirectoryError::NotFound,
                other => WfhDirectoryError::Unavailable(other.to_string()),
            })?;

        Ok(match state {
            WfhApprovalState::None => WfhStatus::None,
            WfhApprovalState::Pending => WfhStatus::Pending,
            WfhApprovalState::Approved => WfhStatus::Approved,
        })
    }
}
